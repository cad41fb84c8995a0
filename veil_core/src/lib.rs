// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shield overlays for loading placeholders.
//!
//! `veil_core` covers host view elements with animated *shield* layers
//! while their real content loads, then removes the overlays on demand. It
//! is `no_std` compatible (with `alloc`) and engine-agnostic: the host owns
//! the native view tree and the frame loop, the library owns shield
//! bookkeeping, animation strategies, and incremental change sets.
//!
//! # Architecture
//!
//! The crate is organized around a tick loop that turns host frame
//! callbacks into incremental overlay updates:
//!
//! ```text
//!   Host (frame callback, Timestamp)
//!       │
//!       ▼
//!   Overlay::tick() ──► Animator sampling + completions
//!                               │
//!                               ▼
//!   ShieldStore::evaluate() ──► OverlayChanges ──► Presenter::apply()
//! ```
//!
//! **[`overlay`]** — The [`Overlay`](overlay::Overlay) manager:
//! `register` views to cover, `tick` each frame, `remove` when content
//! arrives.
//!
//! **[`shield`]** — Struct-of-arrays shield storage with generational
//! handles. Properties (frame, color, gradient, shape, attachment) are set
//! through dirty-marking setters; evaluation drains the changes.
//!
//! **[`animator`]** — The closed set of animation strategies: gradient
//! sweep, color blink, and the completion-driven back-and-forth
//! oscillation.
//!
//! **[`timing`]** — The animation model: scheduled property changes with
//! duration, easing, repeat, and fill semantics, sampled per tick.
//!
//! **[`dirty`]** — Multi-channel dirty tracking via `understory_dirty`.
//!
//! **[`backend`]** — The [`Presenter`](backend::Presenter) trait that host
//! integrations implement to mirror shields into native view trees.
//!
//! **[`time`]** — Nanosecond [`Timestamp`](time::Timestamp)/
//! [`Span`](time::Span) monotonic time substrate.
//!
//! **[`color`]** — The [`Rgba`](color::Rgba) value type for shield fills.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for loop instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod animator;
pub mod backend;
pub mod color;
pub mod dirty;
pub mod overlay;
pub mod shield;
pub mod time;
pub mod timing;
pub mod trace;

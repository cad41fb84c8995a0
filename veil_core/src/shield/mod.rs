// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shield data model.
//!
//! A *shield* is a flat covering layer placed over a host view while its
//! real content loads. Each shield has:
//!
//! - An identity ([`ShieldId`]) — a generational handle that becomes stale
//!   when the shield is destroyed, preventing use-after-free bugs at the API
//!   level.
//! - An origin ([`ViewRef`]) — an opaque, non-owning reference to the host
//!   view it covers. The store never keeps a host view alive.
//! - A frame — the origin view's bounds captured at creation time. Frames
//!   are not re-tracked if the host relayouts.
//! - Appearance — background [`color`](ShieldStore::set_color), optional
//!   [`gradient`](ShieldStore::set_gradient) fill, and outline
//!   [`shape`](ShieldStore::set_shape).
//! - Attachment state — whether the shield is currently mounted in the host
//!   tree as the topmost child of its origin view.
//! - An animation slot — the scheduled animation currently driving the
//!   shield's appearance, if any.
//!
//! Shields are stored in struct-of-arrays layout with index-based handles.
//!
//! # Dirty tracking
//!
//! Property mutations automatically mark the matching dirty channel (see
//! [`dirty`](crate::dirty)); attach/detach feed the lifecycle lists. Each
//! [`evaluate`](ShieldStore::evaluate) call drains everything into an
//! [`OverlayChanges`], the incremental change set a
//! [`Presenter`](crate::backend::Presenter) applies to the native tree.

mod evaluate;
mod id;
mod shape;
mod store;

pub use evaluate::OverlayChanges;
pub use id::{ShieldId, ViewRef};
pub use shape::ShieldShape;
pub use store::{GradientFill, ShieldStore};

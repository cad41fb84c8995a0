// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for host integrations.
//!
//! Veil splits platform-specific work out of the core entirely. A host
//! integration provides the following pieces:
//!
//! - **Time** — a monotonic clock read as [`Timestamp`] nanoseconds. The
//!   host converts its platform units (display-link timestamps,
//!   `performance.now()` milliseconds) before calling in.
//!
//! - **Bounds** — each registered [`Target`](crate::overlay::Target)
//!   carries the origin view's bounds, queried by the host at registration
//!   time. The core never re-queries layout.
//!
//! - **Presenter** — implements the [`Presenter`] trait to mirror shields
//!   into the platform-native view tree: an attached shield becomes a
//!   native view inserted as the **topmost child** of its origin view, and
//!   color/gradient/shape changes restyle it.
//!
//! # Frame loop pseudocode
//!
//! A typical host frame callback wires the pieces together like this:
//!
//! ```rust,ignore
//! fn on_frame(now_nanos: u64) {
//!     let changes = overlay.tick(Timestamp(now_nanos));
//!     presenter.apply(overlay.shields(), &changes);
//! }
//! ```
//!
//! # Tolerating stale slots
//!
//! Changes reference raw slot indices. A presenter may receive property
//! changes for slots it no longer mirrors (a shield restyled and destroyed
//! in the same tick, or one that was never attached). The contract is to
//! skip such indices silently — the reference presenters keep
//! `Vec<Option<NativeView>>` slots and do `if let Some(view)` per change.
//!
//! [`Timestamp`]: crate::time::Timestamp

use crate::shield::{OverlayChanges, ShieldStore};

/// Applies evaluated overlay changes to a platform-native view tree.
///
/// Both real platform backends and test doubles implement this trait,
/// enabling generic loading flows and deterministic tests.
pub trait Presenter {
    /// Applies the given [`OverlayChanges`] to the backing view tree,
    /// reading current property values from `store` as needed.
    fn apply(&mut self, store: &ShieldStore, changes: &OverlayChanges);
}

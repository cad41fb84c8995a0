// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Veil uses multi-channel dirty tracking (via [`understory_dirty`]) so that
//! each [`evaluate`](crate::shield::ShieldStore::evaluate) call can report
//! exactly which shield properties changed since the last one. Shields form
//! a flat set rather than a tree, so every channel is local-only: there are
//! no dependency edges and no propagation policies, just mark and drain.
//!
//! Property setters on [`ShieldStore`](crate::shield::ShieldStore) mark the
//! matching channel automatically; callers never touch dirty state directly.
//! Attach/detach events travel through [`LIFECYCLE`] plus the store's
//! pending lists, mirroring how additions and removals are surfaced in
//! [`OverlayChanges`](crate::shield::OverlayChanges).

use understory_dirty::Channel;

/// Background color changed.
pub const COLOR: Channel = Channel::new(0);

/// Gradient fill installed, removed, or its stops rewritten.
pub const GRADIENT: Channel = Channel::new(1);

/// Outline shape changed.
pub const SHAPE: Channel = Channel::new(2);

/// A shield was attached to or detached from its origin view.
pub const LIFECYCLE: Channel = Channel::new(3);

// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed in-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] by appending each event to a
//! `Vec<RecordedEvent>`. The recording can be inspected directly in tests
//! or handed to [`chrome::export`](crate::chrome::export) for offline
//! analysis.

use veil_core::trace::{
    ChangesEvent, RegisterEvent, RemoveEvent, StepEvent, TickEvent, TraceSink,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A batch of views was registered.
    Register(RegisterEvent),
    /// A host frame tick reached the overlay.
    Tick(TickEvent),
    /// The change-set summary a tick produced.
    Changes(ChangesEvent),
    /// A back-and-forth oscillation armed a new leg.
    Step(StepEvent),
    /// The overlay's shields were removed.
    Remove(RemoveEvent),
}

/// Records every trace event into memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder, returning the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }
}

impl TraceSink for RecorderSink {
    fn on_register(&mut self, e: &RegisterEvent) {
        self.events.push(RecordedEvent::Register(*e));
    }

    fn on_tick(&mut self, e: &TickEvent) {
        self.events.push(RecordedEvent::Tick(*e));
    }

    fn on_changes(&mut self, e: &ChangesEvent) {
        self.events.push(RecordedEvent::Changes(*e));
    }

    fn on_step(&mut self, e: &StepEvent) {
        self.events.push(RecordedEvent::Step(*e));
    }

    fn on_remove(&mut self, e: &RemoveEvent) {
        self.events.push(RecordedEvent::Remove(*e));
    }
}

#[cfg(test)]
mod tests {
    use veil_core::time::Timestamp;

    use super::*;

    #[test]
    fn records_in_arrival_order() {
        let mut rec = RecorderSink::new();
        rec.on_register(&RegisterEvent {
            shields: 2,
            timestamp: Timestamp(0),
        });
        rec.on_tick(&TickEvent {
            tick_index: 0,
            now: Timestamp(16_666_667),
        });
        rec.on_remove(&RemoveEvent {
            shields: 2,
            timestamp: Timestamp(100_000_000),
        });

        let events = rec.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], RecordedEvent::Register(e) if e.shields == 2));
        assert!(matches!(events[1], RecordedEvent::Tick(e) if e.tick_index == 0));
        assert!(matches!(events[2], RecordedEvent::Remove(_)));
    }
}

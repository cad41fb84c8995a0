// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).
//! Timestamps are printed as milliseconds.

use std::io::Write;

use veil_core::time::Timestamp;
use veil_core::trace::{
    ChangesEvent, RegisterEvent, RemoveEvent, StepEvent, TickEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

fn ms(t: Timestamp) -> f64 {
    t.nanos() as f64 / 1e6
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_register(&mut self, e: &RegisterEvent) {
        let _ = writeln!(
            self.writer,
            "[register] shields={} at {:.3}ms",
            e.shields,
            ms(e.timestamp),
        );
    }

    fn on_tick(&mut self, e: &TickEvent) {
        let _ = writeln!(
            self.writer,
            "[tick] index={} now={:.3}ms",
            e.tick_index,
            ms(e.now),
        );
    }

    fn on_changes(&mut self, e: &ChangesEvent) {
        let _ = writeln!(
            self.writer,
            "[changes] tick={} attached={} detached={} colors={} gradients={} shapes={}",
            e.tick_index, e.attached, e.detached, e.colors, e.gradients, e.shapes,
        );
    }

    fn on_step(&mut self, e: &StepEvent) {
        let _ = writeln!(
            self.writer,
            "[step] step={} target={} at {:.3}ms",
            e.step,
            e.target,
            ms(e.timestamp),
        );
    }

    fn on_remove(&mut self, e: &RemoveEvent) {
        let _ = writeln!(
            self.writer,
            "[remove] shields={} at {:.3}ms",
            e.shields,
            ms(e.timestamp),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_print_tick() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_tick(&TickEvent {
            tick_index: 1,
            now: Timestamp(1_000_000),
        });
        let output = String::from_utf8(sink.writer).unwrap();
        assert!(output.contains("[tick]"), "got: {output}");
        assert!(output.contains("index=1"), "got: {output}");
        assert!(output.contains("1.000ms"), "got: {output}");
    }

    #[test]
    fn pretty_print_step() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_step(&StepEvent {
            step: 3,
            target: 0,
            timestamp: Timestamp(1_800_000_000),
        });
        let output = String::from_utf8(sink.writer).unwrap();
        assert!(output.contains("[step] step=3 target=0"), "got: {output}");
    }
}

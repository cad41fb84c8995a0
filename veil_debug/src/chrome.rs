// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] turns events from a
//! [`RecorderSink`](super::recorder::RecorderSink) into
//! [Chrome Trace Event Format][spec] JSON for the given writer.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::RecordedEvent;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
/// Lifecycle events become instants; per-tick change counts become counter
/// tracks. [`ChangesEvent`](veil_core::trace::ChangesEvent) carries no
/// timestamp of its own, so it is stamped with the time of the most recent
/// tick.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::new();
    let mut last_tick_us = 0.0_f64;

    for recorded in events {
        match recorded {
            RecordedEvent::Register(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "Register",
                    "cat": "Overlay",
                    "ts": nanos_to_us(e.timestamp.nanos()),
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "shields": e.shields,
                    }
                }));
            }
            RecordedEvent::Tick(e) => {
                last_tick_us = nanos_to_us(e.now.nanos());
                out.push(json!({
                    "ph": "i",
                    "name": "Tick",
                    "cat": "Loop",
                    "ts": last_tick_us,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "tick_index": e.tick_index,
                    }
                }));
            }
            RecordedEvent::Changes(e) => {
                out.push(json!({
                    "ph": "C",
                    "name": "changes",
                    "cat": "Loop",
                    "ts": last_tick_us,
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "attached": e.attached,
                        "detached": e.detached,
                        "colors": e.colors,
                        "gradients": e.gradients,
                        "shapes": e.shapes,
                    }
                }));
            }
            RecordedEvent::Step(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "Step",
                    "cat": "Oscillation",
                    "ts": nanos_to_us(e.timestamp.nanos()),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "step": e.step,
                        "target": e.target,
                    }
                }));
            }
            RecordedEvent::Remove(e) => {
                out.push(json!({
                    "ph": "i",
                    "name": "Remove",
                    "cat": "Overlay",
                    "ts": nanos_to_us(e.timestamp.nanos()),
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "shields": e.shields,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}

fn nanos_to_us(nanos: u64) -> f64 {
    nanos as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use veil_core::time::Timestamp;
    use veil_core::trace::{ChangesEvent, RegisterEvent, StepEvent, TickEvent, TraceSink};

    use crate::recorder::RecorderSink;

    use super::*;

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_register(&RegisterEvent {
            shields: 3,
            timestamp: Timestamp(1_000_000_000),
        });
        rec.on_tick(&TickEvent {
            tick_index: 0,
            now: Timestamp(1_016_666_667),
        });
        rec.on_changes(&ChangesEvent {
            tick_index: 0,
            attached: 3,
            detached: 0,
            colors: 3,
            gradients: 0,
            shapes: 1,
        });
        rec.on_step(&StepEvent {
            step: 1,
            target: 1,
            timestamp: Timestamp(1_000_000_000),
        });

        let mut out = Vec::new();
        export(rec.events(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        // Should parse as a JSON array.
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 4);

        // First event is an instant Register.
        assert_eq!(parsed[0]["ph"], "i");
        assert_eq!(parsed[0]["name"], "Register");
        assert_eq!(parsed[0]["args"]["shields"], 3);

        // Changes are a counter stamped with the preceding tick's time.
        assert_eq!(parsed[2]["ph"], "C");
        assert_eq!(parsed[2]["ts"], parsed[1]["ts"]);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}

// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated profile-screen loading flow exercising the whole overlay
//! pipeline.
//!
//! A profile screen (round avatar plus a handful of text labels) is covered
//! with back-and-forth shimmer shields, ticked at 60 Hz from a scripted
//! clock, and uncovered two simulated seconds later when the "fetch"
//! completes. Events go to both a
//! [`PrettyPrintSink`](veil_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](veil_debug::recorder::RecorderSink); the recording is
//! exported as Chrome trace JSON at the end.

use std::fs::File;
use std::io::BufWriter;

use kurbo::Rect;

use veil_core::animator::{Animator, BackAndForthAnimator, GradientConfig};
use veil_core::overlay::{Overlay, Target};
use veil_core::shield::{ShieldShape, ViewRef};
use veil_core::time::{Span, Timestamp};
use veil_core::trace::{
    ChangesEvent, RegisterEvent, RemoveEvent, StepEvent, TickEvent, TraceSink, Tracer,
};

use veil_debug::pretty::PrettyPrintSink;
use veil_debug::recorder::RecorderSink;
use veil_harness::{RecordingPresenter, ShimmerTracker, StepClock};

const FRAME_COUNT: u64 = 150;
/// 16.6ms refresh interval in nanoseconds (≈60 Hz).
const REFRESH_INTERVAL_NS: u64 = 16_666_667;
/// Frame at which the simulated fetch completes and the overlay comes off.
const DATA_READY_FRAME: u64 = 120;

/// The views a profile screen wants covered while loading: the avatar and
/// its text labels.
fn profile_screen() -> Vec<Target> {
    let label = |id: u64, row: f64| {
        Target::new(
            ViewRef(id),
            Rect::new(140.0, 24.0 + row * 28.0, 340.0, 44.0 + row * 28.0),
        )
    };
    vec![
        Target::new(ViewRef(1), Rect::new(16.0, 16.0, 112.0, 112.0))
            .with_shape(ShieldShape::Circle),
        label(2, 0.0), // miles
        label(3, 1.0), // name
        label(4, 2.0), // surname
        label(5, 3.0), // age
        label(6, 4.0), // email
        label(7, 5.0), // birth date
        label(8, 6.0), // sex
    ]
}

fn main() {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let mut recorder = RecorderSink::new();

    // -- overlay -----------------------------------------------------------
    let animator = Animator::BackAndForth(BackAndForthAnimator::new(GradientConfig::default()));
    let mut overlay = Overlay::with_animator(animator);
    let mut presenter = RecordingPresenter::new();
    let mut shimmer = ShimmerTracker::<16>::new(600.0);

    let mut clock = StepClock::new(Timestamp(1_000_000_000), Span(REFRESH_INTERVAL_NS));

    // -- register ----------------------------------------------------------
    let targets = profile_screen();
    let register_event = RegisterEvent {
        shields: u32::try_from(targets.len()).expect("shield count fits in u32"),
        timestamp: clock.now(),
    };
    overlay.register(targets, clock.now());
    pretty.on_register(&register_event);
    recorder.on_register(&register_event);

    // Registration toggles the shared machine once per shield; only legs
    // armed by completions from here on count as oscillation steps.
    let mut seen_steps = back_and_forth(&overlay).steps();

    // -- simulated loop ----------------------------------------------------
    for tick_index in 0..FRAME_COUNT {
        let now = clock.advance();

        if tick_index == DATA_READY_FRAME {
            let remove_event = RemoveEvent {
                shields: u32::try_from(overlay.shields().attached_count())
                    .expect("shield count fits in u32"),
                timestamp: now,
            };
            overlay.remove();
            pretty.on_remove(&remove_event);
            recorder.on_remove(&remove_event);
        }

        let tick_event = TickEvent { tick_index, now };
        pretty.on_tick(&tick_event);
        recorder.on_tick(&tick_event);

        let changes = overlay.tick(now);
        let changes_event = ChangesEvent::new(tick_index, &changes);
        pretty.on_changes(&changes_event);
        recorder.on_changes(&changes_event);

        presenter.apply(overlay.shields(), &changes);

        // Surface oscillation steps armed by completions this tick.
        let machine = back_and_forth(&overlay);
        while seen_steps < machine.steps() {
            seen_steps += 1;
            let step_event = StepEvent {
                step: seen_steps,
                target: machine.current_index(),
                timestamp: now,
            };
            pretty.on_step(&step_event);
            recorder.on_step(&step_event);
            shimmer.observe_step(now);
        }

        // Also exercise the Tracer wrapper (one branch per call when the
        // `trace` feature is on).
        if tick_index == 0 {
            let mut tracer = Tracer::new(&mut pretty);
            tracer.tick(&tick_event);
        }
    }

    // -- summary -----------------------------------------------------------
    println!("mounted shields after fetch: {}", presenter.mounted());
    println!(
        "oscillation steps: {} (mean period {:.1}ms)",
        shimmer.total_steps(),
        shimmer.mean_period_ms(),
    );
    println!("periods: {}", shimmer.sparkline_ascii(0.0, 1200.0));

    // -- export Chrome trace -----------------------------------------------
    let path = "profile_card_trace.json";
    let file = File::create(path).expect("failed to create trace file");
    let mut writer = BufWriter::new(file);
    veil_debug::chrome::export(recorder.events(), &mut writer)
        .expect("failed to write Chrome trace");

    println!("Wrote {path} ({FRAME_COUNT} frames)");
}

/// The demo drives the back-and-forth strategy; anything else is a wiring
/// mistake.
fn back_and_forth(overlay: &Overlay) -> &BackAndForthAnimator {
    match overlay.animator() {
        Animator::BackAndForth(machine) => machine,
        _ => unreachable!("demo constructs the overlay with the back-and-forth strategy"),
    }
}

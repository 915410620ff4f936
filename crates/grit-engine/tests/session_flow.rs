//! Integration test: an interactive session driven by a synthetic clock.
//!
//! Plays the sandbox the way a user would (paint, play, change speed,
//! pause, manual step, save, clear, load) and checks that the schedule
//! and the renderer stay consistent throughout.

use std::time::{Duration, Instant};

use grit_core::{Material, TickId};
use grit_engine::{
    Brush, BrushShape, Sandbox, SandboxConfig, ScheduleError, Scheduler, Session, TextRenderer,
    TickRate,
};
use grit_test_utils::material_census;

const MS: Duration = Duration::from_millis(1);

fn config() -> SandboxConfig {
    SandboxConfig::with_size(30, 20).with_seed(3)
}

#[test]
fn full_interactive_round() {
    let mut session = Session::new(&config(), TextRenderer::new()).unwrap();
    let t0 = Instant::now();

    let sand = Brush::new(BrushShape::Circle, 3, Material::Sand);
    let floor = Brush::new(BrushShape::Square, 1, Material::Rock);
    for x in (1..30).step_by(3) {
        session.paint(&floor, (x, 19));
    }
    let grains = session.paint(&sand, (15, 3));
    assert_eq!(grains, 29);
    let census = material_census(session.sandbox().grid());

    // Play at the default 10 Hz for one simulated second.
    session.start(t0);
    let mut ticks = 0;
    for i in 1..=10 {
        ticks += session.advance(t0 + i * 100 * MS).len();
    }
    assert_eq!(ticks, 10);
    assert_eq!(session.sandbox().current_tick(), TickId(10));

    // Faster, then pause; no ticks while paused.
    session.set_speed(50, t0 + 1000 * MS);
    let fast: usize = (1..=10)
        .map(|i| session.advance(t0 + 1000 * MS + i * 20 * MS).len())
        .sum();
    assert_eq!(fast, 10);
    session.stop();
    let paused_at = session.sandbox().current_tick();
    assert!(session.advance(t0 + 5000 * MS).is_empty());
    assert_eq!(session.sandbox().current_tick(), paused_at);

    // Manual step only while paused.
    assert!(session.manual_step().is_ok());
    session.start(t0 + 5000 * MS);
    assert_eq!(session.manual_step(), Err(ScheduleError::Running));
    session.stop();

    // Save, wipe, reload.
    session.save();
    let saved = session.sandbox().grid().fingerprint();
    session.clear();
    assert_eq!(session.sandbox().grid().count(Material::Empty), 600);
    assert!(session.load(t0 + 6000 * MS));
    assert_eq!(session.sandbox().grid().fingerprint(), saved);

    // Ticks only swap cells.
    assert_eq!(material_census(session.sandbox().grid()), census);

    // The frame reflects the grid after the last render.
    let frame = session.renderer().frame().to_owned();
    assert_eq!(frame.lines().count(), 20);
    assert_eq!(
        frame.chars().filter(|&c| c == '.').count(),
        session.sandbox().grid().count(Material::Sand)
    );
}

#[test]
fn sessions_with_equal_seeds_agree() {
    let run = || {
        let mut s = Session::new(&config(), TextRenderer::new()).unwrap();
        s.paint(&Brush::new(BrushShape::Square, 4, Material::Water), (10, 5));
        s.paint(&Brush::new(BrushShape::Circle, 2, Material::Rock), (12, 15));
        for _ in 0..40 {
            s.manual_step().unwrap();
        }
        s.sandbox().grid().fingerprint()
    };
    assert_eq!(run(), run());
}

#[test]
fn stalled_clock_catches_up_a_bounded_amount() {
    let config = SandboxConfig {
        max_catch_up_ticks: 3,
        ..config()
    };
    let mut session = Session::new(&config, TextRenderer::new()).unwrap();
    let t0 = Instant::now();
    session.start(t0);
    let report = session.advance(t0 + 60_000 * MS);
    assert_eq!(report.len(), 3);
    assert_eq!(session.renderer().frames(), 2);
    assert!(session.scheduler().dropped_ticks() > 0);
}

#[test]
fn closure_renderer_sees_every_change() {
    let mut frames = Vec::new();
    {
        let renderer = |g: &grit_space::Grid| frames.push(g.count(Material::Sand));
        let sandbox = Sandbox::new(&config()).unwrap();
        let scheduler = Scheduler::new(TickRate::from_speed(10), 4).unwrap();
        let mut session = Session::from_parts(sandbox, scheduler, renderer);
        session.paint(&Brush::new(BrushShape::Square, 0, Material::Sand), (5, 5));
        session.manual_step().unwrap();
        session.clear();
    }
    assert_eq!(frames, [0, 1, 1, 0]);
}

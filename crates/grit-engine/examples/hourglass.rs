//! Grit hourglass: a complete sandbox session in the terminal.
//!
//! Demonstrates:
//!   1. Building a SandboxConfig and a Session with a TextRenderer
//!   2. Painting rock walls, a sand charge and a water pool with brushes
//!   3. Running the schedule against the real clock
//!   4. Saving, clearing and reloading the grid
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example hourglass

use std::thread;
use std::time::{Duration, Instant};

use grit_core::Material;
use grit_engine::{Brush, BrushShape, SandboxConfig, Session, TextRenderer};
use grit_rules::WaterVariant;

// ─── Grid parameters ────────────────────────────────────────────

const WIDTH: u32 = 41;
const HEIGHT: u32 = 30;
const NECK: i32 = 20;
const RUN_TICKS: u64 = 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SandboxConfig {
        tick_rate_hz: 30.0,
        ..SandboxConfig::with_size(WIDTH, HEIGHT)
            .with_water(WaterVariant::Pooling)
            .with_seed(42)
    };
    let mut session = Session::new(&config, TextRenderer::new())?;

    // A funnel narrowing to a one-cell neck at mid-height.
    let wall = Brush::new(BrushShape::Square, 0, Material::Rock);
    for i in 0..NECK {
        let y = HEIGHT as i32 / 2 - 1;
        session.paint(&wall, (i, y - (NECK - 1 - i) / 2));
        session.paint(&wall, (WIDTH as i32 - 1 - i, y - (NECK - 1 - i) / 2));
    }

    let sand = Brush::new(BrushShape::Circle, 5, Material::Sand);
    let water = Brush::new(BrushShape::Square, 2, Material::Water);
    println!("sand stamped: {}", session.paint(&sand, (NECK, 5)));
    println!("water stamped: {}", session.paint(&water, (NECK, 8)));
    session.save();

    let start = Instant::now();
    session.start(start);
    while session.sandbox().current_tick().0 < RUN_TICKS {
        let report = session.advance(Instant::now());
        if let Some(last) = report.last() {
            println!(
                "\x1b[2J\x1b[Htick {} fell {} spread {}\n{}",
                session.sandbox().current_tick(),
                last.fell,
                last.spread,
                session.renderer().frame()
            );
        }
        thread::sleep(Duration::from_millis(5));
    }
    session.stop();
    println!("ran {RUN_TICKS} ticks in {:?}", start.elapsed());

    session.clear();
    if session.load(Instant::now()) {
        println!("reloaded initial state:\n{}", session.renderer().frame());
    }

    Ok(())
}

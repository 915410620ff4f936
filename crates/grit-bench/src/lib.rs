//! Benchmark scenes for the Grit falling-sand sandbox.
//!
//! - [`reference_scene`]: 75x75 grid, the size of the interactive sandbox
//! - [`stress_scene`]: 300x300 grid (90K cells)
//!
//! Both scenes are painted deterministically: a rock floor with ledges, a
//! band of sand and a band of water, so a run exercises falling, sinking
//! and lateral spread from the first tick.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use grit_core::Material;
use grit_engine::{Brush, BrushShape, ConfigError, Sandbox, SandboxConfig};
use grit_rules::WaterVariant;

/// Build the 75x75 reference scene.
pub fn reference_scene(seed: u64, water: WaterVariant) -> Result<Sandbox, ConfigError> {
    scene(75, seed, water)
}

/// Build the 300x300 stress scene.
pub fn stress_scene(seed: u64, water: WaterVariant) -> Result<Sandbox, ConfigError> {
    scene(300, seed, water)
}

fn scene(size: u32, seed: u64, water: WaterVariant) -> Result<Sandbox, ConfigError> {
    let config = SandboxConfig::with_size(size, size)
        .with_water(water)
        .with_seed(seed);
    let mut sandbox = Sandbox::new(&config)?;
    let n = size as i32;
    let rock = Brush::new(BrushShape::Square, 1, Material::Rock);
    for x in (0..n).step_by(3) {
        sandbox.paint(&rock, (x, n - 1));
    }
    // Staggered ledges.
    for (i, x) in (n / 8..n).step_by((n / 4).max(1) as usize).enumerate() {
        let y = n / 2 + (i as i32 % 2) * n / 8;
        sandbox.paint(&Brush::new(BrushShape::Square, (size / 16).max(1), Material::Rock), (x, y));
    }
    let band = (size / 10).max(1);
    for x in (0..n).step_by(band as usize * 2) {
        sandbox.paint(&Brush::new(BrushShape::Circle, band, Material::Sand), (x, n / 6));
        sandbox.paint(
            &Brush::new(BrushShape::Square, band / 2, Material::Water),
            (x + band as i32, n / 4),
        );
    }
    Ok(sandbox)
}

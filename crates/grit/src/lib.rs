//! Grit: a falling-sand cellular-automaton sandbox.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Grit sub-crates. For most users, adding `grit` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use grit::prelude::*;
//!
//! let config = SandboxConfig::with_size(32, 24).with_seed(7);
//! let mut session = Session::new(&config, TextRenderer::new()).unwrap();
//!
//! let brush = Brush::new(BrushShape::Circle, 3, Material::Sand);
//! assert_eq!(session.paint(&brush, (16, 4)), 29);
//!
//! // Paused sessions step by hand.
//! let metrics = session.manual_step().unwrap();
//! assert!(metrics.fell > 0);
//! assert_eq!(session.sandbox().grid().count(Material::Sand), 29);
//! assert_eq!(session.renderer().frame().lines().count(), 24);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `grit-core` | `Material`, `MaterialSet`, `TickId`, `TieBreak`, errors |
//! | [`space`] | `grit-space` | `Grid` and `Snapshot` |
//! | [`rules`] | `grit-rules` | Per-material movement tables and stability rules |
//! | [`engine`] | `grit-engine` | Tick, brush, `Sandbox`, `Scheduler`, `Session` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`grit-core`).
pub use grit_core as types;

/// The material grid and snapshots (`grit-space`).
pub use grit_space as space;

/// Movement tables, water presets and stability rules (`grit-rules`).
pub use grit_rules as rules;

/// Simulation, brush, scheduling and sessions (`grit-engine`).
///
/// [`engine::Sandbox`] for direct stepping, [`engine::Session`] for an
/// interactive loop driven by a clock.
pub use grit_engine as engine;

/// Common imports for typical Grit usage.
///
/// ```rust
/// use grit::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use grit_core::{Material, MaterialSet, TickId, TieBreak};

    // Errors
    pub use grit_core::{GridError, ParseMaterialError, SnapshotError};
    pub use grit_engine::{ConfigError, ParseBrushShapeError, ScheduleError};
    pub use grit_rules::RulesError;

    // Grid
    pub use grit_space::{Grid, Snapshot};

    // Rules
    pub use grit_rules::{MaterialRules, RuleSet, StabilityRule, WaterVariant};

    // Engine
    pub use grit_engine::{
        paint, step, Brush, BrushShape, Renderer, RngTieBreak, Sandbox, SandboxConfig, Scheduler,
        Session, StepMetrics, TextRenderer, TickRate,
    };
}

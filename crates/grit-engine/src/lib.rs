//! Simulation engine for the Grit falling-sand sandbox.
//!
//! Layers, bottom up:
//!
//! - [`step`]: one tick over a [`Grid`](grit_space::Grid) under a
//!   [`RuleSet`](grit_rules::RuleSet), with an injected
//!   [`TieBreak`](grit_core::TieBreak) for lateral spread.
//! - [`paint`] / [`Brush`]: stamp a material over a square or disc.
//! - [`Sandbox`]: context object owning grid, rules, tie-break, tick
//!   counter and a save slot.
//! - [`Scheduler`]: clock-injected periodic schedule with a catch-up cap.
//! - [`Session`]: sandbox + scheduler + [`Renderer`], the interactive
//!   surface (play/pause, speed, manual step, paint, clear, save/load).
//!
//! Everything is single-threaded and synchronous.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod brush;
pub mod config;
pub mod metrics;
pub mod render;
pub mod sandbox;
pub mod schedule;
pub mod session;
pub mod tick;
pub mod tie_break;

pub use brush::{paint, Brush, BrushShape, ParseBrushShapeError};
pub use config::{ConfigError, SandboxConfig};
pub use metrics::StepMetrics;
pub use render::{Renderer, TextRenderer};
pub use sandbox::Sandbox;
pub use schedule::{ScheduleError, Scheduler, TickRate};
pub use session::{AdvanceReport, Session};
pub use tick::step;
pub use tie_break::RngTieBreak;

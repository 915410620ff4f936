//! Sandbox configuration, validation, and error types.
//!
//! [`SandboxConfig`] is the input for constructing a
//! [`Sandbox`](crate::Sandbox) or [`Session`](crate::Session).
//! [`validate()`](SandboxConfig::validate) checks every structural
//! invariant up front so construction cannot fail halfway.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use grit_core::GridError;
use grit_rules::{RuleSet, RulesError, WaterVariant};
use grit_space::Grid;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SandboxConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    Grid(GridError),
    /// A material rule table is malformed.
    Rules(RulesError),
    /// tick_rate_hz is NaN, infinite, zero, negative, or so small that
    /// its period does not fit a [`Duration`].
    InvalidTickRate {
        /// The invalid value.
        value: f64,
    },
    /// max_catch_up_ticks is zero, which would stall a running schedule.
    ZeroCatchUp,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Rules(e) => write!(f, "rules: {e}"),
            Self::InvalidTickRate { value } => {
                write!(f, "tick_rate_hz must be finite and positive, got {value}")
            }
            Self::ZeroCatchUp => write!(f, "max_catch_up_ticks must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Rules(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<RulesError> for ConfigError {
    fn from(e: RulesError) -> Self {
        Self::Rules(e)
    }
}

/// Period of one tick at `hz` ticks per second.
pub(crate) fn tick_interval(hz: f64) -> Result<Duration, ConfigError> {
    if !hz.is_finite() || hz <= 0.0 {
        return Err(ConfigError::InvalidTickRate { value: hz });
    }
    match Duration::try_from_secs_f64(1.0 / hz) {
        Ok(d) if !d.is_zero() => Ok(d),
        _ => Err(ConfigError::InvalidTickRate { value: hz }),
    }
}

// ── SandboxConfig ──────────────────────────────────────────────────

/// Complete configuration for a sandbox.
#[derive(Clone, Debug, PartialEq)]
pub struct SandboxConfig {
    /// Grid columns. Default: 75.
    pub width: u32,
    /// Grid rows. Default: 75.
    pub height: u32,
    /// Movement tables for sand and water.
    pub rules: RuleSet,
    /// Seed for the tie-break generator. Default: 0.
    pub seed: u64,
    /// Target ticks per second while running. Default: 10.
    pub tick_rate_hz: f64,
    /// Most ticks a single poll may run to catch up after a stall.
    /// Default: 4. Minimum: 1.
    pub max_catch_up_ticks: u32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            width: 75,
            height: 75,
            rules: RuleSet::default(),
            seed: 0,
            tick_rate_hz: 10.0,
            max_catch_up_ticks: 4,
        }
    }
}

impl SandboxConfig {
    /// Default configuration with the given grid size.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Replace the water table with a preset.
    pub fn with_water(mut self, variant: WaterVariant) -> Self {
        self.rules = RuleSet::with_water(variant);
        self
    }

    /// Replace the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid must be non-empty and addressable with i32 offsets.
        Grid::check_dimensions(self.width, self.height)?;
        // 2. Rule tables must be well formed.
        self.rules.validate()?;
        // 3. Tick period must be a positive Duration.
        tick_interval(self.tick_rate_hz)?;
        // 4. A running schedule must make progress on every poll.
        if self.max_catch_up_ticks == 0 {
            return Err(ConfigError::ZeroCatchUp);
        }
        Ok(())
    }
}

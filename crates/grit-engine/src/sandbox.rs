//! The sandbox context object.
//!
//! [`Sandbox`] owns everything a simulation needs: the grid, the rule
//! set, the tie-break source, the tick counter and a single saved
//! snapshot slot. There is no global state; every mutating method takes
//! `&mut self`, so the borrow checker rules out a paint interleaving
//! with a step.

use std::time::Instant;

use grit_core::{SnapshotError, TickId, TieBreak};
use grit_rules::RuleSet;
use grit_space::{Grid, Snapshot};

use crate::brush::Brush;
use crate::config::{ConfigError, SandboxConfig};
use crate::metrics::StepMetrics;
use crate::tick;
use crate::tie_break::RngTieBreak;

/// Single-threaded falling-sand world.
///
/// # Examples
///
/// ```
/// use grit_core::Material;
/// use grit_engine::{Brush, BrushShape, Sandbox, SandboxConfig};
///
/// let mut sandbox = Sandbox::new(&SandboxConfig::with_size(16, 16)).unwrap();
/// let brush = Brush::new(BrushShape::Square, 1, Material::Sand);
/// assert_eq!(sandbox.paint(&brush, (8, 2)), 9);
///
/// let metrics = sandbox.step();
/// assert_eq!(metrics.fell, 9);
/// assert_eq!(sandbox.grid().count(Material::Sand), 9);
/// ```
pub struct Sandbox {
    grid: Grid,
    rules: RuleSet,
    tie_break: Box<dyn TieBreak>,
    seed: u64,
    tick: TickId,
    saved: Option<Snapshot>,
    last_metrics: StepMetrics,
}

impl Sandbox {
    /// Create an empty sandbox with a ChaCha8 tie-break seeded from
    /// `config.seed`.
    pub fn new(config: &SandboxConfig) -> Result<Self, ConfigError> {
        Self::with_tie_break(config, Box::new(RngTieBreak::seeded(config.seed)))
    }

    /// Create an empty sandbox drawing lateral directions from
    /// `tie_break` instead of the seeded generator.
    pub fn with_tie_break(
        config: &SandboxConfig,
        tie_break: Box<dyn TieBreak>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        log::debug!(
            "sandbox {}x{} seed {} water {:?}",
            config.width,
            config.height,
            config.seed,
            config.rules.water.stability
        );
        Ok(Self {
            grid,
            rules: config.rules,
            tie_break,
            seed: config.seed,
            tick: TickId::default(),
            saved: None,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Run one tick and return its metrics.
    pub fn step(&mut self) -> StepMetrics {
        let start = Instant::now();
        let mut metrics = tick::step(&mut self.grid, &self.rules, &mut *self.tie_break);
        metrics.total_us = start.elapsed().as_micros() as u64;
        self.tick = self.tick.next();
        log::trace!(
            "tick {}: fell {} spread {} settled {} blocked {} in {}us",
            self.tick,
            metrics.fell,
            metrics.spread,
            metrics.settled,
            metrics.blocked,
            metrics.total_us
        );
        self.last_metrics = metrics;
        metrics
    }

    /// Run `n` ticks and return their summed metrics.
    pub fn step_n(&mut self, n: u32) -> StepMetrics {
        let mut total = StepMetrics::default();
        for _ in 0..n {
            total.accumulate(&self.step());
        }
        total
    }

    /// Stamp `brush` at `center`; returns the number of cells stamped.
    pub fn paint(&mut self, brush: &Brush, center: (i32, i32)) -> usize {
        brush.paint(&mut self.grid, center)
    }

    /// Reset every cell to empty. The tick counter and saved snapshot are
    /// kept.
    pub fn clear(&mut self) {
        self.grid.clear();
        log::debug!("cleared grid at tick {}", self.tick);
    }

    /// Reset to an empty grid at tick 0 with a fresh tie-break seeded from
    /// `seed`. The saved snapshot is discarded.
    pub fn reset(&mut self, seed: u64) {
        self.grid.clear();
        self.tie_break = Box::new(RngTieBreak::seeded(seed));
        self.seed = seed;
        self.tick = TickId::default();
        self.saved = None;
        self.last_metrics = StepMetrics::default();
        log::debug!("reset sandbox with seed {seed}");
    }

    /// Deep copy of the current grid contents.
    pub fn snapshot(&self) -> Snapshot {
        self.grid.snapshot()
    }

    /// Overwrite the grid with `snapshot`. Rejected, leaving the grid
    /// untouched, if the dimensions differ.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        self.grid.restore(snapshot)
    }

    /// Store the current grid in the single save slot, replacing any
    /// earlier save.
    pub fn save(&mut self) {
        self.saved = Some(self.grid.snapshot());
        log::debug!("saved grid at tick {}", self.tick);
    }

    /// Restore the saved grid. Returns `false`, changing nothing, when no
    /// grid has been saved.
    pub fn load(&mut self) -> bool {
        let Some(saved) = &self.saved else {
            log::debug!("load ignored: nothing saved");
            return false;
        };
        // The save slot is only filled from this grid, so dimensions match.
        let loaded = self.grid.restore(saved).is_ok();
        log::debug!("loaded saved grid at tick {}", self.tick);
        loaded
    }

    /// Whether the save slot is filled.
    pub fn has_saved(&self) -> bool {
        self.saved.is_some()
    }

    /// The live grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for setting individual cells.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Ticks run since construction or the last reset.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The seed of the generator in use. Meaningless when a custom
    /// tie-break was injected.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl std::fmt::Debug for Sandbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sandbox")
            .field("grid", &self.grid)
            .field("current_tick", &self.tick)
            .field("seed", &self.seed)
            .field("has_saved", &self.saved.is_some())
            .finish()
    }
}

//! Per-tick counters for the simulation engine.
//!
//! [`StepMetrics`] is the explicit result of a tick: how many cells
//! moved, how many held still, and how many tie-break draws the tick
//! consumed. Renderers and tests read it instead of diffing grids.

/// Counts and timing collected during a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds. Filled in by
    /// [`Sandbox`](crate::Sandbox); zero from the bare [`step`](crate::step).
    pub total_us: u64,
    /// Cells that swapped one row down.
    pub fell: u32,
    /// Cells that moved one column sideways.
    pub spread: u32,
    /// Resting cells that skipped lateral spread: stable by their rule,
    /// or lying on the bottom row.
    pub settled: u32,
    /// Lateral moves refused because the target was off-grid or blocking.
    pub blocked: u32,
    /// Tie-break values consumed.
    pub draws: u32,
}

impl StepMetrics {
    /// Cells that changed position this tick.
    pub fn moved(&self) -> u32 {
        self.fell + self.spread
    }

    /// Whether the tick left the grid unchanged.
    pub fn is_quiescent(&self) -> bool {
        self.moved() == 0
    }

    /// Fold another tick's counters into this one.
    pub fn accumulate(&mut self, other: &StepMetrics) {
        self.total_us = self.total_us.saturating_add(other.total_us);
        self.fell = self.fell.saturating_add(other.fell);
        self.spread = self.spread.saturating_add(other.spread);
        self.settled = self.settled.saturating_add(other.settled);
        self.blocked = self.blocked.saturating_add(other.blocked);
        self.draws = self.draws.saturating_add(other.draws);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.moved(), 0);
        assert_eq!(m.settled, 0);
        assert_eq!(m.blocked, 0);
        assert_eq!(m.draws, 0);
        assert!(m.is_quiescent());
    }

    #[test]
    fn accumulate_sums_fields() {
        let mut total = StepMetrics {
            fell: 2,
            draws: 1,
            ..Default::default()
        };
        total.accumulate(&StepMetrics {
            total_us: 40,
            fell: 1,
            spread: 3,
            settled: 5,
            blocked: 1,
            draws: 4,
        });
        assert_eq!(total.total_us, 40);
        assert_eq!(total.fell, 3);
        assert_eq!(total.spread, 3);
        assert_eq!(total.moved(), 6);
        assert_eq!(total.settled, 5);
        assert_eq!(total.blocked, 1);
        assert_eq!(total.draws, 5);
    }
}

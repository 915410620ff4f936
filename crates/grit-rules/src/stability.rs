//! Stability heuristics that stop resting sand and water from spreading
//! indefinitely.

use grit_core::MaterialSet;
use grit_space::Grid;

/// Decides whether a resting mobile cell skips lateral spread this tick.
///
/// Every rule inspects the row directly below the cell (`y + 1`).
/// Out-of-bounds columns are skipped, never counted either way, so a
/// cell on the bottom row (where the whole scan row is off-grid) is
/// stable under every rule except [`Never`](Self::Never).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StabilityRule {
    /// Scan columns `x - window/2 ..= x + window/2`; stable only if every
    /// scanned cell is blocking. A single gap anywhere breaks stability.
    AnyGap {
        /// Window width in columns (odd widths are symmetric).
        window: u32,
    },
    /// Scan `window` columns starting at `x - window/2`; stable once at
    /// least `threshold` scanned cells are blocking.
    Count {
        /// Window width in columns.
        window: u32,
        /// Blocking cells required for stability.
        threshold: u32,
    },
    /// Never stable: the cell always attempts lateral spread.
    Never,
    /// Always stable: the cell never spreads sideways.
    Always,
}

impl StabilityRule {
    /// Evaluate the rule for the cell at `(x, y)`.
    pub fn is_stable(&self, grid: &Grid, x: u32, y: u32, blocking: MaterialSet) -> bool {
        let below = y as i64 + 1;
        let x = x as i64;
        match *self {
            Self::AnyGap { window } => {
                let half = (window / 2) as i64;
                ((x - half)..=(x + half)).all(|col| match grid.probe(col, below) {
                    Some(m) => blocking.contains(m),
                    None => true,
                })
            }
            Self::Count { window, threshold } => {
                let start = x - (window / 2) as i64;
                let count = (start..start + window as i64)
                    .filter(|&col| blocking.contains_probe(grid.probe(col, below)))
                    .count();
                count as u64 >= threshold as u64
            }
            Self::Never => false,
            Self::Always => true,
        }
    }

    /// The rule's tunable constant: window width for
    /// [`AnyGap`](Self::AnyGap), threshold for [`Count`](Self::Count),
    /// and 0 for the constant rules.
    pub fn threshold(&self) -> u32 {
        match *self {
            Self::AnyGap { window } => window,
            Self::Count { threshold, .. } => threshold,
            Self::Never | Self::Always => 0,
        }
    }
}

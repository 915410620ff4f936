//! One simulation tick over a grid.
//!
//! The update is a single sequential in-place pass. Columns are visited
//! left to right and, within a column, rows bottom to top, so a falling
//! cell vacates its slot before the cell above it is considered. Because
//! updates are visible immediately, a cell that spreads right into a
//! column not yet visited may be visited (and moved) again in the same
//! tick. That ordering bias is part of the observable behaviour.

use grit_core::TieBreak;
use grit_rules::{MaterialRules, RuleSet};
use grit_space::Grid;

use crate::metrics::StepMetrics;

/// Advance `grid` by one tick under `rules`.
///
/// The material found in a cell at visit time decides what happens.
/// Empty and rock cells never act. A mobile cell:
///
/// 1. falls one row if the cell below is in its movable-into set;
/// 2. otherwise rests if it is on the bottom row or its stability rule
///    holds;
/// 3. otherwise draws one value from `tie_break` (`true` = right,
///    `false` = left) and moves one column that way if the target is on
///    the grid and not blocking. A refused move is not retried on the
///    other side.
///
/// The grid's cell multiset is preserved: every change is a swap.
pub fn step(grid: &mut Grid, rules: &RuleSet, tie_break: &mut dyn TieBreak) -> StepMetrics {
    let mut metrics = StepMetrics::default();
    let (width, height) = grid.dimensions();
    for x in 0..width {
        for y in (0..height).rev() {
            if let Some(table) = rules.rules_for(grid.get(x, y)) {
                update_cell(grid, table, x, y, tie_break, &mut metrics);
            }
        }
    }
    metrics
}

fn update_cell(
    grid: &mut Grid,
    table: &MaterialRules,
    x: u32,
    y: u32,
    tie_break: &mut dyn TieBreak,
    metrics: &mut StepMetrics,
) {
    // Resting on the floor.
    let Some(below) = grid.probe(x as i64, y as i64 + 1) else {
        metrics.settled += 1;
        return;
    };

    if table.is_movable_into(below) {
        grid.swap((x, y), (x, y + 1));
        metrics.fell += 1;
        return;
    }

    if table.stability.is_stable(grid, x, y, table.blocking) {
        metrics.settled += 1;
        return;
    }

    metrics.draws += 1;
    let target = if tie_break.next_bool() {
        x as i64 + 1
    } else {
        x as i64 - 1
    };
    match grid.probe(target, y as i64) {
        Some(m) if !table.is_blocking(m) => {
            // `probe` returned a cell, so `target` is in 0..width.
            grid.swap((x, y), (target as u32, y));
            metrics.spread += 1;
        }
        _ => metrics.blocked += 1,
    }
}

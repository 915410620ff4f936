//! Test utilities and fixtures for Grit development.
//!
//! Provides a deterministic [`ScriptedTieBreak`] and ASCII-art grid
//! fixtures ([`grid_from_ascii`], [`grid_to_ascii`]) so tests can state
//! a scenario as a picture and compare whole grids after stepping.
//!
//! Glyphs follow [`Material::glyph`]: `' '` empty, `'#'` rock,
//! `'.'` sand, `'~'` water.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{grid_from_ascii, grid_to_ascii};

use grit_core::{Material, TieBreak};

/// Replays a fixed sequence of tie-break values, cycling when exhausted.
///
/// Counts how many values were drawn so tests can assert that the engine
/// consumed exactly the expected number of draws.
#[derive(Clone, Debug)]
pub struct ScriptedTieBreak {
    script: Vec<bool>,
    cursor: usize,
    drawn: usize,
}

impl ScriptedTieBreak {
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: impl Into<Vec<bool>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "tie-break script must not be empty");
        Self {
            script,
            cursor: 0,
            drawn: 0,
        }
    }

    /// Total values drawn so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl TieBreak for ScriptedTieBreak {
    fn next_bool(&mut self) -> bool {
        let v = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        self.drawn += 1;
        v
    }
}

/// Count of each material, indexed in [`Material::ALL`] order.
pub fn material_census(grid: &grit_space::Grid) -> [usize; 4] {
    Material::ALL.map(|m| grid.count(m))
}

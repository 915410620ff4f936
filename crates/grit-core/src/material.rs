//! The closed [`Material`] set and the [`MaterialSet`] bitset.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseMaterialError;

/// The material held by a single grid cell.
///
/// The set is closed: every cell of every reachable grid state holds
/// exactly one of these four values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Material {
    /// Nothing. Mobile materials fall and spread into it.
    #[default]
    Empty = 0,
    /// Immovable solid.
    Rock = 1,
    /// Falls, displaces water, piles up.
    Sand = 2,
    /// Falls into empty cells and spreads sideways.
    Water = 3,
}

impl Material {
    /// Every material, in picker order.
    pub const ALL: [Material; 4] = [
        Material::Empty,
        Material::Rock,
        Material::Sand,
        Material::Water,
    ];

    /// Lowercase name, as shown by the material picker.
    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Rock => "rock",
            Self::Sand => "sand",
            Self::Water => "water",
        }
    }

    /// Single-character glyph used by the text renderer and fixtures.
    pub fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Rock => '#',
            Self::Sand => '.',
            Self::Water => '~',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub fn from_glyph(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.glyph() == c)
    }

    /// Whether the engine ever moves this material.
    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Sand | Self::Water)
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = ParseMaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ParseMaterialError {
                input: s.to_string(),
            })
    }
}

/// A set of materials implemented as a fixed-width bitset.
///
/// Used by the rule tables to declare which materials block a mobile
/// material and which it may fall into.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaterialSet {
    bits: u8,
}

impl MaterialSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Build a set from a slice of materials. Usable in `const` context.
    pub const fn of(materials: &[Material]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < materials.len() {
            bits |= materials[i].bit();
            i += 1;
        }
        Self { bits }
    }

    /// Insert a material into the set.
    pub fn insert(&mut self, material: Material) {
        self.bits |= material.bit();
    }

    /// Check whether the set contains a material.
    pub fn contains(&self, material: Material) -> bool {
        self.bits & material.bit() != 0
    }

    /// Check membership of a probed cell.
    ///
    /// `None` is the out-of-bounds sentinel and is never a member.
    pub fn contains_probe(&self, probe: Option<Material>) -> bool {
        probe.is_some_and(|m| self.contains(m))
    }

    /// Returns `true` if the set contains no materials.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of materials in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over members in [`Material::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Material> + '_ {
        Material::ALL.into_iter().filter(|m| self.contains(*m))
    }
}

impl FromIterator<Material> for MaterialSet {
    fn from_iter<I: IntoIterator<Item = Material>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for m in iter {
            set.insert(m);
        }
        set
    }
}

impl fmt::Debug for MaterialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

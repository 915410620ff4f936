//! Per-material movement tables.

use grit_core::{Material, MaterialSet};

use crate::error::RulesError;
use crate::stability::StabilityRule;

/// Movement table for one mobile material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialRules {
    /// Materials that prevent this material from entering a cell
    /// sideways, and that count as support for stability.
    pub blocking: MaterialSet,
    /// Materials this material may swap with when falling straight down.
    pub movable_into: MaterialSet,
    /// When a resting cell skips lateral spread.
    pub stability: StabilityRule,
}

impl MaterialRules {
    /// Sand: blocked by rock and sand, sinks through empty and water,
    /// settles once three cells below are all blocking.
    pub const SAND: Self = Self {
        blocking: MaterialSet::of(&[Material::Rock, Material::Sand]),
        movable_into: MaterialSet::of(&[Material::Empty, Material::Water]),
        stability: StabilityRule::AnyGap { window: 3 },
    };

    /// Whether `material` blocks lateral entry.
    pub fn is_blocking(&self, material: Material) -> bool {
        self.blocking.contains(material)
    }

    /// Whether this material may fall into a cell holding `material`.
    pub fn is_movable_into(&self, material: Material) -> bool {
        self.movable_into.contains(material)
    }

    /// The stability rule's tunable constant.
    pub fn stability_threshold(&self) -> u32 {
        self.stability.threshold()
    }

    fn validate(&self, material: Material) -> Result<(), RulesError> {
        if self.movable_into.contains(material) {
            return Err(RulesError::SelfMovable { material });
        }
        match self.stability {
            StabilityRule::AnyGap { window: 0 } | StabilityRule::Count { window: 0, .. } => {
                Err(RulesError::ZeroWindow { material })
            }
            StabilityRule::Count { window, threshold } if threshold > window => {
                Err(RulesError::ThresholdExceedsWindow {
                    material,
                    threshold,
                    window,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Selectable water behaviour.
///
/// Earlier revisions of the sandbox disagreed on how water settles;
/// each behaviour is kept as an explicit preset rather than blended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WaterVariant {
    /// Same blocking set and "any gap breaks stability" polarity as sand,
    /// with a window of one column.
    #[default]
    MirrorSand,
    /// Water blocks water; stable once ten of the ten cells below are
    /// water or rock. Produces flat pools.
    Pooling,
    /// No stability check: water always tries to spread sideways.
    Drift,
}

impl WaterVariant {
    /// Movement table for this variant.
    pub fn rules(self) -> MaterialRules {
        match self {
            Self::MirrorSand => MaterialRules {
                blocking: MaterialSet::of(&[Material::Rock, Material::Sand]),
                movable_into: MaterialSet::of(&[Material::Empty]),
                stability: StabilityRule::AnyGap { window: 1 },
            },
            Self::Pooling => MaterialRules {
                blocking: MaterialSet::of(&[Material::Water, Material::Rock]),
                movable_into: MaterialSet::of(&[Material::Empty]),
                stability: StabilityRule::Count {
                    window: 10,
                    threshold: 10,
                },
            },
            Self::Drift => MaterialRules {
                blocking: MaterialSet::of(&[Material::Rock, Material::Sand]),
                movable_into: MaterialSet::of(&[Material::Empty]),
                stability: StabilityRule::Never,
            },
        }
    }
}

/// Movement tables for every mobile material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSet {
    /// Sand table.
    pub sand: MaterialRules,
    /// Water table.
    pub water: MaterialRules,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::with_water(WaterVariant::default())
    }
}

impl RuleSet {
    /// Default sand table combined with the given water variant.
    pub fn with_water(variant: WaterVariant) -> Self {
        Self {
            sand: MaterialRules::SAND,
            water: variant.rules(),
        }
    }

    /// Table for `material`, or `None` for immobile materials.
    pub fn rules_for(&self, material: Material) -> Option<&MaterialRules> {
        match material {
            Material::Sand => Some(&self.sand),
            Material::Water => Some(&self.water),
            Material::Empty | Material::Rock => None,
        }
    }

    /// Check every table for malformed entries.
    pub fn validate(&self) -> Result<(), RulesError> {
        self.sand.validate(Material::Sand)?;
        self.water.validate(Material::Water)
    }
}

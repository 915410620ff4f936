//! Rule table validation errors.

use grit_core::Material;
use std::fmt;

/// Errors detected by [`RuleSet::validate`](crate::RuleSet::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RulesError {
    /// A stability window of zero columns scans nothing.
    ZeroWindow {
        /// The material whose rule is malformed.
        material: Material,
    },
    /// A counting rule can never be satisfied.
    ThresholdExceedsWindow {
        /// The material whose rule is malformed.
        material: Material,
        /// Configured threshold.
        threshold: u32,
        /// Configured window width.
        window: u32,
    },
    /// A material listed as movable into itself would swap with itself
    /// forever.
    SelfMovable {
        /// The material whose rule is malformed.
        material: Material,
    },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWindow { material } => {
                write!(f, "{material}: stability window must be at least 1")
            }
            Self::ThresholdExceedsWindow {
                material,
                threshold,
                window,
            } => write!(
                f,
                "{material}: stability threshold {threshold} exceeds window {window}"
            ),
            Self::SelfMovable { material } => {
                write!(f, "{material}: movable-into set contains {material}")
            }
        }
    }
}

impl std::error::Error for RulesError {}

//! Error types for the Grit engine.
//!
//! Only construction and boundary operations are fallible. Out-of-bounds
//! cell access through the in-bounds API is a programmer error and
//! panics instead of surfacing here.

use std::error::Error;
use std::fmt;

/// Errors from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension does not fit the signed coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from restoring a snapshot into a live grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    /// The snapshot was taken from a grid of different dimensions.
    DimensionMismatch {
        /// `(width, height)` of the live grid.
        expected: (u32, u32),
        /// `(width, height)` of the snapshot.
        found: (u32, u32),
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "snapshot is {}x{} but grid is {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl Error for SnapshotError {}

/// A material name outside the closed set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMaterialError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseMaterialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown material '{}' (expected empty, rock, sand or water)",
            self.input
        )
    }
}

impl Error for ParseMaterialError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GridError::EmptyGrid.to_string(),
            "grid must have at least one cell"
        );
        let e = SnapshotError::DimensionMismatch {
            expected: (75, 75),
            found: (10, 20),
        };
        assert_eq!(e.to_string(), "snapshot is 10x20 but grid is 75x75");
    }
}

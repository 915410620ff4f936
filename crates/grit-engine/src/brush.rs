//! Brush painting: stamp a material over a square or disc of cells.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use grit_core::Material;
use grit_space::Grid;

/// Footprint of a brush stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BrushShape {
    /// Every cell with `|dx| <= r` and `|dy| <= r`.
    #[default]
    Square,
    /// Cells of the square whose squared distance from the centre is at
    /// most `r * r`.
    Circle,
}

impl BrushShape {
    /// Every shape, in picker order.
    pub const ALL: [BrushShape; 2] = [BrushShape::Square, BrushShape::Circle];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Circle => "circle",
        }
    }

    /// Whether the offset `(dx, dy)` from the centre is inside a stroke
    /// of radius `r`.
    pub fn covers(self, dx: i64, dy: i64, r: u32) -> bool {
        let r = r as i64;
        match self {
            Self::Square => dx.abs() <= r && dy.abs() <= r,
            Self::Circle => {
                // Offsets can reach 2^32 in magnitude; square in i128.
                let (dx, dy, r) = (dx as i128, dy as i128, r as i128);
                dx * dx + dy * dy <= r * r
            }
        }
    }
}

impl fmt::Display for BrushShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no [`BrushShape`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseBrushShapeError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseBrushShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown brush shape {:?}, expected \"square\" or \"circle\"",
            self.input
        )
    }
}

impl Error for ParseBrushShapeError {}

impl FromStr for BrushShape {
    type Err = ParseBrushShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseBrushShapeError {
                input: s.to_string(),
            })
    }
}

/// Stamp `material` onto every in-bounds cell of the stroke centred at
/// `center` with radius `radius`.
///
/// The centre may lie off the grid; cells of the footprint outside the
/// grid are skipped, so a stroke entirely off the grid is a no-op. The
/// footprint's bounding box is clamped to the grid before iterating.
///
/// Returns the number of cells stamped, which is the number of cells the
/// renderer may need to redraw.
///
/// # Examples
///
/// ```
/// use grit_core::Material;
/// use grit_engine::{paint, BrushShape};
/// use grit_space::Grid;
///
/// let mut grid = Grid::new(20, 20).unwrap();
/// let stamped = paint(&mut grid, BrushShape::Circle, (10, 10), 3, Material::Sand);
/// assert_eq!(stamped, 29);
/// assert_eq!(grid.count(Material::Sand), 29);
/// ```
pub fn paint(
    grid: &mut Grid,
    shape: BrushShape,
    center: (i32, i32),
    radius: u32,
    material: Material,
) -> usize {
    let r = radius as i64;
    let (cx, cy) = (center.0 as i64, center.1 as i64);
    let x_lo = (cx - r).max(0);
    let y_lo = (cy - r).max(0);
    let x_hi = (cx + r).min(grid.width() as i64 - 1);
    let y_hi = (cy + r).min(grid.height() as i64 - 1);
    if x_lo > x_hi || y_lo > y_hi {
        return 0;
    }

    let mut stamped = 0;
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            if shape.covers(x - cx, y - cy, radius) {
                grid.set(x as u32, y as u32, material);
                stamped += 1;
            }
        }
    }
    stamped
}

/// Brush picker state: shape, radius and material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    /// Footprint shape.
    pub shape: BrushShape,
    /// Radius in cells.
    pub radius: u32,
    /// Material stamped.
    pub material: Material,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            shape: BrushShape::Square,
            radius: 3,
            material: Material::Sand,
        }
    }
}

impl Brush {
    /// Smallest radius the picker offers.
    pub const MIN_RADIUS: u32 = 1;
    /// Largest radius the picker offers.
    pub const MAX_RADIUS: u32 = 10;

    /// Brush with the given shape, radius and material.
    pub fn new(shape: BrushShape, radius: u32, material: Material) -> Self {
        Self {
            shape,
            radius,
            material,
        }
    }

    /// Clamp `radius` to the picker range
    /// [`MIN_RADIUS`](Self::MIN_RADIUS)..=[`MAX_RADIUS`](Self::MAX_RADIUS).
    ///
    /// [`paint`] itself accepts any radius.
    pub fn clamp_radius(radius: u32) -> u32 {
        radius.clamp(Self::MIN_RADIUS, Self::MAX_RADIUS)
    }

    /// Same brush with a different material.
    pub fn with_material(self, material: Material) -> Self {
        Self { material, ..self }
    }

    /// Stamp this brush onto `grid` at `center`. See [`paint`].
    pub fn paint(&self, grid: &mut Grid, center: (i32, i32)) -> usize {
        paint(grid, self.shape, center, self.radius, self.material)
    }
}

//! The 2D material grid.

use grit_core::{GridError, Material, SnapshotError};

use crate::hash;
use crate::snapshot::Snapshot;

/// A fixed-size two-dimensional array of [`Material`].
///
/// Cells are addressed by `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`; `y` grows downward (the gravity direction). Every
/// cell always holds exactly one material: the grid is fully populated
/// with [`Material::Empty`] at creation.
///
/// Two access tiers:
/// - [`get`](Self::get) / [`set`](Self::set) / [`swap`](Self::swap) take
///   in-bounds coordinates. Passing anything else is a bug in the caller
///   and panics.
/// - [`probe`](Self::probe) / [`within_bounds`](Self::within_bounds) take
///   signed coordinates for neighbour arithmetic. Out-of-bounds is an
///   expected answer there, reported as `None` / `false`.
///
/// # Examples
///
/// ```
/// use grit_core::Material;
/// use grit_space::Grid;
///
/// let mut grid = Grid::new(4, 3).unwrap();
/// grid.set(1, 2, Material::Sand);
/// assert_eq!(grid.get(1, 2), Material::Sand);
/// assert_eq!(grid.probe(-1, 0), None);
/// assert_eq!(grid.count(Material::Empty), 11);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Material>,
}

impl Grid {
    /// Maximum dimension size: neighbour arithmetic uses signed
    /// coordinates, so each axis must fit `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-empty grid of `width * height` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::check_dimensions(width, height)?;
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![Material::Empty; len],
        })
    }

    /// Validate dimensions without allocating.
    pub fn check_dimensions(width: u32, height: u32) -> Result<(), GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(())
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Whether a signed coordinate lies on the grid.
    #[inline]
    pub fn within_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Material at an in-bounds cell.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Material {
        self.cells[self.index(x, y)]
    }

    /// Overwrite an in-bounds cell.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, material: Material) {
        let i = self.index(x, y);
        self.cells[i] = material;
    }

    /// Exchange the contents of two in-bounds cells.
    ///
    /// # Panics
    ///
    /// Panics if either cell is outside the grid.
    #[inline]
    pub fn swap(&mut self, a: (u32, u32), b: (u32, u32)) {
        let ia = self.index(a.0, a.1);
        let ib = self.index(b.0, b.1);
        self.cells.swap(ia, ib);
    }

    /// Material at a signed coordinate, or `None` off the grid.
    ///
    /// `None` is the out-of-bounds sentinel: it is never a member of any
    /// [`MaterialSet`](grit_core::MaterialSet).
    #[inline]
    pub fn probe(&self, x: i64, y: i64) -> Option<Material> {
        if self.within_bounds(x, y) {
            Some(self.cells[(y as usize) * (self.width as usize) + (x as usize)])
        } else {
            None
        }
    }

    /// Reset every cell to [`Material::Empty`].
    pub fn clear(&mut self) {
        self.cells.fill(Material::Empty);
    }

    /// Fill every cell with `material`.
    pub fn fill(&mut self, material: Material) {
        self.cells.fill(material);
    }

    /// Number of cells holding `material`.
    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|&&m| m == material).count()
    }

    /// Iterate over `(x, y, material)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, Material)> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &m)| ((i % w) as u32, (i / w) as u32, m))
    }

    /// Iterate over one row, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the grid.
    pub fn row(&self, y: u32) -> &[Material] {
        let start = self.index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// FNV-1a hash of dimensions and contents.
    pub fn fingerprint(&self) -> u64 {
        hash::cells_hash(self.width, self.height, &self.cells)
    }

    /// Deep-copy the current contents.
    ///
    /// The returned snapshot is fully independent of the live grid.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.width, self.height, self.cells.clone())
    }

    /// Overwrite every cell with the snapshot's contents.
    ///
    /// Dimensions never change. A snapshot taken from a grid of a
    /// different shape is rejected and the grid is left untouched.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        if snapshot.dimensions() != self.dimensions() {
            log::warn!(
                "rejecting {}x{} snapshot for {}x{} grid",
                snapshot.width(),
                snapshot.height(),
                self.width,
                self.height
            );
            return Err(SnapshotError::DimensionMismatch {
                expected: self.dimensions(),
                found: snapshot.dimensions(),
            });
        }
        self.cells.copy_from_slice(snapshot.cells());
        Ok(())
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fingerprint", &format_args!("{:#018x}", self.fingerprint()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(Grid::new(0, 5).unwrap_err(), GridError::EmptyGrid);
        assert_eq!(Grid::new(5, 0).unwrap_err(), GridError::EmptyGrid);
    }

    #[test]
    fn new_rejects_oversized_dimensions() {
        let err = Grid::new(u32::MAX, 1).unwrap_err();
        assert!(matches!(
            err,
            GridError::DimensionTooLarge { name: "width", .. }
        ));
        let err = Grid::new(1, Grid::MAX_DIM + 1).unwrap_err();
        assert!(matches!(
            err,
            GridError::DimensionTooLarge { name: "height", .. }
        ));
    }

    #[test]
    fn new_grid_is_all_empty() {
        let g = Grid::new(7, 3).unwrap();
        assert_eq!(g.cell_count(), 21);
        assert_eq!(g.count(Material::Empty), 21);
    }

    #[test]
    fn set_then_get() {
        let mut g = Grid::new(5, 5).unwrap();
        g.set(4, 0, Material::Water);
        assert_eq!(g.get(4, 0), Material::Water);
        assert_eq!(g.get(0, 4), Material::Empty);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_out_of_bounds_panics() {
        let g = Grid::new(5, 5).unwrap();
        g.get(5, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_out_of_bounds_panics() {
        let mut g = Grid::new(5, 5).unwrap();
        g.set(0, 5, Material::Rock);
    }

    #[test]
    fn probe_returns_sentinel_off_grid() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set(2, 2, Material::Rock);
        assert_eq!(g.probe(2, 2), Some(Material::Rock));
        assert_eq!(g.probe(3, 2), None);
        assert_eq!(g.probe(2, -1), None);
        assert_eq!(g.probe(i64::MIN, i64::MAX), None);
    }

    #[test]
    fn swap_exchanges_cells() {
        let mut g = Grid::new(2, 2).unwrap();
        g.set(0, 0, Material::Sand);
        g.swap((0, 0), (0, 1));
        assert_eq!(g.get(0, 0), Material::Empty);
        assert_eq!(g.get(0, 1), Material::Sand);
    }

    #[test]
    fn clear_empties_everything() {
        let mut g = Grid::new(4, 4).unwrap();
        g.fill(Material::Rock);
        assert_eq!(g.count(Material::Rock), 16);
        g.clear();
        assert_eq!(g.count(Material::Empty), 16);
    }

    #[test]
    fn cells_iterates_row_major() {
        let mut g = Grid::new(2, 2).unwrap();
        g.set(1, 0, Material::Sand);
        let v: Vec<_> = g.cells().collect();
        assert_eq!(v[1], (1, 0, Material::Sand));
        assert_eq!(v[2], (0, 1, Material::Empty));
        assert_eq!(g.row(0), &[Material::Empty, Material::Sand]);
    }

    #[test]
    fn snapshot_is_independent_of_live_grid() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set(1, 1, Material::Sand);
        let snap = g.snapshot();
        g.set(1, 1, Material::Water);
        assert_eq!(snap.get(1, 1), Material::Sand);

        g.restore(&snap).unwrap();
        assert_eq!(g.get(1, 1), Material::Sand);
    }

    #[test]
    fn restore_rejects_other_dimensions() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set(0, 0, Material::Rock);
        let other = Grid::new(4, 3).unwrap().snapshot();
        let err = g.restore(&other).unwrap_err();
        assert_eq!(
            err,
            SnapshotError::DimensionMismatch {
                expected: (3, 3),
                found: (4, 3),
            }
        );
        assert_eq!(g.get(0, 0), Material::Rock);
    }

    #[test]
    fn fingerprint_tracks_contents() {
        let mut a = Grid::new(4, 4).unwrap();
        let b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());
        a.set(3, 3, Material::Water);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    proptest! {
        #[test]
        fn within_bounds_matches_probe(
            w in 1u32..20,
            h in 1u32..20,
            x in -30i64..30,
            y in -30i64..30,
        ) {
            let g = Grid::new(w, h).unwrap();
            prop_assert_eq!(g.within_bounds(x, y), g.probe(x, y).is_some());
        }
    }
}

//! Owned deep copies of grid contents.

use grit_core::Material;

use crate::hash;

/// An owned, immutable copy of a grid's cells.
///
/// Produced by [`Grid::snapshot`](crate::Grid::snapshot) and consumed by
/// [`Grid::restore`](crate::Grid::restore). A snapshot never aliases the
/// live grid, so stepping or painting after taking one leaves it intact.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    cells: Vec<Material>,
}

impl Snapshot {
    pub(crate) fn new(width: u32, height: u32, cells: Vec<Material>) -> Self {
        debug_assert_eq!(cells.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns in the source grid.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows in the source grid.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` of the source grid.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Material captured at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the captured grid.
    pub fn get(&self, x: u32, y: u32) -> Material {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of bounds for {}x{} snapshot",
            self.width,
            self.height
        );
        self.cells[(y as usize) * (self.width as usize) + (x as usize)]
    }

    pub(crate) fn cells(&self) -> &[Material] {
        &self.cells
    }

    /// FNV-1a hash; equal to the source grid's fingerprint at capture time.
    pub fn fingerprint(&self) -> u64 {
        hash::cells_hash(self.width, self.height, &self.cells)
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fingerprint", &format_args!("{:#018x}", self.fingerprint()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Grid;
    use grit_core::Material;

    #[test]
    fn fingerprint_matches_source_grid() {
        let mut g = Grid::new(6, 2).unwrap();
        g.set(5, 1, Material::Water);
        let snap = g.snapshot();
        assert_eq!(snap.fingerprint(), g.fingerprint());
        assert_eq!(snap.dimensions(), (6, 2));
    }
}

//! ASCII-art grid fixtures.

use grit_core::Material;
use grit_space::Grid;

/// Build a grid from rows of glyphs, top row first.
///
/// The grid is as wide as the longest row; shorter rows are padded with
/// empty cells.
///
/// # Panics
///
/// Panics on an unknown glyph or when `rows` is empty.
pub fn grid_from_ascii(rows: &[&str]) -> Grid {
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let mut grid = Grid::new(width as u32, rows.len() as u32)
        .unwrap_or_else(|e| panic!("invalid fixture: {e}"));
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            let m = Material::from_glyph(c)
                .unwrap_or_else(|| panic!("unknown glyph {c:?} at ({x}, {y})"));
            grid.set(x as u32, y as u32, m);
        }
    }
    grid
}

/// Render a grid as rows of glyphs, top row first.
pub fn grid_to_ascii(grid: &Grid) -> Vec<String> {
    (0..grid.height())
        .map(|y| grid.row(y).iter().map(|m| m.glyph()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        let rows = [" .~", "###"];
        let g = grid_from_ascii(&rows);
        assert_eq!(g.dimensions(), (3, 2));
        assert_eq!(g.get(1, 0), Material::Sand);
        assert_eq!(g.get(2, 0), Material::Water);
        assert_eq!(grid_to_ascii(&g), rows);
    }

    #[test]
    fn short_rows_are_padded() {
        let g = grid_from_ascii(&["#", "###"]);
        assert_eq!(g.get(2, 0), Material::Empty);
    }
}

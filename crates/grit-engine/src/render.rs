//! Rendering hooks.
//!
//! The engine never draws anything itself. After each state change a
//! [`Session`](crate::Session) hands the grid to a [`Renderer`]; what the
//! renderer does with it (canvas, terminal, nothing) is up to the caller.

use grit_space::Grid;

/// Receives the grid after every step, paint, clear or load.
pub trait Renderer {
    /// Draw the current grid.
    fn render(&mut self, grid: &Grid);
}

impl<F: FnMut(&Grid)> Renderer for F {
    fn render(&mut self, grid: &Grid) {
        self(grid)
    }
}

/// Renders the grid as rows of material glyphs into a text frame.
///
/// ```text
///    ..
///   ....~
/// ########
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextRenderer {
    frame: String,
    frames: u64,
}

impl TextRenderer {
    /// Renderer with an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered frame: one line per row, top row first,
    /// each line terminated by `'\n'`.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, grid: &Grid) {
        self.frame.clear();
        self.frame
            .reserve((grid.width() as usize + 1) * grid.height() as usize);
        for y in 0..grid.height() {
            self.frame.extend(grid.row(y).iter().map(|m| m.glyph()));
            self.frame.push('\n');
        }
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grit_test_utils::grid_from_ascii;

    #[test]
    fn text_frame_matches_glyphs() {
        let g = grid_from_ascii(&[" .~", "###"]);
        let mut r = TextRenderer::new();
        r.render(&g);
        assert_eq!(r.frame(), " .~\n###\n");
        assert_eq!(r.frames(), 1);
    }

    #[test]
    fn frame_is_replaced_not_appended() {
        let mut r = TextRenderer::new();
        r.render(&grid_from_ascii(&["#"]));
        r.render(&grid_from_ascii(&["."]));
        assert_eq!(r.frame(), ".\n");
        assert_eq!(r.frames(), 2);
    }

    #[test]
    fn closures_are_renderers() {
        let mut seen = 0;
        let mut r = |g: &Grid| seen += g.cell_count();
        r.render(&grid_from_ascii(&["  ", "  "]));
        assert_eq!(seen, 4);
    }
}

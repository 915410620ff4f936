//! Core traits shared by the engine and its collaborators.

/// Source of the left/right tie-break used by lateral spread.
///
/// The engine draws exactly one boolean per lateral spread attempt:
/// `true` means "try the right neighbour", `false` means "try the left
/// neighbour". Production code injects a seeded RNG; tests inject a
/// fixed script to assert exact spread direction.
pub trait TieBreak {
    /// Draw the next tie-break value.
    fn next_bool(&mut self) -> bool;
}

impl<T: TieBreak + ?Sized> TieBreak for &mut T {
    fn next_bool(&mut self) -> bool {
        (**self).next_bool()
    }
}

impl<T: TieBreak + ?Sized> TieBreak for Box<T> {
    fn next_bool(&mut self) -> bool {
        (**self).next_bool()
    }
}

/// Tie-break that always picks the right neighbour.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysRight;

impl TieBreak for AlwaysRight {
    fn next_bool(&mut self) -> bool {
        true
    }
}

/// Tie-break that always picks the left neighbour.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysLeft;

impl TieBreak for AlwaysLeft {
    fn next_bool(&mut self) -> bool {
        false
    }
}

//! RNG-backed tie-break source.

use grit_core::TieBreak;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fair coin flips from any [`RngCore`].
///
/// The default generator is [`ChaCha8Rng`], seeded explicitly so a run is
/// reproducible from its seed alone.
///
/// # Examples
///
/// ```
/// use grit_core::TieBreak;
/// use grit_engine::RngTieBreak;
///
/// let mut a = RngTieBreak::seeded(7);
/// let mut b = RngTieBreak::seeded(7);
/// for _ in 0..16 {
///     assert_eq!(a.next_bool(), b.next_bool());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct RngTieBreak<R = ChaCha8Rng> {
    rng: R,
}

impl RngTieBreak<ChaCha8Rng> {
    /// ChaCha8-backed tie-break seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RngTieBreak<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> TieBreak for RngTieBreak<R> {
    fn next_bool(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

use rand::Rng;

use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: &GameConfig) -> Result<Board>;
}

/// Supplies the kind of every tile created by a fill or a refill.
pub trait TileSource {
    /// A kind in `1..=kinds`.
    fn next_kind(&mut self, kinds: u8) -> TileKind;
}

impl<R: Rng + ?Sized> TileSource for R {
    fn next_kind(&mut self, kinds: u8) -> TileKind {
        TileKind(self.random_range(1..=kinds.max(1)))
    }
}

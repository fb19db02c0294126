#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use board::*;
pub use cascade::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use generator::*;
pub use matcher::*;
pub use score::*;
pub use snapshot::*;
pub use swap::*;
pub use tile::*;
pub use timer::*;
pub use types::*;

mod analysis;
mod board;
mod cascade;
mod engine;
mod error;
mod event;
mod generator;
mod matcher;
mod score;
mod snapshot;
mod swap;
mod tile;
mod timer;
mod types;

#[cfg(test)]
mod testutil;

/// Ticks per second assumed by the default timings.
pub const FPS: u32 = 60;

/// Length of a session before any time is earned back, in seconds.
pub const GAME_SECONDS: u32 = 60;

pub const MIN_KINDS: u8 = 3;
pub const MAX_KINDS: u8 = 8;

/// Delays between phases, in ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// Swap animation before the first match check.
    pub swap: u32,
    /// Flash of the first matched tiles of a turn.
    pub first_delete: u32,
    /// Flash of tiles matched by a cascade.
    pub chain_delete: u32,
    pub drop: u32,
    pub refill: u32,
    pub settle: u32,
    pub no_more_move: u32,
    /// Time after game over before a restart is accepted.
    pub restart_lock: u32,
    pub popup: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            swap: 6,
            first_delete: 4,
            chain_delete: 9,
            drop: 9,
            refill: 3,
            settle: 3,
            no_more_move: 30,
            restart_lock: 5 * FPS,
            popup: 6,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub kinds: u8,
    pub game_ticks: u32,
    pub max_generation_attempts: u32,
    pub max_settle_rounds: u32,
    pub timings: Timings,
}

impl GameConfig {
    pub fn new_unchecked(size: Coord2, kinds: u8) -> Self {
        Self {
            size,
            kinds,
            game_ticks: GAME_SECONDS * FPS,
            max_generation_attempts: 1000,
            max_settle_rounds: 64,
            timings: Timings::default(),
        }
    }

    pub fn new((size_x, size_y): Coord2, kinds: u8) -> Self {
        let size_x = size_x.max(3);
        let size_y = size_y.max(3);
        let kinds = kinds.clamp(MIN_KINDS, MAX_KINDS);
        Self::new_unchecked((size_x, size_y), kinds)
    }

    pub fn with_game_ticks(mut self, game_ticks: u32) -> Self {
        self.game_ticks = game_ticks.max(1);
        self
    }

    pub fn with_max_generation_attempts(mut self, attempts: u32) -> Self {
        self.max_generation_attempts = attempts.max(1);
        self
    }

    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new((7, 9), 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_clamped() {
        let config = GameConfig::new((1, 2), 12);

        assert_eq!(config.size, (3, 3));
        assert_eq!(config.kinds, MAX_KINDS);
        assert_eq!(GameConfig::new((7, 9), 0).kinds, MIN_KINDS);
    }

    #[test]
    fn defaults_match_a_one_minute_game() {
        let config = GameConfig::default();

        assert_eq!(config.size, (7, 9));
        assert_eq!(config.total_cells(), 63);
        assert_eq!(config.game_ticks, 3600);
        assert_eq!(config.timings.restart_lock, 300);
    }
}

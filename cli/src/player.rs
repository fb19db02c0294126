use clap::ValueEnum;
use match3_core::{Board, CellCount, SwapIntent, apply_swap, find_swaps, scan_matches};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

/// How the automated player picks its next swap.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// The swap clearing the most tiles right away
    #[default]
    Greedy,
    /// The first productive swap in board order
    First,
    /// Any productive swap
    Random,
}

impl Policy {
    pub fn choose<R: Rng + ?Sized>(self, board: &Board, rng: &mut R) -> Option<SwapIntent> {
        let swaps = find_swaps(board);
        match self {
            Self::Greedy => swaps
                .into_iter()
                .max_by_key(|&intent| cleared_by(board, intent)),
            Self::First => swaps.first().copied(),
            Self::Random => swaps.choose(rng).copied(),
        }
    }
}

/// Tiles the first match check would clear after `intent`.
pub fn cleared_by(board: &Board, intent: SwapIntent) -> CellCount {
    let mut scratch = board.clone();
    apply_swap(&mut scratch, intent);
    scan_matches(&mut scratch);
    scratch.matched_count()
}

use serde::{Deserialize, Serialize};

use crate::*;

/// Two cells picked by the player, in the order they were picked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapIntent {
    pub first: Coord2,
    pub second: Coord2,
}

impl SwapIntent {
    pub const fn new(first: Coord2, second: Coord2) -> Self {
        Self { first, second }
    }

    pub const fn is_deselect(&self) -> bool {
        self.first.0 == self.second.0 && self.first.1 == self.second.1
    }
}

/// Why a swap was or was not allowed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapCheck {
    Legal,
    /// Both picks are the same cell, the player let go of the selection.
    Deselect,
    NotAdjacent,
    SameKind,
    /// One of the slots has no tile, only possible mid-cascade.
    Vacant,
}

impl SwapCheck {
    pub const fn is_legal(self) -> bool {
        matches!(self, Self::Legal)
    }
}

pub fn check_swap(board: &Board, intent: SwapIntent) -> SwapCheck {
    if intent.is_deselect() {
        return SwapCheck::Deselect;
    }

    if manhattan(intent.first, intent.second) != 1 {
        return SwapCheck::NotAdjacent;
    }

    match (board.kind_at(intent.first), board.kind_at(intent.second)) {
        (Some(a), Some(b)) if a == b => SwapCheck::SameKind,
        (Some(_), Some(_)) => SwapCheck::Legal,
        _ => SwapCheck::Vacant,
    }
}

/// Symmetric in `a` and `b`.
pub fn is_legal(board: &Board, a: Coord2, b: Coord2) -> bool {
    check_swap(board, SwapIntent::new(a, b)).is_legal()
}

/// Exchanges the two tiles. Applying the same intent again undoes it.
pub fn apply_swap(board: &mut Board, intent: SwapIntent) {
    board.swap(intent.first, intent.second);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::rows;

    #[test]
    fn adjacent_different_kinds_are_legal() {
        let board = rows(&[
            "12", //
            "31",
        ]);

        assert!(is_legal(&board, (0, 0), (1, 0)));
        assert!(is_legal(&board, (0, 0), (0, 1)));
    }

    #[test]
    fn same_cell_is_a_deselect_not_a_rejection() {
        let board = rows(&["12"]);

        let check = check_swap(&board, SwapIntent::new((1, 0), (1, 0)));

        assert_eq!(check, SwapCheck::Deselect);
        assert!(!check.is_legal());
    }

    #[test]
    fn diagonal_and_distant_are_rejected() {
        let board = rows(&[
            "123", //
            "456",
        ]);

        assert_eq!(
            check_swap(&board, SwapIntent::new((0, 0), (1, 1))),
            SwapCheck::NotAdjacent
        );
        assert_eq!(
            check_swap(&board, SwapIntent::new((0, 0), (2, 0))),
            SwapCheck::NotAdjacent
        );
    }

    #[test]
    fn identical_kinds_are_rejected() {
        let board = rows(&["113"]);

        assert_eq!(
            check_swap(&board, SwapIntent::new((0, 0), (1, 0))),
            SwapCheck::SameKind
        );
    }

    #[test]
    fn legality_is_symmetric() {
        let board = rows(&[
            "1123", //
            "2314", //
            "4412",
        ]);

        for a in board.iter_coords() {
            for b in board.iter_coords() {
                assert_eq!(is_legal(&board, a, b), is_legal(&board, b, a));
            }
        }
    }

    #[test]
    fn swap_is_its_own_inverse() {
        let original = rows(&[
            "123", //
            "456",
        ]);
        let mut board = original.clone();
        let intent = SwapIntent::new((1, 0), (1, 1));

        apply_swap(&mut board, intent);
        assert_eq!(board.kind_at((1, 0)), Some(TileKind(5)));
        apply_swap(&mut board, intent);

        for coords in original.iter_coords() {
            assert_eq!(board.kind_at(coords), original.kind_at(coords));
        }
    }
}

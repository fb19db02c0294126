use alloc::vec::Vec;

use crate::*;

/// Every legal swap that would produce at least one run of three.
///
/// Each pair is reported once, with `first` above or left of `second`.
pub fn find_swaps(board: &Board) -> Vec<SwapIntent> {
    let mut found = Vec::new();
    let mut scratch = board.clone();

    for coords in board.iter_coords() {
        for neighbor in board.iter_neighbors(coords) {
            if neighbor < coords {
                continue;
            }

            let intent = SwapIntent::new(coords, neighbor);
            if !check_swap(board, intent).is_legal() {
                continue;
            }

            apply_swap(&mut scratch, intent);
            if has_match(&scratch) {
                found.push(intent);
            }
            apply_swap(&mut scratch, intent);
        }
    }

    found
}

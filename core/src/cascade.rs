//! Delete, drop and refill, always applied in that order.

use crate::*;

/// Removes every matched tile and returns how many slots were vacated.
pub fn delete_matched(board: &mut Board) -> CellCount {
    let mut removed = 0;
    for coords in board.iter_coords() {
        if board.get(coords).is_some_and(|tile| tile.matched) {
            board.take(coords);
            removed += 1;
        }
    }
    log::debug!("deleted {} matched tiles", removed);
    removed
}

/// Lets tiles fall into the empty slots below them, column by column.
///
/// Remaining tiles keep their relative order; each moved tile gets its new
/// slot as animation target. Returns how many tiles moved.
pub fn drop_tiles(board: &mut Board) -> CellCount {
    let (width, height) = board.size();
    let mut moved = 0;

    for x in 0..width {
        let mut floor = height;
        for y in (0..height).rev() {
            let Some(tile) = board.take((x, y)) else {
                continue;
            };
            floor -= 1;
            let target = (x, floor);
            let mut tile = tile;
            if floor != y {
                tile.motion.retarget(target);
                moved += 1;
            }
            board.set(target, Some(tile));
        }
    }

    log::trace!("dropped {} tiles", moved);
    moved
}

/// Fills every empty slot with a fresh tile falling in from above the board.
///
/// Returns how many tiles were created.
pub fn refill<S: TileSource + ?Sized>(board: &mut Board, kinds: u8, source: &mut S) -> CellCount {
    let mut created = 0;
    for coords in board.iter_coords() {
        if board.get(coords).is_none() {
            let kind = source.next_kind(kinds);
            board.set(coords, Some(Tile::new(kind, Motion::falling_into(coords, -1))));
            created += 1;
        }
    }
    log::trace!("refilled {} slots", created);
    created
}

/// One delete, drop and refill round. Returns the number of deleted tiles.
pub fn cascade_once<S: TileSource + ?Sized>(board: &mut Board, kinds: u8, source: &mut S) -> CellCount {
    let removed = delete_matched(board);
    drop_tiles(board);
    refill(board, kinds, source);
    removed
}

/// Cascades until no run is left, giving up after `max_rounds` rounds.
///
/// Returns the number of rounds that removed tiles, or `None` when the
/// limit was reached with matches still on the board.
pub fn settle<S: TileSource + ?Sized>(
    board: &mut Board,
    kinds: u8,
    source: &mut S,
    max_rounds: u32,
) -> Option<u32> {
    let mut rounds = 0;
    while scan_matches(board) {
        if rounds >= max_rounds {
            return None;
        }
        cascade_once(board, kinds, source);
        rounds += 1;
    }
    Some(rounds)
}

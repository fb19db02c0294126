use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

/// Settled board from one string per row, one digit per tile kind.
pub fn rows(rows: &[&str]) -> Board {
    let width = rows[0].len() as Coord;
    let height = rows.len() as Coord;
    Board::from_kinds((width, height), |(x, y)| {
        let digit = rows[y as usize].as_bytes()[x as usize];
        TileKind(digit - b'0')
    })
}

/// Kind digits row by row, `0` for an empty slot.
pub fn kinds_of(board: &Board) -> Vec<String> {
    render(board, |tile| match tile {
        Some(tile) => char::from(b'0' + tile.kind.get()),
        None => '0',
    })
}

pub fn matched_mask(board: &Board) -> Vec<String> {
    render(board, |tile| match tile {
        Some(tile) if tile.matched => '#',
        _ => '.',
    })
}

fn render(board: &Board, cell: impl Fn(Option<&Tile>) -> char) -> Vec<String> {
    let (width, height) = board.size();
    (0..height)
        .map(|y| (0..width).map(|x| cell(board.get((x, y)))).collect())
        .collect()
}

/// Hands out kinds from a fixed cycle, ignoring the requested range.
#[derive(Clone, Debug)]
pub struct CycleSource {
    values: Vec<u8>,
    next: usize,
}

impl CycleSource {
    pub fn new(values: &[u8]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl TileSource for CycleSource {
    fn next_kind(&mut self, _kinds: u8) -> TileKind {
        let kind = self.values[self.next % self.values.len()];
        self.next += 1;
        TileKind(kind)
    }
}

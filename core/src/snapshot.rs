use alloc::string::String;
use alloc::vec::Vec;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer draws for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub kind: TileKind,
    pub matched: bool,
    pub tenpai: bool,
    /// Tenpai flag as shown, only set while hints are on.
    pub hint: bool,
    pub selected: bool,
    pub exiting: bool,
    pub pos: (i16, i16),
    pub dst: (i16, i16),
}

impl CellView {
    fn new(tile: &Tile, hint: bool) -> Self {
        Self {
            kind: tile.kind,
            matched: tile.matched,
            tenpai: tile.tenpai,
            hint: hint && tile.tenpai,
            selected: tile.selected,
            exiting: tile.exiting,
            pos: tile.motion.pos,
            dst: tile.motion.dst,
        }
    }
}

/// Read-only view of a session, detached from the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub size: Coord2,
    pub cells: Array2<Option<CellView>>,
    pub score: u32,
    pub score_text: String,
    pub combo: u32,
    pub time_remaining: u32,
    pub time_total: u32,
    pub urgent: bool,
    pub popup: Option<Popup>,
    pub banner: Banner,
    pub selection: Option<Coord2>,
}

impl Snapshot {
    pub fn from_engine<S: TileSource>(engine: &PuzzleEngine<S>) -> Self {
        let board = engine.board();
        let hint = engine.hint();
        let size = board.size();

        let mut cells = Array2::from_elem(size.to_nd_index(), None);
        board.for_each_slot(|coords, tile| {
            cells[coords.to_nd_index()] = tile.map(|tile| CellView::new(tile, hint));
        });

        let timer = engine.game_timer();
        Self {
            phase: engine.phase(),
            size,
            cells,
            score: engine.score(),
            score_text: score_text(engine.score_label()),
            combo: engine.combo(),
            time_remaining: timer.remaining(),
            time_total: timer.total_load(),
            urgent: timer.is_urgent(),
            popup: engine.popup(),
            banner: engine.banner(),
            selection: engine.selection(),
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<&CellView> {
        self.cells.get(coords.to_nd_index()).and_then(Option::as_ref)
    }

    pub fn banner_lines(&self) -> &'static [&'static str] {
        self.banner.lines()
    }

    /// Seconds left on the game clock, rounded up.
    pub fn seconds_left(&self) -> u32 {
        self.time_remaining.div_ceil(FPS)
    }

    /// Kind digits row by row, `.` for an empty slot.
    pub fn rows(&self) -> Vec<String> {
        let (width, height) = self.size;
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| match self.cell((x, y)) {
                        Some(cell) => char::from_digit(cell.kind.get().into(), 36).unwrap_or('?'),
                        None => '.',
                    })
                    .collect()
            })
            .collect()
    }
}

pub fn score_text(score: u32) -> String {
    alloc::format!("Score {:08}", score)
}

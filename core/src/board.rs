use core::ops::{Index, IndexMut};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of looking at a cell that may lie outside the board.
///
/// [`Probe::Boundary`] is the guard for adjacency scans: it never matches
/// anything, not even another boundary probe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Probe {
    Boundary,
    Empty,
    Tile(TileKind),
}

impl Probe {
    pub const fn is_boundary(self) -> bool {
        matches!(self, Self::Boundary)
    }

    pub const fn kind(self) -> Option<TileKind> {
        match self {
            Self::Tile(kind) => Some(kind),
            Self::Boundary | Self::Empty => None,
        }
    }

    /// Whether both probes hold a real tile of the same kind.
    pub fn same_kind(self, other: Probe) -> bool {
        match (self, other) {
            (Self::Tile(a), Self::Tile(b)) => a == b,
            _ => false,
        }
    }
}

/// Rectangular grid of slots indexed by `(col, row)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    slots: Array2<Option<Tile>>,
}

impl Board {
    pub fn new(size: Coord2) -> Self {
        Self {
            slots: Array2::from_elem(size.to_nd_index(), None),
        }
    }

    /// Builds a settled board from a kind for every slot.
    pub fn from_kinds(size: Coord2, mut kind_at: impl FnMut(Coord2) -> TileKind) -> Self {
        let mut board = Self::new(size);
        for coords in board.iter_coords() {
            board[coords] = Some(Tile::resting(kind_at(coords), coords));
        }
        board
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.slots.dim();
        (
            dim.0.try_into().unwrap_or(Coord::MAX),
            dim.1.try_into().unwrap_or(Coord::MAX),
        )
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.slots.len().try_into().unwrap_or(CellCount::MAX)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Tile at `coords`, `None` for an empty slot or a cell off the board.
    pub fn get(&self, coords: Coord2) -> Option<&Tile> {
        self.slots.get(coords.to_nd_index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, coords: Coord2) -> Option<&mut Tile> {
        self.slots
            .get_mut(coords.to_nd_index())
            .and_then(Option::as_mut)
    }

    pub fn set(&mut self, coords: Coord2, tile: Option<Tile>) {
        self[coords] = tile;
    }

    pub fn take(&mut self, coords: Coord2) -> Option<Tile> {
        self[coords].take()
    }

    pub fn kind_at(&self, coords: Coord2) -> Option<TileKind> {
        self.get(coords).map(|tile| tile.kind)
    }

    /// Looks at the cell `delta` away from `coords`.
    pub fn probe(&self, coords: Coord2, delta: (isize, isize)) -> Probe {
        match apply_delta(coords, delta, self.size()) {
            None => Probe::Boundary,
            Some(pos) => match self.kind_at(pos) {
                Some(kind) => Probe::Tile(kind),
                None => Probe::Empty,
            },
        }
    }

    /// Exchanges the contents of two slots; moved tiles head for their new slot.
    pub fn swap(&mut self, a: Coord2, b: Coord2) {
        self.slots.swap(a.to_nd_index(), b.to_nd_index());
        for coords in [a, b] {
            if let Some(tile) = self.get_mut(coords) {
                tile.motion.retarget(coords);
            }
        }
    }

    /// Every slot, columns left to right and each column top to bottom.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (x_end, y_end) = self.size();
        (0..x_end).flat_map(move |x| (0..y_end).map(move |y| (x, y)))
    }

    pub fn for_each_slot(&self, mut f: impl FnMut(Coord2, Option<&Tile>)) {
        for coords in self.iter_coords() {
            f(coords, self.get(coords));
        }
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.slots.iter().flatten()
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.slots.iter_mut().flatten()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn empty_count(&self) -> CellCount {
        self.slots
            .iter()
            .filter(|slot| slot.is_none())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn matched_count(&self) -> CellCount {
        self.tiles()
            .filter(|tile| tile.matched)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Whether every tile has reached its target row.
    pub fn all_settled(&self) -> bool {
        self.tiles().all(|tile| tile.motion.is_dropped())
    }

    /// Advances every tile one animation step.
    pub fn animate(&mut self) {
        for tile in self.tiles_mut() {
            tile.motion.step();
        }
    }

    /// Jumps every tile to its target.
    pub fn snap_motion(&mut self) {
        for tile in self.tiles_mut() {
            tile.motion.pos = tile.motion.dst;
        }
    }

    pub fn clear_selection(&mut self) {
        for tile in self.tiles_mut() {
            tile.selected = false;
        }
    }

    /// Marks every tile as leaving the board.
    pub fn exit_all(&mut self) {
        let height = self.height();
        for tile in self.tiles_mut() {
            tile.exit(height);
        }
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.slots.iter_neighbors(coords)
    }
}

impl Index<Coord2> for Board {
    type Output = Option<Tile>;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.slots[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.slots[coords.to_nd_index()]
    }
}

use serde::{Deserialize, Serialize};

use crate::*;

/// Motion units per board cell.
pub const CELL_UNITS: i16 = 16;

/// Units per animation step for swapped, falling and refilled tiles.
pub const FALL_SPEED: i16 = 3;

/// Units per animation step for tiles leaving the board.
pub const EXIT_SPEED: i16 = 6;

/// Tile type, always in `1..=kinds` for real tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileKind(pub u8);

impl TileKind {
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Where a tile is drawn and where it is heading, in motion units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motion {
    pub pos: (i16, i16),
    pub dst: (i16, i16),
    pub speed: i16,
}

impl Motion {
    pub const fn resting_at(coords: Coord2) -> Self {
        let at = slot_origin(coords);
        Self {
            pos: at,
            dst: at,
            speed: FALL_SPEED,
        }
    }

    /// Starts at `from_row` (may be above the board) and falls into `coords`.
    pub const fn falling_into(coords: Coord2, from_row: i16) -> Self {
        let dst = slot_origin(coords);
        Self {
            pos: (dst.0, from_row * CELL_UNITS),
            dst,
            speed: FALL_SPEED,
        }
    }

    pub fn retarget(&mut self, coords: Coord2) {
        self.dst = slot_origin(coords);
        self.speed = FALL_SPEED;
    }

    pub const fn is_dropped(&self) -> bool {
        self.pos.1 == self.dst.1
    }

    pub const fn is_moved(&self) -> bool {
        self.pos.0 == self.dst.0 && self.pos.1 == self.dst.1
    }

    /// Advances one step toward the target, never overshooting.
    pub fn step(&mut self) {
        self.pos.0 = approach(self.pos.0, self.dst.0, self.speed);
        self.pos.1 = approach(self.pos.1, self.dst.1, self.speed);
    }
}

fn approach(from: i16, to: i16, speed: i16) -> i16 {
    if from < to {
        from.saturating_add(speed).min(to)
    } else if from > to {
        from.saturating_sub(speed).max(to)
    } else {
        from
    }
}

pub const fn slot_origin((x, y): Coord2) -> (i16, i16) {
    (x as i16 * CELL_UNITS, y as i16 * CELL_UNITS)
}

/// A tile occupying one board slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub matched: bool,
    pub tenpai: bool,
    pub selected: bool,
    pub exiting: bool,
    pub motion: Motion,
}

impl Tile {
    pub const fn new(kind: TileKind, motion: Motion) -> Self {
        Self {
            kind,
            matched: false,
            tenpai: false,
            selected: false,
            exiting: false,
            motion,
        }
    }

    pub const fn resting(kind: TileKind, coords: Coord2) -> Self {
        Self::new(kind, Motion::resting_at(coords))
    }

    /// Sends the tile off the bottom edge of a board `height` rows tall.
    pub fn exit(&mut self, height: Coord) {
        self.exiting = true;
        self.selected = false;
        self.motion.dst.1 = (height as i16 + 1) * CELL_UNITS;
        self.motion.speed = EXIT_SPEED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stops_at_target() {
        let mut motion = Motion::falling_into((2, 1), -1);
        assert_eq!(motion.pos, (32, -16));

        let mut steps = 0;
        while !motion.is_dropped() {
            motion.step();
            steps += 1;
        }

        assert_eq!(motion.pos, (32, 16));
        assert_eq!(steps, 11);
    }

    #[test]
    fn exit_targets_below_board() {
        let mut tile = Tile::resting(TileKind(1), (0, 8));
        tile.selected = true;

        tile.exit(9);

        assert!(tile.exiting);
        assert!(!tile.selected);
        assert_eq!(tile.motion.dst, (0, 160));
        assert_eq!(tile.motion.speed, EXIT_SPEED);
        assert!(!tile.motion.is_dropped());
    }
}

use crate::*;

/// Near-match shapes looked for around a candidate cell.
///
/// Each shape names two cells that already agree on a kind and the
/// neighbors of the candidate that could be swapped into it to complete
/// a run of three. Offsets are relative to the candidate cell.
struct Shape {
    pair: [(isize, isize); 2],
    feeders: &'static [(isize, isize)],
}

const UP: (isize, isize) = (0, -1);
const DOWN: (isize, isize) = (0, 1);
const LEFT: (isize, isize) = (-1, 0);
const RIGHT: (isize, isize) = (1, 0);

const SHAPES: [Shape; 6] = [
    // two in a row to the right
    Shape {
        pair: [(1, 0), (2, 0)],
        feeders: &[UP, DOWN, LEFT],
    },
    // two in a row to the left
    Shape {
        pair: [(-1, 0), (-2, 0)],
        feeders: &[UP, DOWN, RIGHT],
    },
    // two in a row above
    Shape {
        pair: [(0, -1), (0, -2)],
        feeders: &[LEFT, RIGHT, DOWN],
    },
    // two in a row below
    Shape {
        pair: [(0, 1), (0, 2)],
        feeders: &[LEFT, RIGHT, UP],
    },
    // vertical gap
    Shape {
        pair: [UP, DOWN],
        feeders: &[LEFT, RIGHT],
    },
    // horizontal gap
    Shape {
        pair: [LEFT, RIGHT],
        feeders: &[UP, DOWN],
    },
];

/// Whether a single swap into `coords` would complete a run of three.
pub fn is_tenpai(board: &Board, coords: Coord2) -> bool {
    SHAPES.iter().any(|shape| {
        let [first, second] = shape.pair.map(|delta| board.probe(coords, delta));
        first.same_kind(second)
            && shape
                .feeders
                .iter()
                .any(|&delta| first.same_kind(board.probe(coords, delta)))
    })
}

/// Refreshes the tenpai flag of every tile and returns how many are set.
///
/// A board scoring zero has no productive move left.
pub fn scan_tenpai(board: &mut Board) -> CellCount {
    let mut count = 0;
    for coords in board.iter_coords() {
        let tenpai = is_tenpai(board, coords);
        if let Some(tile) = board.get_mut(coords) {
            tile.tenpai = tenpai;
            if tenpai {
                count += 1;
            }
        }
    }
    log::trace!("tenpai scan found {} cells", count);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::rows;

    #[test]
    fn horizontal_gap_with_vertical_feeder() {
        let mut board = rows(&[
            "143", //
            "424", //
            "565",
        ]);

        assert!(is_tenpai(&board, (1, 1)));
        assert_eq!(scan_tenpai(&mut board), 1);
        assert!(board.get((1, 1)).unwrap().tenpai);
        assert!(!board.get((0, 0)).unwrap().tenpai);
    }

    #[test]
    fn vertical_gap_with_horizontal_feeder() {
        let board = rows(&[
            "626", //
            "215", //
            "424",
        ]);

        assert!(is_tenpai(&board, (1, 1)));
    }

    #[test]
    fn pair_extension_in_every_direction() {
        // pair to the right of (0, 1), fed from below
        let board = rows(&[
            "345", //
            "611", //
            "123",
        ]);
        assert!(is_tenpai(&board, (0, 1)));

        // pair below (1, 0), fed from the left
        let board = rows(&[
            "145", //
            "616", //
            "212",
        ]);
        assert!(is_tenpai(&board, (1, 0)));
    }

    #[test]
    fn pair_at_edge_does_not_wrap() {
        let board = rows(&[
            "311", //
            "452", //
            "364",
        ]);

        assert!(!is_tenpai(&board, (0, 0)));
        assert!(!board.probe((2, 0), (1, 0)).same_kind(board.probe((0, 0), (0, 0))));
    }

    #[test]
    fn dead_board_has_no_tenpai() {
        let mut board = rows(&[
            "1234", //
            "3412", //
            "1234", //
            "3412",
        ]);

        assert_eq!(scan_tenpai(&mut board), 0);
        assert!(board.tiles().all(|tile| !tile.tenpai));
    }

    #[test]
    fn rescan_clears_stale_flags() {
        let mut board = rows(&[
            "143", //
            "424", //
            "565",
        ]);
        scan_tenpai(&mut board);

        board.get_mut((1, 0)).unwrap().kind = TileKind(7);

        assert_eq!(scan_tenpai(&mut board), 0);
        assert!(!board.get((1, 1)).unwrap().tenpai);
    }
}

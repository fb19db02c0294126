use crate::*;

/// Marks every tile that is part of a horizontal or vertical run of three or
/// more tiles of one kind. Nothing is removed, existing marks are kept.
///
/// Returns whether any window of three matched during this scan.
pub fn scan_matches(board: &mut Board) -> bool {
    let (width, height) = board.size();
    let mut matched = false;

    for y in 0..height {
        for x in 0..width.saturating_sub(2) {
            matched |= mark_run(board, [(x, y), (x + 1, y), (x + 2, y)]);
        }
    }

    for x in 0..width {
        for y in 0..height.saturating_sub(2) {
            matched |= mark_run(board, [(x, y), (x, y + 1), (x, y + 2)]);
        }
    }

    if matched {
        log::trace!("match scan marked {} tiles", board.matched_count());
    }
    matched
}

fn mark_run(board: &mut Board, window: [Coord2; 3]) -> bool {
    let [a, b, c] = window.map(|coords| board.kind_at(coords));
    let is_run = match (a, b, c) {
        (Some(a), Some(b), Some(c)) => a == b && b == c,
        _ => false,
    };

    if is_run {
        for coords in window {
            if let Some(tile) = board.get_mut(coords) {
                tile.matched = true;
            }
        }
    }
    is_run
}

/// Whether any run of three exists, without marking anything.
pub fn has_match(board: &Board) -> bool {
    board.iter_coords().any(|coords| {
        let here = board.probe(coords, (0, 0));
        (here.same_kind(board.probe(coords, (1, 0))) && here.same_kind(board.probe(coords, (2, 0))))
            || (here.same_kind(board.probe(coords, (0, 1)))
                && here.same_kind(board.probe(coords, (0, 2))))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{matched_mask, rows};

    #[test]
    fn horizontal_triple_is_marked() {
        let mut board = rows(&[
            "1231", //
            "2111", //
            "3123",
        ]);

        assert!(scan_matches(&mut board));
        assert_eq!(
            matched_mask(&board),
            [
                "....", //
                ".###", //
                "....",
            ]
        );
    }

    #[test]
    fn l_and_t_shapes_are_fully_marked() {
        let mut board = rows(&[
            "2223", //
            "1213", //
            "3231", //
            "1444",
        ]);

        assert!(scan_matches(&mut board));
        assert_eq!(
            matched_mask(&board),
            [
                "###.", //
                ".#..", //
                ".#..", //
                ".###",
            ]
        );
    }

    #[test]
    fn no_run_leaves_board_unmarked() {
        let mut board = rows(&[
            "1212", //
            "2121", //
            "1212",
        ]);

        assert!(!scan_matches(&mut board));
        assert_eq!(board.matched_count(), 0);
        assert!(!has_match(&board));
    }

    #[test]
    fn empty_slots_break_runs() {
        let mut board = rows(&["111"]);
        board.take((1, 0));

        assert!(!scan_matches(&mut board));
    }

    #[test]
    fn marking_is_idempotent() {
        let mut board = rows(&["11112"]);

        assert!(scan_matches(&mut board));
        assert!(scan_matches(&mut board));
        assert_eq!(matched_mask(&board), ["####."]);
    }

    #[test]
    fn marks_agree_with_runs_on_generated_boards() {
        use crate::testutil::CycleSource;

        let mut source = CycleSource::new(&[1, 2, 2, 3, 1, 1, 4, 2, 3, 3, 3, 1, 4]);
        let mut board = Board::new((7, 9));
        refill(&mut board, 4, &mut source);
        board.snap_motion();

        scan_matches(&mut board);

        for coords in board.iter_coords() {
            let tile = board.get(coords).unwrap();
            assert_eq!(tile.matched, in_run(&board, coords), "at {:?}", coords);
        }
    }

    fn in_run(board: &Board, coords: Coord2) -> bool {
        let here = board.probe(coords, (0, 0));
        let line = |dx: isize, dy: isize| {
            (-2..=0).any(|start| {
                (start..start + 3).all(|i| here.same_kind(board.probe(coords, (i * dx, i * dy))))
            })
        };
        line(1, 0) || line(0, 1)
    }
}

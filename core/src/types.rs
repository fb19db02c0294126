use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for tile counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(col, row)`, row 0 is the top of the board.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Manhattan distance between two cells.
pub const fn manhattan(a: Coord2, b: Coord2) -> u16 {
    (a.0.abs_diff(b.0) as u16) + (a.1.abs_diff(b.1) as u16)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let dim = self.dim();
        let size = (
            dim.0.try_into().unwrap_or(Coord::MAX),
            dim.1.try_into().unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, size)
    }
}

/// Orthogonal neighbors only, tiles never swap diagonally.
const DISPLACEMENTS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_two_neighbors() {
        let grid: Array2<u8> = Array2::default([7, 9]);

        let neighbors: Vec<_> = grid.iter_neighbors((0, 0)).collect();

        assert_eq!(neighbors, [(1, 0), (0, 1)]);
    }

    #[test]
    fn apply_delta_rejects_out_of_bounds() {
        assert_eq!(apply_delta((0, 0), (-1, 0), (3, 3)), None);
        assert_eq!(apply_delta((2, 1), (1, 0), (3, 3)), None);
        assert_eq!(apply_delta((1, 1), (0, 2), (3, 3)), None);
        assert_eq!(apply_delta((1, 1), (1, 1), (3, 3)), Some((2, 2)));
    }

    #[test]
    fn manhattan_counts_both_axes() {
        assert_eq!(manhattan((1, 1), (1, 2)), 1);
        assert_eq!(manhattan((1, 1), (2, 2)), 2);
        assert_eq!(manhattan((3, 3), (3, 3)), 0);
    }
}

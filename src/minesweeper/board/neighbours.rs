use itertools::iproduct;

use crate::minesweeper::prelude::*;

impl Board {
    /// Counts the mines around a coordinate; the coordinate itself is never counted.
    pub(super) fn count_adjacent_mines(&self, coord: &Coord) -> u8 {
        coord
            .neighbours(self.rows, self.cols)
            .filter(|neighbour| self.get_unchecked(neighbour).is_mine())
            .count() as u8
    }

    /// Stores the adjacent mine count on every safe cell. Runs once, after the mines are down.
    pub(super) fn compute_adjacency(&mut self) {
        for (row, col) in iproduct!(0..self.rows, 0..self.cols) {
            let coord = Coord::new(row, col);
            let cell = *self.get_unchecked(&coord);
            if cell.is_mine() {
                continue;
            }
            let count = self.count_adjacent_mines(&coord);
            self.set_unchecked(&coord, cell.with_adjacent_mines(count));
        }
    }
}

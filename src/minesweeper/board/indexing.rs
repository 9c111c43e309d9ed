use super::Cell;
use crate::minesweeper::prelude::*;

impl Board {
    /// Determines whether a coordinate lies on this board.
    pub fn in_bounds(&self, coord: &Coord) -> bool {
        coord.in_bounds(self.rows, self.cols)
    }

    /// Gets the cell at a given coordinate.
    pub(super) fn get(&self, coord: &Coord) -> std::result::Result<&Cell, BoardError> {
        if self.in_bounds(coord) {
            Ok(self.get_unchecked(coord))
        } else {
            Err(BoardError::OutOfBounds {
                coord: *coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Offset of a coordinate in the row-major cell list.
    fn offset(&self, coord: &Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    /// Unchecked accessor into the grid; panics off the board, engine use only.
    pub(super) fn get_unchecked(&self, coord: &Coord) -> &Cell {
        &self.cells[self.offset(coord)]
    }

    /// Unchecked overwrite of a cell in the grid; panics off the board, engine use only.
    pub(super) fn set_unchecked(&mut self, coord: &Coord, cell: Cell) -> &mut Self {
        let offset = self.offset(coord);
        self.cells[offset] = cell;
        self
    }
}

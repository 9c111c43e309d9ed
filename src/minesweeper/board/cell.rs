use crate::minesweeper::prelude::*;

/// A cell on a Minesweeper board.
/// bits:
///     [00, 03]: adjacent mine count (0 to 8)
///     [04, 04]: mine
///     [05, 05]: revealed
///     [06, 06]: flagged
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    coord: Coord,
    bits: u8,
}

impl Cell {
    const ADJACENT_OFFSET: usize = 0x00;
    const ADJACENT_EXTENT: usize = 0b1111; // 0 through 8
    const MINE_OFFSET: usize = 0x04;
    const REVEALED_OFFSET: usize = 0x05;
    const FLAGGED_OFFSET: usize = 0x06;
    const FLAG_EXTENT: usize = 0b01;

    /// A fresh cell: no mine, hidden, unflagged, zero count.
    pub(crate) fn new(coord: Coord) -> Cell {
        Cell { coord, bits: 0 }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn row(&self) -> usize {
        self.coord.row
    }

    pub fn col(&self) -> usize {
        self.coord.col
    }

    /// The number of mines among this cell's neighbours. Meaningless for a mine.
    pub fn adjacent_mines(&self) -> u8 {
        self._extract(Cell::ADJACENT_OFFSET, Cell::ADJACENT_EXTENT)
    }

    pub fn is_mine(&self) -> bool {
        self._extract(Cell::MINE_OFFSET, Cell::FLAG_EXTENT) == 1
    }

    pub fn is_revealed(&self) -> bool {
        self._extract(Cell::REVEALED_OFFSET, Cell::FLAG_EXTENT) == 1
    }

    pub fn is_flagged(&self) -> bool {
        self._extract(Cell::FLAGGED_OFFSET, Cell::FLAG_EXTENT) == 1
    }

    /// Produces a new cell with the given adjacent mine count.
    pub(crate) fn with_adjacent_mines(&self, count: u8) -> Cell {
        debug_assert!(count <= 8, "a cell has at most 8 neighbours");
        self._with(Cell::ADJACENT_OFFSET, Cell::ADJACENT_EXTENT, count)
    }

    /// Produces a new cell with a mine.
    pub(crate) fn with_mine(&self) -> Cell {
        self._with(Cell::MINE_OFFSET, Cell::FLAG_EXTENT, 1)
    }

    /// Produces a new cell that has been revealed.
    pub(crate) fn with_revealed(&self) -> Cell {
        self._with(Cell::REVEALED_OFFSET, Cell::FLAG_EXTENT, 1)
    }

    /// Produces a new cell with the given flag state.
    pub(crate) fn with_flagged(&self, flagged: bool) -> Cell {
        self._with(Cell::FLAGGED_OFFSET, Cell::FLAG_EXTENT, flagged as u8)
    }

    /// The glyph of this cell as the player sees it; mines are only shown once revealed.
    pub fn glyph(&self) -> char {
        match (self.is_revealed(), self.is_flagged()) {
            (false, true)  => FLAG_GLYPH,
            (false, false) => HIDDEN_GLYPH,
            (true, _)      => self.face(),
        }
    }

    /// The glyph under the cover, regardless of whether the cell is revealed.
    pub fn face(&self) -> char {
        if self.is_mine() {
            return MINE_GLYPH;
        }
        match self.adjacent_mines() {
            0 => EMPTY_GLYPH,
            n => char::from(b'0' + n),
        }
    }

    /// Produces the value stored in the bits corresponding to a given offset and extent.
    fn _extract(&self, offset: usize, extent: usize) -> u8 {
        (self.bits >> offset) & extent as u8
    }

    /// Produces a new cell with the given value placed into the bits corresponding to the given offset and extent.
    fn _with(&self, offset: usize, extent: usize, value: u8) -> Cell {
        let mask: u8 = (extent << offset) as u8;
        let v = (value << offset) & mask;
        Cell { coord: self.coord, bits: (self.bits & !mask) | v }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;
    use crate::minesweeper::prelude::*;

    #[test]
    fn fresh_cell_is_blank() {
        let cell = Cell::new(Coord::new(2, 5));
        assert_eq!((cell.row(), cell.col()), (2, 5));
        assert!(!cell.is_mine());
        assert!(!cell.is_revealed());
        assert!(!cell.is_flagged());
        assert_eq!(cell.adjacent_mines(), 0);
    }

    #[test]
    fn fields_do_not_clobber_each_other() {
        let cell = Cell::new(Coord::new(0, 0))
            .with_adjacent_mines(8)
            .with_flagged(true)
            .with_revealed();
        assert_eq!(cell.adjacent_mines(), 8);
        assert!(cell.is_flagged());
        assert!(cell.is_revealed());
        assert!(!cell.is_mine());

        let cell = cell.with_flagged(false).with_mine();
        assert!(!cell.is_flagged());
        assert!(cell.is_mine());
        assert_eq!(cell.adjacent_mines(), 8);
    }

    #[test]
    fn glyphs_follow_visibility() {
        let hidden_mine = Cell::new(Coord::new(0, 0)).with_mine();
        assert_eq!(hidden_mine.glyph(), HIDDEN_GLYPH);
        assert_eq!(hidden_mine.face(), MINE_GLYPH);
        assert_eq!(hidden_mine.with_flagged(true).glyph(), FLAG_GLYPH);
        assert_eq!(hidden_mine.with_revealed().glyph(), MINE_GLYPH);

        let three = Cell::new(Coord::new(0, 0)).with_adjacent_mines(3).with_revealed();
        assert_eq!(three.to_string(), "3");
        assert_eq!(Cell::new(Coord::new(0, 0)).with_revealed().glyph(), EMPTY_GLYPH);
    }
}

pub(crate) mod cell;
pub(crate) mod indexing;
pub(crate) mod moves;
pub(crate) mod neighbours;
pub(crate) mod placement;
pub(crate) mod pretty;

use super::prelude::*;

pub use cell::Cell;

/// A rectangular Minesweeper board: the mine layout, adjacency counts, and the state of play.
///
/// The shape, the mines and the counts are fixed once the board is built. Only the revealed and
/// flagged bits of each cell and the board's [`Outcome`] change during play, and a new game always
/// gets a new board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// The cells of the grid in row-major order.
    cells: Vec<Cell>,

    /// The number of rows on the grid.
    rows: usize,

    /// The number of columns on the grid.
    cols: usize,

    /// The number of mines hidden in the grid.
    mines: usize,

    /// Where the game stands; anything but `Playing` is final.
    outcome: Outcome,

    /// The number of cells currently carrying a flag.
    flag_count: usize,

    /// The number of cells revealed so far, including a detonated mine.
    revealed_count: usize,
}

impl Board {
    /// Builds a board for the given configuration, placing mines with the thread-local generator.
    pub fn new(config: BoardConfig) -> Board {
        Board::with_rng(config, &mut rand::rng())
    }

    /// Builds a board for the given configuration, placing mines with the given generator.
    ///
    /// Seeded generators give reproducible layouts.
    pub fn with_rng<R: rand::Rng>(config: BoardConfig, rng: &mut R) -> Board {
        let mut board = Board::blank(config.rows(), config.cols(), config.mines());
        board.place_mines(rng);
        board.compute_adjacency();
        log::debug!("generated a {} board of {} cells", config.notate(), config.cell_count());
        board
    }

    /// Builds a board with mines at exactly the given coordinates, bypassing random placement.
    ///
    /// Unlike [`BoardConfig`], a layout without any mines is accepted. The grid holds at most
    /// [`MAX_CELLS`] cells, and the layout must fit it, name each mine once, and leave a safe cell.
    pub fn from_mines(
        rows: usize,
        cols: usize,
        mines: impl IntoIterator<Item = Coord>,
    ) -> std::result::Result<Board, BoardError> {
        let invalid = |reason: String| BoardError::InvalidLayout { reason };

        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none_or(|cells| cells > MAX_CELLS) {
            return Err(invalid(format!("cannot build a {rows}x{cols} grid")));
        }

        let mut layout = BTreeSet::new();
        for coord in mines {
            if !coord.in_bounds(rows, cols) {
                return Err(BoardError::OutOfBounds { coord, rows, cols });
            }
            if !layout.insert(coord) {
                return Err(invalid(format!("mine at {coord} is listed twice")));
            }
        }
        if layout.len() >= rows * cols {
            return Err(invalid(format!("{} mines leave no safe cell on a {rows}x{cols} grid", layout.len())));
        }

        let mut board = Board::blank(rows, cols, layout.len());
        for coord in &layout {
            let cell = *board.get_unchecked(coord);
            board.set_unchecked(coord, cell.with_mine());
        }
        board.compute_adjacency();
        Ok(board)
    }

    /// A grid of fresh cells; mines still need placing.
    fn blank(rows: usize, cols: usize, mines: usize) -> Board {
        let cells = itertools::iproduct!(0..rows, 0..cols)
            .map(|(row, col)| Cell::new(Coord::new(row, col)))
            .collect();
        Board {
            cells,
            rows,
            cols,
            mines,
            outcome: Outcome::Playing,
            flag_count: 0,
            revealed_count: 0,
        }
    }

    /// Determines the cell at a given coordinate on the board.
    pub fn cell(&self, coord: &Coord) -> std::result::Result<&Cell, BoardError> {
        self.get(coord)
    }

    /// Every cell on the board in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The coordinates of every mine in row-major order.
    pub fn mine_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().filter(|cell| cell.is_mine()).map(Cell::coord)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn mine_count(&self) -> usize {
        self.mines
    }

    pub fn flag_count(&self) -> usize {
        self.flag_count
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    /// Mines left to find, assuming every flag is correct. Never negative.
    pub fn remaining_mines(&self) -> usize {
        self.mines.saturating_sub(self.flag_count)
    }

    /// Where the game stands.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the game has ended by detonation or by a successful [`Board::check_win`].
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_over()
    }
}

use regex::Regex;

use crate::minesweeper::prelude::*;

/// The raw parameters of a game: grid dimensions and the number of hidden mines.
///
/// A `BoardConfig` can only be obtained through [`BoardConfig::new`] (or parsing), so holding one
/// means mine placement is guaranteed to terminate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
    mines: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            mines: DEFAULT_MINES,
        }
    }
}

impl BoardConfig {
    /// Validates and builds a configuration.
    ///
    /// Requires a non-empty grid of at most [`MAX_CELLS`] cells and `0 < mines < rows * cols`;
    /// anything else would leave rejection sampling unable to finish or the grid unallocatable.
    pub fn new(rows: usize, cols: usize, mines: usize) -> std::result::Result<BoardConfig, BoardError> {
        let invalid = |reason| BoardError::InvalidConfiguration { rows, cols, mines, reason };

        if rows == 0 || cols == 0 {
            return Err(invalid("the board must have at least one row and one column"));
        }
        let Some(cell_count) = rows.checked_mul(cols).filter(|&cells| cells <= MAX_CELLS) else {
            return Err(invalid("the board is too large"));
        };
        if mines == 0 {
            return Err(invalid("there must be at least one mine"));
        }
        if mines >= cell_count {
            return Err(invalid("there must be at least one cell without a mine"));
        }

        Ok(BoardConfig { rows, cols, mines })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn mines(&self) -> usize {
        self.mines
    }

    /// The total number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// The canonical notation of the configuration, e.g. `9x9:10`.
    pub fn notate(&self) -> String {
        format!("{}x{}:{}", self.rows, self.cols, self.mines)
    }
}

impl std::str::FromStr for BoardConfig {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = Regex::new(r"^\s*(?<rows>[0-9]+)\s*[xX]\s*(?<cols>[0-9]+)\s*:\s*(?<mines>[0-9]+)\s*$")?;
        let Some(matches) = pattern.captures(s) else {
            return Err(anyhow!("could not parse configuration {s}; expected ROWSxCOLS:MINES"));
        };

        let [rows, cols, mines] = ["rows", "cols", "mines"]
            .map(|name| matches[name].parse::<usize>());
        Ok(BoardConfig::new(
            rows.with_context(|| format!("rows out of range in {s}"))?,
            cols.with_context(|| format!("cols out of range in {s}"))?,
            mines.with_context(|| format!("mines out of range in {s}"))?,
        )?)
    }
}

impl std::fmt::Display for BoardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}

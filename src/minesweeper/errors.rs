use thiserror::Error;

use super::coords::Coord;

/// Failures the board model can report to its caller.
///
/// Normal play never produces one of these: reveals and flags outside the grid are no-ops. They
/// only come from building a board or from querying a cell that does not exist.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid configuration {rows}x{cols} with {mines} mines: {reason}")]
    InvalidConfiguration {
        rows: usize,
        cols: usize,
        mines: usize,
        reason: &'static str,
    },
    #[error("coordinate {coord} is outside the {rows}x{cols} board")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },
    #[error("invalid mine layout: {reason}")]
    InvalidLayout { reason: String },
}

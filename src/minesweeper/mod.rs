/*
 *  The board model for a single-player game of Minesweeper.
 */

pub(crate) mod board;
pub mod config;
pub(crate) mod consts;
pub mod coords;
pub mod errors;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, Cell},
        config::BoardConfig,
        consts::*,
        coords::{self, *},
        errors::BoardError,
    };
}

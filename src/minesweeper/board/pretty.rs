use itertools::Itertools;

use super::Cell;
use crate::minesweeper::prelude::*;

impl Board {
    /// Pretty-prints the board as the player sees it, one line per row.
    pub fn pretty(&self) -> String {
        self.render(Cell::glyph)
    }

    /// Pretty-prints the board with every mine exposed, for showing a finished game.
    ///
    /// The board itself is not changed; mines only appear in the output.
    pub fn pretty_final(&self) -> String {
        self.render(|cell| match cell.is_mine() {
            true => MINE_GLYPH,
            _    => cell.glyph(),
        })
    }

    /// Returns the visible state as a single line: the dimensions and mine count, then each row of
    /// glyphs separated by `/`.
    pub fn notate(&self) -> String {
        let rows = self.cells.chunks(self.cols).map(|row| {
            row.iter().map(Cell::glyph).collect::<String>()
        }).join("/");
        format!("{}x{}:{};{}", self.rows, self.cols, self.mines, rows)
    }

    fn render(&self, glyph: impl Fn(&Cell) -> char) -> String {
        self.cells.chunks(self.cols).map(|row| {
            row.iter().map(&glyph).collect::<String>()
        }).join("\n")
    }
}

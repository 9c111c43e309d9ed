use rand::Rng;

use crate::minesweeper::prelude::*;

impl Board {
    /// Marks `self.mines` distinct cells as mines by rejection sampling uniform coordinates.
    ///
    /// Only terminates while there is at least one safe cell, which [`BoardConfig`] guarantees.
    /// Expected draws stay close to the mine count until the board approaches saturation.
    pub(super) fn place_mines<R: Rng>(&mut self, rng: &mut R) {
        let mut placed = 0;
        let mut draws = 0usize;
        while placed < self.mines {
            let coord = Coord::new(rng.random_range(0..self.rows), rng.random_range(0..self.cols));
            draws += 1;
            let cell = *self.get_unchecked(&coord);
            if !cell.is_mine() {
                self.set_unchecked(&coord, cell.with_mine());
                placed += 1;
            }
        }
        log::trace!("placed {placed} mines in {draws} draws");
    }
}

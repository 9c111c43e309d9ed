use crate::minesweeper::prelude::*;

impl Board {
    /// Reveals the cell at a coordinate, flooding outwards through cells with no adjacent mines.
    ///
    /// Coordinates off the board, revealed cells and flagged cells are left alone, as is every cell
    /// once the game is over. Revealing a mine loses the game and reveals nothing else. Otherwise
    /// each revealed cell with a zero count queues its neighbours through the same checks, so the
    /// flood stops at the numbered border of the region.
    ///
    /// Returns the number of cells that were newly revealed. This never declares a win; callers
    /// follow up with [`Board::check_win`].
    pub fn reveal(&mut self, coord: &Coord) -> usize {
        if self.outcome.is_over() {
            log::trace!("ignoring reveal at {coord}; the game is {}", self.outcome);
            return 0;
        }

        let mut revealed = 0;
        let mut frontier = vec![*coord];
        while let Some(current) = frontier.pop() {
            if !self.in_bounds(&current) {
                continue;
            }
            let cell = *self.get_unchecked(&current);
            if cell.is_revealed() || cell.is_flagged() {
                continue;
            }

            self.set_unchecked(&current, cell.with_revealed());
            revealed += 1;

            if cell.is_mine() {
                log::debug!("detonated a mine at {current}");
                self.outcome = Outcome::Lost;
                break;
            }
            if cell.adjacent_mines() == 0 {
                frontier.extend(current.neighbours(self.rows, self.cols));
            }
        }

        self.revealed_count += revealed;
        log::trace!("revealed {revealed} cells from {coord}");
        revealed
    }

    /// Places or removes the flag on a hidden cell.
    ///
    /// Revealed cells, coordinates off the board and finished games are left alone. Returns whether
    /// the flag changed.
    pub fn toggle_flag(&mut self, coord: &Coord) -> bool {
        if self.outcome.is_over() || !self.in_bounds(coord) {
            return false;
        }
        let cell = *self.get_unchecked(coord);
        if cell.is_revealed() {
            return false;
        }

        let flagged = !cell.is_flagged();
        self.set_unchecked(coord, cell.with_flagged(flagged));
        match flagged {
            true => self.flag_count += 1,
            _    => self.flag_count -= 1,
        };
        true
    }

    /// Determines whether every safe cell has been revealed; if so, the game is won and over.
    ///
    /// Flags play no part in the check. A lost game never turns into a win.
    pub fn check_win(&mut self) -> bool {
        match self.outcome {
            Outcome::Won => return true,
            Outcome::Lost => return false,
            Outcome::Playing => {}
        }

        if self.cells.iter().any(|cell| !cell.is_mine() && !cell.is_revealed()) {
            return false;
        }

        log::debug!("all {} safe cells revealed", self.cells.len() - self.mines);
        self.outcome = Outcome::Won;
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::minesweeper::prelude::*;

    fn corner_board() -> Board {
        Board::from_mines(3, 3, [Coord::new(0, 0)]).unwrap()
    }

    fn revealed(board: &Board) -> Vec<Coord> {
        board.cells().filter(|cell| cell.is_revealed()).map(|cell| cell.coord()).collect()
    }

    #[test]
    fn far_corner_floods_whole_board() {
        let mut board = corner_board();
        assert_eq!(board.reveal(&Coord::new(2, 2)), 8);
        assert_eq!(revealed(&board).len(), 8);
        assert!(!board.cell(&Coord::new(0, 0)).unwrap().is_revealed());
        assert_eq!(board.outcome(), Outcome::Playing);
        assert!(board.check_win());
        assert_eq!(board.outcome(), Outcome::Won);
        assert!(board.is_game_over());
    }

    #[test]
    fn numbered_cell_does_not_cascade() {
        let mut board = corner_board();
        assert_eq!(board.reveal(&Coord::new(1, 1)), 1);
        assert_eq!(revealed(&board), vec![Coord::new(1, 1)]);
        assert!(!board.check_win());
        assert_eq!(board.outcome(), Outcome::Playing);
    }

    #[test]
    fn flood_stops_at_numbered_border() {
        // a wall of mines down column 2 splits the board; the left side never floods right
        let wall = (0..4).map(|row| Coord::new(row, 2));
        let mut board = Board::from_mines(4, 5, wall).unwrap();
        board.reveal(&Coord::new(0, 0));

        for cell in board.cells() {
            let expected = cell.col() < 2;
            assert_eq!(cell.is_revealed(), expected, "wrong visibility at {}", cell.coord());
        }
        // column 1 is the numbered border, column 0 the zero region
        assert!(board.cells().filter(|c| c.col() == 1).all(|c| c.adjacent_mines() > 0));
        assert!(board.cells().filter(|c| c.col() == 0).all(|c| c.adjacent_mines() == 0));
    }

    #[test]
    fn mine_loses_without_cascading() {
        let mut board = corner_board();
        assert_eq!(board.reveal(&Coord::new(0, 0)), 1);
        assert!(board.cell(&Coord::new(0, 0)).unwrap().is_revealed());
        assert_eq!(revealed(&board).len(), 1);
        assert_eq!(board.outcome(), Outcome::Lost);
        assert!(board.is_game_over());
        assert!(!board.check_win());
        assert_eq!(board.outcome(), Outcome::Lost);
    }

    #[test]
    fn flagged_cell_cannot_be_revealed() {
        let mut board = corner_board();
        assert!(board.toggle_flag(&Coord::new(0, 0)));
        let before = board.clone();

        assert_eq!(board.reveal(&Coord::new(0, 0)), 0);
        assert_eq!(board, before);
        assert!(!board.is_game_over());
    }

    #[test]
    fn flags_block_the_flood() {
        let mut board = corner_board();
        board.toggle_flag(&Coord::new(2, 0));
        board.reveal(&Coord::new(2, 2));
        assert!(!board.cell(&Coord::new(2, 0)).unwrap().is_revealed());
        assert!(board.cell(&Coord::new(2, 0)).unwrap().is_flagged());
        assert!(!board.check_win());

        // unflag and finish the job
        board.toggle_flag(&Coord::new(2, 0));
        assert_eq!(board.reveal(&Coord::new(2, 0)), 1);
        assert!(board.check_win());
    }

    #[test]
    fn revealing_twice_is_a_no_op() {
        let mut board = corner_board();
        board.reveal(&Coord::new(0, 1));
        let before = board.clone();
        assert_eq!(board.reveal(&Coord::new(0, 1)), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_bounds_is_a_no_op() {
        let mut board = corner_board();
        let before = board.clone();
        assert_eq!(board.reveal(&Coord::new(3, 0)), 0);
        assert_eq!(board.reveal(&Coord::new(0, usize::MAX)), 0);
        assert!(!board.toggle_flag(&Coord::new(7, 7)));
        assert_eq!(board, before);
    }

    #[test]
    fn flag_toggles_back_and_counts() {
        let mut board = corner_board();
        let target = Coord::new(1, 2);
        assert!(board.toggle_flag(&target));
        assert!(board.cell(&target).unwrap().is_flagged());
        assert_eq!(board.flag_count(), 1);
        assert_eq!(board.remaining_mines(), 0);

        assert!(board.toggle_flag(&target));
        assert!(!board.cell(&target).unwrap().is_flagged());
        assert_eq!(board.flag_count(), 0);
        assert_eq!(board.remaining_mines(), 1);
    }

    #[test]
    fn revealed_cells_cannot_be_flagged() {
        let mut board = corner_board();
        let target = Coord::new(1, 1);
        board.reveal(&target);
        assert!(!board.toggle_flag(&target));
        assert!(!board.cell(&target).unwrap().is_flagged());
        assert_eq!(board.flag_count(), 0);
    }

    #[test]
    fn win_ignores_flags() {
        let mut board = corner_board();
        board.reveal(&Coord::new(2, 2));
        // the mine was never flagged, and a flag on it would not matter either
        assert!(board.check_win());

        let mut board = corner_board();
        board.toggle_flag(&Coord::new(0, 0));
        board.reveal(&Coord::new(2, 2));
        assert!(board.check_win());
    }

    #[test]
    fn finished_games_are_frozen() {
        let mut board = corner_board();
        board.reveal(&Coord::new(0, 0));
        let before = board.clone();

        assert_eq!(board.reveal(&Coord::new(2, 2)), 0);
        assert!(!board.toggle_flag(&Coord::new(1, 1)));
        assert!(!board.check_win());
        assert_eq!(board, before);

        let mut board = corner_board();
        board.reveal(&Coord::new(2, 2));
        assert!(board.check_win());
        assert!(!board.toggle_flag(&Coord::new(0, 0)));
        assert!(board.check_win());
    }

    #[test]
    fn lone_safe_cell() {
        let mut board = Board::from_mines(1, 1, Vec::<Coord>::new()).unwrap();
        assert!(!board.check_win());
        assert!(!board.is_game_over());
        assert_eq!(board.reveal(&Coord::new(0, 0)), 1);
        assert!(board.check_win());
        assert_eq!(board.outcome(), Outcome::Won);
    }

    #[test]
    fn large_open_board_floods_without_recursion() {
        let mut board = Board::from_mines(400, 400, [Coord::new(399, 399)]).unwrap();
        let revealed = board.reveal(&Coord::new(0, 0));
        assert_eq!(revealed, 400 * 400 - 1);
        assert_eq!(board.revealed_count(), revealed);
        assert!(board.check_win());
    }

    #[test]
    fn random_games_end_consistently() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(99);
        let config = BoardConfig::new(8, 8, 10).unwrap();
        for _ in 0..50 {
            let mut board = Board::with_rng(config, &mut rng);
            while !board.is_game_over() {
                let coord = Coord::new(rng.random_range(0..8), rng.random_range(0..8));
                board.reveal(&coord);
                board.check_win();
            }
            let safe_hidden = board.cells().any(|cell| !cell.is_mine() && !cell.is_revealed());
            let mine_revealed = board.cells().any(|cell| cell.is_mine() && cell.is_revealed());
            match board.outcome() {
                Outcome::Won => assert!(!safe_hidden && !mine_revealed),
                Outcome::Lost => assert!(mine_revealed),
                Outcome::Playing => unreachable!(),
            }
            assert_eq!(board.revealed_count(), board.cells().filter(|cell| cell.is_revealed()).count());
        }
    }
}

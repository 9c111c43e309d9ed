pub const DEFAULT_ROWS: usize = 9;
pub const DEFAULT_COLS: usize = 9;
pub const DEFAULT_MINES: usize = 10;

/// The largest grid, in cells, a board may have.
pub const MAX_CELLS: usize = 1 << 20;

pub const HIDDEN_GLYPH: char = '#';
pub const FLAG_GLYPH: char = 'F';
pub const MINE_GLYPH: char = '*';
pub const EMPTY_GLYPH: char = '.';

/// The terminal state of a board, tracked explicitly so that a finished game knows how it ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Outcome {
    /// Whether the game has ended, either way.
    pub fn is_over(&self) -> bool {
        *self != Outcome::Playing
    }

    /// Notates the outcome.
    pub fn notate(&self) -> String {
        match self {
            Outcome::Playing => "playing",
            Outcome::Won     => "won",
            Outcome::Lost    => "lost",
        }.into()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notate())
    }
}

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use crate::prelude::*;

/// Command-line options for the MSP front end.
#[derive(Clone, Debug, Parser)]
#[command(version, about = "Play Minesweeper over a line-based text protocol on stdin/stdout")]
pub struct MSPServerOptions {
    /// Log specification, e.g. `debug` or `lib_msweep=trace`; falls back to RUST_LOG, then `info`.
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Rows on the board used by `newgame` without arguments.
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Columns on the board used by `newgame` without arguments.
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Mines on the board used by `newgame` without arguments.
    #[arg(short, long, default_value_t = DEFAULT_MINES)]
    pub mines: usize,

    /// Seed for mine placement; every game in the session is reproducible when set.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Default for MSPServerOptions {
    fn default() -> Self {
        MSPServerOptions {
            log_level: None,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            mines: DEFAULT_MINES,
            seed: None,
        }
    }
}

impl MSPServerOptions {
    /// The validated default board configuration.
    pub fn board_config(&self) -> Result<BoardConfig> {
        BoardConfig::new(self.rows, self.cols, self.mines)
            .context("invalid default board given on the command line")
    }

    /// The generator that places mines for the whole session.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                log::info!("placing mines with seed {seed}");
                StdRng::seed_from_u64(seed)
            },
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::MSPServerOptions;

    #[test]
    fn parses_short_flags() {
        let options = MSPServerOptions::try_parse_from(["msweep", "-r", "16", "-c", "30", "-m", "99", "-s", "5"]).unwrap();
        assert_eq!((options.rows, options.cols, options.mines, options.seed), (16, 30, 99, Some(5)));
        assert_eq!(options.board_config().unwrap().notate(), "16x30:99");
    }

    #[test]
    fn defaults_to_beginner() {
        let options = MSPServerOptions::try_parse_from(["msweep"]).unwrap();
        assert_eq!(options.board_config().unwrap().notate(), "9x9:10");
        assert!(options.log_level.is_none());
    }

    #[test]
    fn rejects_non_numeric_dimensions() {
        assert!(MSPServerOptions::try_parse_from(["msweep", "--rows", "many"]).is_err());
    }

    #[test]
    fn invalid_board_is_reported_not_hung() {
        let options = MSPServerOptions::try_parse_from(["msweep", "-r", "2", "-c", "2", "-m", "4"]).unwrap();
        assert!(options.board_config().is_err());
    }
}

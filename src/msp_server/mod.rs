mod options;

use std::io::BufRead;

use rand::rngs::StdRng;
pub use options::MSPServerOptions;

use crate::prelude::*;

/// A line-based front end for a game of Minesweeper (MSP).
///
/// The server owns the current game session outright: every `newgame` or `restart` discards the
/// old board and builds a fresh one.
pub struct MSPServer {
    board: Board,
    config: BoardConfig,
    rng: StdRng,
    options: MSPServerOptions,
    quitting: bool,
}

impl MSPServer {
    /// Produces a new MSP server with a game already in progress, using the configured board.
    pub fn new(options: MSPServerOptions) -> Result<MSPServer> {
        let config = options.board_config()?;
        let mut rng = options.rng();
        let board = Board::with_rng(config, &mut rng);
        Ok(MSPServer {
            board,
            config,
            rng,
            options,
            quitting: false,
        })
    }

    /// Serves MSP on stdin/stdout until `quit` or the end of input.
    pub fn run(&mut self) -> Result<()> {
        self.serve(std::io::stdin().lock())
    }

    /// Serves MSP from the given input until `quit` or the end of input, answering on stdout.
    pub fn serve<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        log::info!("serving MSP, starting with a {} board", self.config.notate());

        while !self.quitting
        {
            let mut cmdstr: String = String::new();
            if input.read_line(&mut cmdstr)? == 0 {
                log::debug!("input closed");
                break;
            }

            let args: Vec<&str> = cmdstr.split_whitespace().filter(|s| !s.is_empty()).collect();
            let cmd = *args.first().unwrap_or(&"");

            self.apply(cmd, &args[args.len().min(1)..])?;
        }
        Ok(())
    }

    /// Runs a command and prints its response to the MSP stream.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        match self.execute(cmd, args)
        {
            Ok(response) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                if !response.is_empty() {
                    println!("{}", response);
                }
                self.ok()
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err:#}");
                self.err(&err)
            },
        }
    }

    /// Runs a command, producing the text to send back.
    ///
    /// Unlike a click on a cell, which is simply ignored when it cannot apply, `reveal` and `flag`
    /// answer with an error when the game is already over, when `reveal` targets a flagged cell,
    /// when `flag` targets a revealed cell, or when the coordinate is off the board. The board is
    /// left untouched in every such case. `quit` stops [`MSPServer::serve`] after acknowledging.
    pub fn execute(&mut self, cmd: &str, args: &[&str]) -> Result<String> {
        match cmd
        {
            | "" => Ok(String::new()),
            | "flag" => self.flag(args),
            | "info" => self.info(),
            | "newgame" => self.new_game(args),
            | "quit" => self.quit(),
            | "restart" => self.restart(),
            | "reveal" => self.reveal(args),
            | "show" => self.show(),
            | "state" => self.state(),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        }
    }

    /// Starts a new game, from `ROWSxCOLS:MINES`, `rows cols mines`, or the configured default.
    fn new_game(&mut self, args: &[&str]) -> Result<String> {
        let config = match args {
            [] => self.options.board_config()?,
            [notation] => notation.parse::<BoardConfig>()?,
            [rows, cols, mines] => {
                let [rows, cols, mines] = [rows, cols, mines].map(|arg| {
                    arg.parse::<usize>().with_context(|| format!("expected a number, received {arg}"))
                });
                BoardConfig::new(rows?, cols?, mines?)?
            },
            _ => return Err(anyhow!("usage: newgame [ROWSxCOLS:MINES | rows cols mines]")),
        };
        self.start(config)
    }

    /// Starts a new game with the same configuration as the last one.
    fn restart(&mut self) -> Result<String> {
        self.start(self.config)
    }

    fn start(&mut self, config: BoardConfig) -> Result<String> {
        let board = Board::with_rng(config, &mut self.rng);
        let response = format!("{}\n{}", config.notate(), board.pretty());
        log::info!("new game on a {} board", config.notate());
        self.config = config;
        self.board = board;
        Ok(response)
    }

    /// Reveals a cell, then checks whether that won the game.
    fn reveal(&mut self, args: &[&str]) -> Result<String> {
        let coord = self.parse_coord(args)?;
        let board = self.ensure_live()?;
        if board.cell(&coord)?.is_flagged() {
            return Err(anyhow!("cell {} is flagged; unflag it first", coord.notate()));
        }

        let revealed = board.reveal(&coord);
        if !board.is_game_over() {
            board.check_win();
        }
        log::debug!("revealed {revealed} cells; game is {}", board.outcome());
        self.show()
    }

    /// Toggles the flag on a hidden cell.
    fn flag(&mut self, args: &[&str]) -> Result<String> {
        let coord = self.parse_coord(args)?;
        let board = self.ensure_live()?;
        if board.cell(&coord)?.is_revealed() {
            return Err(anyhow!("cell {} is already revealed", coord.notate()));
        }
        board.toggle_flag(&coord);
        self.show()
    }

    /// Shows the board; once the game is over every mine is exposed and the outcome follows.
    fn show(&self) -> Result<String> {
        let board = &self.board;
        Ok(match board.outcome() {
            Outcome::Playing => board.pretty(),
            outcome => format!("{}\n{}", board.pretty_final(), outcome),
        })
    }

    /// Summarizes the game in progress.
    fn state(&self) -> Result<String> {
        let board = &self.board;
        Ok([
            format!("outcome {}", board.outcome()),
            format!("flags {}", board.flag_count()),
            format!("remaining {}", board.remaining_mines()),
            format!("board {}", board.notate()),
        ].join("\n"))
    }

    /// Stops serving once the current command has been acknowledged.
    fn quit(&mut self) -> Result<String> {
        log::info!("quitting");
        self.quitting = true;
        Ok(String::new())
    }

    // accessors

    fn ensure_live(&mut self) -> Result<&mut Board> {
        let board = &mut self.board;
        if board.is_game_over() {
            Err(anyhow!("the game is {}; use newgame or restart", board.outcome()))
        } else {
            Ok(board)
        }
    }

    // basic printers

    /// Prints the server's ID.
    fn info(&self) -> Result<String>
    {
        Ok(format!(
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ))
    }

    /// Prints an error to the MSP stream.
    fn err(&self, err: &Error) -> Result<()>
    {
        println!("err\n{:#}", err);
        self.ok()
    }

    /// Prints the ok footer to the MSP stream.
    fn ok(&self) -> Result<()>
    {
        println!("ok");
        Ok(())
    }

    // parsers

    fn parse_coord(&self, args: &[&str]) -> Result<Coord> {
        if args.is_empty() {
            return Err(anyhow!("no coordinate provided"));
        }
        args.join(" ").parse::<Coord>()
    }
}

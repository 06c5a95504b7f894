//! Interactive game loop between a human and the search.

use std::io::{self, BufRead, Write};

use chess_search::{Board, Rules, SearchError, Searcher};
use shakmaty::{Color, Move, Outcome};
use thiserror::Error;
use tracing::debug;

/// Errors that end a session early.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The engine could not choose a move.
    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached a terminal position.
    Finished(Outcome),
    /// Input ran out before the game ended.
    InputClosed,
}

/// Returns "White" or "Black".
pub fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

/// Asks which colour the human plays. Any answer starting with `w` means
/// White; anything else means Black. Returns `None` on end of input.
pub fn ask_color<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> io::Result<Option<Color>> {
    write!(output, "Will you be playing as white or black (white/black)? ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let white = line.trim().to_lowercase().starts_with('w');
    Ok(Some(if white { Color::White } else { Color::Black }))
}

/// A game in progress between a human on `input`/`output` and the searcher.
pub struct Session<I, O> {
    board: Board,
    human: Color,
    searcher: Searcher,
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Session<I, O> {
    pub fn new(board: Board, human: Color, searcher: Searcher, input: I, output: O) -> Self {
        Session {
            board,
            human,
            searcher,
            input,
            output,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until the game is over or input runs out.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] on I/O failure or if the search fails.
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        writeln!(self.output, "The board is:")?;
        write!(self.output, "{}", self.board)?;

        while !self.board.is_game_over() {
            if self.board.turn() == self.human {
                match self.read_human_move()? {
                    Some(mv) => self.board.apply(&mv),
                    None => return Ok(SessionEnd::InputClosed),
                }
            } else {
                self.play_engine_move()?;
            }
        }

        let outcome = self.board.outcome().unwrap_or(Outcome::Draw);
        writeln!(self.output, "The game is over!")?;
        writeln!(self.output, "Result: {outcome}")?;
        Ok(SessionEnd::Finished(outcome))
    }

    /// Prompts until a legal move is entered. Returns `None` on end of input.
    fn read_human_move(&mut self) -> io::Result<Option<Move>> {
        loop {
            writeln!(self.output)?;
            write!(self.output, "Enter your move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            match self.board.parse_move(&line) {
                Ok(mv) => return Ok(Some(mv)),
                Err(e) => {
                    debug!(input = line.trim(), error = %e, "rejected move");
                    writeln!(self.output, "That move is not valid")?;
                }
            }
        }
    }

    fn play_engine_move(&mut self) -> Result<(), SessionError> {
        let engine = self.board.turn();
        let best = self
            .searcher
            .select_best_move(&mut self.board, engine == Color::White)?;
        let san = self.board.san(&best.mv);
        self.board.apply(&best.mv);

        writeln!(self.output, "{} made the move: {san}", side_name(engine))?;
        writeln!(self.output, "= Board State =")?;
        write!(self.output, "{}", self.board)?;
        Ok(())
    }
}

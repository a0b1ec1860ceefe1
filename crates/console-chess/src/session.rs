//! Turn handling for a two-player console game.
//!
//! The engine knows nothing about turns or winning. This module adds both:
//! players alternate, each may only move their own pieces, and capturing the
//! opposing king ends the game.

use chess_engine::{parse_coordinate, Board, Color, CoordinateError, MoveError, PieceKind};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Reasons a line of input did not produce a move. The same player retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TurnError {
    #[error("Invalid input, provide two coords")]
    WrongTokenCount,

    #[error("No piece at source")]
    NoPieceAtSource,

    #[error("Not your turn")]
    NotYourTurn,

    #[error("Error: {0}")]
    Coordinate(#[from] CoordinateError),

    #[error("Error: {0}")]
    Move(#[from] MoveError),
}

/// What happened after a line of input was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A move was made and the turn passed to the other player.
    Moved,
    /// The mover captured the opposing king.
    Won(Color),
    /// The player entered nothing; the session ends.
    Quit,
}

/// A game in progress: the board plus whose turn it is.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    to_move: Color,
}

impl Session {
    /// Starts a session from `board` with `first` to move.
    pub fn new(board: Board, first: Color) -> Self {
        Session {
            board,
            to_move: first,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Returns the prompt shown to the side to move.
    pub fn prompt(&self) -> String {
        format!("{} move (e.g. b2 b3 or 2,2 3,2): ", self.to_move)
    }

    /// Handles one line of input such as `e2 e4` or `7,5 5,5`.
    ///
    /// Only a completely empty line quits; a line of blanks is a bad move.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, TurnError> {
        if line.is_empty() {
            return Ok(Outcome::Quit);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [from, to] = tokens[..] else {
            return Err(TurnError::WrongTokenCount);
        };
        let from = parse_coordinate(from)?;
        let to = parse_coordinate(to)?;

        let piece = self.board.piece_at(from).ok_or(TurnError::NoPieceAtSource)?;
        if piece.color != self.to_move {
            return Err(TurnError::NotYourTurn);
        }

        let captured = self.board.make_move(from, to)?;
        if captured.map(|p| p.kind) == Some(PieceKind::King) {
            tracing::info!(winner = %self.to_move, %from, %to, "king captured");
            return Ok(Outcome::Won(self.to_move));
        }

        self.to_move = self.to_move.opposite();
        Ok(Outcome::Moved)
    }
}

/// Runs the prompt loop until a king is captured, the player enters an empty
/// line, or input ends.
///
/// Returns the winner, if any.
pub fn play<R: BufRead, W: Write>(
    session: &mut Session,
    show_board: bool,
    input: R,
    mut output: W,
) -> io::Result<Option<Color>> {
    writeln!(output, "Welcome to Console Chess!")?;
    let mut lines = input.lines();

    loop {
        if show_board {
            writeln!(output, "{}", session.board())?;
        }
        write!(output, "{}", session.prompt())?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Ok(None);
        };

        match session.handle_line(&line) {
            Ok(Outcome::Moved) => {}
            Ok(Outcome::Won(winner)) => {
                writeln!(output, "{}", session.board())?;
                writeln!(output, "{} wins! King captured.", winner)?;
                return Ok(Some(winner));
            }
            Ok(Outcome::Quit) => return Ok(None),
            Err(e) => {
                tracing::debug!(input = %line.trim(), "rejected input: {}", e);
                writeln!(output, "{}", e)?;
            }
        }
    }
}

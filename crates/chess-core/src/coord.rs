//! Board coordinates and their textual forms.

use std::fmt;
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// Errors that can occur when parsing a coordinate from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("invalid coordinate format: '{0}'")]
    InvalidFormat(String),
}

/// A (row, column) pair on the grid.
///
/// Row 0 is rank 8 (Black's back rank) and column 0 is file `a`, so `(0, 0)`
/// is `a8` and `(7, 7)` is `h1`. Components are signed so that off-board
/// coordinates can be produced by offsets and rejected by bounds checks.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    /// Creates a coordinate. No bounds checking is performed.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Coord { row, col }
    }

    /// Returns true if both components lie in `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Returns the coordinate shifted by `(dr, dc)`.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Self {
        Coord {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }

    /// Parses a coordinate from algebraic (`e4`) or 1-based numeric (`5,5`) text.
    ///
    /// Surrounding whitespace is ignored. The file letter is case-insensitive.
    pub fn parse(text: &str) -> Result<Self, CoordinateError> {
        let token = text.trim();
        parse_algebraic(token)
            .or_else(|| parse_numeric(token))
            .ok_or_else(|| CoordinateError::InvalidFormat(token.to_string()))
    }

    /// Returns the algebraic name of this square, or `None` if off the board.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'0' + (BOARD_SIZE - self.row) as u8) as char;
        Some(format!("{}{}", file, rank))
    }
}

/// Parses user-facing text into a zero-indexed coordinate.
///
/// Equivalent to [`Coord::parse`].
pub fn parse_coordinate(text: &str) -> Result<Coord, CoordinateError> {
    Coord::parse(text)
}

fn parse_algebraic(token: &str) -> Option<Coord> {
    let mut chars = token.chars();
    let file = chars.next()?.to_ascii_lowercase();
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !('a'..='h').contains(&file) {
        return None;
    }
    let rank = board_digit(rank)?;
    Some(Coord::new(BOARD_SIZE - rank, (file as u8 - b'a') as i8))
}

fn parse_numeric(token: &str) -> Option<Coord> {
    let (rank, file) = token.split_once(',')?;
    let rank = single_board_digit(rank.trim())?;
    let file = single_board_digit(file.trim())?;
    Some(Coord::new(rank - 1, file - 1))
}

fn single_board_digit(s: &str) -> Option<i8> {
    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    board_digit(c)
}

/// Maps '1'..='8' to 1..=8.
fn board_digit(c: char) -> Option<i8> {
    match c {
        '1'..='8' => Some((c as u8 - b'0') as i8),
        _ => None,
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

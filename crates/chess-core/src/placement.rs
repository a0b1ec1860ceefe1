//! FEN-style piece placement parsing and serialization.
//!
//! Only the first field of a FEN record is understood here. The engine has no
//! notion of side to move, castling, or move clocks, so those fields are not
//! accepted.

use crate::{Piece, BOARD_SIZE};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{character}' in rank {rank}")]
    InvalidCharacter { character: char, rank: usize },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidSquareCount { rank: usize, squares: u32 },
}

/// A full 8x8 arrangement of pieces, row 0 (rank 8) first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub rows: [[Option<Piece>; 8]; 8],
}

impl Placement {
    /// The standard starting arrangement.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// A placement with every square empty.
    pub const fn empty() -> Self {
        Placement {
            rows: [[None; 8]; 8],
        }
    }

    /// Parses a placement string such as
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    pub fn parse(text: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = text.trim().split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(PlacementError::InvalidRankCount(ranks.len()));
        }

        let mut placement = Placement::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = BOARD_SIZE as usize - row;
            let mut squares = 0u32;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    squares += skip;
                } else if let Some(piece) = Piece::from_symbol(c) {
                    if squares < BOARD_SIZE as u32 {
                        placement.rows[row][squares as usize] = Some(piece);
                    }
                    squares += 1;
                } else {
                    return Err(PlacementError::InvalidCharacter { character: c, rank });
                }
            }
            if squares != BOARD_SIZE as u32 {
                return Err(PlacementError::InvalidSquareCount { rank, squares });
            }
        }

        Ok(placement)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::parse(Self::STANDARD).expect("STANDARD is valid")
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            let mut empty_count = 0;
            for square in row {
                match square {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{}", empty_count)?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.symbol())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{}", empty_count)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, PieceKind};

    #[test]
    fn parse_standard() {
        let placement = Placement::default();
        assert_eq!(
            placement.rows[0][0],
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        assert_eq!(
            placement.rows[0][4],
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(
            placement.rows[6][3],
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            placement.rows[7][3],
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert!(placement.rows[3].iter().all(Option::is_none));
    }

    #[test]
    fn roundtrip() {
        for text in [
            Placement::STANDARD,
            "8/8/8/8/8/8/8/8",
            "4k3/4R3/8/8/8/8/8/8",
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R",
        ] {
            assert_eq!(Placement::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn invalid_rank_count() {
        assert_eq!(
            Placement::parse("8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidRankCount(7))
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            Placement::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR"),
            Err(PlacementError::InvalidCharacter {
                character: 'X',
                rank: 2
            })
        );
    }

    #[test]
    fn invalid_square_count() {
        assert_eq!(
            Placement::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(PlacementError::InvalidSquareCount {
                rank: 8,
                squares: 9
            })
        );
        assert!(matches!(
            Placement::parse("7/8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidSquareCount { rank: 8, .. })
        ));
    }

    #[test]
    fn error_display() {
        let err = PlacementError::InvalidRankCount(3);
        assert!(err.to_string().contains('3'));

        let err = PlacementError::InvalidCharacter {
            character: 'x',
            rank: 5,
        };
        assert!(err.to_string().contains('x'));
    }
}

//! Pseudo-legal chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - an 8x8 grid of optional pieces with occupancy queries,
//!   ray-casting, move application, and text rendering
//! - [`movegen`] - per-kind pseudo-legal move generation
//! - [`MoveError`] - why a move was rejected
//!
//! # Rules
//!
//! Moves are checked against each piece's movement pattern and the board's
//! occupancy only. There is no check detection, castling, en passant, or
//! promotion, and the engine has no notion of turns or game end. Callers
//! decide what a captured piece means; [`Board::make_move`] only reports it.
//!
//! # Example
//!
//! ```
//! use chess_engine::{parse_coordinate, Board};
//!
//! let mut board = Board::new();
//! let from = parse_coordinate("e2").unwrap();
//! let to = parse_coordinate("e4").unwrap();
//! assert_eq!(board.make_move(from, to), Ok(None));
//! println!("{}", board);
//! ```

mod board;
pub mod movegen;

pub use board::{Board, MoveError};
pub use chess_core::{
    parse_coordinate, Color, Coord, CoordinateError, Piece, PieceKind, Placement, PlacementError,
};
pub use movegen::valid_moves;

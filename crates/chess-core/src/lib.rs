//! Core types for console chess.
//!
//! This crate provides the value types shared by the rules engine and its
//! front ends:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Coord`] for board coordinates, with [`parse_coordinate`] for user input
//! - [`Placement`] for FEN-style piece placement strings

mod color;
mod coord;
mod piece;
mod placement;

pub use color::Color;
pub use coord::{parse_coordinate, Coord, CoordinateError, BOARD_SIZE};
pub use piece::{Piece, PieceKind};
pub use placement::{Placement, PlacementError};

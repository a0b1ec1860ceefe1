//! Direction and offset tables for every piece kind.

use crate::Board;
use chess_core::{Color, Coord};

/// Orthogonal ray directions, as `(row, col)` steps.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal ray directions.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal then diagonal ray directions.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// L-shaped knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// The eight neighbouring squares, scanned row by row.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Returns rook destinations from `from`.
#[inline]
pub fn rook_moves(from: Coord, color: Color, board: &Board) -> Vec<Coord> {
    board.ray_moves(from, color, &ROOK_DIRECTIONS)
}

/// Returns bishop destinations from `from`.
#[inline]
pub fn bishop_moves(from: Coord, color: Color, board: &Board) -> Vec<Coord> {
    board.ray_moves(from, color, &BISHOP_DIRECTIONS)
}

/// Returns queen destinations from `from`.
#[inline]
pub fn queen_moves(from: Coord, color: Color, board: &Board) -> Vec<Coord> {
    board.ray_moves(from, color, &QUEEN_DIRECTIONS)
}

/// Returns knight destinations from `from`.
#[inline]
pub fn knight_moves(from: Coord, color: Color, board: &Board) -> Vec<Coord> {
    step_moves(from, color, board, &KNIGHT_OFFSETS)
}

/// Returns king destinations from `from`. There is no castling.
#[inline]
pub fn king_moves(from: Coord, color: Color, board: &Board) -> Vec<Coord> {
    step_moves(from, color, board, &KING_OFFSETS)
}

/// Single-step destinations: on the board and not held by a friendly piece.
fn step_moves(from: Coord, color: Color, board: &Board, offsets: &[(i8, i8)]) -> Vec<Coord> {
    offsets
        .iter()
        .map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|to| to.is_on_board())
        .filter(|&to| board.piece_at(to).map_or(true, |p| p.color != color))
        .collect()
}

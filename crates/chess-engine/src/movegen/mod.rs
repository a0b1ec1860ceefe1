//! Pseudo-legal move generation.
//!
//! Every generator reads the board and returns destination squares; none of
//! them mutates anything. Moves that would leave the mover's own king attacked
//! are not filtered out.

mod attacks;

use crate::Board;
use chess_core::{Color, Coord, Piece, PieceKind};

pub use attacks::{
    bishop_moves, king_moves, knight_moves, queen_moves, rook_moves, BISHOP_DIRECTIONS,
    KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

/// Returns the pseudo-legal destinations of `piece` standing on `from`.
///
/// Squares held by a piece of the same color and squares off the board are
/// never included.
pub fn valid_moves(piece: Piece, from: Coord, board: &Board) -> Vec<Coord> {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_moves(from, color, board),
        PieceKind::Knight => knight_moves(from, color, board),
        PieceKind::Bishop => bishop_moves(from, color, board),
        PieceKind::Rook => rook_moves(from, color, board),
        PieceKind::Queen => queen_moves(from, color, board),
        PieceKind::King => king_moves(from, color, board),
    }
}

/// Returns pawn destinations from `from`.
///
/// Order: single push, diagonal captures (toward column `-1` first), then the
/// double push from the home row. There is no en passant and no promotion.
pub fn pawn_moves(from: Coord, color: Color, board: &Board) -> Vec<Coord> {
    let mut moves = Vec::new();
    let dir = color.pawn_direction();

    let one = from.offset(dir, 0);
    if board.is_empty(one.row, one.col) {
        moves.push(one);
    }

    for dc in [-1, 1] {
        let target = from.offset(dir, dc);
        if let Some(occupant) = board.piece_at(target) {
            if occupant.color != color {
                moves.push(target);
            }
        }
    }

    let two = from.offset(dir * 2, 0);
    if from.row == color.home_row()
        && board.is_empty(one.row, one.col)
        && board.is_empty(two.row, two.col)
    {
        moves.push(two);
    }

    moves
}

//! Board representation and move application.

use chess_core::{Color, Coord, Piece, PieceKind, Placement, PlacementError, BOARD_SIZE};
use std::fmt;
use thiserror::Error;

use crate::movegen;

/// Errors returned by [`Board::make_move`].
///
/// A failed move never changes the board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Coord),

    #[error("no piece at source square {0}")]
    NoPieceAtSource(Coord),

    #[error("invalid move for {piece}: {from} to {to}")]
    IllegalMove { piece: Piece, from: Coord, to: Coord },
}

/// An 8x8 grid of optional pieces.
///
/// Row 0 is rank 8 and row 7 is rank 1; column 0 is file `a`. The board owns
/// every piece it holds. A capture drops the captured piece from the grid and
/// hands it back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with the standard starting setup.
    pub fn new() -> Self {
        Self::from(Placement::default())
    }

    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// Creates a board from a placement string, rank 8 first.
    ///
    /// No check is made that each side has exactly one king.
    pub fn from_placement(text: &str) -> Result<Self, PlacementError> {
        Placement::parse(text).map(Self::from)
    }

    /// Returns the placement string for the current grid.
    pub fn to_placement(&self) -> String {
        Placement { rows: self.grid }.to_string()
    }

    /// Returns true iff `0 <= row < 8` and `0 <= col < 8`.
    #[inline]
    pub fn in_bounds(&self, row: i8, col: i8) -> bool {
        Coord::new(row, col).is_on_board()
    }

    /// Returns true iff the square is on the board and holds no piece.
    ///
    /// Off-board squares are never empty.
    #[inline]
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        self.in_bounds(row, col) && self.grid[row as usize][col as usize].is_none()
    }

    /// Returns the piece on the square, or `None` if empty or off the board.
    #[inline]
    pub fn get_piece(&self, row: i8, col: i8) -> Option<Piece> {
        if self.in_bounds(row, col) {
            self.grid[row as usize][col as usize]
        } else {
            None
        }
    }

    /// Returns the piece at `coord`, or `None` if empty or off the board.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.get_piece(coord.row, coord.col)
    }

    /// Puts `piece` on `coord` (or clears it when `None`) without any rules
    /// check, returning the previous occupant.
    ///
    /// Intended for building custom positions.
    pub fn set_piece(
        &mut self,
        coord: Coord,
        piece: Option<Piece>,
    ) -> Result<Option<Piece>, MoveError> {
        if !coord.is_on_board() {
            return Err(MoveError::OutOfBounds(coord));
        }
        let slot = &mut self.grid[coord.row as usize][coord.col as usize];
        Ok(std::mem::replace(slot, piece))
    }

    /// Removes every piece from the board.
    pub fn clear(&mut self) {
        self.grid = [[None; 8]; 8];
    }

    /// Casts rays from `from` along each direction in order.
    ///
    /// Each ray collects empty squares nearest first. It stops at the board
    /// edge or at the first occupied square, which is included only when it
    /// holds a piece of the other color. A `(0, 0)` direction yields nothing.
    pub fn ray_moves(&self, from: Coord, color: Color, directions: &[(i8, i8)]) -> Vec<Coord> {
        let mut moves = Vec::new();

        for &(dr, dc) in directions {
            if (dr, dc) == (0, 0) {
                continue;
            }
            let mut current = from.offset(dr, dc);
            while current.is_on_board() {
                match self.piece_at(current) {
                    None => moves.push(current),
                    Some(piece) => {
                        if piece.color != color {
                            moves.push(current);
                        }
                        break;
                    }
                }
                current = current.offset(dr, dc);
            }
        }

        moves
    }

    /// Returns the pseudo-legal destinations of the piece on `from`.
    ///
    /// Empty or off-board squares have no moves.
    pub fn valid_moves(&self, from: Coord) -> Vec<Coord> {
        match self.piece_at(from) {
            Some(piece) => movegen::valid_moves(piece, from, self),
            None => Vec::new(),
        }
    }

    /// Moves the piece on `from` to `to` if the destination is one of its
    /// pseudo-legal moves.
    ///
    /// Returns the piece previously on `to`, if any. Whether capturing a king
    /// ends the game is left to the caller.
    pub fn make_move(&mut self, from: Coord, to: Coord) -> Result<Option<Piece>, MoveError> {
        if !from.is_on_board() {
            return Err(MoveError::OutOfBounds(from));
        }
        if !to.is_on_board() {
            return Err(MoveError::OutOfBounds(to));
        }

        let piece = self.piece_at(from).ok_or(MoveError::NoPieceAtSource(from))?;

        if !movegen::valid_moves(piece, from, self).contains(&to) {
            tracing::debug!(%piece, %from, %to, "rejected move");
            return Err(MoveError::IllegalMove { piece, from, to });
        }

        let captured = self.grid[to.row as usize][to.col as usize].replace(piece);
        self.grid[from.row as usize][from.col as usize] = None;

        match captured {
            Some(victim) => tracing::debug!(%piece, %from, %to, %victim, "applied capture"),
            None => tracing::debug!(%piece, %from, %to, "applied move"),
        }

        Ok(captured)
    }

    /// Returns the first king of `color` in row-major order.
    pub fn find_king(&self, color: Color) -> Option<Coord> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(coord, _)| coord)
    }

    /// Iterates over the pieces of `color` in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    /// Iterates over every occupied square in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Coord::new(row as i8, col as i8), piece))
            })
        })
    }

    /// Renders the board as text, rank 8 at the top.
    ///
    /// Ten lines: a file header, one line per rank labelled on both sides,
    /// and a file footer. White pieces are uppercase, Black lowercase, and
    /// empty squares are `.`.
    pub fn render(&self) -> String {
        const FILES: &str = "  a b c d e f g h\n";

        let mut out = String::from(FILES);
        for (row, cells) in self.grid.iter().enumerate() {
            let rank = BOARD_SIZE as usize - row;
            out.push_str(&format!("{} ", rank));
            for cell in cells {
                out.push(cell.map_or('.', Piece::symbol));
                out.push(' ');
            }
            out.push_str(&format!("{}\n", rank));
        }
        out.push_str(FILES);
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Placement> for Board {
    fn from(placement: Placement) -> Self {
        Board {
            grid: placement.rows,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(color: Color, kind: PieceKind) -> Option<Piece> {
        Some(Piece::new(color, kind))
    }

    #[test]
    fn initial_setup() {
        let board = Board::new();
        for col in 0..8 {
            assert_eq!(board.get_piece(1, col), piece(Color::Black, PieceKind::Pawn));
            assert_eq!(board.get_piece(6, col), piece(Color::White, PieceKind::Pawn));
            for row in 2..6 {
                assert!(board.is_empty(row, col));
            }
        }

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in back.into_iter().enumerate() {
            assert_eq!(board.get_piece(0, col as i8), piece(Color::Black, kind));
            assert_eq!(board.get_piece(7, col as i8), piece(Color::White, kind));
        }
    }

    #[test]
    fn bounds_and_occupancy_queries() {
        let board = Board::new();
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(7, 7));
        assert!(!board.in_bounds(-1, 0));
        assert!(!board.in_bounds(0, 8));

        assert!(!board.is_empty(0, 0));
        assert!(board.is_empty(4, 4));
        assert!(!board.is_empty(8, 0));
        assert!(!board.is_empty(-1, -1));

        assert_eq!(board.get_piece(8, 8), None);
        assert_eq!(board.get_piece(-3, 2), None);
        assert_eq!(board.get_piece(4, 4), None);
    }

    #[test]
    fn ray_moves_stop_at_blockers() {
        let mut board = Board::empty();
        let from = Coord::new(4, 4);
        board.set_piece(from, piece(Color::White, PieceKind::Rook)).unwrap();
        board.set_piece(Coord::new(2, 4), piece(Color::White, PieceKind::Pawn)).unwrap();
        board.set_piece(Coord::new(4, 6), piece(Color::Black, PieceKind::Pawn)).unwrap();

        let moves = board.ray_moves(from, Color::White, &[(-1, 0), (0, 1)]);
        assert_eq!(
            moves,
            vec![Coord::new(3, 4), Coord::new(4, 5), Coord::new(4, 6)]
        );
    }

    #[test]
    fn ray_moves_from_corner() {
        let board = Board::empty();
        let moves = board.ray_moves(Coord::new(0, 0), Color::Black, &[(1, 1)]);
        let expected: Vec<Coord> = (1..8).map(|i| Coord::new(i, i)).collect();
        assert_eq!(moves, expected);
        assert!(board.ray_moves(Coord::new(0, 0), Color::Black, &[(-1, 0)]).is_empty());
    }

    #[test]
    fn ray_moves_skip_zero_direction() {
        let board = Board::empty();
        let moves = board.ray_moves(Coord::new(4, 4), Color::White, &[(0, 0), (0, 1)]);
        assert_eq!(moves, vec![Coord::new(4, 5), Coord::new(4, 6), Coord::new(4, 7)]);
    }

    #[test]
    fn make_move_relocates_piece() {
        let mut board = Board::new();
        let captured = board.make_move(Coord::new(6, 4), Coord::new(4, 4)).unwrap();
        assert_eq!(captured, None);
        assert_eq!(board.get_piece(4, 4), piece(Color::White, PieceKind::Pawn));
        assert!(board.is_empty(6, 4));
    }

    #[test]
    fn make_move_errors() {
        let mut board = Board::new();
        assert_eq!(
            board.make_move(Coord::new(8, 0), Coord::new(0, 0)),
            Err(MoveError::OutOfBounds(Coord::new(8, 0)))
        );
        assert_eq!(
            board.make_move(Coord::new(6, 0), Coord::new(6, -1)),
            Err(MoveError::OutOfBounds(Coord::new(6, -1)))
        );
        assert_eq!(
            board.make_move(Coord::new(4, 4), Coord::new(3, 4)),
            Err(MoveError::NoPieceAtSource(Coord::new(4, 4)))
        );
        assert_eq!(
            board.make_move(Coord::new(7, 0), Coord::new(5, 0)),
            Err(MoveError::IllegalMove {
                piece: Piece::new(Color::White, PieceKind::Rook),
                from: Coord::new(7, 0),
                to: Coord::new(5, 0),
            })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::OutOfBounds(Coord::new(9, 0));
        assert!(err.to_string().contains("(9, 0)"));

        let err = MoveError::NoPieceAtSource(Coord::new(4, 4));
        assert!(err.to_string().contains("e4"));

        let err = MoveError::IllegalMove {
            piece: Piece::new(Color::White, PieceKind::Rook),
            from: Coord::new(7, 0),
            to: Coord::new(5, 0),
        };
        assert_eq!(err.to_string(), "invalid move for White Rook: a1 to a3");
    }

    #[test]
    fn set_piece_reports_previous_occupant() {
        let mut board = Board::new();
        let previous = board.set_piece(Coord::new(0, 4), None).unwrap();
        assert_eq!(previous, piece(Color::Black, PieceKind::King));
        assert_eq!(board.find_king(Color::Black), None);
        assert_eq!(
            board.set_piece(Coord::new(0, 9), None),
            Err(MoveError::OutOfBounds(Coord::new(0, 9)))
        );
    }

    #[test]
    fn find_king_scans_row_major() {
        let board = Board::new();
        assert_eq!(board.find_king(Color::Black), Some(Coord::new(0, 4)));
        assert_eq!(board.find_king(Color::White), Some(Coord::new(7, 4)));

        let board = Board::from_placement("8/8/8/2K5/8/8/K7/8").unwrap();
        assert_eq!(board.find_king(Color::White), Some(Coord::new(3, 2)));
        assert_eq!(board.find_king(Color::Black), None);
    }

    #[test]
    fn pieces_by_color() {
        let board = Board::new();
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
        let first = board.pieces(Color::White).next().unwrap();
        assert_eq!(first, (Coord::new(6, 0), Piece::new(Color::White, PieceKind::Pawn)));
    }

    #[test]
    fn placement_roundtrip() {
        let board = Board::new();
        assert_eq!(board.to_placement(), Placement::STANDARD);
        assert_eq!(Board::from_placement(Placement::STANDARD).unwrap(), board);
        assert!(Board::from_placement("8/8").is_err());
    }

    #[test]
    fn clear_empties_board() {
        let mut board = Board::new();
        board.clear();
        assert_eq!(board, Board::empty());
        assert_eq!(board.occupied().count(), 0);
    }

    #[test]
    fn render_initial() {
        let expected = "  a b c d e f g h\n\
                        8 r n b q k b n r 8\n\
                        7 p p p p p p p p 7\n\
                        6 . . . . . . . . 6\n\
                        5 . . . . . . . . 5\n\
                        4 . . . . . . . . 4\n\
                        3 . . . . . . . . 3\n\
                        2 P P P P P P P P 2\n\
                        1 R N B Q K B N R 1\n  a b c d e f g h\n";
        assert_eq!(Board::new().render(), expected);
        assert_eq!(Board::new().to_string(), expected);
        assert_eq!(expected.lines().count(), 10);
    }
}

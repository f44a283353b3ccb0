//! Decoder output record.
//!
//! `LoadedPosition` is built fresh by each parse and handed off to whatever
//! initializes a playable board. The codec never mutates a record once it has
//! been returned.

use crate::game_state::chess_types::{Piece, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPosition {
    /// Piece codes indexed by `rank * 8 + file`, `Piece::EMPTY` for empty squares.
    pub squares: [Piece; 64],
    pub white_to_move: bool,
    pub white_castle_kingside: bool,
    pub white_castle_queenside: bool,
    pub black_castle_kingside: bool,
    pub black_castle_queenside: bool,
    /// En-passant file only: `0` for none, `1..=8` for files a..h.
    pub ep_file: u8,
    /// Half-move clock as read from the FEN (`0` when absent or unparseable).
    pub ply_count: u32,
}

impl Default for LoadedPosition {
    fn default() -> Self {
        Self {
            squares: [Piece::EMPTY; 64],
            white_to_move: false,
            white_castle_kingside: false,
            white_castle_queenside: false,
            black_castle_kingside: false,
            black_castle_queenside: false,
            ep_file: 0,
            ply_count: 0,
        }
    }
}

impl LoadedPosition {
    #[inline]
    pub fn piece_on(&self, square: Square) -> Piece {
        self.squares[usize::from(square)]
    }

    /// Number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|piece| !piece.is_empty()).count()
    }
}

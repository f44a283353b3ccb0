//! Read-only board view consumed by the FEN encoder.
//!
//! The encoder only needs piece codes, the turn flag, the packed
//! castling/en-passant word and the two counters. `BoardSnapshot` names that
//! surface; `Board` is a plain owned implementation for the CLI, tests and
//! benchmarks, and doubles as the initializer that turns a `LoadedPosition`
//! back into something encodable.

use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::loaded_position::LoadedPosition;
use crate::game_state::packed_state::*;

pub trait BoardSnapshot {
    fn piece_on(&self, square: Square) -> Piece;
    fn white_to_move(&self) -> bool;
    fn game_state(&self) -> GameStateWord;
    fn fifty_move_counter(&self) -> u32;
    /// Plies played since the start of the game; the FEN full-move number
    /// is derived from it.
    fn ply_count(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub squares: [Piece; 64],
    pub white_to_move: bool,
    pub game_state: GameStateWord,
    pub fifty_move_counter: u32,
    pub ply_count: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [Piece::EMPTY; 64],
            white_to_move: true,
            game_state: GameStateWord::default(),
            fifty_move_counter: 0,
            ply_count: 0,
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Initialize a board from a decoded position.
    ///
    /// The decoder does not keep the full-move number, so the ply count is
    /// set to `0` or `1` depending on the side to move.
    pub fn from_loaded_position(position: &LoadedPosition) -> Self {
        let mut rights: CastlingRights = 0;
        if position.white_castle_kingside {
            rights |= CASTLE_WHITE_KINGSIDE;
        }
        if position.white_castle_queenside {
            rights |= CASTLE_WHITE_QUEENSIDE;
        }
        if position.black_castle_kingside {
            rights |= CASTLE_BLACK_KINGSIDE;
        }
        if position.black_castle_queenside {
            rights |= CASTLE_BLACK_QUEENSIDE;
        }

        Self {
            squares: position.squares,
            white_to_move: position.white_to_move,
            game_state: GameStateWord::default()
                .with_castling(rights)
                .with_ep_file(position.ep_file),
            fifty_move_counter: position.ply_count,
            ply_count: u32::from(!position.white_to_move),
        }
    }

    #[inline]
    pub fn with_ply_count(mut self, ply_count: u32) -> Self {
        self.ply_count = ply_count;
        self
    }
}

impl BoardSnapshot for Board {
    #[inline]
    fn piece_on(&self, square: Square) -> Piece {
        self.squares[usize::from(square)]
    }

    #[inline]
    fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[inline]
    fn game_state(&self) -> GameStateWord {
        self.game_state
    }

    #[inline]
    fn fifty_move_counter(&self) -> u32 {
        self.fifty_move_counter
    }

    #[inline]
    fn ply_count(&self) -> u32 {
        self.ply_count
    }
}

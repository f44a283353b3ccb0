//! Canonical chess-rule constants.
//!
//! Static literals for the standard start position and the fixed state
//! fields every Chess960 start position shares.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Trailing state fields of a freshly generated Chess960 position.
pub const CHESS960_STATE_TRAILER: &str = " w KQkq - 0 1";

/// Pawn and empty ranks between the two Chess960 back ranks, top to bottom.
pub const CHESS960_MIDDLE_RANKS: &str = "pppppppp/8/8/8/8/PPPPPPPP";

//! Crate root module declarations for the Plum FEN toolkit.
//!
//! Exposes the position model (piece codes, packed state word, board
//! snapshot), the FEN decoder/encoder pair, and the Chess960 start-position
//! generator so the CLI, benchmarks, and external tooling share stable paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod loaded_position;
    pub mod packed_state;
}

pub mod utils {
    pub mod algebraic;
    pub mod chess960;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}

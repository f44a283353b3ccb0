//! FEN-to-LoadedPosition parser.
//!
//! Only the board and side-to-move fields are mandatory. Castling defaults to
//! `KQkq`, the en-passant field contributes its file letter only, and the
//! half-move clock falls back to `0` when it does not parse. The full-move
//! number is accepted but not stored.

use crate::errors::FenError;
use crate::game_state::chess_types::*;
use crate::game_state::loaded_position::LoadedPosition;
use crate::utils::algebraic::file_index_from_name;

const DEFAULT_CASTLING: &str = "KQkq";
const MAX_FIELDS: usize = 6;

pub fn parse_fen(fen: &str) -> Result<LoadedPosition, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() > MAX_FIELDS {
        return Err(FenError::TooManyFields(fields.len()));
    }

    let board_part = *fields.first().ok_or(FenError::MissingField("board"))?;
    let side_part = *fields.get(1).ok_or(FenError::MissingField("side-to-move"))?;
    let castling_part = fields.get(2).copied().unwrap_or(DEFAULT_CASTLING);

    let mut position = LoadedPosition::default();

    parse_board(board_part, &mut position.squares)?;
    position.white_to_move = side_part == "w";

    position.white_castle_kingside = castling_part.contains('K');
    position.white_castle_queenside = castling_part.contains('Q');
    position.black_castle_kingside = castling_part.contains('k');
    position.black_castle_queenside = castling_part.contains('q');

    if let Some(en_passant_part) = fields.get(3) {
        position.ep_file = parse_en_passant_file(en_passant_part);
    }

    if let Some(halfmove_part) = fields.get(4) {
        position.ply_count = halfmove_part.parse::<u32>().unwrap_or(0);
    }

    Ok(position)
}

fn parse_board(board_part: &str, squares: &mut [Piece; 64]) -> Result<(), FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::MalformedBoard(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::MalformedBoard(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as usize;
                if file > 8 {
                    return Err(rank_overflow(board_rank));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch).ok_or(FenError::InvalidPieceSymbol(ch))?;

            if file >= 8 {
                return Err(rank_overflow(board_rank));
            }

            squares[board_rank * 8 + file] = Piece::new(color, kind);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::MalformedBoard(format!(
                "rank {} covers {file} files instead of 8",
                board_rank + 1
            )));
        }
    }

    Ok(())
}

fn rank_overflow(board_rank: usize) -> FenError {
    FenError::MalformedBoard(format!("rank {} has more than 8 files", board_rank + 1))
}

/// Uppercase letters are white, lowercase letters are black.
fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    Some((color, PieceKind::from_symbol(ch)?))
}

/// Only the file letter matters; the rank is implied by the side to move.
fn parse_en_passant_file(en_passant_part: &str) -> u8 {
    en_passant_part
        .chars()
        .next()
        .and_then(file_index_from_name)
        .map_or(0, |file_index| file_index + 1)
}

//! BoardSnapshot-to-FEN generator.
//!
//! Always emits all six fields. The en-passant rank is derived from the side
//! to move and the full-move number from the ply counter.

use crate::game_state::board::BoardSnapshot;
use crate::game_state::packed_state::GameStateWord;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen<B: BoardSnapshot + ?Sized>(board: &B) -> String {
    let board_field = generate_board_field(board);
    let side_to_move = if board.white_to_move() { "w" } else { "b" };
    let state = board.game_state();
    let castling = generate_castling_field(state);
    let en_passant = generate_en_passant_field(state, board.white_to_move());

    format!(
        "{} {} {} {} {} {}",
        board_field,
        side_to_move,
        castling,
        en_passant,
        board.fifty_move_counter(),
        board.ply_count() / 2 + 1
    )
}

fn generate_board_field<B: BoardSnapshot + ?Sized>(board: &B) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.piece_on(rank * 8 + file).to_fen_char() {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(state: GameStateWord) -> String {
    let mut out = String::new();

    if state.white_kingside() {
        out.push('K');
    }
    if state.white_queenside() {
        out.push('Q');
    }
    if state.black_kingside() {
        out.push('k');
    }
    if state.black_queenside() {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

/// White to move captures onto rank 6, black onto rank 3.
fn generate_en_passant_field(state: GameStateWord, white_to_move: bool) -> String {
    let ep_file = state.ep_file();
    if ep_file == 0 || ep_file > 8 {
        return "-".to_owned();
    }

    let rank_index = if white_to_move { 5 } else { 2 };
    square_to_algebraic(rank_index * 8 + (ep_file - 1)).unwrap_or_else(|_| "-".to_owned())
}

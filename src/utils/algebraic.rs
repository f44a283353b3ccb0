//! File-name lookup and square/coordinate conversions.
//!
//! The FEN decoder and encoder share one ordered file table (`a..h`) and its
//! inverse so en-passant files round-trip through the same mapping.

use crate::game_state::chess_types::Square;

/// File names in board order, index `0 == a`.
pub const FILE_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Inverse of [`FILE_NAMES`]: zero-based index of a file letter.
#[inline]
pub fn file_index_from_name(name: char) -> Option<u8> {
    FILE_NAMES
        .iter()
        .position(|&file| file == name)
        .and_then(|index| u8::try_from(index).ok())
}

/// File letter for a zero-based file index.
#[inline]
pub fn file_name(file_index: u8) -> Option<char> {
    FILE_NAMES.get(usize::from(file_index)).copied()
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square > 63 {
        return Err(format!("Square index out of bounds: {square}"));
    }

    let file_char = FILE_NAMES[usize::from(square % 8)];
    let rank_char = char::from(b'1' + square / 8);

    Ok(format!("{file_char}{rank_char}"))
}

//! Chess960 (Fischer Random) start-position generator.
//!
//! Bishops go first, one on an even index and one on an odd index. The six
//! remaining indices are Fisher-Yates shuffled and receive `Q, N, N, R, K, R`
//! in shuffled order. If the king does not land strictly between the rooks,
//! only the trailing rook/king/rook window is reshuffled and reassigned; the
//! queen and knights keep their squares. That retry is capped at
//! [`MAX_KING_PLACEMENT_ATTEMPTS`].
//!
//! The emitted FEN is assembled directly from text, no board is involved.

use std::fmt;

use rand::Rng;

use crate::errors::Chess960Error;
use crate::game_state::chess_rules::{CHESS960_MIDDLE_RANKS, CHESS960_STATE_TRAILER};

pub const MAX_KING_PLACEMENT_ATTEMPTS: usize = 64;

const LIGHT_SQUARE_SLOTS: [usize; 4] = [0, 2, 4, 6];
const DARK_SQUARE_SLOTS: [usize; 4] = [1, 3, 5, 7];
const REMAINING_PIECES: [char; 6] = ['Q', 'N', 'N', 'R', 'K', 'R'];
const ROOK_KING_WINDOW: usize = 3;

/// Eight uppercase piece letters, index `0` is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackRank([char; 8]);

impl BackRank {
    #[inline]
    pub fn pieces(&self) -> &[char; 8] {
        &self.0
    }

    /// White's rank as FEN text (uppercase).
    pub fn white_rank(&self) -> String {
        self.0.iter().collect()
    }

    /// Black's rank as FEN text (lowercase).
    pub fn black_rank(&self) -> String {
        self.0.iter().map(char::to_ascii_lowercase).collect()
    }

    /// Full start-position FEN with this arrangement on both back ranks.
    pub fn to_fen(&self) -> String {
        format!(
            "{}/{}/{}{}",
            self.black_rank(),
            CHESS960_MIDDLE_RANKS,
            self.white_rank(),
            CHESS960_STATE_TRAILER
        )
    }

    pub fn count(&self, piece: char) -> usize {
        self.0.iter().filter(|&&slot| slot == piece).count()
    }

    fn first_index_of(&self, piece: char) -> Option<usize> {
        self.0.iter().position(|&slot| slot == piece)
    }

    fn last_index_of(&self, piece: char) -> Option<usize> {
        self.0.iter().rposition(|&slot| slot == piece)
    }

    pub fn king_between_rooks(&self) -> bool {
        match (
            self.first_index_of('R'),
            self.first_index_of('K'),
            self.last_index_of('R'),
        ) {
            (Some(left_rook), Some(king), Some(right_rook)) => left_rook < king && king < right_rook,
            _ => false,
        }
    }

    pub fn bishops_on_opposite_colors(&self) -> bool {
        let bishops: Vec<usize> = (0..8).filter(|&index| self.0[index] == 'B').collect();
        matches!(bishops.as_slice(), [first, second] if first % 2 != second % 2)
    }

    /// Multiset, bishop parity and king-between-rooks all hold.
    pub fn is_valid_chess960(&self) -> bool {
        self.count('K') == 1
            && self.count('Q') == 1
            && self.count('R') == 2
            && self.count('N') == 2
            && self.count('B') == 2
            && self.bishops_on_opposite_colors()
            && self.king_between_rooks()
    }
}

impl fmt::Display for BackRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.white_rank())
    }
}

/// Generate a random Chess960 FEN using the thread-local generator.
pub fn generate_chess960_fen() -> Result<String, Chess960Error> {
    let mut rng = rand::rng();
    generate_chess960_fen_with_rng(&mut rng)
}

pub fn generate_chess960_fen_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Result<String, Chess960Error> {
    Ok(shuffle_back_rank(rng)?.to_fen())
}

pub fn shuffle_back_rank<R: Rng + ?Sized>(rng: &mut R) -> Result<BackRank, Chess960Error> {
    let mut slots = [' '; 8];

    let light_bishop = LIGHT_SQUARE_SLOTS[rng.random_range(0..LIGHT_SQUARE_SLOTS.len())];
    let dark_bishop = DARK_SQUARE_SLOTS[rng.random_range(0..DARK_SQUARE_SLOTS.len())];
    slots[light_bishop] = 'B';
    slots[dark_bishop] = 'B';

    let mut available: Vec<usize> = (0..8)
        .filter(|&index| index != light_bishop && index != dark_bishop)
        .collect();
    shuffle_in_place(&mut available, rng);

    for (&index, &piece) in available.iter().zip(REMAINING_PIECES.iter()) {
        slots[index] = piece;
    }

    let mut back_rank = BackRank(slots);
    let window_start = available.len() - ROOK_KING_WINDOW;

    for _ in 0..MAX_KING_PLACEMENT_ATTEMPTS {
        if back_rank.king_between_rooks() {
            return Ok(back_rank);
        }

        let window = &mut available[window_start..];
        shuffle_in_place(window, rng);
        for (&index, &piece) in window.iter().zip(REMAINING_PIECES[window_start..].iter()) {
            back_rank.0[index] = piece;
        }
    }

    if back_rank.king_between_rooks() {
        return Ok(back_rank);
    }

    Err(Chess960Error::KingPlacementExhausted {
        attempts: MAX_KING_PLACEMENT_ATTEMPTS,
    })
}

/// Fisher-Yates, walking from the last element down to index 1.
fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, RngCore, SeedableRng};

    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn generated_fen_has_fixed_structure() {
        let mut rng = StdRng::seed_from_u64(960);

        for _ in 0..200 {
            let fen = generate_chess960_fen_with_rng(&mut rng).expect("generation should succeed");
            let ranks: Vec<&str> = fen.split('/').collect();

            assert_eq!(ranks.len(), 8, "FEN must have 8 ranks: {fen}");
            assert_eq!(ranks[1], "pppppppp");
            assert_eq!(ranks[6], "PPPPPPPP");
            for middle in &ranks[2..6] {
                assert_eq!(*middle, "8");
            }

            let trailer_start = fen.find(' ').expect("FEN has state fields");
            assert_eq!(&fen[trailer_start..], " w KQkq - 0 1");
        }
    }

    #[test]
    fn both_back_ranks_hold_the_full_piece_set() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let fen = generate_chess960_fen_with_rng(&mut rng).expect("generation should succeed");
            let board = fen.split(' ').next().expect("board field");
            let ranks: Vec<&str> = board.split('/').collect();
            let black = ranks[0];
            let white = ranks[7];

            for (piece, expected) in [('k', 1), ('q', 1), ('b', 2), ('n', 2), ('r', 2)] {
                assert_eq!(black.chars().filter(|&c| c == piece).count(), expected, "{fen}");
                let upper = piece.to_ascii_uppercase();
                assert_eq!(white.chars().filter(|&c| c == upper).count(), expected, "{fen}");
            }
            assert_eq!(black.to_ascii_uppercase(), white, "ranks must mirror: {fen}");
        }
    }

    #[test]
    fn back_rank_satisfies_bishop_and_king_constraints() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let back_rank = shuffle_back_rank(&mut rng).expect("shuffle should succeed");
            let pieces = back_rank.pieces();

            let bishops: Vec<usize> = (0..8).filter(|&i| pieces[i] == 'B').collect();
            assert_eq!(bishops.len(), 2);
            assert_ne!(bishops[0] % 2, bishops[1] % 2, "bishops must be on opposite colors");

            let king = pieces.iter().position(|&c| c == 'K').expect("king placed");
            let left_rook = pieces.iter().position(|&c| c == 'R').expect("rook placed");
            let right_rook = pieces.iter().rposition(|&c| c == 'R').expect("rook placed");
            assert!(left_rook < king, "king must be right of the first rook: {back_rank}");
            assert!(king < right_rook, "king must be left of the second rook: {back_rank}");

            assert!(back_rank.is_valid_chess960());
        }
    }

    #[test]
    fn repeated_generation_varies() {
        let distinct: HashSet<String> = (0..100)
            .map(|_| generate_chess960_fen().expect("generation should succeed"))
            .collect();
        assert!(distinct.len() > 1, "100 generated positions were all identical");
    }

    #[test]
    fn generated_fen_parses_with_all_rights() {
        let mut rng = StdRng::seed_from_u64(3);
        let fen = generate_chess960_fen_with_rng(&mut rng).expect("generation should succeed");
        let position = parse_fen(&fen).expect("generated FEN should parse");

        assert!(position.white_to_move);
        assert!(position.white_castle_kingside && position.white_castle_queenside);
        assert!(position.black_castle_kingside && position.black_castle_queenside);
        assert_eq!(position.ep_file, 0);
        assert_eq!(position.ply_count, 0);
        assert_eq!(position.piece_count(), 32);
    }

    #[test]
    fn standard_arrangement_is_a_valid_chess960_rank() {
        let standard = BackRank(['R', 'N', 'B', 'Q', 'K', 'B', 'N', 'R']);
        assert!(standard.is_valid_chess960());
        assert_eq!(standard.to_fen(), STARTING_POSITION_FEN);

        let king_outside = BackRank(['K', 'R', 'B', 'Q', 'R', 'B', 'N', 'N']);
        assert!(!king_outside.king_between_rooks());
        assert!(!king_outside.is_valid_chess960());

        let same_color_bishops = BackRank(['B', 'R', 'B', 'Q', 'K', 'N', 'N', 'R']);
        assert!(!same_color_bishops.bishops_on_opposite_colors());
    }

    /// Returns zero for the first `zero_draws` draws and `u64::MAX` afterwards.
    struct ScriptedRng {
        zero_draws: usize,
        draws: usize,
    }

    impl ScriptedRng {
        fn new(zero_draws: usize) -> Self {
            Self { zero_draws, draws: 0 }
        }

        fn next(&mut self) -> u64 {
            let value = if self.draws < self.zero_draws { 0 } else { u64::MAX };
            self.draws += 1;
            value
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.next() as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.next()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let byte = self.next() as u8;
            dest.fill(byte);
        }
    }

    // Two bishop picks plus five Fisher-Yates swaps over the six free squares.
    const INITIAL_DRAWS: usize = 7;
    // Each window reshuffle swaps twice.
    const DRAWS_PER_RETRY: usize = 2;

    #[test]
    fn constant_source_settles_after_window_retries() {
        let mut rng = ScriptedRng::new(usize::MAX);
        let back_rank = shuffle_back_rank(&mut rng).expect("a later window order is valid");

        assert!(back_rank.is_valid_chess960(), "{back_rank}");
        let retries = (rng.draws - INITIAL_DRAWS) / DRAWS_PER_RETRY;
        assert_eq!(retries, 2, "zero draws reject the first two rook/king orders");
    }

    #[test]
    fn stuck_window_hits_the_retry_cap() {
        // Zeros put the king outside the rooks; max draws leave every window swap in place.
        let mut rng = ScriptedRng::new(INITIAL_DRAWS);
        let result = shuffle_back_rank(&mut rng);

        assert_eq!(
            result,
            Err(Chess960Error::KingPlacementExhausted {
                attempts: MAX_KING_PLACEMENT_ATTEMPTS
            })
        );
        assert_eq!(
            rng.draws,
            INITIAL_DRAWS + MAX_KING_PLACEMENT_ATTEMPTS * DRAWS_PER_RETRY
        );
    }
}

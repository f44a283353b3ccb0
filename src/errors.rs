//! Errors surfaced by the FEN codec and the Chess960 generator.
//!
//! Only fatal conditions live here. Recoverable oddities in the input (an
//! unparseable half-move clock, an unknown en-passant file letter) fall back
//! to defaults inside the parser and never reach the caller.

use thiserror::Error;

/// Failure modes of [`crate::utils::fen_parser::parse_fen`].
///
/// Any of these aborts the parse; no partially populated position is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    /// One of the two mandatory fields (board, side to move) is absent.
    #[error("missing {0} field in FEN")]
    MissingField(&'static str),

    /// More than six whitespace-separated fields were supplied.
    #[error("FEN has {0} fields, at most 6 are allowed")]
    TooManyFields(usize),

    /// A board letter that is not one of `k,p,n,b,r,q` in either case.
    #[error("invalid piece symbol {0:?} in board field")]
    InvalidPieceSymbol(char),

    /// Wrong rank count, a rank not summing to eight files, or a bad digit.
    #[error("malformed board field: {0}")]
    MalformedBoard(String),
}

/// Failure modes of the Chess960 back-rank generator.
///
/// These are internal invariant violations; the generator takes no user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Chess960Error {
    /// The king-between-rooks rejection loop hit its iteration cap.
    #[error("could not place king between rooks after {attempts} attempts")]
    KingPlacementExhausted { attempts: usize },
}

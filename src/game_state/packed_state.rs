//! Packed castling / en-passant state word.
//!
//! Board implementations keep castling rights and the en-passant file in one
//! small integer. The bit positions are fixed:
//!
//! - bit 0: white kingside, bit 1: white queenside
//! - bit 2: black kingside, bit 3: black queenside
//! - bits 4..=7: en-passant file, `0` for none, `1..=8` for files a..h
//!
//! Callers go through the named accessors instead of shifting bits themselves.

/// Compact castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

const CASTLING_MASK: u16 = 0b1111;
const EP_FILE_SHIFT: u16 = 4;
const EP_FILE_MASK: u16 = 0b1111;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameStateWord(u16);

impl GameStateWord {
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn castling_rights(self) -> CastlingRights {
        (self.0 & CASTLING_MASK) as CastlingRights
    }

    #[inline]
    pub const fn white_kingside(self) -> bool {
        self.castling_rights() & CASTLE_WHITE_KINGSIDE != 0
    }

    #[inline]
    pub const fn white_queenside(self) -> bool {
        self.castling_rights() & CASTLE_WHITE_QUEENSIDE != 0
    }

    #[inline]
    pub const fn black_kingside(self) -> bool {
        self.castling_rights() & CASTLE_BLACK_KINGSIDE != 0
    }

    #[inline]
    pub const fn black_queenside(self) -> bool {
        self.castling_rights() & CASTLE_BLACK_QUEENSIDE != 0
    }

    /// En-passant file, `0` when there is no target, otherwise `1..=8`.
    ///
    /// Four bits are reserved, so values above 8 can be stored; consumers
    /// treat them as "no target".
    #[inline]
    pub const fn ep_file(self) -> u8 {
        ((self.0 >> EP_FILE_SHIFT) & EP_FILE_MASK) as u8
    }

    #[inline]
    pub const fn with_castling(self, rights: CastlingRights) -> Self {
        Self((self.0 & !CASTLING_MASK) | (rights as u16 & CASTLING_MASK))
    }

    #[inline]
    pub const fn with_ep_file(self, ep_file: u8) -> Self {
        let cleared = self.0 & !(EP_FILE_MASK << EP_FILE_SHIFT);
        Self(cleared | ((ep_file as u16 & EP_FILE_MASK) << EP_FILE_SHIFT))
    }
}

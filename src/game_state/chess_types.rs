//! Shared piece and square vocabulary for the FEN codec.
//!
//! A piece code packs the piece type and the color into independent bit
//! fields so either can be queried without knowing the other.

/// Board square index (`0..=63`, `rank * 8 + file`, `0 == a1`).
pub type Square = u8;

/// Side to move / piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Bit pattern of this color inside a [`Piece`] code.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Color::White => Piece::WHITE,
            Color::Black => Piece::BLACK,
        }
    }
}

/// Piece kind (color is carried separately in the piece code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    King,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Bit pattern of this kind inside a [`Piece`] code (never zero).
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            PieceKind::King => 1,
            PieceKind::Pawn => 2,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 5,
            PieceKind::Rook => 6,
            PieceKind::Queen => 7,
        }
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::King),
            2 => Some(PieceKind::Pawn),
            3 => Some(PieceKind::Knight),
            5 => Some(PieceKind::Bishop),
            6 => Some(PieceKind::Rook),
            7 => Some(PieceKind::Queen),
            _ => None,
        }
    }

    /// Case-insensitive lookup in the FEN piece-symbol table.
    #[inline]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            _ => None,
        }
    }

    /// Uppercase (white) FEN letter for this kind.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
        }
    }
}

/// Composite piece code: type in bits 0..=2, color in bits 3..=4, `0` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    pub const EMPTY: Piece = Piece(0);
    pub const WHITE: u8 = 0b01000;
    pub const BLACK: u8 = 0b10000;

    const KIND_MASK: u8 = 0b00111;
    const COLOR_MASK: u8 = Piece::WHITE | Piece::BLACK;

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece(kind.code() | color.code())
    }

    /// Raw code as stored in a position's square array.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_code(self.0 & Piece::KIND_MASK)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self.0 & Piece::COLOR_MASK {
            Piece::WHITE => Some(Color::White),
            Piece::BLACK => Some(Color::Black),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_color(self, color: Color) -> bool {
        self.0 & Piece::COLOR_MASK == color.code()
    }

    /// Printable FEN letter: uppercase for white, lowercase for black.
    pub fn to_fen_char(self) -> Option<char> {
        let kind = self.kind()?;
        match self.color()? {
            Color::White => Some(kind.symbol()),
            Color::Black => Some(kind.symbol().to_ascii_lowercase()),
        }
    }
}

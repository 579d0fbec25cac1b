//! Board vocabulary shared by the position model and its FEN codec.
//!
//! Everything here is a closed, process-wide constant domain: colors, piece
//! kinds, colored pieces, squares, files, ranks, board directions and the
//! castling-rights flag set. Conversions from raw integers or text are
//! checked and return `Option`; nothing in this module can fail otherwise.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use std::str::FromStr;

use crate::errors::SquareParseError;

pub use crate::position::position::Position;

/// Zobrist-style hash key width used by downstream consumers.
pub type Key = u64;

/// One bit per square, `a1` in bit 0.
pub type Bitboard = u64;

/// Upper bound on legal moves in any chess position.
pub const MAX_MOVES: usize = 256;

/// Deepest search ply downstream searchers are expected to reach.
pub const MAX_PLY: usize = 246;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const NB: usize = 2;
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// FEN side-to-move letter.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Piece kind without color. Codes start at 1; 0 is "no piece type".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const NB: usize = 6;
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Dense index in `0..6`, for per-kind tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Numeric code in `1..=6`, matching the low bits of [`Piece`].
    #[inline]
    pub const fn code(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Lowercase FEN letter.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Accepts either case.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Colored piece, or the empty marker.
///
/// White pieces use codes `1..=6`, black pieces the same codes offset by 8,
/// and `NoPiece` is zero. Bit 3 therefore carries the color and the low three
/// bits the kind.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    NoPiece = 0,
    WhitePawn = 1,
    WhiteKnight = 2,
    WhiteBishop = 3,
    WhiteRook = 4,
    WhiteQueen = 5,
    WhiteKing = 6,
    BlackPawn = 9,
    BlackKnight = 10,
    BlackBishop = 11,
    BlackRook = 12,
    BlackQueen = 13,
    BlackKing = 14,
}

impl Piece {
    pub const NB: usize = 16;
    const BLACK_OFFSET: u8 = 8;
    const KIND_MASK: u8 = 0b111;

    pub const ALL: [Piece; 12] = [
        Piece::WhitePawn,
        Piece::WhiteKnight,
        Piece::WhiteBishop,
        Piece::WhiteRook,
        Piece::WhiteQueen,
        Piece::WhiteKing,
        Piece::BlackPawn,
        Piece::BlackKnight,
        Piece::BlackBishop,
        Piece::BlackRook,
        Piece::BlackQueen,
        Piece::BlackKing,
    ];

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        match (color, kind) {
            (Color::White, PieceKind::Pawn) => Piece::WhitePawn,
            (Color::White, PieceKind::Knight) => Piece::WhiteKnight,
            (Color::White, PieceKind::Bishop) => Piece::WhiteBishop,
            (Color::White, PieceKind::Rook) => Piece::WhiteRook,
            (Color::White, PieceKind::Queen) => Piece::WhiteQueen,
            (Color::White, PieceKind::King) => Piece::WhiteKing,
            (Color::Black, PieceKind::Pawn) => Piece::BlackPawn,
            (Color::Black, PieceKind::Knight) => Piece::BlackKnight,
            (Color::Black, PieceKind::Bishop) => Piece::BlackBishop,
            (Color::Black, PieceKind::Rook) => Piece::BlackRook,
            (Color::Black, PieceKind::Queen) => Piece::BlackQueen,
            (Color::Black, PieceKind::King) => Piece::BlackKing,
        }
    }

    /// Checked conversion from the packed code.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Piece::NoPiece),
            1 => Some(Piece::WhitePawn),
            2 => Some(Piece::WhiteKnight),
            3 => Some(Piece::WhiteBishop),
            4 => Some(Piece::WhiteRook),
            5 => Some(Piece::WhiteQueen),
            6 => Some(Piece::WhiteKing),
            9 => Some(Piece::BlackPawn),
            10 => Some(Piece::BlackKnight),
            11 => Some(Piece::BlackBishop),
            12 => Some(Piece::BlackRook),
            13 => Some(Piece::BlackQueen),
            14 => Some(Piece::BlackKing),
            _ => None,
        }
    }

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.code() != 0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.code() == 0
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        if self.is_none() {
            None
        } else if self.code() & Self::BLACK_OFFSET != 0 {
            Some(Color::Black)
        } else {
            Some(Color::White)
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self.code() & Self::KIND_MASK {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    #[inline]
    pub const fn to_fen_char(self) -> Option<char> {
        match (self.color(), self.kind()) {
            (Some(Color::White), Some(kind)) => Some(kind.to_char().to_ascii_uppercase()),
            (Some(Color::Black), Some(kind)) => Some(kind.to_char()),
            _ => None,
        }
    }

    #[inline]
    pub const fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        match PieceKind::from_char(ch) {
            Some(kind) => Some(Piece::new(color, kind)),
            None => None,
        }
    }
}

/// Board file, `A` on the queen-rook side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    pub const NB: usize = 8;
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self.index()) as char
    }

    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'a'..='h' => Self::from_index(ch as u8 - b'a'),
            _ => None,
        }
    }
}

/// Board rank, `R1` being White's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
}

impl Rank {
    pub const NB: usize = 8;
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self.index()) as char
    }

    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1'..='8' => Self::from_index(ch as u8 - b'1'),
            _ => None,
        }
    }

    /// Rank holding the en-passant target when `side_to_move` is about to
    /// capture: rank 6 for White, rank 3 for Black.
    #[inline]
    pub const fn en_passant(side_to_move: Color) -> Self {
        match side_to_move {
            Color::White => Rank::R6,
            Color::Black => Rank::R3,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Square-index deltas for one step in each compass direction.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 8,
    East = 1,
    South = -8,
    West = -1,
    NorthEast = 9,
    SouthEast = -7,
    SouthWest = -9,
    NorthWest = 7,
}

impl Direction {
    #[inline]
    pub const fn delta(self) -> i8 {
        self as i8
    }

    /// `(file, rank)` step.
    #[inline]
    pub const fn steps(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, 1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
            Direction::NorthWest => (-1, 1),
        }
    }
}

/// Board square index in `0..64`, `a1 == 0`, `h1 == 7`, `h8 == 63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const NB: usize = 64;

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 8 + file.index())
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::NB {
            Some(Square(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        1u64 << self.0
    }

    /// Step once in `direction`; `None` when that would leave the board or
    /// wrap onto another file edge.
    #[inline]
    pub const fn offset(self, direction: Direction) -> Option<Self> {
        let (df, dr) = direction.steps();
        let file = (self.0 % 8) as i8 + df;
        let rank = (self.0 / 8) as i8 + dr;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            return None;
        }
        Some(Square((rank * 8 + file) as u8))
    }

    /// Iterate `a1, b1, ..., h8`.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NB as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().to_char(), self.rank().to_char())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::algebraic::algebraic_to_square(s)
    }
}

/// Castling rights as a four-bit flag set.
///
/// Only the bits in [`CastlingRights::ANY`] can ever be set: every
/// constructor and operator masks its result to that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_OO: CastlingRights = CastlingRights(1);
    pub const WHITE_OOO: CastlingRights = CastlingRights(1 << 1);
    pub const BLACK_OO: CastlingRights = CastlingRights(1 << 2);
    pub const BLACK_OOO: CastlingRights = CastlingRights(1 << 3);

    pub const KING_SIDE: CastlingRights = CastlingRights(Self::WHITE_OO.0 | Self::BLACK_OO.0);
    pub const QUEEN_SIDE: CastlingRights = CastlingRights(Self::WHITE_OOO.0 | Self::BLACK_OOO.0);
    pub const WHITE_CASTLING: CastlingRights =
        CastlingRights(Self::WHITE_OO.0 | Self::WHITE_OOO.0);
    pub const BLACK_CASTLING: CastlingRights =
        CastlingRights(Self::BLACK_OO.0 | Self::BLACK_OOO.0);
    pub const ANY: CastlingRights = CastlingRights(Self::WHITE_CASTLING.0 | Self::BLACK_CASTLING.0);

    /// Number of distinct values, for tables indexed by `bits()`.
    pub const NB: usize = 16;

    /// Single rights in FEN order, paired with their FEN letter.
    pub const FEN_ORDER: [(CastlingRights, char); 4] = [
        (Self::WHITE_OO, 'K'),
        (Self::WHITE_OOO, 'Q'),
        (Self::BLACK_OO, 'k'),
        (Self::BLACK_OOO, 'q'),
    ];

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// `None` if `bits` has anything outside [`CastlingRights::ANY`].
    #[inline]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ANY.0 == 0 {
            Some(CastlingRights(bits))
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        CastlingRights(bits & Self::ANY.0)
    }

    /// Single right for a FEN castling letter.
    #[inline]
    pub const fn from_fen_char(ch: char) -> Option<Self> {
        match ch {
            'K' => Some(Self::WHITE_OO),
            'Q' => Some(Self::WHITE_OOO),
            'k' => Some(Self::BLACK_OO),
            'q' => Some(Self::BLACK_OOO),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: CastlingRights) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn intersects(self, other: CastlingRights) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub fn insert(&mut self, other: CastlingRights) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: CastlingRights) {
        self.0 &= !other.0;
    }

    /// Both rights belonging to `color`.
    #[inline]
    pub const fn for_color(color: Color) -> Self {
        match color {
            Color::White => Self::WHITE_CASTLING,
            Color::Black => Self::BLACK_CASTLING,
        }
    }
}

impl BitOr for CastlingRights {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        CastlingRights(self.0 | rhs.0)
    }
}

impl BitOrAssign for CastlingRights {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CastlingRights {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        CastlingRights(self.0 & rhs.0)
    }
}

impl BitAndAssign for CastlingRights {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for CastlingRights {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        CastlingRights(!self.0 & Self::ANY.0)
    }
}

/// FEN castling field: `KQkq` order, `-` when empty.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (right, ch) in Self::FEN_ORDER {
            if self.contains(right) {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

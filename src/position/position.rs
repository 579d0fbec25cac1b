//! The position aggregate.
//!
//! `Position` holds one chess position: piece placement, side to move,
//! castling rights, en-passant target and the two move counters. Fields are
//! public so move generation and search can read them directly. Text
//! conversion goes through [`Position::set`] and [`Position::fen`]; decoding
//! is all-or-nothing, so a failed `set` leaves the position exactly as it was.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::errors::FenParseError;
use crate::position::chess_rules::STARTING_POSITION_FEN;
use crate::position::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_position::render_position;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Indexed by [`Square::index`], `a1` first.
    pub board: [Piece; Square::NB],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square skipped by a pawn that just advanced two ranks.
    pub ep_square: Option<Square>,

    /// Plies since the last pawn move or capture.
    pub halfmove_clock: u16,
    /// Starts at 1 and increments after Black moves.
    pub fullmove_number: u16,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: [Piece::NoPiece; Square::NB],

            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            ep_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Position {
    /// Empty board, White to move, no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut position = Self::default();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            position.board[Square::new(file, Rank::R1).index()] = Piece::new(Color::White, kind);
            position.board[Square::new(file, Rank::R2).index()] = Piece::WhitePawn;
            position.board[Square::new(file, Rank::R7).index()] = Piece::BlackPawn;
            position.board[Square::new(file, Rank::R8).index()] = Piece::new(Color::Black, kind);
        }
        position.castling_rights = CastlingRights::ANY;
        position
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenParseError> {
        parse_fen(fen)
    }

    /// Replace every field with the position described by `fen`.
    ///
    /// On error nothing is written and the error names the offending field.
    pub fn set(&mut self, fen: &str) -> Result<&mut Self, FenParseError> {
        match parse_fen(fen) {
            Ok(parsed) => {
                trace!("position set from FEN {fen:?}");
                *self = parsed;
                Ok(self)
            }
            Err(err) => {
                debug!("rejected FEN {fen:?}: {err} ({} field)", err.field());
                Err(err)
            }
        }
    }

    /// Canonical FEN with minimal empty-square runs.
    #[inline]
    pub fn fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Piece {
        self.board[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_on(square).is_none()
    }

    /// Squares holding a piece, `a1` first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(move |sq| (sq, self.piece_on(sq)))
            .filter(|(_, piece)| piece.is_some())
    }

    /// Board occupancy as a bitboard.
    pub fn occupancy(&self) -> Bitboard {
        self.occupied().fold(0, |acc, (sq, _)| acc | sq.bitboard())
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl FromStr for Position {
    type Err = FenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", render_position(self))?;
        write!(f, "FEN: {}", self.fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::chess_rules::{EMPTY_BOARD_FEN, REFERENCE_FENS};
    use crate::utils::random_position::{random_position, RandomPositionConfig};
    use rand::{rngs::StdRng, SeedableRng};

    const REJECTED_FENS: &[&str] = &[
        // seven files on rank 1
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1",
        // nine files on rank 1
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNRR w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQZq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
    ];

    #[test]
    fn new_game_matches_starting_fen() {
        let decoded = Position::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(Position::new_game(), decoded);
        assert_eq!(Position::new_game().fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn default_is_empty_board() {
        let position = Position::new_empty();
        assert_eq!(position.fen(), EMPTY_BOARD_FEN);
        assert_eq!(position.occupied().count(), 0);
        assert_eq!(position.occupancy(), 0);
    }

    #[test]
    fn set_overwrites_every_field_and_chains() {
        let mut position = Position::new_game();
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

        let chained = position.set(fen).expect("FEN should parse").fen();
        assert_eq!(chained, fen);
        assert_eq!(position.castling_rights, CastlingRights::NONE);
        assert_eq!(position.piece_on(Square::A5), Piece::WhiteKing);
        assert_eq!(position.piece_on(Square::H4), Piece::BlackKing);
        assert!(position.is_empty(Square::E1));
        assert_eq!(position.occupied().count(), 10);
    }

    #[test]
    fn failed_set_leaves_position_untouched() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let mut position = Position::from_fen(fen).expect("FEN should parse");
        let before = position.clone();

        for bad in REJECTED_FENS {
            assert!(position.set(bad).is_err(), "{bad:?} should be rejected");
            assert_eq!(position, before, "{bad:?} modified the position");
        }
        assert_eq!(position.fen(), fen);
    }

    #[test]
    fn parses_through_from_str() {
        let position: Position = REFERENCE_FENS[3].parse().expect("FEN should parse");
        assert_eq!(position.fen(), REFERENCE_FENS[3]);
        assert!("not a fen".parse::<Position>().is_err());
    }

    #[test]
    fn display_shows_board_and_fen() {
        let shown = Position::new_game().to_string();
        assert!(shown.starts_with("  a b c d e f g h\n8 ♜"));
        assert!(shown.ends_with(&format!("FEN: {STARTING_POSITION_FEN}")));
    }

    #[test]
    fn random_positions_survive_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let config = RandomPositionConfig::default();

        for _ in 0..500 {
            let position = random_position(&mut rng, &config);
            let fen = position.fen();
            let decoded = Position::from_fen(&fen).expect("encoded FEN should parse");
            assert_eq!(decoded, position, "round trip changed {fen}");
            assert_eq!(decoded.fen(), fen);
        }
    }
}

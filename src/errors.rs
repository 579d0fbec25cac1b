//! Errors produced when reading positions and coordinates from text.
//!
//! `FenParseError` is the single error kind of the FEN decoder. Each variant
//! names one structural problem and carries the offending token so callers
//! can report exactly what was wrong; [`FenParseError::field`] maps a variant
//! back to the FEN field it concerns. Encoding never fails and has no error
//! type.

use std::fmt;

use thiserror::Error;

use crate::position::chess_types::{Color, Rank, Square};

/// The six space-separated fields of a FEN record, plus the record as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FenField {
    /// The record itself, before it is split into fields.
    Record,
    Placement,
    SideToMove,
    Castling,
    EnPassant,
    HalfmoveClock,
    FullmoveNumber,
}

impl fmt::Display for FenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FenField::Record => "record",
            FenField::Placement => "piece placement",
            FenField::SideToMove => "side to move",
            FenField::Castling => "castling rights",
            FenField::EnPassant => "en-passant square",
            FenField::HalfmoveClock => "halfmove clock",
            FenField::FullmoveNumber => "fullmove number",
        };
        f.write_str(name)
    }
}

/// Structural error in a FEN string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenParseError {
    /// The record did not split into exactly six space-separated fields.
    #[error("expected 6 space-separated fields, found {found}")]
    FieldCount { found: usize },

    /// Two adjacent spaces, or a leading/trailing space, left a field empty.
    #[error("{0} field is empty")]
    EmptyField(FenField),

    /// The placement field did not hold exactly eight `/`-separated ranks.
    #[error("piece placement must contain 8 ranks, found {found}")]
    RankCount { found: usize },

    /// A character that is neither a piece letter nor a digit `1`..`8`.
    #[error("invalid character '{symbol}' in rank {rank} of piece placement")]
    InvalidPlacementSymbol { rank: Rank, symbol: char },

    /// The rank describes more than eight files; `symbol` is where it overran.
    #[error("rank {rank} of piece placement runs past file h at '{symbol}'")]
    RankOverflow { rank: Rank, symbol: char },

    /// The rank describes fewer than eight files.
    #[error("rank {rank} of piece placement covers {files} files, expected 8")]
    RankTooShort { rank: Rank, files: u8 },

    #[error("side to move must be 'w' or 'b', found '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling character '{0}', expected one of KQkq or '-'")]
    InvalidCastlingSymbol(char),

    #[error("castling right '{0}' appears more than once")]
    DuplicateCastlingRight(char),

    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassantSquare(String),

    /// The en-passant target is a real square but cannot follow a double
    /// pawn step by the side that just moved.
    #[error("en-passant square {square} is not on rank {expected} with {side_to_move} to move")]
    EnPassantRankMismatch {
        square: Square,
        side_to_move: Color,
        expected: Rank,
    },

    #[error("halfmove clock must be a non-negative integer, found '{0}'")]
    InvalidHalfmoveClock(String),

    #[error("fullmove number must be a positive integer, found '{0}'")]
    InvalidFullmoveNumber(String),
}

impl FenParseError {
    /// The FEN field this error was raised for.
    pub fn field(&self) -> FenField {
        match self {
            FenParseError::FieldCount { .. } => FenField::Record,
            FenParseError::EmptyField(field) => *field,
            FenParseError::RankCount { .. }
            | FenParseError::InvalidPlacementSymbol { .. }
            | FenParseError::RankOverflow { .. }
            | FenParseError::RankTooShort { .. } => FenField::Placement,
            FenParseError::InvalidSideToMove(_) => FenField::SideToMove,
            FenParseError::InvalidCastlingSymbol(_) | FenParseError::DuplicateCastlingRight(_) => {
                FenField::Castling
            }
            FenParseError::InvalidEnPassantSquare(_)
            | FenParseError::EnPassantRankMismatch { .. } => FenField::EnPassant,
            FenParseError::InvalidHalfmoveClock(_) => FenField::HalfmoveClock,
            FenParseError::InvalidFullmoveNumber(_) => FenField::FullmoveNumber,
        }
    }
}

/// Text that is not a two-character algebraic square such as `e4`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid algebraic square: '{0}'")]
pub struct SquareParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_report_their_field() {
        assert_eq!(FenParseError::FieldCount { found: 5 }.field(), FenField::Record);
        assert_eq!(
            FenParseError::EmptyField(FenField::EnPassant).field(),
            FenField::EnPassant
        );
        assert_eq!(
            FenParseError::RankTooShort { rank: Rank::R1, files: 7 }.field(),
            FenField::Placement
        );
        assert_eq!(
            FenParseError::InvalidSideToMove("x".to_owned()).field(),
            FenField::SideToMove
        );
        assert_eq!(FenParseError::InvalidCastlingSymbol('Z').field(), FenField::Castling);
        assert_eq!(
            FenParseError::InvalidEnPassantSquare("z9".to_owned()).field(),
            FenField::EnPassant
        );
        assert_eq!(
            FenParseError::InvalidHalfmoveClock("x".to_owned()).field(),
            FenField::HalfmoveClock
        );
        assert_eq!(
            FenParseError::InvalidFullmoveNumber("0".to_owned()).field(),
            FenField::FullmoveNumber
        );
    }

    #[test]
    fn messages_name_the_offending_token() {
        let err = FenParseError::RankTooShort { rank: Rank::R1, files: 7 };
        assert_eq!(
            err.to_string(),
            "rank 1 of piece placement covers 7 files, expected 8"
        );

        let err = FenParseError::EnPassantRankMismatch {
            square: Square::E3,
            side_to_move: Color::White,
            expected: Rank::R6,
        };
        assert_eq!(
            err.to_string(),
            "en-passant square e3 is not on rank 6 with white to move"
        );

        assert_eq!(
            SquareParseError("z9".to_owned()).to_string(),
            "invalid algebraic square: 'z9'"
        );
    }
}

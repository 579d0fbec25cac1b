//! FEN-to-Position parser.
//!
//! Builds a complete `Position` from a Forsyth-Edwards Notation string. The
//! decoder checks structure only: field count, rank layout, recognized
//! symbols, en-passant rank and numeric clocks. It never writes into an
//! existing position; `Position::set` commits the result on success.

use crate::errors::{FenField, FenParseError};
use crate::position::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

/// Number of space-separated fields in a FEN record.
pub const FEN_FIELD_COUNT: usize = 6;

/// FEN fields in record order.
const FIELDS: [FenField; FEN_FIELD_COUNT] = [
    FenField::Placement,
    FenField::SideToMove,
    FenField::Castling,
    FenField::EnPassant,
    FenField::HalfmoveClock,
    FenField::FullmoveNumber,
];

pub fn parse_fen(fen: &str) -> Result<Position, FenParseError> {
    let fields: Vec<&str> = fen.split(' ').collect();
    let &[board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        fields.as_slice()
    else {
        return Err(FenParseError::FieldCount { found: fields.len() });
    };

    if let Some((field, _)) = FIELDS.iter().zip(&fields).find(|(_, text)| text.is_empty()) {
        return Err(FenParseError::EmptyField(*field));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let ep_square = parse_en_passant_square(en_passant_part, side_to_move)?;
    let halfmove_clock = parse_counter(halfmove_part)
        .ok_or_else(|| FenParseError::InvalidHalfmoveClock(halfmove_part.to_owned()))?;
    let fullmove_number = parse_counter(fullmove_part)
        .filter(|&n| n >= 1)
        .ok_or_else(|| FenParseError::InvalidFullmoveNumber(fullmove_part.to_owned()))?;

    Ok(Position {
        board,
        side_to_move,
        castling_rights,
        ep_square,
        halfmove_clock,
        fullmove_number,
    })
}

fn parse_board(board_part: &str) -> Result<[Piece; Square::NB], FenParseError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != Rank::NB {
        return Err(FenParseError::RankCount { found: ranks.len() });
    }

    let mut board = [Piece::NoPiece; Square::NB];

    // FEN lists rank 8 first.
    for (rank, rank_str) in Rank::ALL.iter().rev().copied().zip(ranks) {
        let mut file = 0u8;

        for ch in rank_str.chars() {
            let step = match ch {
                '1'..='8' => ch as u8 - b'0',
                _ => {
                    let piece = Piece::from_fen_char(ch)
                        .ok_or(FenParseError::InvalidPlacementSymbol { rank, symbol: ch })?;
                    let target_file = File::from_index(file)
                        .ok_or(FenParseError::RankOverflow { rank, symbol: ch })?;
                    board[Square::new(target_file, rank).index()] = piece;
                    1
                }
            };

            file += step;
            if file > 8 {
                return Err(FenParseError::RankOverflow { rank, symbol: ch });
            }
        }

        if file != 8 {
            return Err(FenParseError::RankTooShort { rank, files: file });
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenParseError> {
    let mut chars = side_part.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => {
            Color::from_char(ch).ok_or_else(|| FenParseError::InvalidSideToMove(side_part.to_owned()))
        }
        _ => Err(FenParseError::InvalidSideToMove(side_part.to_owned())),
    }
}

/// A lone `-` is the only spelling of "no rights"; the field is never empty here.
fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenParseError> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;

    for ch in castling_part.chars() {
        let right = CastlingRights::from_fen_char(ch).ok_or(FenParseError::InvalidCastlingSymbol(ch))?;
        if rights.contains(right) {
            return Err(FenParseError::DuplicateCastlingRight(ch));
        }
        rights |= right;
    }

    Ok(rights)
}

fn parse_en_passant_square(
    en_passant_part: &str,
    side_to_move: Color,
) -> Result<Option<Square>, FenParseError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| FenParseError::InvalidEnPassantSquare(en_passant_part.to_owned()))?;

    let expected = Rank::en_passant(side_to_move);
    if square.rank() != expected {
        return Err(FenParseError::EnPassantRankMismatch {
            square,
            side_to_move,
            expected,
        });
    }

    Ok(Some(square))
}

/// Plain base-10 digits only; `str::parse` alone would also take a leading `+`.
fn parse_counter(text: &str) -> Option<u16> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

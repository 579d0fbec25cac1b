//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! `Square` index reused by the FEN codec and the board renderer.

use crate::errors::SquareParseError;
use crate::position::chess_types::{Bitboard, File, Rank, Square};

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, SquareParseError> {
    let mut chars = square.chars();
    let (Some(file_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(SquareParseError(square.to_owned()));
    };

    let file = File::from_char(file_ch).ok_or_else(|| SquareParseError(square.to_owned()))?;
    let rank = Rank::from_char(rank_ch).ok_or_else(|| SquareParseError(square.to_owned()))?;

    Ok(Square::new(file, rank))
}

/// Convert algebraic notation (for example: "e4") to a one-hot bitboard.
#[inline]
pub fn algebraic_to_bitboard(square: &str) -> Result<Bitboard, SquareParseError> {
    Ok(algebraic_to_square(square)?.bitboard())
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Convert a one-hot bitboard to a square, `None` unless exactly one bit is set.
#[inline]
pub fn bitboard_to_square(bitboard: Bitboard) -> Option<Square> {
    if bitboard.count_ones() != 1 {
        return None;
    }

    Square::from_index(bitboard.trailing_zeros() as u8)
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_bitboard, algebraic_to_square, bitboard_to_square, square_to_algebraic};
    use crate::position::chess_types::Square;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), Square::A1);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), Square::H8);
        assert_eq!(square_to_algebraic(Square::A1), "a1");
        assert_eq!(square_to_algebraic(Square::H8), "h8");

        for sq in Square::all() {
            let text = square_to_algebraic(sq);
            assert_eq!(algebraic_to_square(&text).expect("own output should parse"), sq);
        }
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for bad in ["", "e", "e44", "z9", "i1", "a0", "a9", "E4", "4e", "é4"] {
            assert!(algebraic_to_square(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn round_trip_bitboard_conversion() {
        let e4 = algebraic_to_bitboard("e4").expect("e4 should parse");
        assert_eq!(e4, 1u64 << 28);
        assert_eq!(bitboard_to_square(e4), Some(Square::E4));
        assert_eq!(bitboard_to_square(0), None);
        assert_eq!(bitboard_to_square(0b11), None);
    }
}

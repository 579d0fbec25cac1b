//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view of a `Position` for debugging, tests,
//! and diagnostics in text environments. The output is for people only and is
//! never read back.

use crate::position::chess_types::*;

const FILE_LABELS: &str = "  a b c d e f g h";

/// Render the board to a Unicode string for terminal output.
///
/// Rank 8 is drawn at the top; each rank row is labelled on both sides and
/// the file letters appear above and below the grid.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str(FILE_LABELS);
    out.push('\n');

    for rank in Rank::ALL.into_iter().rev() {
        out.push(rank.to_char());
        out.push(' ');

        for file in File::ALL {
            out.push(piece_to_unicode(position.piece_on(Square::new(file, rank))));

            if file != File::H {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank.to_char());
        out.push('\n');
    }

    out.push_str(FILE_LABELS);

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match piece {
        Piece::NoPiece => '·',
        Piece::WhitePawn => '♙',
        Piece::WhiteKnight => '♘',
        Piece::WhiteBishop => '♗',
        Piece::WhiteRook => '♖',
        Piece::WhiteQueen => '♕',
        Piece::WhiteKing => '♔',
        Piece::BlackPawn => '♟',
        Piece::BlackKnight => '♞',
        Piece::BlackBishop => '♝',
        Piece::BlackRook => '♜',
        Piece::BlackQueen => '♛',
        Piece::BlackKing => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_position;
    use crate::position::chess_types::*;

    #[test]
    fn renders_starting_position_grid() {
        let rendered = render_position(&Position::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[2], "7 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟ 7");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[7], "2 ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙ 2");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[9], "  a b c d e f g h");
    }

    #[test]
    fn single_piece_lands_on_its_square() {
        let mut position = Position::default();
        position.board[Square::C3.index()] = Piece::BlackQueen;

        let rendered = render_position(&position);
        let rank_three = rendered
            .lines()
            .find(|line| line.starts_with('3'))
            .expect("rank 3 row should exist");

        assert_eq!(rank_three, "3 · · ♛ · · · · · 3");
    }
}

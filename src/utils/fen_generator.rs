use crate::position::chess_types::*;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let en_passant = generate_en_passant_field(position.ep_square);

    format!(
        "{} {} {} {} {} {}",
        board,
        position.side_to_move.to_char(),
        position.castling_rights,
        en_passant,
        position.halfmove_clock,
        position.fullmove_number
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::with_capacity(71);

    for rank in Rank::ALL.into_iter().rev() {
        let mut empty_count = 0u8;

        for file in File::ALL {
            match position.piece_on(Square::new(file, rank)).to_fen_char() {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank != Rank::R1 {
            out.push('/');
        }
    }

    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    match square {
        Some(square) => square.to_string(),
        None => "-".to_owned(),
    }
}

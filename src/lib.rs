//! Crate root module declarations for the hexa_chess position library.
//!
//! This file exposes the position model (board vocabulary, rule constants,
//! the `Position` aggregate), its FEN codec and rendering helpers, and the
//! crate's error types so binaries, tests, and downstream engines can import
//! stable module paths.

pub mod errors;

pub mod position {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_position;
    pub mod render_position;
}

pub use errors::{FenField, FenParseError, SquareParseError};
pub use position::chess_rules::STARTING_POSITION_FEN;
pub use position::chess_types::{
    CastlingRights, Color, Direction, File, Piece, PieceKind, Rank, Square,
};
pub use position::position::Position;

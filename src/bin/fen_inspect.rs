//! Decode FEN strings and print their canonical form.
//!
//! Usage:
//! `cargo run --bin fen_inspect -- "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"`
//! `cat positions.txt | cargo run --bin fen_inspect -- --board`
//!
//! With no FEN arguments, every non-empty stdin line is read as one FEN.
//! Invalid input is logged to stderr and the process exits with status 1
//! once all input has been processed.

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{error, info};

use hexa_chess::utils::render_position::render_position;
use hexa_chess::Position;

#[derive(Parser, Debug)]
#[command(
    name = "fen_inspect",
    about = "Validate FEN strings and print their canonical encoding"
)]
struct Cli {
    /// Also draw the board under each FEN
    #[arg(short, long)]
    board: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// FEN records to inspect; quote each one
    fens: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .init();

    let inputs: Vec<String> = if cli.fens.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        cli.fens
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut position = Position::new_empty();
    let mut rejected = 0usize;

    for (index, fen) in inputs.iter().enumerate() {
        match position.set(fen) {
            Ok(position) => {
                writeln!(out, "{}", position.fen())?;
                if cli.board {
                    writeln!(out, "{}\n", render_position(position))?;
                }
            }
            Err(err) => {
                rejected += 1;
                error!("input {}: {fen:?}: {err}", index + 1);
            }
        }
    }
    out.flush()?;

    info!("{} FEN records read, {} rejected", inputs.len(), rejected);

    if rejected > 0 {
        std::process::exit(1);
    }

    Ok(())
}

//! Goban-Rust: play Go in the terminal.
//!
//! Starts an interactive game on an `n` x `n` board. Type coordinates like
//! `D4` to play, `pass` to pass, `prev`/`next` to walk the move history,
//! and `quit` to leave.

use anyhow::bail;
use clap::Parser;

use goban_rust::console::Console;
use goban_rust::engine::GoEngine;

/// Game of Go
#[derive(Parser)]
#[command(name = "goban-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Size of board (n x n)
    #[arg(short = 'n', long, default_value_t = 11)]
    size: usize,

    /// Number of handicap stones
    #[arg(short = 'H', long, default_value_t = 0)]
    handicap: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Columns are lettered A-Z skipping I, which caps the board at 25.
    if cli.size < 2 || cli.size > 25 {
        bail!("board size must be between 2 and 25, got {}", cli.size);
    }

    let engine = GoEngine::new(cli.size, cli.handicap);
    Console::new(engine).run()
}

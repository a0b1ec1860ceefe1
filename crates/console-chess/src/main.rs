//! Console Chess - two players take turns at one terminal.
//!
//! Moves are entered as a pair of coordinates, either algebraic (`e2 e4`) or
//! 1-based numeric (`7,5 5,5`). The game ends when a king is captured or a
//! player enters an empty line.

mod config;
mod session;

use anyhow::Context;
use clap::Parser;
use config::ConsoleConfig;
use session::Session;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Console Chess - play a two-player game in the terminal.
#[derive(Parser)]
#[command(name = "console-chess")]
#[command(about = "Play two-player chess in the terminal")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "console-chess.toml")]
    config: PathBuf,

    /// Start from this piece placement instead of the configured one
    #[arg(long)]
    position: Option<String>,

    /// Do not print the board before each turn
    #[arg(long)]
    no_board: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .with_context(|| format!("invalid log level '{}'", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting console-chess");

    let mut config = ConsoleConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(position) = args.position {
        config.start_position = position;
    }
    if args.no_board {
        config.show_board = false;
    }
    tracing::debug!(?config, "effective configuration");

    let board = config.board().context("building start position")?;
    let mut session = Session::new(board, config.first_player.into());
    tracing::info!("{} to move first", session.to_move());

    let winner = session::play(&mut session, config.show_board, io::stdin().lock(), io::stdout())?;
    match winner {
        Some(color) => tracing::info!("Game over, {} won", color),
        None => tracing::info!("Session ended without a winner"),
    }

    Ok(())
}

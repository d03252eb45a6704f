//! Mimic CLI - Simon-style memory game
//!
//! Terminal front end for the Mimic game engine.

use clap::Parser;
use env_logger::Env;
use log::info;

use mimic::cli::{Cli, Commands};
use mimic::Result;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Mimic v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Play { difficulty, seed }) => {
            mimic::cli::commands::play(difficulty.into(), seed)
        }
        None => {
            println!("Mimic v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

//! CLI Module
//!
//! Command-line interface for the Mimic memory game.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

use crate::engine::Difficulty;

/// Mimic - Simon-style memory game for the terminal
#[derive(Parser, Debug)]
#[command(name = "mimic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive game in the terminal
    #[command(name = "play")]
    Play {
        /// Playback pacing
        #[arg(short, long, value_enum, default_value = "normal")]
        difficulty: DifficultyArg,

        /// Seed the sequence generator for a reproducible game
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// CLI-facing difficulty choice
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyArg {
    Slow,
    Normal,
    Fast,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Slow => Difficulty::Slow,
            DifficultyArg::Normal => Difficulty::Normal,
            DifficultyArg::Fast => Difficulty::Fast,
        }
    }
}

//! CLI Command Implementations
//!
//! Terminal adapters for the session contracts: stdin as the input source,
//! stdout as the playback and feedback sinks.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use log::info;

use crate::engine::{Difficulty, RoundController, Signal};
use crate::error::Result;
use crate::session::{FeedbackSink, GameSession, InputSource, PlaybackSink, SessionEnd};

/// Run an interactive terminal game.
pub fn play(difficulty: Difficulty, seed: Option<u64>) -> Result<()> {
    info!("Starting game: difficulty={difficulty} seed={seed:?}");

    let mut controller = match seed {
        Some(seed) => RoundController::seeded(seed),
        None => RoundController::new(),
    };
    controller.set_difficulty(difficulty)?;

    println!("Watch the sequence, then type it back one signal at a time.");
    println!("Signals: green (g), red (r), yellow (y), blue (b). Enter after each.");
    println!("Close input (Ctrl-D) to quit.");
    println!();

    let hold = difficulty.timings().hold;
    let session = GameSession::new(
        controller,
        TerminalPlayback { hold },
        TerminalFeedback,
        StdinInput::new(),
    );

    match session.run()? {
        SessionEnd::Lost { level } => println!("Game over! You reached level {level}."),
        SessionEnd::Quit { level } => println!("Thanks for playing. Final level: {level}."),
    }

    Ok(())
}

/// Renders signals as text highlights on stdout
struct TerminalPlayback {
    hold: Duration,
}

impl PlaybackSink for TerminalPlayback {
    fn highlight_and_play(&mut self, signal: Signal) -> Result<()> {
        println!("  *** {} ***", signal.name().to_uppercase());
        // Suspend for the effect duration, per the sink contract
        std::thread::sleep(self.hold);
        Ok(())
    }
}

/// Prints round outcomes to stdout
struct TerminalFeedback;

impl FeedbackSink for TerminalFeedback {
    fn notify_wrong(&mut self) {
        println!("  xx WRONG xx");
    }

    fn notify_level_up(&mut self, level: u32) {
        println!("Correct! Level {level} cleared.");
    }
}

/// Reads signals line by line from stdin; unrecognized lines are ignored
struct StdinInput {
    lines: io::Lines<io::StdinLock<'static>>,
}

impl StdinInput {
    fn new() -> Self {
        Self {
            lines: io::stdin().lock().lines(),
        }
    }
}

impl InputSource for StdinInput {
    fn next_signal(&mut self) -> Option<Signal> {
        loop {
            print!("> ");
            let _ = io::stdout().flush();

            let line = self.lines.next()?.ok()?;
            match Signal::from_input(&line) {
                Some(signal) => return Some(signal),
                None => {
                    let token = line.trim();
                    if !token.is_empty() {
                        println!("  (unrecognized '{token}' - use green/red/yellow/blue or g/r/y/b)");
                    }
                }
            }
        }
    }
}

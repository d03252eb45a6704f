//! Session driver and collaborator contracts
//!
//! The state machine in [`crate::engine`] is pure; this module owns time and
//! side effects. A [`GameSession`] wires a `RoundController` to the hosting
//! layer's playback, feedback, and input collaborators and runs the blocking
//! single-threaded game loop: display each signal in order with pacing gaps,
//! hand the turn to the player, and apply the fixed post-round delays.
//!
//! All waits go through an injectable sleep function so tests can run a full
//! session without sleeping for real.

use std::time::Duration;

use log::{debug, info, warn};

use crate::engine::{
    RoundController, Signal, SubmitOutcome, GAME_OVER_DELAY, LEVEL_UP_DELAY, START_DELAY,
};
use crate::error::Result;

/// Renders one signal: highlight plus sound.
///
/// Called once per signal in sequence order while displaying, never
/// overlapping: the implementation suspends until the effect duration has
/// elapsed. Failures are swallowed by the driver and never stall the game.
pub trait PlaybackSink {
    fn highlight_and_play(&mut self, signal: Signal) -> Result<()>;
}

/// Round-outcome notifications for the hosting layer
pub trait FeedbackSink {
    /// The player mismatched; the round is lost
    fn notify_wrong(&mut self);

    /// The player completed the sequence at `level`
    fn notify_level_up(&mut self, level: u32);
}

/// Source of discrete player input events.
///
/// `next_signal` blocks until the player acts; the player may take unbounded
/// time. `None` means the source is closed (player quit).
pub trait InputSource {
    fn next_signal(&mut self) -> Option<Signal>;
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player mismatched; `level` is the round they failed on
    Lost { level: u32 },
    /// The input source closed mid-game
    Quit { level: u32 },
}

/// Blocking single-threaded driver for one game
pub struct GameSession<P, F, I> {
    controller: RoundController,
    playback: P,
    feedback: F,
    input: I,
    sleep: Box<dyn FnMut(Duration)>,
}

impl<P, F, I> GameSession<P, F, I>
where
    P: PlaybackSink,
    F: FeedbackSink,
    I: InputSource,
{
    /// Create a session that sleeps on the current thread
    pub fn new(controller: RoundController, playback: P, feedback: F, input: I) -> Self {
        Self::with_sleep(controller, playback, feedback, input, Box::new(std::thread::sleep))
    }

    /// Create a session with a custom sleep function (used by tests)
    pub fn with_sleep(
        controller: RoundController,
        playback: P,
        feedback: F,
        input: I,
        sleep: Box<dyn FnMut(Duration)>,
    ) -> Self {
        Self {
            controller,
            playback,
            feedback,
            input,
            sleep,
        }
    }

    /// Run one full game.
    ///
    /// Rounds repeat until the player mismatches or the input source closes.
    /// Returns how the session ended and the level reached.
    pub fn run(mut self) -> Result<SessionEnd> {
        info!(
            "Game starting at {} difficulty",
            self.controller.difficulty()
        );
        (self.sleep)(START_DELAY);
        self.controller.start_round()?;

        loop {
            self.display_sequence();
            self.controller.playback_finished()?;

            match self.play_turn()? {
                TurnEnd::Won(level) => {
                    self.feedback.notify_level_up(level);
                    (self.sleep)(LEVEL_UP_DELAY);
                    self.controller.advance_round()?;
                }
                TurnEnd::Lost(level) => {
                    self.feedback.notify_wrong();
                    (self.sleep)(GAME_OVER_DELAY);
                    self.controller.acknowledge_loss()?;
                    info!("Game over at level {level}");
                    return Ok(SessionEnd::Lost { level });
                }
                TurnEnd::Quit(level) => {
                    self.controller.abort();
                    info!("Player quit at level {level}");
                    return Ok(SessionEnd::Quit { level });
                }
            }
        }
    }

    /// Display the full sequence, strictly sequentially.
    ///
    /// Each signal's cycle is pre-gap, highlight (the sink suspends for the
    /// hold duration), post-gap. A failing sink is logged and skipped; the
    /// schedule continues.
    fn display_sequence(&mut self) {
        let timings = self.controller.difficulty().timings();
        let signals = self.controller.signals().to_vec();
        debug!("Displaying {} signal(s)", signals.len());

        for signal in signals {
            (self.sleep)(timings.pre_gap);
            if let Err(err) = self.playback.highlight_and_play(signal) {
                warn!("Playback failed for {signal}: {err}");
            }
            (self.sleep)(timings.post_gap);
        }
    }

    /// Pull inputs until the round resolves or the source closes
    fn play_turn(&mut self) -> Result<TurnEnd> {
        loop {
            let Some(signal) = self.input.next_signal() else {
                return Ok(TurnEnd::Quit(self.controller.level()));
            };

            match self.controller.submit(signal) {
                Ok(SubmitOutcome::Accepted) => continue,
                Ok(SubmitOutcome::SequenceComplete { level }) => return Ok(TurnEnd::Won(level)),
                Ok(SubmitOutcome::Rejected) => return Ok(TurnEnd::Lost(self.controller.level())),
                Err(err) => {
                    // Stray events outside AwaitingInput are ignored
                    warn!("Ignoring input event: {err}");
                }
            }
        }
    }
}

enum TurnEnd {
    Won(u32),
    Lost(u32),
    Quit(u32),
}

//! Round state machine
//!
//! `RoundController` drives one game: it grows the sequence at each round
//! start, validates player input one signal at a time, and exposes pure
//! transitions. It has no clock and performs no side effects; the session
//! layer owns time and calls the delayed transitions (`advance_round`,
//! `acknowledge_loss`) when the corresponding waits elapse.

use std::fmt;

use log::{debug, warn};

use crate::engine::{Difficulty, SequenceEngine, Signal};
use crate::error::{MimicError, Result};

/// Round states representing where the game is in the display/input cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// No game in progress (default state)
    #[default]
    Idle,
    /// The sequence is being played back to the player
    Displaying,
    /// Player input is accepted and validated
    AwaitingInput,
    /// The player reproduced the full sequence
    RoundWon,
    /// The player mismatched; the round is over
    RoundLost,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundState::Idle => write!(f, "Idle"),
            RoundState::Displaying => write!(f, "Displaying"),
            RoundState::AwaitingInput => write!(f, "AwaitingInput"),
            RoundState::RoundWon => write!(f, "RoundWon"),
            RoundState::RoundLost => write!(f, "RoundLost"),
        }
    }
}

/// Result of one validated input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input matched; more signals remain in the sequence
    Accepted,
    /// Input matched and completed the sequence; the round is won
    SequenceComplete { level: u32 },
    /// Input did not match the expected signal; the round is lost
    Rejected,
}

/// Manages round state, the input buffer, and sequence growth
///
/// The controller handles:
/// - State transitions (start, playback done, submit, advance, loss reset)
/// - Incremental validation of player input against the sequence
/// - Cancellation (aborting a game mid-playback)
///
/// Invariants: input is accepted only in `AwaitingInput`; the sequence is
/// mutated only on transitions into `Displaying` and on the loss/abort reset.
#[derive(Debug)]
pub struct RoundController {
    /// Current round state
    state: RoundState,

    /// Canonical sequence, owned exclusively by the engine
    engine: SequenceEngine,

    /// Signals the player has entered this round
    input: Vec<Signal>,

    /// Current level; equal to the sequence length, 0 while idle
    level: u32,

    /// Pacing preset, fixed once a game starts
    difficulty: Difficulty,
}

impl RoundController {
    /// Create a controller with an entropy-seeded sequence engine
    pub fn new() -> Self {
        Self::with_engine(SequenceEngine::new())
    }

    /// Create a controller with a deterministic sequence engine
    pub fn seeded(seed: u64) -> Self {
        Self::with_engine(SequenceEngine::seeded(seed))
    }

    /// Create a controller around an existing sequence engine
    pub fn with_engine(engine: SequenceEngine) -> Self {
        Self {
            state: RoundState::Idle,
            engine,
            input: Vec::new(),
            level: 0,
            difficulty: Difficulty::default(),
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Select the pacing preset for the next game.
    ///
    /// Only valid before a fresh game starts: the controller must be idle
    /// with an empty sequence. Difficulty affects pacing delays only, never
    /// validation logic.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        if self.state != RoundState::Idle || !self.engine.is_empty() {
            return Err(self.invalid("set_difficulty"));
        }
        self.difficulty = difficulty;
        debug!("[ROUND] Difficulty set to {difficulty}");
        Ok(())
    }

    /// The pacing preset in effect
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Begin a round: Idle -> Displaying.
    ///
    /// Extends the sequence by one random signal, clears the input buffer,
    /// and returns the new level.
    pub fn start_round(&mut self) -> Result<u32> {
        match self.state {
            RoundState::Idle => {
                self.input.clear();
                self.level = self.engine.extend();
                self.state = RoundState::Displaying;
                debug!("[ROUND] Round started, level {}", self.level);
                Ok(self.level)
            }
            _ => Err(self.invalid("start_round")),
        }
    }

    /// Playback of the full sequence has finished: Displaying -> AwaitingInput.
    ///
    /// Driven externally by the session layer once the last signal's display
    /// cycle completes.
    pub fn playback_finished(&mut self) -> Result<()> {
        match self.state {
            RoundState::Displaying => {
                self.state = RoundState::AwaitingInput;
                debug!("[ROUND] Playback finished, awaiting input");
                Ok(())
            }
            _ => Err(self.invalid("playback_finished")),
        }
    }

    /// Validate one player input against the expected position.
    ///
    /// Appends to the input buffer and compares at the buffer's last index:
    /// a mismatch loses the round, a match on the final position wins it,
    /// and any earlier match keeps the controller awaiting input.
    ///
    /// Outside `AwaitingInput` this fails with `InvalidState` and mutates
    /// nothing; the session layer ignores such stray events.
    pub fn submit(&mut self, signal: Signal) -> Result<SubmitOutcome> {
        if self.state != RoundState::AwaitingInput {
            warn!("[ROUND] Input {signal} ignored in {} state", self.state);
            return Err(self.invalid("submit"));
        }

        self.input.push(signal);
        let index = self.input.len() - 1;
        let expected = self.engine.signal_at(index)?;

        if signal != expected {
            self.state = RoundState::RoundLost;
            debug!(
                "[ROUND] Mismatch at position {index}: got {signal}, expected {expected}"
            );
            return Ok(SubmitOutcome::Rejected);
        }

        if self.input.len() == self.engine.len() {
            self.state = RoundState::RoundWon;
            debug!("[ROUND] Sequence complete, level {} won", self.level);
            return Ok(SubmitOutcome::SequenceComplete { level: self.level });
        }

        Ok(SubmitOutcome::Accepted)
    }

    /// Begin the next round after a win: RoundWon -> Displaying.
    ///
    /// Called by the session layer after the fixed level-up delay. Extends
    /// the sequence and clears the input buffer.
    pub fn advance_round(&mut self) -> Result<u32> {
        match self.state {
            RoundState::RoundWon => {
                self.input.clear();
                self.level = self.engine.extend();
                self.state = RoundState::Displaying;
                debug!("[ROUND] Advanced to level {}", self.level);
                Ok(self.level)
            }
            _ => Err(self.invalid("advance_round")),
        }
    }

    /// Return to idle after a loss: RoundLost -> Idle.
    ///
    /// Called by the session layer after the fixed cool-down. Resets the
    /// sequence so the next game starts from length zero.
    pub fn acknowledge_loss(&mut self) -> Result<()> {
        match self.state {
            RoundState::RoundLost => {
                self.engine.reset();
                self.input.clear();
                self.level = 0;
                self.state = RoundState::Idle;
                debug!("[ROUND] Loss acknowledged, back to idle");
                Ok(())
            }
            _ => Err(self.invalid("acknowledge_loss")),
        }
    }

    /// Force the controller back to idle from any state.
    ///
    /// Cancels a game mid-playback or mid-input: the sequence and input
    /// buffer are discarded and no further side effects may be issued for
    /// the aborted round. A no-op when already idle.
    pub fn abort(&mut self) {
        if self.state == RoundState::Idle {
            debug!("[ROUND] Abort ignored, already idle");
            return;
        }
        debug!("[ROUND] Aborted from {} state", self.state);
        self.engine.reset();
        self.input.clear();
        self.level = 0;
        self.state = RoundState::Idle;
    }

    // ========================================================================
    // State Queries
    // ========================================================================

    /// Current round state
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Current level (sequence length); 0 while idle
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Check if no game is in progress
    pub fn is_idle(&self) -> bool {
        self.state == RoundState::Idle
    }

    /// Check if the sequence is being played back
    pub fn is_displaying(&self) -> bool {
        self.state == RoundState::Displaying
    }

    /// Check if player input is currently accepted
    pub fn is_awaiting_input(&self) -> bool {
        self.state == RoundState::AwaitingInput
    }

    /// The full sequence, in playback order
    pub fn signals(&self) -> &[Signal] {
        self.engine.signals()
    }

    /// Current sequence length
    pub fn sequence_len(&self) -> usize {
        self.engine.len()
    }

    /// Number of signals the player has entered this round
    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    fn invalid(&self, operation: &'static str) -> MimicError {
        MimicError::InvalidState {
            operation,
            state: self.state,
        }
    }
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

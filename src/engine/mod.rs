//! Game Engine Module
//!
//! The core state machine:
//! - Signal alphabet
//! - Sequence generation
//! - Round state machine and input validation
//! - Difficulty-derived pacing

pub mod round;
pub mod sequence;
pub mod signal;
pub mod timing;

pub use round::{RoundController, RoundState, SubmitOutcome};
pub use sequence::SequenceEngine;
pub use signal::Signal;
pub use timing::{
    Difficulty, PlaybackTimings, GAME_OVER_DELAY, LEVEL_UP_DELAY, START_DELAY,
};

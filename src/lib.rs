//! Mimic - Simon-style memory game engine
//!
//! The machine plays an ever-growing sequence of colored signals and the
//! player must reproduce it exactly; each success extends the sequence by
//! one, and any mismatch ends the round.
//!
//! # Architecture
//!
//! The crate is split along the time/logic seam:
//! - [`engine`]: the round/sequence state machine. Pure transitions, no
//!   clocks, no I/O.
//! - [`session`]: collaborator traits (playback, feedback, input) and the
//!   blocking single-threaded driver that owns timing and side effects.
//! - [`cli`]: terminal front end adapting stdin/stdout to the session
//!   contracts.

pub mod cli;
pub mod engine;
pub mod error;
pub mod session;

pub use error::{MimicError, Result};

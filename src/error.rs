//! Error handling for Mimic
//!
//! All recognized failures are local and non-fatal: the worst outcome of a
//! game-core error is an ignored input event. There is no user-facing error
//! state distinct from a lost round.

use thiserror::Error;

use crate::engine::RoundState;

/// Result type alias for Mimic operations
pub type Result<T> = std::result::Result<T, MimicError>;

/// Main error type for Mimic operations
#[derive(Error, Debug)]
pub enum MimicError {
    /// A signal was requested beyond the current sequence length.
    ///
    /// Internal programming error: under correct controller usage this
    /// never surfaces to a collaborator.
    #[error("Signal index {index} out of range (sequence length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A transition or input arrived in a state that does not accept it.
    ///
    /// Recovered by ignoring the event; nothing is mutated.
    #[error("'{operation}' is not valid in the {state} state")]
    InvalidState {
        operation: &'static str,
        state: RoundState,
    },
}

impl MimicError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            MimicError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            MimicError::InvalidState { .. } => "INVALID_STATE",
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            MimicError::IndexOutOfRange { .. } => false,
            MimicError::InvalidState { .. } => true,
        }
    }
}

//! Sequence generation
//!
//! `SequenceEngine` owns the canonical signal sequence: the ordered list of
//! signals the player must reproduce. The sequence is append-only within a
//! game and cleared on reset.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::Signal;
use crate::error::{MimicError, Result};

/// Owns the canonical signal sequence and its random growth
#[derive(Debug, Clone)]
pub struct SequenceEngine {
    sequence: Vec<Signal>,
    rng: StdRng,
}

impl SequenceEngine {
    /// Create an engine seeded from OS entropy
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic engine for reproducible games
    pub fn seeded(seed: u64) -> Self {
        Self {
            sequence: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Clear the sequence. No other side effects.
    pub fn reset(&mut self) {
        self.sequence.clear();
    }

    /// Append one uniformly random signal and return the new length.
    ///
    /// Each draw is independent over the full alphabet; consecutive repeats
    /// are allowed.
    pub fn extend(&mut self) -> u32 {
        let index = self.rng.gen_range(0..Signal::COUNT);
        self.sequence.push(Signal::ALL[index]);
        self.sequence.len() as u32
    }

    /// The signal at a zero-based index
    pub fn signal_at(&self, index: usize) -> Result<Signal> {
        self.sequence
            .get(index)
            .copied()
            .ok_or(MimicError::IndexOutOfRange {
                index,
                len: self.sequence.len(),
            })
    }

    /// Current sequence length
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// True if no signals have been generated yet
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The full sequence, in playback order
    pub fn signals(&self) -> &[Signal] {
        &self.sequence
    }
}

impl Default for SequenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_empty() {
        let engine = SequenceEngine::seeded(1);
        assert!(engine.is_empty());
        assert_eq!(engine.len(), 0);
    }

    #[test]
    fn test_extend_grows_by_exactly_one() {
        let mut engine = SequenceEngine::seeded(1);
        for expected in 1..=20u32 {
            let len = engine.extend();
            assert_eq!(len, expected);
            assert_eq!(engine.len() as u32, expected);
        }
    }

    #[test]
    fn test_extend_only_appends() {
        let mut engine = SequenceEngine::seeded(7);
        engine.extend();
        engine.extend();
        let prefix = engine.signals().to_vec();

        engine.extend();
        assert_eq!(&engine.signals()[..2], prefix.as_slice());
    }

    #[test]
    fn test_signal_at_in_range() {
        let mut engine = SequenceEngine::seeded(2);
        engine.extend();
        let expected = engine.signals()[0];
        assert_eq!(engine.signal_at(0).unwrap(), expected);
    }

    #[test]
    fn test_signal_at_out_of_range() {
        let mut engine = SequenceEngine::seeded(2);
        engine.extend();

        let err = engine.signal_at(1).unwrap_err();
        assert_eq!(err.error_code(), "INDEX_OUT_OF_RANGE");
    }

    #[test]
    fn test_reset_clears_sequence() {
        let mut engine = SequenceEngine::seeded(3);
        engine.extend();
        engine.extend();
        assert_eq!(engine.len(), 2);

        engine.reset();
        assert!(engine.is_empty());
        assert_eq!(engine.extend(), 1);
    }

    #[test]
    fn test_seeded_engines_are_deterministic() {
        let mut a = SequenceEngine::seeded(42);
        let mut b = SequenceEngine::seeded(42);
        for _ in 0..32 {
            a.extend();
            b.extend();
        }
        assert_eq!(a.signals(), b.signals());
    }

    #[test]
    fn test_draws_cover_the_alphabet() {
        // With 256 uniform draws, missing any of the four signals is
        // astronomically unlikely for a fixed seed.
        let mut engine = SequenceEngine::seeded(5);
        for _ in 0..256 {
            engine.extend();
        }
        for signal in Signal::ALL {
            assert!(
                engine.signals().contains(&signal),
                "signal {signal} never drawn"
            );
        }
    }
}

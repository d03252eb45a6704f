//! Difficulty and pacing
//!
//! Difficulty selects the base time unit; every per-signal pacing delay is
//! derived from it. The post-round delays are fixed and do not scale with
//! difficulty.

use std::fmt;
use std::time::Duration;

/// Pause between starting a game and the first playback
pub const START_DELAY: Duration = Duration::from_millis(1000);

/// Pause after a won round before the next round's playback begins
pub const LEVEL_UP_DELAY: Duration = Duration::from_millis(1000);

/// Cool-down after a lost round before the game returns to idle
pub const GAME_OVER_DELAY: Duration = Duration::from_millis(2000);

/// Playback pacing preset, fixed for the duration of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Difficulty {
    /// Base time unit all pacing delays derive from
    pub fn time_unit(&self) -> Duration {
        match self {
            Difficulty::Slow => Duration::from_millis(1400),
            Difficulty::Normal => Duration::from_millis(1000),
            Difficulty::Fast => Duration::from_millis(600),
        }
    }

    /// Per-signal pacing delays for this difficulty
    pub fn timings(&self) -> PlaybackTimings {
        let unit = self.time_unit();
        PlaybackTimings {
            pre_gap: unit / 2,
            hold: unit / 2,
            post_gap: unit / 4,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Slow => write!(f, "slow"),
            Difficulty::Normal => write!(f, "normal"),
            Difficulty::Fast => write!(f, "fast"),
        }
    }
}

/// Per-signal pacing delays
///
/// A signal's display cycle is: wait `pre_gap`, highlight for `hold` (the
/// playback sink suspends this long), wait `post_gap`. Cycles never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTimings {
    /// Silence before the signal lights up
    pub pre_gap: Duration,
    /// How long the signal stays lit
    pub hold: Duration,
    /// Silence after the signal goes dark
    pub post_gap: Duration,
}

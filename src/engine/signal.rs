//! The signal alphabet
//!
//! Four colored signals form the fixed symbol set the game draws from.

use std::fmt;

/// One discrete game symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Green,
    Red,
    Yellow,
    Blue,
}

impl Signal {
    /// All signals, in canonical order
    pub const ALL: [Signal; 4] = [Signal::Green, Signal::Red, Signal::Yellow, Signal::Blue];

    /// Size of the alphabet
    pub const COUNT: usize = Self::ALL.len();

    /// Lowercase color name
    pub fn name(&self) -> &'static str {
        match self {
            Signal::Green => "green",
            Signal::Red => "red",
            Signal::Yellow => "yellow",
            Signal::Blue => "blue",
        }
    }

    /// Map a raw input token to a signal.
    ///
    /// Accepts full color names and single-letter aliases, case-insensitive,
    /// with surrounding whitespace. Returns `None` for anything else; the
    /// hosting layer ignores unrecognized input rather than submitting it.
    pub fn from_input(token: &str) -> Option<Signal> {
        match token.trim().to_ascii_lowercase().as_str() {
            "green" | "g" => Some(Signal::Green),
            "red" | "r" => Some(Signal::Red),
            "yellow" | "y" => Some(Signal::Yellow),
            "blue" | "b" => Some(Signal::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

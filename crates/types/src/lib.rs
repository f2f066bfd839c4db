//! Core types module - shared data structures for the quiz
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (session logic, terminal rendering, result recording).
//!
//! # Examples
//!
//! ```
//! use natty_types::{Guess, Intent, RoundPhase, Score};
//!
//! // Guesses convert to and from the "guessed natural" flag
//! assert_eq!(Guess::from_natural(true), Guess::Natural);
//! assert!(!Guess::Enhanced.is_natural());
//!
//! // Parse an intent (case-insensitive)
//! assert_eq!(Intent::from_str("natty"), Some(Intent::Guess(Guess::Natural)));
//! assert_eq!(Intent::from_str("NEXT"), Some(Intent::Advance));
//!
//! // Every round starts presenting its item
//! assert!(RoundPhase::Presenting.accepts_guess());
//!
//! // A fresh score is all zeros
//! assert_eq!(Score::default(), Score::new(0, 0, 0));
//! ```

/// One quiz subject.
///
/// Items are compile-time data and never mutated; identity is the position in
/// the catalog they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub name: &'static str,
    /// Opaque locator for the subject's image (a URL in the built-in catalog).
    pub image_ref: &'static str,
    /// Ground truth: `true` when the physique is natural.
    pub is_natural: bool,
    pub explanation: &'static str,
}

impl Item {
    pub const fn new(
        name: &'static str,
        image_ref: &'static str,
        is_natural: bool,
        explanation: &'static str,
    ) -> Self {
        Self {
            name,
            image_ref,
            is_natural,
            explanation,
        }
    }

    /// The guess that would be scored as correct for this item.
    pub fn answer(&self) -> Guess {
        Guess::from_natural(self.is_natural)
    }
}

/// A player's answer for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guess {
    Natural,
    Enhanced,
}

impl Guess {
    pub fn from_natural(guessed_natural: bool) -> Self {
        if guessed_natural {
            Guess::Natural
        } else {
            Guess::Enhanced
        }
    }

    pub fn is_natural(&self) -> bool {
        matches!(self, Guess::Natural)
    }

    /// Parse a guess from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use natty_types::Guess;
    ///
    /// assert_eq!(Guess::from_str("Natural"), Some(Guess::Natural));
    /// assert_eq!(Guess::from_str("juiced"), Some(Guess::Enhanced));
    /// assert_eq!(Guess::from_str("maybe"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "natural" | "natty" => Some(Guess::Natural),
            "enhanced" | "juiced" => Some(Guess::Enhanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Guess::Natural => "natural",
            Guess::Enhanced => "enhanced",
        }
    }

    /// Display label used by the terminal front end.
    pub fn label(&self) -> &'static str {
        match self {
            Guess::Natural => "NATTY",
            Guess::Enhanced => "NOT NATTY",
        }
    }
}

impl From<bool> for Guess {
    fn from(guessed_natural: bool) -> Self {
        Guess::from_natural(guessed_natural)
    }
}

/// Round lifecycle states
///
/// - **Presenting**: item shown, guess input enabled (awaiting a guess)
/// - **Revealed**: guess recorded, outcome and explanation visible
///
/// The cycle goes: Presenting → Revealed → (advance) → Presenting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    Presenting,
    Revealed,
}

impl RoundPhase {
    pub fn accepts_guess(&self) -> bool {
        matches!(self, RoundPhase::Presenting)
    }

    pub fn can_advance(&self) -> bool {
        matches!(self, RoundPhase::Revealed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundPhase::Presenting => "presenting",
            RoundPhase::Revealed => "revealed",
        }
    }
}

/// Running totals for one session.
///
/// Invariant: `correct <= total`. The streak counts consecutive correct
/// guesses and drops to zero on any miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
    pub streak: u32,
}

impl Score {
    pub const fn new(correct: u32, total: u32, streak: u32) -> Self {
        Self {
            correct,
            total,
            streak,
        }
    }

    /// Integer accuracy percentage (0 before the first round).
    ///
    /// # Examples
    ///
    /// ```
    /// use natty_types::Score;
    ///
    /// assert_eq!(Score::new(0, 0, 0).accuracy_percent(), 0);
    /// assert_eq!(Score::new(2, 3, 1).accuracy_percent(), 66);
    /// assert_eq!(Score::new(4, 4, 4).accuracy_percent(), 100);
    /// ```
    pub fn accuracy_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct as u64 * 100) / self.total as u64) as u32
    }
}

/// User intents that drive the session controller
///
/// These are emitted by the presentation layer (keyboard, tests, scripted
/// input) and applied one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Build a fresh deck and present the first item
    Start,
    /// Answer the current round
    Guess(Guess),
    /// Move on to the next item (only after the reveal)
    Advance,
    /// Clear the score and start over with a fresh deck
    Reset,
}

impl Intent {
    /// Parse intent from string
    ///
    /// # Examples
    ///
    /// ```
    /// use natty_types::{Guess, Intent};
    ///
    /// assert_eq!(Intent::from_str("start"), Some(Intent::Start));
    /// assert_eq!(Intent::from_str("enhanced"), Some(Intent::Guess(Guess::Enhanced)));
    /// assert_eq!(Intent::from_str("advance"), Some(Intent::Advance));
    /// assert_eq!(Intent::from_str("Reset"), Some(Intent::Reset));
    /// assert_eq!(Intent::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Intent::Start),
            "advance" | "next" => Some(Intent::Advance),
            "reset" => Some(Intent::Reset),
            other => Guess::from_str(other).map(Intent::Guess),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Start => "start",
            Intent::Guess(guess) => guess.as_str(),
            Intent::Advance => "advance",
            Intent::Reset => "reset",
        }
    }
}

//! Round module - the lifecycle of one quiz item
//!
//! A round is dealt in [`RoundPhase::Presenting`] and accepts exactly one
//! guess, which moves it to [`RoundPhase::Revealed`]. Rounds never go back;
//! the session replaces a revealed round with a freshly dealt one on advance.

use crate::error::SessionError;
use crate::types::{Guess, Item, RoundPhase};

/// The round currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub item: Item,
    guess: Option<Guess>,
}

impl Round {
    /// Deal a new round for a catalog item.
    pub fn deal(item: Item) -> Self {
        Self {
            item,
            guess: None,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        match self.guess {
            None => RoundPhase::Presenting,
            Some(_) => RoundPhase::Revealed,
        }
    }

    pub fn guess(&self) -> Option<Guess> {
        self.guess
    }

    /// Whether the recorded guess matched the ground truth (`None` until revealed).
    pub fn outcome(&self) -> Option<bool> {
        self.guess.map(|guess| guess == self.item.answer())
    }

    /// Record the player's answer and reveal the outcome.
    ///
    /// Only the first guess counts; later guesses are rejected and leave the
    /// round untouched.
    pub fn submit(&mut self, guess: Guess) -> Result<bool, SessionError> {
        if !self.phase().accepts_guess() {
            return Err(SessionError::invalid(guess.as_str(), RoundPhase::Revealed.as_str()));
        }
        self.guess = Some(guess);
        Ok(guess == self.item.answer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NATURAL: Item = Item::new("A", "a.jpg", true, "natural");
    const ENHANCED: Item = Item::new("B", "b.jpg", false, "enhanced");

    #[test]
    fn new_round_is_presenting() {
        let round = Round::deal(NATURAL);
        assert_eq!(round.phase(), RoundPhase::Presenting);
        assert_eq!(round.guess(), None);
        assert_eq!(round.outcome(), None);
    }

    #[test]
    fn correct_guess_reveals_hit() {
        let mut round = Round::deal(ENHANCED);
        assert_eq!(round.submit(Guess::Enhanced), Ok(true));
        assert_eq!(round.phase(), RoundPhase::Revealed);
        assert_eq!(round.outcome(), Some(true));
    }

    #[test]
    fn wrong_guess_reveals_miss() {
        let mut round = Round::deal(NATURAL);
        assert_eq!(round.submit(Guess::Enhanced), Ok(false));
        assert_eq!(round.outcome(), Some(false));
    }

    #[test]
    fn second_guess_is_rejected() {
        let mut round = Round::deal(NATURAL);
        round.submit(Guess::Natural).unwrap();

        let err = round.submit(Guess::Enhanced).unwrap_err();
        assert!(err.is_invalid_state());
        assert_eq!(round.guess(), Some(Guess::Natural));
        assert_eq!(round.outcome(), Some(true));
    }
}

use crate::recorder::RecorderStatus;
use crate::types::{Guess, Item, RoundPhase, Score};

/// Owned, read-only view of the session for presentation.
///
/// Nothing in here refers back into the session, so a snapshot can be kept
/// across intents and compared with the next one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub started: bool,
    pub epoch: u32,
    /// Position within the current deck.
    pub position: usize,
    pub deck_len: usize,
    /// Number of rounds revealed this epoch.
    pub rounds_played: u64,
    pub item: Option<Item>,
    pub phase: Option<RoundPhase>,
    /// Present only once the round is revealed.
    pub guess: Option<Guess>,
    pub outcome: Option<bool>,
    pub score: Score,
    pub recorder: RecorderStatus,
}

impl SessionSnapshot {
    pub fn is_revealed(&self) -> bool {
        self.phase == Some(RoundPhase::Revealed)
    }

    pub fn accepts_guess(&self) -> bool {
        self.phase.is_some_and(|phase| phase.accepts_guess())
    }

    /// Explanation text, only once the answer has been revealed.
    pub fn explanation(&self) -> Option<&'static str> {
        if self.is_revealed() {
            self.item.map(|item| item.explanation)
        } else {
            None
        }
    }
}

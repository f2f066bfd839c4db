//! Result recording boundary (session side).
//!
//! The session hands every completed round to a [`RecordSink`] as an owned
//! [`RecordTicket`] and moves on immediately. Whatever persists the record
//! reports back later with a [`RecorderEvent`], which the session folds into
//! its [`RecorderStatus`] only if it belongs to the current epoch.

use serde::Serialize;

use crate::round::Round;
use crate::types::Score;

/// One completed round, as handed to the result store.
///
/// Field names on the wire follow the stored game-result entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    #[serde(rename = "image_url")]
    pub image_ref: String,
    pub person_name: String,
    pub is_natural: bool,
    pub user_guess: bool,
    pub was_correct: bool,
    /// Correct count after this round was scored.
    #[serde(rename = "score")]
    pub score_after: u32,
}

impl RoundRecord {
    /// Build the record for a revealed round. Returns `None` while the round
    /// is still waiting for a guess.
    pub fn from_round(round: &Round, score_after: Score) -> Option<Self> {
        let guess = round.guess()?;
        let was_correct = round.outcome()?;
        Some(Self {
            image_ref: round.item.image_ref.to_string(),
            person_name: round.item.name.to_string(),
            is_natural: round.item.is_natural,
            user_guess: guess.is_natural(),
            was_correct,
            score_after: score_after.correct,
        })
    }
}

/// A record tagged with the session epoch and round sequence it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTicket {
    pub epoch: u32,
    pub round_seq: u64,
    pub record: RoundRecord,
}

/// Completion report for one ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderEvent {
    pub epoch: u32,
    pub round_seq: u64,
    pub result: Result<(), String>,
}

impl RecorderEvent {
    pub fn succeeded(ticket: &RecordTicket) -> Self {
        Self {
            epoch: ticket.epoch,
            round_seq: ticket.round_seq,
            result: Ok(()),
        }
    }

    pub fn failed(ticket: &RecordTicket, message: impl Into<String>) -> Self {
        Self {
            epoch: ticket.epoch,
            round_seq: ticket.round_seq,
            result: Err(message.into()),
        }
    }
}

/// Where completed rounds go.
///
/// `submit` must not block: implementations queue or spawn the save and
/// report its completion out of band.
pub trait RecordSink {
    fn submit(&mut self, ticket: RecordTicket);
}

impl<S: RecordSink + ?Sized> RecordSink for Box<S> {
    fn submit(&mut self, ticket: RecordTicket) {
        (**self).submit(ticket);
    }
}

/// Sink that drops every ticket.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RecordSink for NullSink {
    fn submit(&mut self, _ticket: RecordTicket) {}
}

/// Recorder bookkeeping for the current epoch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecorderStatus {
    /// Tickets submitted this epoch with no completion observed yet.
    pub pending: u32,
    pub failures: u32,
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Guess, Item};

    const ITEM: Item = Item::new("Steve", "steve.jpg", true, "classic");

    #[test]
    fn presenting_round_has_no_record() {
        let round = Round::deal(ITEM);
        assert!(RoundRecord::from_round(&round, Score::default()).is_none());
    }

    #[test]
    fn record_copies_round_fields() {
        let mut round = Round::deal(ITEM);
        round.submit(Guess::Enhanced).unwrap();

        let record = RoundRecord::from_round(&round, Score::new(4, 7, 0)).unwrap();
        assert_eq!(record.image_ref, "steve.jpg");
        assert_eq!(record.person_name, "Steve");
        assert!(record.is_natural);
        assert!(!record.user_guess);
        assert!(!record.was_correct);
        assert_eq!(record.score_after, 4);
    }

    #[test]
    fn record_serializes_with_entity_field_names() {
        let mut round = Round::deal(ITEM);
        round.submit(Guess::Natural).unwrap();
        let record = RoundRecord::from_round(&round, Score::new(1, 1, 1)).unwrap();

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["image_url"], "steve.jpg");
        assert_eq!(value["person_name"], "Steve");
        assert_eq!(value["user_guess"], true);
        assert_eq!(value["was_correct"], true);
        assert_eq!(value["score"], 1);
    }

    #[test]
    fn events_carry_ticket_tags() {
        let mut round = Round::deal(ITEM);
        round.submit(Guess::Natural).unwrap();
        let ticket = RecordTicket {
            epoch: 3,
            round_seq: 9,
            record: RoundRecord::from_round(&round, Score::new(1, 1, 1)).unwrap(),
        };

        let ok = RecorderEvent::succeeded(&ticket);
        assert_eq!((ok.epoch, ok.round_seq, ok.result), (3, 9, Ok(())));

        let err = RecorderEvent::failed(&ticket, "disk full");
        assert_eq!(err.result, Err("disk full".to_string()));
    }
}

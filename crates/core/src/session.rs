//! Session module - the quiz controller
//!
//! This module ties together the catalog, deck shuffling, the round machine,
//! scoring and the result sink. All intents are applied through `&mut self`,
//! so they are serialized by construction; the only concurrent work is
//! whatever the [`RecordSink`] does with a submitted ticket.
//!
//! Every `start`/`reset` opens a new *epoch*. Tickets are tagged with the
//! epoch they were produced in, and recorder completions from an older epoch
//! are dropped instead of touching the new epoch's status.

use crate::catalog::Catalog;
use crate::deck::{self, Deck};
use crate::error::SessionError;
use crate::recorder::{NullSink, RecordSink, RecordTicket, RecorderEvent, RecorderStatus, RoundRecord};
use crate::rng::{RandomSource, SimpleRng};
use crate::round::Round;
use crate::scoring;
use crate::snapshot::SessionSnapshot;
use crate::types::{Guess, Intent, Item, RoundPhase, Score};

type Subscriber = Box<dyn FnMut(&SessionSnapshot)>;

/// Complete session state.
pub struct Session<R = SimpleRng, S = NullSink> {
    catalog: Catalog,
    rng: R,
    sink: S,
    deck: Deck,
    position: usize,
    round: Option<Round>,
    score: Score,
    /// Monotonic epoch id (increments on start and reset).
    epoch: u32,
    /// Rounds revealed in the current epoch; tags recorder tickets.
    round_seq: u64,
    recorder: RecorderStatus,
    subscribers: Vec<Subscriber>,
}

impl Session<SimpleRng, NullSink> {
    /// Session over the built-in catalog, seeded from the OS, discarding results.
    pub fn with_defaults() -> Result<Self, SessionError> {
        Self::new(Catalog::physiques(), SimpleRng::from_entropy(), NullSink)
    }
}

impl<R: RandomSource, S: RecordSink> Session<R, S> {
    /// Create an idle session. Nothing is dealt until [`Session::start`].
    pub fn new(catalog: Catalog, rng: R, sink: S) -> Result<Self, SessionError> {
        if catalog.is_empty() {
            return Err(SessionError::EmptyCatalog);
        }
        Ok(Self {
            catalog,
            rng,
            sink,
            deck: Deck::default(),
            position: 0,
            round: None,
            score: Score::default(),
            epoch: 0,
            round_seq: 0,
            recorder: RecorderStatus::default(),
            subscribers: Vec::new(),
        })
    }

    pub fn started(&self) -> bool {
        self.round.is_some()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn phase(&self) -> Option<RoundPhase> {
        self.round.map(|round| round.phase())
    }

    pub fn current_item(&self) -> Option<Item> {
        self.round.map(|round| round.item)
    }

    pub fn recorder_status(&self) -> &RecorderStatus {
        &self.recorder
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Register an observer called with a fresh snapshot after every state change.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&SessionSnapshot) + 'static,
    {
        self.subscribers.push(Box::new(observer));
    }

    /// Deal the first deck and present its first item.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.started() {
            return Err(SessionError::invalid("start", self.state_name()));
        }
        self.begin_epoch()?;
        tracing::debug!(epoch = self.epoch, deck_len = self.deck.len(), "session started");
        self.notify();
        Ok(())
    }

    /// Answer the current round. Returns whether the guess was correct.
    pub fn guess(&mut self, guessed_natural: bool) -> Result<bool, SessionError> {
        let guess = Guess::from_natural(guessed_natural);
        let state = self.state_name();
        let round = self
            .round
            .as_mut()
            .ok_or(SessionError::invalid(guess.as_str(), state))?;

        let outcome = round.submit(guess)?;
        let round = *round;

        self.score = scoring::record(outcome, self.score);
        self.round_seq = self.round_seq.wrapping_add(1);

        tracing::debug!(
            epoch = self.epoch,
            round = self.round_seq,
            item = round.item.name,
            guess = guess.as_str(),
            outcome,
            correct = self.score.correct,
            total = self.score.total,
            streak = self.score.streak,
            "round revealed"
        );

        if let Some(record) = RoundRecord::from_round(&round, self.score) {
            self.recorder.pending = self.recorder.pending.saturating_add(1);
            self.sink.submit(RecordTicket {
                epoch: self.epoch,
                round_seq: self.round_seq,
                record,
            });
        }

        self.notify();
        Ok(outcome)
    }

    /// Move on from a revealed round to the next item, reshuffling when the
    /// deck runs out. The score carries over.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        match self.phase() {
            Some(phase) if phase.can_advance() => {}
            _ => return Err(SessionError::invalid("advance", self.state_name())),
        }

        let next = self.position + 1;
        if next >= self.deck.len() {
            self.deck = deck::shuffle(&self.catalog, &mut self.rng);
            self.position = 0;
            tracing::debug!(epoch = self.epoch, "deck exhausted, reshuffled");
        } else {
            self.position = next;
        }
        self.deal()?;
        self.notify();
        Ok(())
    }

    /// Clear the score and start over on a freshly shuffled deck.
    ///
    /// Recorder calls still in flight for the previous epoch are not
    /// cancelled; their completions are ignored.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if !self.started() {
            return Err(SessionError::invalid("reset", self.state_name()));
        }
        let previous = self.epoch;
        self.begin_epoch()?;
        tracing::debug!(previous, epoch = self.epoch, "session reset");
        self.notify();
        Ok(())
    }

    /// Apply any intent.
    pub fn apply_intent(&mut self, intent: Intent) -> Result<(), SessionError> {
        let result = match intent {
            Intent::Start => self.start(),
            Intent::Guess(guess) => self.guess(guess.is_natural()).map(|_| ()),
            Intent::Advance => self.advance(),
            Intent::Reset => self.reset(),
        };
        if let Err(err) = &result {
            tracing::debug!(intent = intent.as_str(), %err, "intent rejected");
        }
        result
    }

    /// Fold a recorder completion into the status of the current epoch.
    ///
    /// Returns `false` (and changes nothing) for completions from an earlier epoch.
    pub fn observe_recorder(&mut self, event: RecorderEvent) -> bool {
        if event.epoch != self.epoch {
            tracing::debug!(
                event_epoch = event.epoch,
                epoch = self.epoch,
                round = event.round_seq,
                "dropping recorder completion from a previous epoch"
            );
            return false;
        }

        self.recorder.pending = self.recorder.pending.saturating_sub(1);
        if let Err(message) = event.result {
            tracing::warn!(round = event.round_seq, error = %message, "failed to save round result");
            self.recorder.failures = self.recorder.failures.saturating_add(1);
            self.recorder.last_error = Some(message);
        }
        self.notify();
        true
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let round = self.round;
        SessionSnapshot {
            started: self.started(),
            epoch: self.epoch,
            position: self.position,
            deck_len: self.deck.len(),
            rounds_played: self.round_seq,
            item: round.map(|r| r.item),
            phase: round.map(|r| r.phase()),
            guess: round.and_then(|r| r.guess()),
            outcome: round.and_then(|r| r.outcome()),
            score: self.score,
            recorder: self.recorder.clone(),
        }
    }

    fn begin_epoch(&mut self) -> Result<(), SessionError> {
        self.epoch = self.epoch.wrapping_add(1);
        self.round_seq = 0;
        self.score = Score::default();
        self.recorder = RecorderStatus::default();
        self.deck = deck::shuffle(&self.catalog, &mut self.rng);
        self.position = 0;
        self.deal()
    }

    fn deal(&mut self) -> Result<(), SessionError> {
        let item = self
            .deck
            .get(self.position)
            .and_then(|index| self.catalog.get(index))
            .ok_or(SessionError::DeckOutOfRange {
                position: self.position,
                deck_len: self.deck.len(),
            })?;
        self.round = Some(Round::deal(*item));
        Ok(())
    }

    fn state_name(&self) -> &'static str {
        match self.phase() {
            None => "not started",
            Some(phase) => phase.as_str(),
        }
    }

    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.subscribers {
            observer(&snapshot);
        }
    }
}

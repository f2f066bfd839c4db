//! Core quiz logic - pure, deterministic, and testable
//!
//! This crate contains the session controller and everything it is built from.
//! It has **no dependencies** on terminals, async runtimes or storage:
//!
//! - **Deterministic**: same seed produces the same decks (for tests and replays)
//! - **Testable**: every transition is a plain method call on [`Session`]
//! - **Portable**: results leave through the [`RecordSink`] trait, so any
//!   persistence layer (or none) can sit behind it
//!
//! # Module Structure
//!
//! - [`catalog`]: the fixed set of quiz items
//! - [`rng`]: injectable random sources (seeded LCG by default)
//! - [`deck`]: Fisher-Yates shuffling of the catalog into a deck
//! - [`round`]: present → reveal lifecycle of a single item
//! - [`scoring`]: pure score folding (correct, total, streak)
//! - [`recorder`]: round records, tickets and the sink boundary
//! - [`session`]: the controller that drives all of the above
//! - [`snapshot`]: owned views handed to presentation
//!
//! # Example
//!
//! ```
//! use natty_core::{Catalog, NullSink, Session, SimpleRng};
//! use natty_core::types::{Guess, Intent, RoundPhase};
//!
//! let mut session = Session::new(Catalog::physiques(), SimpleRng::new(12345), NullSink).unwrap();
//! session.apply_intent(Intent::Start).unwrap();
//!
//! let natural = session.current_item().unwrap().is_natural;
//! session.apply_intent(Intent::Guess(Guess::from_natural(natural))).unwrap();
//!
//! let snap = session.snapshot();
//! assert_eq!(snap.phase, Some(RoundPhase::Revealed));
//! assert_eq!(snap.score.correct, 1);
//! assert_eq!(snap.score.streak, 1);
//!
//! session.apply_intent(Intent::Advance).unwrap();
//! assert_eq!(session.position(), 1);
//! ```

pub mod catalog;
pub mod deck;
pub mod error;
pub mod recorder;
pub mod rng;
pub mod round;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use natty_types as types;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, PHYSIQUES};
pub use deck::{shuffle, Deck};
pub use error::SessionError;
pub use recorder::{NullSink, RecordSink, RecordTicket, RecorderEvent, RecorderStatus, RoundRecord};
pub use rng::{RandomSource, SimpleRng};
pub use round::Round;
pub use session::Session;
pub use snapshot::SessionSnapshot;

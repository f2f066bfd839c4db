//! Session error types.

use thiserror::Error;

/// Errors surfaced by the session controller.
///
/// No variant leaves the session in a modified state: a rejected intent is a
/// no-op, and an empty catalog prevents the session from existing at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The intent is illegal in the current state (e.g. a second guess, or any
    /// intent before `start`).
    #[error("`{intent}` is not allowed while the session is {state}")]
    InvalidState {
        intent: &'static str,
        state: &'static str,
    },

    /// The catalog has no items, so no deck can be dealt.
    #[error("cannot start a session over an empty catalog")]
    EmptyCatalog,

    /// The deck and the catalog disagree: a deck position or the catalog
    /// index it holds does not resolve to an item.
    #[error("deck position {position} does not resolve to an item (deck holds {deck_len})")]
    DeckOutOfRange { position: usize, deck_len: usize },
}

impl SessionError {
    pub(crate) fn invalid(intent: &'static str, state: &'static str) -> Self {
        SessionError::InvalidState { intent, state }
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, SessionError::InvalidState { .. })
    }
}

//! Natty or Not (workspace facade crate).
//!
//! Re-exports the member crates as `natty_or_not::{core, recorder, input, term, types}`
//! while the implementation lives in dedicated crates under `crates/`.

pub use natty_core as core;
pub use natty_input as input;
pub use natty_recorder as recorder;
pub use natty_term as term;
pub use natty_types as types;

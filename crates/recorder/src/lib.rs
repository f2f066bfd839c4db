//! Recorder module - best-effort persistence of completed rounds
//!
//! The session controller is synchronous and must never wait on storage. This
//! crate bridges it to an async result store:
//!
//! 1. **Submit**: the session hands a [`RecordTicket`](natty_core::RecordTicket)
//!    to [`RecorderRuntime`] through the `RecordSink` trait
//! 2. **Save**: the runtime spawns one tokio task per ticket that calls
//!    [`ResultRecorder::save`] exactly once (no retries)
//! 3. **Report**: the task sends a [`RecorderEvent`](natty_core::RecorderEvent)
//!    back over a channel; the intent loop polls it with
//!    [`RecorderRuntime::try_recv`] and feeds it to `Session::observe_recorder`
//!
//! # Stores
//!
//! - [`JsonlRecorder`]: appends one JSON object per round to a file
//! - [`MemoryRecorder`]: keeps records in memory, optionally failing every save
//!
//! # Environment Variables
//!
//! - `NATTY_RESULTS_PATH`: JSON-lines result log (default: "natty-results.jsonl")
//! - `NATTY_RECORDER_DISABLED`: set to "1" or "true" to keep results in memory only
//!
//! # Record Format
//!
//! ```text
//! {"image_url":"https://...","person_name":"Steve Reeves","is_natural":true,"user_guess":true,"was_correct":true,"score":1,"recorded_at":"2026-10-18T12:00:00+00:00"}
//! ```

pub mod config;
pub mod runtime;
pub mod store;

pub use natty_core as core;
pub use natty_types as types;

pub use config::RecorderConfig;
pub use runtime::RecorderRuntime;
pub use store::{JsonlRecorder, MemoryRecorder, RecorderError, ResultRecorder};

//! Recorder runtime integration.
//!
//! Bridges the sync intent loop with the async result store.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::config::RecorderConfig;
use crate::core::{RecordSink, RecordTicket, RecorderEvent};
use crate::store::{JsonlRecorder, MemoryRecorder, ResultRecorder};

/// Running recorder instance.
///
/// Owns its own tokio runtime, so it must be created and dropped outside of
/// any async context.
pub struct RecorderRuntime {
    rt: Runtime,
    recorder: Arc<dyn ResultRecorder>,
    event_tx: mpsc::UnboundedSender<RecorderEvent>,
    event_rx: mpsc::UnboundedReceiver<RecorderEvent>,
    /// Tickets submitted whose completion has not been received yet.
    outstanding: usize,
}

impl RecorderRuntime {
    pub fn new(recorder: Arc<dyn ResultRecorder>) -> Result<Self> {
        let rt = Runtime::new().context("failed to create recorder runtime")?;
        let (event_tx, event_rx) = mpsc::unbounded_channel::<RecorderEvent>();
        Ok(Self {
            rt,
            recorder,
            event_tx,
            event_rx,
            outstanding: 0,
        })
    }

    /// Start the recorder described by `config`.
    pub fn from_config(config: &RecorderConfig) -> Result<Self> {
        if config.disabled {
            tracing::info!("result log disabled, keeping results in memory");
            return Self::new(Arc::new(MemoryRecorder::new()));
        }
        tracing::info!(path = %config.results_path.display(), "recording results");
        Self::new(Arc::new(JsonlRecorder::new(config.results_path.clone())))
    }

    /// Start the recorder from environment variables.
    pub fn start_from_env() -> Result<Self> {
        Self::from_config(&RecorderConfig::from_env())
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Next completion, if one has arrived.
    pub fn try_recv(&mut self) -> Option<RecorderEvent> {
        let event = self.event_rx.try_recv().ok()?;
        self.outstanding = self.outstanding.saturating_sub(1);
        Some(event)
    }

    /// Wait up to `timeout` for every outstanding save to complete.
    ///
    /// Returns the completions received; anything still running after the
    /// deadline is left behind.
    pub fn flush(&mut self, timeout: Duration) -> Vec<RecorderEvent> {
        let deadline = Instant::now() + timeout;
        let mut events = Vec::new();

        while self.outstanding > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            let rx = &mut self.event_rx;
            // The timer must be created inside the runtime.
            let received = self
                .rt
                .block_on(async { tokio::time::timeout(remaining, rx.recv()).await });
            match received {
                Ok(Some(event)) => {
                    self.outstanding -= 1;
                    events.push(event);
                }
                Ok(None) | Err(_) => break,
            }
        }

        if self.outstanding > 0 {
            tracing::warn!(outstanding = self.outstanding, "result saves still pending at flush deadline");
        }
        events
    }
}

impl RecordSink for RecorderRuntime {
    fn submit(&mut self, ticket: RecordTicket) {
        let recorder = Arc::clone(&self.recorder);
        let event_tx = self.event_tx.clone();
        self.outstanding += 1;

        self.rt.spawn(async move {
            let event = match recorder.save(&ticket.record).await {
                Ok(()) => RecorderEvent::succeeded(&ticket),
                Err(err) => {
                    tracing::warn!(
                        epoch = ticket.epoch,
                        round = ticket.round_seq,
                        error = %err,
                        "result recorder failed"
                    );
                    RecorderEvent::failed(&ticket, err.to_string())
                }
            };
            let _ = event_tx.send(event);
        });
    }
}

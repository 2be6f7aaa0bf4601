use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

use pb_core::clipboard::{ClipboardSnapshot, NativeClipboardEntry};
use pb_core::ports::{NativeClipboardError, NativeClipboardPort};

/// In-memory clipboard implementation.
///
/// Holds one ordered entry table, replaced wholesale on every write. Used by
/// tests and headless runs.
#[derive(Default)]
pub struct InMemoryNativeClipboard {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    entries: Vec<NativeClipboardEntry>,
    writes: usize,
    next_failure: Option<NativeClipboardError>,
}

impl InMemoryNativeClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard pre-populated as if another application had written it.
    pub fn with_entries(entries: Vec<NativeClipboardEntry>) -> Self {
        Self {
            state: Mutex::new(State {
                entries,
                ..State::default()
            }),
        }
    }

    /// Current contents, in write order. Empty if the state is poisoned.
    pub fn entries(&self) -> Vec<NativeClipboardEntry> {
        self.lock()
            .inspect_err(|e| warn!(error = %e, "cannot list in-memory clipboard entries"))
            .map(|s| s.entries.clone())
            .unwrap_or_default()
    }

    /// Number of successful `write_entries` calls so far.
    pub fn write_count(&self) -> usize {
        self.lock()
            .inspect_err(|e| warn!(error = %e, "cannot count in-memory clipboard writes"))
            .map(|s| s.writes)
            .unwrap_or_default()
    }

    /// Make the next read or write fail with `error`.
    pub fn fail_next(&self, error: NativeClipboardError) {
        match self.lock() {
            Ok(mut state) => state.next_failure = Some(error),
            Err(e) => warn!(error = %e, "failure injection dropped"),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, NativeClipboardError> {
        self.state.lock().map_err(|e| {
            NativeClipboardError::Unavailable(format!("clipboard state poisoned: {e}"))
        })
    }
}

#[async_trait]
impl NativeClipboardPort for InMemoryNativeClipboard {
    async fn write_entries(
        &self,
        entries: Vec<NativeClipboardEntry>,
    ) -> Result<(), NativeClipboardError> {
        let mut state = self.lock()?;
        if let Some(err) = state.next_failure.take() {
            return Err(err);
        }
        state.entries = entries;
        state.writes += 1;
        Ok(())
    }

    async fn read_snapshot(&self) -> Result<ClipboardSnapshot, NativeClipboardError> {
        let mut state = self.lock()?;
        if let Some(err) = state.next_failure.take() {
            return Err(err);
        }
        Ok(ClipboardSnapshot::new(
            chrono::Utc::now().timestamp_millis(),
            state.entries.clone(),
        ))
    }
}

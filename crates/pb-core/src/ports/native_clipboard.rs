//! Native clipboard port - the OS clipboard as seen by the engine
//!
//! The engine never talks to the OS directly. It hands a fully resolved entry
//! sequence to `write_entries` and resolves reads against one
//! `read_snapshot` result.

use async_trait::async_trait;
use thiserror::Error;

use crate::clipboard::{ClipboardSnapshot, NativeClipboardEntry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeClipboardError {
    #[error("clipboard access denied: {0}")]
    Denied(String),

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard io failed: {0}")]
    Io(String),
}

#[async_trait]
pub trait NativeClipboardPort: Send + Sync {
    /// Replace the whole clipboard with `entries`, in order.
    ///
    /// Implementations must either install every entry or leave the previous
    /// contents untouched.
    async fn write_entries(&self, entries: Vec<NativeClipboardEntry>)
        -> Result<(), NativeClipboardError>;

    /// Capture every `(format, bytes)` pair currently on the clipboard.
    async fn read_snapshot(&self) -> Result<ClipboardSnapshot, NativeClipboardError>;
}

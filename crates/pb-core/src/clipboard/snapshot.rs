use super::native::NativeClipboardEntry;

/// Contents of the OS clipboard, captured once at the start of a read.
///
/// Entry order is whatever the OS reported; it carries no meaning for
/// resolution beyond "first occurrence of a format name wins".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    pub ts_ms: i64,
    pub entries: Vec<NativeClipboardEntry>,
}

impl ClipboardSnapshot {
    pub fn new(ts_ms: i64, entries: Vec<NativeClipboardEntry>) -> Self {
        Self { ts_ms, entries }
    }

    /// Total byte size of every entry in the snapshot
    pub fn total_size_bytes(&self) -> usize {
        self.entries.iter().map(|e| e.size_bytes()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

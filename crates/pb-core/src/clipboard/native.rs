use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A format identifier as it appears in the OS clipboard's format table
/// (e.g. `public.utf8-plain-text`, `Web Custom Format`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeFormatName(String);

impl NativeFormatName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NativeFormatName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NativeFormatName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NativeFormatName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for NativeFormatName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NativeFormatName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One `(format, bytes)` pair destined for, or read from, the OS clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeClipboardEntry {
    pub format: NativeFormatName,
    pub bytes: Bytes,
}

impl NativeClipboardEntry {
    pub fn new(format: impl Into<NativeFormatName>, bytes: impl Into<Bytes>) -> Self {
        Self {
            format: format.into(),
            bytes: bytes.into(),
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

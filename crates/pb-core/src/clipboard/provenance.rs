use serde::{Deserialize, Serialize};
use std::fmt;

/// Which native namespace a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provenance {
    /// Standardized format, normalized before it reached the clipboard.
    Sanitized,
    /// Raw web payload under a browser-namespaced format name.
    Pickled,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Sanitized => "sanitized",
            Provenance::Pickled => "pickled",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

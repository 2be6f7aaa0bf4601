//! Clipboard domain models.
mod content_type;
mod item;
mod native;
mod provenance;
mod read_result;
mod snapshot;

pub use content_type::{ContentType, ContentTypeError, SEPARATOR};
pub use item::{ClipboardEntryRequest, ClipboardItem};
pub use native::{NativeClipboardEntry, NativeFormatName};
pub use provenance::Provenance;
pub use read_result::{ResolvedPayload, ResolvedReadResult};
pub use snapshot::ClipboardSnapshot;

use thiserror::Error;

use crate::clipboard::{ContentType, ContentTypeError};
use crate::ports::NativeClipboardError;

/// Failure of a clipboard read or write.
///
/// Every variant except `NativeClipboardFailure` is raised before the native
/// clipboard is touched.
#[derive(Debug, Error)]
pub enum PicklingError {
    #[error("pickled clipboard access requires transient user activation")]
    NoUserGesture,

    #[error("invalid content type: {0}")]
    InvalidContentType(#[from] ContentTypeError),

    #[error("content type {0} is neither a standardized format nor requested unsanitized")]
    UnsupportedFormat(ContentType),

    #[error("{requested} pickled formats requested, at most {limit} allowed per write")]
    TooManyPickledFormats { limit: usize, requested: usize },

    #[error("native clipboard failure: {0}")]
    NativeClipboardFailure(#[from] NativeClipboardError),
}

/// Stable identifiers for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PicklingErrorKind {
    NoUserGesture,
    InvalidContentType,
    UnsupportedFormat,
    TooManyPickledFormats,
    NativeClipboardFailure,
}

impl PicklingErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PicklingErrorKind::NoUserGesture => "NoUserGesture",
            PicklingErrorKind::InvalidContentType => "InvalidContentType",
            PicklingErrorKind::UnsupportedFormat => "UnsupportedFormat",
            PicklingErrorKind::TooManyPickledFormats => "TooManyPickledFormats",
            PicklingErrorKind::NativeClipboardFailure => "NativeClipboardFailure",
        }
    }
}

impl PicklingError {
    pub fn kind(&self) -> PicklingErrorKind {
        match self {
            PicklingError::NoUserGesture => PicklingErrorKind::NoUserGesture,
            PicklingError::InvalidContentType(_) => PicklingErrorKind::InvalidContentType,
            PicklingError::UnsupportedFormat(_) => PicklingErrorKind::UnsupportedFormat,
            PicklingError::TooManyPickledFormats { .. } => PicklingErrorKind::TooManyPickledFormats,
            PicklingError::NativeClipboardFailure(_) => PicklingErrorKind::NativeClipboardFailure,
        }
    }
}

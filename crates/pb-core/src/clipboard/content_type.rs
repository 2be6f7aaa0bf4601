use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The single separator between category and subtype.
pub const SEPARATOR: char = '/';

/// Longest segment accepted, per RFC 6838 restricted-name.
const MAX_SEGMENT_LEN: usize = 127;

/// Why a caller-supplied content type was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentTypeError {
    #[error("content type is empty")]
    Empty,

    #[error("content type {0:?} must contain exactly one '/'")]
    Separator(String),

    #[error("content type {0:?} has an empty segment")]
    EmptySegment(String),

    #[error("content type {value:?} has invalid character {ch:?}")]
    InvalidCharacter { value: String, ch: char },

    #[error("content type {0:?} has a segment that does not start with a letter or digit")]
    InvalidLeadingCharacter(String),

    #[error("content type {0:?} has a segment starting with an uppercase letter")]
    UppercaseLeadingLetter(String),

    #[error("content type {0:?} has a '.' in its category")]
    DottedCategory(String),

    #[error("content type {0:?} has a segment longer than 127 characters")]
    SegmentTooLong(String),
}

/// A validated `category/subtype` identifier.
///
/// Construction goes through [`ContentType::parse`], so every value in
/// circulation is guaranteed to survive all pickled name transforms. The
/// rules on top of "exactly one separator":
///
/// - segments use the RFC 6838 token characters and start with a letter or
///   digit,
/// - the category has no `.` (the reverse-DNS form joins with `.`),
/// - no segment starts with an uppercase ASCII letter (the capitalized-words
///   form uppercases it).
///
/// Case elsewhere in the value is preserved as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentType(String);

impl ContentType {
    pub fn parse(raw: &str) -> Result<Self, ContentTypeError> {
        if raw.is_empty() {
            return Err(ContentTypeError::Empty);
        }

        let mut parts = raw.split(SEPARATOR);
        let (category, subtype) = match (parts.next(), parts.next(), parts.next()) {
            (Some(category), Some(subtype), None) => (category, subtype),
            _ => return Err(ContentTypeError::Separator(raw.to_string())),
        };

        if category.is_empty() || subtype.is_empty() {
            return Err(ContentTypeError::EmptySegment(raw.to_string()));
        }

        if category.contains('.') {
            return Err(ContentTypeError::DottedCategory(raw.to_string()));
        }

        for segment in [category, subtype] {
            check_segment(raw, segment)?;
        }

        Ok(Self(raw.to_string()))
    }

    pub fn text_plain() -> Self {
        Self("text/plain".into())
    }

    pub fn text_html() -> Self {
        Self("text/html".into())
    }

    pub fn image_png() -> Self {
        Self("image/png".into())
    }

    pub fn image_svg() -> Self {
        Self("image/svg+xml".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn category(&self) -> &str {
        self.split().0
    }

    pub fn subtype(&self) -> &str {
        self.split().1
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    fn split(&self) -> (&str, &str) {
        // Invariant from `parse`: exactly one separator.
        self.0.split_once(SEPARATOR).unwrap_or((self.0.as_str(), ""))
    }
}

fn is_token_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '!' | '#' | '$' | '&' | '-' | '^' | '_' | '.' | '+')
}

fn check_segment(raw: &str, segment: &str) -> Result<(), ContentTypeError> {
    if segment.len() > MAX_SEGMENT_LEN {
        return Err(ContentTypeError::SegmentTooLong(raw.to_string()));
    }

    if let Some(ch) = segment.chars().find(|c| !is_token_char(*c)) {
        return Err(ContentTypeError::InvalidCharacter {
            value: raw.to_string(),
            ch,
        });
    }

    match segment.chars().next() {
        Some(first) if first.is_ascii_uppercase() => {
            Err(ContentTypeError::UppercaseLeadingLetter(raw.to_string()))
        }
        Some(first) if first.is_ascii_alphanumeric() => Ok(()),
        _ => Err(ContentTypeError::InvalidLeadingCharacter(raw.to_string())),
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContentType {
    type Err = ContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ContentType {
    type Error = ContentTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ContentType> for String {
    fn from(value: ContentType) -> Self {
        value.0
    }
}

impl AsRef<str> for ContentType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

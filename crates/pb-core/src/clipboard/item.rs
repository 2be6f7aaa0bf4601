use bytes::Bytes;

use super::content_type::{ContentType, ContentTypeError};

/// One logical clipboard item: an ordered mapping from content type to bytes.
///
/// Inserting a content type that is already present replaces its payload but
/// keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardItem {
    representations: Vec<(ContentType, Bytes)>,
}

impl ClipboardItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an item from caller-supplied `(type, payload)` pairs, rejecting
    /// the first malformed type.
    pub fn try_from_pairs<I, S, B>(pairs: I) -> Result<Self, ContentTypeError>
    where
        I: IntoIterator<Item = (S, B)>,
        S: AsRef<str>,
        B: Into<Bytes>,
    {
        let mut item = Self::new();
        for (raw, payload) in pairs {
            let content_type = ContentType::parse(raw.as_ref())?;
            item.insert(content_type, payload);
        }
        Ok(item)
    }

    pub fn insert(&mut self, content_type: ContentType, payload: impl Into<Bytes>) {
        let payload = payload.into();
        match self
            .representations
            .iter_mut()
            .find(|(existing, _)| *existing == content_type)
        {
            Some((_, slot)) => *slot = payload,
            None => self.representations.push((content_type, payload)),
        }
    }

    pub fn with(mut self, content_type: ContentType, payload: impl Into<Bytes>) -> Self {
        self.insert(content_type, payload);
        self
    }

    pub fn get(&self, content_type: &ContentType) -> Option<&Bytes> {
        self.representations
            .iter()
            .find(|(ct, _)| ct == content_type)
            .map(|(_, payload)| payload)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContentType, &Bytes)> {
        self.representations.iter().map(|(ct, payload)| (ct, payload))
    }

    pub fn content_types(&self) -> impl Iterator<Item = &ContentType> {
        self.representations.iter().map(|(ct, _)| ct)
    }

    pub fn len(&self) -> usize {
        self.representations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representations.is_empty()
    }
}

/// How a single representation of an item is going to be written.
///
/// At least one of `sanitize` / `pickle` is set; with both set the payload is
/// written twice, once per namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEntryRequest {
    pub content_type: ContentType,
    pub payload: Bytes,
    pub sanitize: bool,
    pub pickle: bool,
}

impl ClipboardEntryRequest {
    /// Returns `None` when neither namespace is requested.
    pub fn new(
        content_type: ContentType,
        payload: Bytes,
        sanitize: bool,
        pickle: bool,
    ) -> Option<Self> {
        if !sanitize && !pickle {
            return None;
        }
        Some(Self {
            content_type,
            payload,
            sanitize,
            pickle,
        })
    }

    /// Number of native entries this request turns into.
    pub fn native_entry_count(&self) -> usize {
        usize::from(self.sanitize) + usize::from(self.pickle)
    }
}

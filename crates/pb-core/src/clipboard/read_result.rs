use bytes::Bytes;

use super::{content_type::ContentType, provenance::Provenance};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPayload {
    pub bytes: Bytes,
    pub provenance: Provenance,
}

/// Content types a read can hand back, in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedReadResult {
    entries: Vec<(ContentType, ResolvedPayload)>,
}

impl ResolvedReadResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unless the content type is already resolved; returns whether
    /// the entry was added.
    pub fn push(&mut self, content_type: ContentType, payload: ResolvedPayload) -> bool {
        if self.contains(&content_type) {
            return false;
        }
        self.entries.push((content_type, payload));
        true
    }

    pub fn get(&self, content_type: &ContentType) -> Option<&ResolvedPayload> {
        self.entries
            .iter()
            .find(|(ct, _)| ct == content_type)
            .map(|(_, payload)| payload)
    }

    pub fn contains(&self, content_type: &ContentType) -> bool {
        self.get(content_type).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContentType, &ResolvedPayload)> {
        self.entries.iter().map(|(ct, payload)| (ct, payload))
    }

    pub fn content_types(&self) -> impl Iterator<Item = &ContentType> {
        self.entries.iter().map(|(ct, _)| ct)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for ResolvedReadResult {
    type Item = (ContentType, ResolvedPayload);
    type IntoIter = std::vec::IntoIter<(ContentType, ResolvedPayload)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

use std::collections::HashSet;

use crate::clipboard::{ContentType, ContentTypeError};

/// Content types the caller wants in their raw, pickled form.
///
/// Behaves as a set; first-seen order is kept for deterministic iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnsanitizeList {
    types: Vec<ContentType>,
}

impl UnsanitizeList {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize a caller-supplied list.
    ///
    /// Malformed entries fail the whole list; duplicates are dropped silently.
    pub fn validate<I, S>(raw: I) -> Result<Self, ContentTypeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut types = Vec::new();

        for entry in raw {
            let content_type = ContentType::parse(entry.as_ref())?;
            if seen.insert(content_type.clone()) {
                types.push(content_type);
            }
        }

        Ok(Self { types })
    }

    pub fn contains(&self, content_type: &ContentType) -> bool {
        self.types.contains(content_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<ContentType> for UnsanitizeList {
    fn from_iter<T: IntoIterator<Item = ContentType>>(iter: T) -> Self {
        let mut list = Self::empty();
        for content_type in iter {
            if !list.contains(&content_type) {
                list.types.push(content_type);
            }
        }
        list
    }
}

impl<'a> IntoIterator for &'a UnsanitizeList {
    type Item = &'a ContentType;
    type IntoIter = std::slice::Iter<'a, ContentType>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_keeps_first_seen_order_and_dedupes() {
        let list =
            UnsanitizeList::validate(["text/custom", "text/html", "text/custom", "image/png"])
                .unwrap();

        let types: Vec<_> = list.iter().map(|ct| ct.as_str()).collect();
        assert_eq!(types, vec!["text/custom", "text/html", "image/png"]);
    }

    #[test]
    fn test_validate_rejects_empty_entry() {
        let result = UnsanitizeList::validate(["text/custom", ""]);
        assert_eq!(result, Err(ContentTypeError::Empty));
    }

    #[test]
    fn test_validate_rejects_wrong_separator_count() {
        assert!(matches!(
            UnsanitizeList::validate(["text"]),
            Err(ContentTypeError::Separator(_))
        ));
        assert!(matches!(
            UnsanitizeList::validate(["a/b/c"]),
            Err(ContentTypeError::Separator(_))
        ));
    }

    #[test]
    fn test_empty_input_is_empty_list() {
        let list = UnsanitizeList::validate(Vec::<String>::new()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list, UnsanitizeList::empty());
    }

    #[test]
    fn test_from_iterator_collapses_duplicates() {
        let list: UnsanitizeList = [ContentType::text_html(), ContentType::text_html()]
            .into_iter()
            .collect();
        assert_eq!(list.len(), 1);
    }
}

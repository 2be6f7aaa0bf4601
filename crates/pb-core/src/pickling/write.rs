use std::collections::HashSet;

use tracing::debug;

use super::{error::PicklingError, format_name::FormatNameTranslator, unsanitize::UnsanitizeList};
use crate::clipboard::{ClipboardEntryRequest, ClipboardItem, ContentType, NativeClipboardEntry};
use crate::ports::SanitizedFormatRegistryPort;

/// Turns clipboard items into the ordered native entry sequence to install.
///
/// Per item, every pickled entry comes before any sanitized entry. A content
/// type that is both requested unsanitized and standardized is written twice
/// with the same bytes. The whole call fails if any item carries a type that
/// is neither, so the caller never sees a partial sequence.
pub struct WriteResolver<'a> {
    translator: FormatNameTranslator,
    registry: &'a dyn SanitizedFormatRegistryPort,
    max_pickled_formats: usize,
}

impl<'a> WriteResolver<'a> {
    pub fn new(
        translator: FormatNameTranslator,
        registry: &'a dyn SanitizedFormatRegistryPort,
        max_pickled_formats: usize,
    ) -> Self {
        Self {
            translator,
            registry,
            max_pickled_formats,
        }
    }

    /// Decide, per representation of `item`, which namespaces it goes to.
    ///
    /// Entries of `unsanitize` that the item does not carry are ignored.
    pub fn plan(
        &self,
        item: &ClipboardItem,
        unsanitize: &UnsanitizeList,
    ) -> Result<Vec<ClipboardEntryRequest>, PicklingError> {
        item.iter()
            .map(|(content_type, payload)| {
                let pickle = unsanitize.contains(content_type);
                let sanitize = self.registry.is_standardized(content_type);
                ClipboardEntryRequest::new(content_type.clone(), payload.clone(), sanitize, pickle)
                    .ok_or_else(|| PicklingError::UnsupportedFormat(content_type.clone()))
            })
            .collect()
    }

    pub fn resolve(
        &self,
        items: &[(ClipboardItem, UnsanitizeList)],
    ) -> Result<Vec<NativeClipboardEntry>, PicklingError> {
        let plans = items
            .iter()
            .map(|(item, unsanitize)| self.plan(item, unsanitize))
            .collect::<Result<Vec<_>, _>>()?;

        let pickled_types: HashSet<&ContentType> = plans
            .iter()
            .flatten()
            .filter(|request| request.pickle)
            .map(|request| &request.content_type)
            .collect();
        if pickled_types.len() > self.max_pickled_formats {
            return Err(PicklingError::TooManyPickledFormats {
                limit: self.max_pickled_formats,
                requested: pickled_types.len(),
            });
        }

        let mut entries = Vec::with_capacity(
            plans
                .iter()
                .flatten()
                .map(ClipboardEntryRequest::native_entry_count)
                .sum(),
        );

        for plan in &plans {
            for request in plan.iter().filter(|r| r.pickle) {
                let name = self.translator.encode(&request.content_type);
                debug!(content_type = %request.content_type, format = %name, "pickled entry");
                entries.push(NativeClipboardEntry::new(name, request.payload.clone()));
            }

            for request in plan.iter().filter(|r| r.sanitize) {
                let name = self
                    .registry
                    .native_name(&request.content_type)
                    .ok_or_else(|| PicklingError::UnsupportedFormat(request.content_type.clone()))?;
                debug!(content_type = %request.content_type, format = %name, "sanitized entry");
                entries.push(NativeClipboardEntry::new(name, request.payload.clone()));
            }
        }

        Ok(entries)
    }
}

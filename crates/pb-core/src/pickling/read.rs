use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::{format_name::FormatNameTranslator, unsanitize::UnsanitizeList};
use crate::clipboard::{
    ClipboardSnapshot, ContentType, Provenance, ResolvedPayload, ResolvedReadResult,
};
use crate::ports::SanitizedFormatRegistryPort;

/// What a read does with a pickled entry that has no sanitized counterpart
/// and was not requested unsanitized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickledOnlyPolicy {
    /// Leave it out; callers must opt in to receive pickled content.
    #[default]
    Hide,
    /// Hand it back as if it had been requested.
    Expose,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pickled-only policy: {0}")]
pub struct UnknownPolicy(pub String);

impl FromStr for PickledOnlyPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hide" => Ok(PickledOnlyPolicy::Hide),
            "expose" => Ok(PickledOnlyPolicy::Expose),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PickledOnlyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickledOnlyPolicy::Hide => f.write_str("hide"),
            PickledOnlyPolicy::Expose => f.write_str("expose"),
        }
    }
}

/// Snapshot entries after decoding, grouped by namespace.
///
/// `order` lists every logical content type by first appearance in the
/// snapshot; within a group the first entry for a content type wins.
#[derive(Debug, Default)]
struct Partition {
    pickled: Vec<(ContentType, Bytes)>,
    sanitized: Vec<(ContentType, Bytes)>,
    order: Vec<ContentType>,
}

impl Partition {
    fn pickled(&self, content_type: &ContentType) -> Option<&Bytes> {
        lookup(&self.pickled, content_type)
    }

    fn sanitized(&self, content_type: &ContentType) -> Option<&Bytes> {
        lookup(&self.sanitized, content_type)
    }

    fn insert(group: &mut Vec<(ContentType, Bytes)>, content_type: &ContentType, bytes: &Bytes) {
        if lookup(group, content_type).is_none() {
            group.push((content_type.clone(), bytes.clone()));
        }
    }

    fn note(&mut self, content_type: &ContentType) {
        if !self.order.contains(content_type) {
            self.order.push(content_type.clone());
        }
    }
}

fn lookup<'a>(group: &'a [(ContentType, Bytes)], content_type: &ContentType) -> Option<&'a Bytes> {
    group
        .iter()
        .find(|(ct, _)| ct == content_type)
        .map(|(_, bytes)| bytes)
}

/// Chooses, per content type, which clipboard payload a read hands back.
///
/// Precedence: a requested-unsanitized pickled entry beats a sanitized one;
/// otherwise sanitized wins; pickled-only content follows
/// [`PickledOnlyPolicy`]. The result lists requested pickled types first, in
/// request order, then everything else in snapshot order.
pub struct ReadResolver<'a> {
    translator: FormatNameTranslator,
    registry: &'a dyn SanitizedFormatRegistryPort,
    pickled_only: PickledOnlyPolicy,
}

impl<'a> ReadResolver<'a> {
    pub fn new(
        translator: FormatNameTranslator,
        registry: &'a dyn SanitizedFormatRegistryPort,
        pickled_only: PickledOnlyPolicy,
    ) -> Self {
        Self {
            translator,
            registry,
            pickled_only,
        }
    }

    pub fn resolve(
        &self,
        snapshot: &ClipboardSnapshot,
        requested_unsanitize: &UnsanitizeList,
    ) -> ResolvedReadResult {
        let partition = self.partition(snapshot);
        let mut result = ResolvedReadResult::new();

        for content_type in requested_unsanitize {
            if let Some(bytes) = partition.pickled(content_type) {
                result.push(
                    content_type.clone(),
                    ResolvedPayload {
                        bytes: bytes.clone(),
                        provenance: Provenance::Pickled,
                    },
                );
            }
        }

        for content_type in &partition.order {
            if result.contains(content_type) {
                continue;
            }

            if let Some(bytes) = partition.sanitized(content_type) {
                result.push(
                    content_type.clone(),
                    ResolvedPayload {
                        bytes: bytes.clone(),
                        provenance: Provenance::Sanitized,
                    },
                );
                continue;
            }

            if let Some(bytes) = partition.pickled(content_type) {
                match self.pickled_only {
                    PickledOnlyPolicy::Expose => {
                        result.push(
                            content_type.clone(),
                            ResolvedPayload {
                                bytes: bytes.clone(),
                                provenance: Provenance::Pickled,
                            },
                        );
                    }
                    PickledOnlyPolicy::Hide => {
                        debug!(%content_type, "pickled-only content not requested, hidden");
                    }
                }
            }
        }

        result
    }

    fn partition(&self, snapshot: &ClipboardSnapshot) -> Partition {
        let mut partition = Partition::default();

        for entry in &snapshot.entries {
            if let Ok(content_type) = self.translator.decode(&entry.format) {
                Partition::insert(&mut partition.pickled, &content_type, &entry.bytes);
                partition.note(&content_type);
            } else if let Some(content_type) = self.registry.content_type_of(&entry.format) {
                Partition::insert(&mut partition.sanitized, &content_type, &entry.bytes);
                partition.note(&content_type);
            } else {
                debug!(format = %entry.format, "dropping unrecognized clipboard format");
            }
        }

        partition
    }
}

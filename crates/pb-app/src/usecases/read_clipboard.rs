use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, info, info_span, warn, Instrument};

use pb_core::clipboard::{ContentType, ResolvedReadResult};
use pb_core::pickling::{
    FormatNameTranslator, GestureGate, PickledOnlyPolicy, PicklingError, ReadResolver,
    UnsanitizeList,
};
use pb_core::ports::{NativeClipboardPort, SanitizedFormatRegistryPort, UserActivationPort};
use pb_core::EngineSettings;

use crate::deps::ClipboardDeps;

/// One clipboard item as handed back to the caller.
///
/// Payloads are reference-counted views into the snapshot taken at call
/// start, so fetching one never goes back to the OS clipboard. Provenance is
/// deliberately not exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardReadItem {
    payloads: Vec<(ContentType, Bytes)>,
}

impl ClipboardReadItem {
    fn from_resolved(resolved: ResolvedReadResult) -> Self {
        Self {
            payloads: resolved
                .into_iter()
                .map(|(content_type, payload)| (content_type, payload.bytes))
                .collect(),
        }
    }

    pub fn types(&self) -> impl Iterator<Item = &ContentType> {
        self.payloads.iter().map(|(ct, _)| ct)
    }

    pub fn get_type(&self, content_type: &str) -> Option<Bytes> {
        self.payloads
            .iter()
            .find(|(ct, _)| ct.as_str() == content_type)
            .map(|(_, bytes)| bytes.clone())
    }

    /// Payloads in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&ContentType, &Bytes)> {
        self.payloads.iter().map(|(ct, bytes)| (ct, bytes))
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

/// Reads the OS clipboard through the resolution rules.
pub struct ReadClipboardUseCase {
    clipboard: Arc<dyn NativeClipboardPort>,
    registry: Arc<dyn SanitizedFormatRegistryPort>,
    activation: Arc<dyn UserActivationPort>,
    settings: EngineSettings,
}

impl ReadClipboardUseCase {
    pub fn new(deps: ClipboardDeps, settings: EngineSettings) -> Self {
        Self {
            clipboard: deps.clipboard,
            registry: deps.registry,
            activation: deps.activation,
            settings,
        }
    }

    /// Returns no items when nothing on the clipboard is retrievable.
    pub async fn execute(
        &self,
        unsanitize: Vec<String>,
    ) -> Result<Vec<ClipboardReadItem>, PicklingError> {
        let span = info_span!(
            "usecase.read_clipboard.execute",
            unsanitize = unsanitize.len(),
            platform = %self.settings.platform,
        );

        async move {
            GestureGate::evaluate(self.activation.as_ref(), !unsanitize.is_empty())
                .into_result()
                .inspect_err(|_| warn!("pickled read rejected without user gesture"))?;

            let requested = UnsanitizeList::validate(&unsanitize)?;

            let snapshot = self.clipboard.read_snapshot().await?;

            let resolver = ReadResolver::new(
                FormatNameTranslator::for_platform(self.settings.platform),
                self.registry.as_ref(),
                self.effective_pickled_only_policy(),
            );
            let resolved = resolver.resolve(&snapshot, &requested);

            info!(
                snapshot_ts_ms = snapshot.ts_ms,
                snapshot_entries = snapshot.entry_count(),
                snapshot_bytes = snapshot.total_size_bytes(),
                resolved = resolved.len(),
                "clipboard read"
            );

            if resolved.is_empty() {
                return Ok(Vec::new());
            }
            Ok(vec![ClipboardReadItem::from_resolved(resolved)])
        }
        .instrument(span)
        .await
    }

    /// Exposing pickled-only content hands out unsanitized bytes, so it needs
    /// the same transient activation as an explicit request. Without it the
    /// read falls back to hiding them rather than failing.
    fn effective_pickled_only_policy(&self) -> PickledOnlyPolicy {
        match self.settings.pickled_only_policy {
            PickledOnlyPolicy::Expose if !self.activation.has_transient_activation() => {
                debug!("no user gesture, pickled-only content stays hidden");
                PickledOnlyPolicy::Hide
            }
            policy => policy,
        }
    }
}

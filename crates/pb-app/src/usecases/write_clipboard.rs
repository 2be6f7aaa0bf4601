use bytes::Bytes;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};

use pb_core::clipboard::ClipboardItem;
use pb_core::pickling::{
    FormatNameTranslator, GestureGate, PicklingError, UnsanitizeList, WriteResolver,
};
use pb_core::ports::{NativeClipboardPort, SanitizedFormatRegistryPort, UserActivationPort};
use pb_core::EngineSettings;

use crate::deps::ClipboardDeps;

/// One item of a write call, exactly as the caller supplied it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteRequestItem {
    pub representations: Vec<(String, Bytes)>,
    pub unsanitize: Vec<String>,
}

impl WriteRequestItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, content_type: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        self.representations.push((content_type.into(), payload.into()));
        self
    }

    pub fn unsanitized(mut self, content_type: impl Into<String>) -> Self {
        self.unsanitize.push(content_type.into());
        self
    }
}

/// Replaces the OS clipboard with the given items.
///
/// The clipboard port is called at most once, with the full entry sequence
/// for every item; any failure before that leaves the clipboard untouched.
pub struct WriteClipboardUseCase {
    clipboard: Arc<dyn NativeClipboardPort>,
    registry: Arc<dyn SanitizedFormatRegistryPort>,
    activation: Arc<dyn UserActivationPort>,
    settings: EngineSettings,
}

impl WriteClipboardUseCase {
    pub fn new(deps: ClipboardDeps, settings: EngineSettings) -> Self {
        Self {
            clipboard: deps.clipboard,
            registry: deps.registry,
            activation: deps.activation,
            settings,
        }
    }

    pub async fn execute(&self, items: Vec<WriteRequestItem>) -> Result<(), PicklingError> {
        let span = info_span!(
            "usecase.write_clipboard.execute",
            items = items.len(),
            platform = %self.settings.platform,
        );

        async move {
            let requests_pickling = items.iter().any(|item| !item.unsanitize.is_empty());
            GestureGate::evaluate(self.activation.as_ref(), requests_pickling)
                .into_result()
                .inspect_err(|_| warn!("pickled write rejected without user gesture"))?;

            let resolved_items = items
                .into_iter()
                .map(|item| -> Result<_, PicklingError> {
                    let unsanitize = UnsanitizeList::validate(&item.unsanitize)?;
                    let clipboard_item = ClipboardItem::try_from_pairs(item.representations)?;
                    Ok((clipboard_item, unsanitize))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let resolver = WriteResolver::new(
                FormatNameTranslator::for_platform(self.settings.platform),
                self.registry.as_ref(),
                self.settings.max_pickled_formats,
            );
            let entries = resolver.resolve(&resolved_items)?;
            let entry_count = entries.len();

            self.clipboard.write_entries(entries).await?;

            info!(entries = entry_count, "clipboard written");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};
    use pb_core::clipboard::{ClipboardSnapshot, NativeClipboardEntry};
    use pb_core::pickling::StandardFormatRegistry;
    use pb_core::ports::NativeClipboardError;
    use pb_core::TargetPlatform;

    mock! {
        pub Clipboard {}

        #[async_trait]
        impl NativeClipboardPort for Clipboard {
            async fn write_entries(&self, entries: Vec<NativeClipboardEntry>)
                -> Result<(), NativeClipboardError>;
            async fn read_snapshot(&self) -> Result<ClipboardSnapshot, NativeClipboardError>;
        }
    }

    mock! {
        pub Activation {}

        impl UserActivationPort for Activation {
            fn has_transient_activation(&self) -> bool;
        }
    }

    fn use_case(clipboard: MockClipboard, activation: MockActivation) -> WriteClipboardUseCase {
        let platform = TargetPlatform::Test;
        WriteClipboardUseCase::new(
            ClipboardDeps {
                clipboard: Arc::new(clipboard),
                registry: Arc::new(StandardFormatRegistry::for_platform(platform)),
                activation: Arc::new(activation),
            },
            EngineSettings::for_platform(platform),
        )
    }

    fn activated(active: bool) -> MockActivation {
        let mut activation = MockActivation::new();
        activation
            .expect_has_transient_activation()
            .return_const(active);
        activation
    }

    #[tokio::test]
    async fn test_writes_pickled_then_sanitized_in_one_call() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_entries()
            .with(eq(vec![
                NativeClipboardEntry::new(
                    "application/web;type=\"text/custom\"",
                    "<custom_markup>pickled_text</custom_markup>",
                ),
                NativeClipboardEntry::new("text/plain", "text"),
            ]))
            .times(1)
            .returning(|_| Ok(()));

        let item = WriteRequestItem::new()
            .with("text/plain", "text")
            .with("text/custom", "<custom_markup>pickled_text</custom_markup>")
            .unsanitized("text/custom");

        use_case(clipboard, activated(true))
            .execute(vec![item])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_no_gesture_fails_before_validation() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_entries().times(0);

        // Malformed payload types would fail validation, but the gate runs first.
        let item = WriteRequestItem::new()
            .with("not a type", "x")
            .unsanitized("text/custom");

        let err = use_case(clipboard, activated(false))
            .execute(vec![item])
            .await
            .unwrap_err();

        assert!(matches!(err, PicklingError::NoUserGesture));
    }

    #[tokio::test]
    async fn test_sanitized_only_write_ignores_activation() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_entries()
            .times(1)
            .returning(|_| Ok(()));

        let mut activation = MockActivation::new();
        activation.expect_has_transient_activation().times(0);

        let item = WriteRequestItem::new().with("text/plain", "hello");

        use_case(clipboard, activation)
            .execute(vec![item])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_invalid_unsanitize_entry_writes_nothing() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_entries().times(0);

        let item = WriteRequestItem::new()
            .with("text/plain", "hello")
            .unsanitized("");

        let err = use_case(clipboard, activated(true))
            .execute(vec![item])
            .await
            .unwrap_err();

        assert!(matches!(err, PicklingError::InvalidContentType(_)));
    }

    #[tokio::test]
    async fn test_unsupported_format_in_second_item_writes_nothing() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_entries().times(0);

        let items = vec![
            WriteRequestItem::new().with("text/plain", "fine"),
            WriteRequestItem::new().with("text/custom", "not requested"),
        ];

        let err = use_case(clipboard, activated(true))
            .execute(items)
            .await
            .unwrap_err();

        assert!(matches!(err, PicklingError::UnsupportedFormat(_)));
        assert_eq!(err.kind().as_str(), "UnsupportedFormat");
    }

    #[tokio::test]
    async fn test_native_failure_passes_through_without_retry() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_entries()
            .times(1)
            .returning(|_| Err(NativeClipboardError::Denied("locked".into())));

        let item = WriteRequestItem::new().with("text/plain", "x");

        let err = use_case(clipboard, activated(true))
            .execute(vec![item])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PicklingError::NativeClipboardFailure(NativeClipboardError::Denied(ref msg))
                if msg == "locked"
        ));
    }
}

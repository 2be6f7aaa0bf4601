//! OS clipboard adapter built on `clipboard-rs`.
//!
//! Sanitized entries for plain text, HTML and PNG go through the typed
//! `clipboard-rs` setters so the OS performs its own encoding. Every other
//! entry, pickled or not, is installed as a raw buffer under its native name.

use async_trait::async_trait;
use clipboard_rs::{
    common::RustImage, Clipboard, ClipboardContent, ClipboardContext, RustImageData,
};
use tracing::debug;

use pb_core::clipboard::{ClipboardSnapshot, ContentType, NativeClipboardEntry, NativeFormatName};
use pb_core::pickling::StandardFormatRegistry;
use pb_core::platform::TargetPlatform;
use pb_core::ports::{NativeClipboardError, NativeClipboardPort, SanitizedFormatRegistryPort};

type ClipboardRsResult<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

fn map_clipboard_err<T>(result: ClipboardRsResult<T>) -> Result<T, NativeClipboardError> {
    result.map_err(|e| NativeClipboardError::Io(e.to_string()))
}

fn utf8(entry: &NativeClipboardEntry) -> Result<String, NativeClipboardError> {
    String::from_utf8(entry.bytes.to_vec())
        .map_err(|e| NativeClipboardError::Io(format!("{}: {e}", entry.format)))
}

fn open_context() -> Result<ClipboardContext, NativeClipboardError> {
    ClipboardContext::new().map_err(|e| NativeClipboardError::Unavailable(e.to_string()))
}

#[derive(Debug, Clone)]
pub struct SystemNativeClipboard {
    registry: StandardFormatRegistry,
}

impl SystemNativeClipboard {
    pub fn new(platform: TargetPlatform) -> Self {
        Self {
            registry: StandardFormatRegistry::for_platform(platform),
        }
    }

    fn to_content(
        registry: &StandardFormatRegistry,
        entry: NativeClipboardEntry,
    ) -> Result<ClipboardContent, NativeClipboardError> {
        let content = match registry.content_type_of(&entry.format) {
            Some(ct) if ct == ContentType::text_plain() => ClipboardContent::Text(utf8(&entry)?),
            Some(ct) if ct == ContentType::text_html() => ClipboardContent::Html(utf8(&entry)?),
            Some(ct) if ct == ContentType::image_png() => ClipboardContent::Image(
                map_clipboard_err(RustImageData::from_bytes(&entry.bytes))?,
            ),
            _ => ClipboardContent::Other(entry.format.into_inner(), entry.bytes.to_vec()),
        };
        Ok(content)
    }

    fn read_entry(
        registry: &StandardFormatRegistry,
        ctx: &ClipboardContext,
        format: &str,
    ) -> ClipboardRsResult<Vec<u8>> {
        let name = NativeFormatName::from(format);
        match registry.content_type_of(&name) {
            Some(ct) if ct == ContentType::text_plain() => ctx.get_text().map(String::into_bytes),
            Some(ct) if ct == ContentType::text_html() => ctx.get_html().map(String::into_bytes),
            Some(ct) if ct == ContentType::image_png() => {
                let png = ctx.get_image()?.to_png()?;
                Ok(png.get_bytes().to_vec())
            }
            _ => ctx.get_buffer(format),
        }
    }
}

#[async_trait]
impl NativeClipboardPort for SystemNativeClipboard {
    async fn write_entries(
        &self,
        entries: Vec<NativeClipboardEntry>,
    ) -> Result<(), NativeClipboardError> {
        let registry = self.registry.clone();

        tokio::task::spawn_blocking(move || {
            // Convert everything before touching the clipboard so a bad entry
            // leaves the previous contents in place.
            let contents = entries
                .into_iter()
                .map(|entry| Self::to_content(&registry, entry))
                .collect::<Result<Vec<_>, _>>()?;

            let ctx = open_context()?;
            map_clipboard_err(ctx.set(contents))
        })
        .await
        .map_err(|e| NativeClipboardError::Io(format!("clipboard task failed: {e}")))?
    }

    async fn read_snapshot(&self) -> Result<ClipboardSnapshot, NativeClipboardError> {
        let registry = self.registry.clone();

        tokio::task::spawn_blocking(move || {
            let ctx = open_context()?;
            let available = map_clipboard_err(ctx.available_formats())?;

            let mut entries = Vec::with_capacity(available.len());
            for format in available {
                match Self::read_entry(&registry, &ctx, &format) {
                    Ok(bytes) => entries.push(NativeClipboardEntry::new(format, bytes)),
                    Err(e) => debug!(%format, error = %e, "skipping unreadable clipboard format"),
                }
            }

            Ok(ClipboardSnapshot::new(
                chrono::Utc::now().timestamp_millis(),
                entries,
            ))
        })
        .await
        .map_err(|e| NativeClipboardError::Io(format!("clipboard task failed: {e}")))?
    }
}

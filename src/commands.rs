//! Subcommand implementations. Each returns the text printed on stdout.

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use serde::Serialize;

use pb_app::{ClipboardDeps, ClipboardReadItem, ClipboardUseCases, WriteRequestItem};
use pb_core::clipboard::{ContentType, NativeFormatName};
use pb_core::pickling::{self, PicklingError, StandardFormatRegistry};
use pb_core::ports::{NativeClipboardPort, UserActivationPort};
use pb_core::{EngineSettings, PicklingConfig, TargetPlatform};
use pb_platform::bootstrap::load_config;
use pb_platform::{FixedUserActivation, TimedUserActivation};

/// Configuration facts from `path`, or empty facts when no file was given.
pub fn load_engine_config(path: Option<&Path>) -> anyhow::Result<PicklingConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(PicklingConfig::empty()),
    }
}

/// Engine settings with the command-line platform taking precedence.
pub fn engine_settings(
    config: &PicklingConfig,
    platform_override: Option<TargetPlatform>,
) -> anyhow::Result<EngineSettings> {
    let mut settings =
        EngineSettings::from_config(config).context("Invalid engine configuration")?;
    if let Some(platform) = platform_override {
        settings.platform = platform;
    }
    Ok(settings)
}

pub fn encode(platform: TargetPlatform, content_type: &str) -> anyhow::Result<String> {
    let content_type = ContentType::parse(content_type)
        .with_context(|| format!("Invalid content type: {content_type}"))?;
    Ok(pickling::encode(&content_type, platform).into_inner())
}

pub fn decode(platform: TargetPlatform, name: &str) -> anyhow::Result<String> {
    pickling::decode(&NativeFormatName::from(name), platform)
        .map(ContentType::into_inner)
        .map_err(|e| anyhow!("{name}: {e} on {platform}"))
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct RepresentationOutput {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base64: Option<String>,
}

impl RepresentationOutput {
    fn new(content_type: &ContentType, bytes: &Bytes) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(text) => Self {
                content_type: content_type.to_string(),
                text: Some(text.to_string()),
                base64: None,
            },
            Err(_) => Self {
                content_type: content_type.to_string(),
                text: None,
                base64: Some(STANDARD.encode(bytes)),
            },
        }
    }
}

fn render_items(items: &[ClipboardReadItem]) -> anyhow::Result<String> {
    let output: Vec<Vec<RepresentationOutput>> = items
        .iter()
        .map(|item| {
            item.iter()
                .map(|(ct, bytes)| RepresentationOutput::new(ct, bytes))
                .collect()
        })
        .collect();
    serde_json::to_string_pretty(&output).context("Failed to serialize read result")
}

fn parse_representation(raw: &str) -> anyhow::Result<(String, Bytes)> {
    let (content_type, text) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected TYPE=TEXT, got `{raw}`"))?;
    Ok((content_type.to_string(), Bytes::from(text.to_string())))
}

fn with_kind(err: PicklingError) -> anyhow::Error {
    anyhow!("{}: {err}", err.kind().as_str())
}

/// One CLI invocation against a clipboard.
///
/// Running the command is the user gesture unless it was suppressed, in
/// which case activation is never granted.
pub struct ClipboardSession {
    use_cases: ClipboardUseCases,
}

impl ClipboardSession {
    pub fn new(
        settings: EngineSettings,
        clipboard: Arc<dyn NativeClipboardPort>,
        gesture: bool,
    ) -> Self {
        let activation: Arc<dyn UserActivationPort> = if gesture {
            let timed = TimedUserActivation::new(settings.activation_window);
            timed.record_gesture();
            Arc::new(timed)
        } else {
            Arc::new(FixedUserActivation::new(false))
        };

        let deps = ClipboardDeps {
            clipboard,
            registry: Arc::new(StandardFormatRegistry::for_platform(settings.platform)),
            activation,
        };

        Self {
            use_cases: ClipboardUseCases::new(deps, settings),
        }
    }

    pub async fn read(&self, unsanitize: Vec<String>) -> anyhow::Result<String> {
        let items = self
            .use_cases
            .read
            .execute(unsanitize)
            .await
            .map_err(with_kind)?;
        render_items(&items)
    }

    pub async fn write(
        &self,
        representations: &[String],
        unsanitize: Vec<String>,
    ) -> anyhow::Result<String> {
        let item = WriteRequestItem {
            representations: representations
                .iter()
                .map(|raw| parse_representation(raw))
                .collect::<anyhow::Result<_>>()?,
            unsanitize,
        };
        let count = item.representations.len();

        self.use_cases
            .write
            .execute(vec![item])
            .await
            .map_err(with_kind)?;
        Ok(format!("wrote {count} representation(s)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pb_core::pickling::PickledOnlyPolicy;
    use pb_platform::InMemoryNativeClipboard;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn session(
        platform: TargetPlatform,
        gesture: bool,
    ) -> (Arc<InMemoryNativeClipboard>, ClipboardSession) {
        let clipboard = Arc::new(InMemoryNativeClipboard::new());
        let settings = EngineSettings::for_platform(platform);
        let session = ClipboardSession::new(settings, clipboard.clone(), gesture);
        (clipboard, session)
    }

    #[test]
    fn test_encode_and_decode_commands() {
        assert_eq!(
            encode(TargetPlatform::Windows, "custom/format").unwrap(),
            "Web Custom Format"
        );
        assert_eq!(
            decode(TargetPlatform::MacOS, "com.web.custom.format").unwrap(),
            "custom/format"
        );
        assert!(decode(TargetPlatform::MacOS, "public.html").is_err());
        assert!(encode(TargetPlatform::Linux, "not-a-type").is_err());
    }

    #[test]
    fn test_parse_representation_splits_on_first_equals() {
        let (ct, bytes) = parse_representation("text/plain=a=b").unwrap();
        assert_eq!(ct, "text/plain");
        assert_eq!(bytes.as_ref(), b"a=b");
        assert!(parse_representation("text/plain").is_err());
    }

    #[test]
    fn test_binary_payloads_render_as_base64() {
        let bytes = Bytes::from_static(&[0xff, 0x00]);
        let out = RepresentationOutput::new(&ContentType::image_png(), &bytes);
        assert_eq!(out.text, None);
        assert_eq!(out.base64.as_deref(), Some("/wA="));
    }

    #[tokio::test]
    async fn test_write_then_read_through_session() {
        let (clipboard, session) = session(TargetPlatform::Linux, true);

        session
            .write(
                &["text/plain=hi".to_string(), "text/custom=<x/>".to_string()],
                vec!["text/custom".to_string()],
            )
            .await
            .unwrap();
        assert_eq!(clipboard.entries().len(), 2);

        let json = session.read(vec!["text/custom".to_string()]).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0][0]["type"], "text/custom");
        assert_eq!(value[0][0]["text"], "<x/>");
        assert_eq!(value[0][1]["type"], "text/plain");
    }

    #[tokio::test]
    async fn test_suppressed_gesture_reports_error_kind() {
        let (clipboard, session) = session(TargetPlatform::Linux, false);

        let err = session
            .write(
                &["text/custom=<x/>".to_string()],
                vec!["text/custom".to_string()],
            )
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("NoUserGesture"));
        assert_eq!(clipboard.write_count(), 0);
    }

    #[test]
    fn test_settings_from_config_file_with_platform_override() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
                [engine]
                platform = "macos"
                pickled_only_policy = "expose"

                [activation]
                window_ms = 750
                "#,
            )
            .unwrap();

        let config = load_engine_config(Some(temp_file.path())).unwrap();

        let settings = engine_settings(&config, None).unwrap();
        assert_eq!(settings.platform, TargetPlatform::MacOS);
        assert_eq!(settings.pickled_only_policy, PickledOnlyPolicy::Expose);
        assert_eq!(settings.activation_window, Duration::from_millis(750));

        let overridden = engine_settings(&config, Some(TargetPlatform::Windows)).unwrap();
        assert_eq!(overridden.platform, TargetPlatform::Windows);
    }

    #[test]
    fn test_unknown_configured_platform_is_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[engine]\nplatform = \"plan9\"\n")
            .unwrap();

        let config = load_engine_config(Some(temp_file.path())).unwrap();
        let err = engine_settings(&config, None).unwrap_err();

        assert!(err.to_string().contains("Invalid engine configuration"));
    }

    #[test]
    fn test_missing_config_path_means_empty_facts() {
        let config = load_engine_config(None).unwrap();
        assert_eq!(config, PicklingConfig::empty());
    }
}

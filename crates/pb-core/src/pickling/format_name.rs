//! Pickled format names.
//!
//! Each [`NamingScheme`] is a pure `encode`/`decode` pair. `decode` only
//! accepts names that `encode` could have produced: a candidate is re-encoded
//! and compared against the input, so every platform transform is an exact
//! inverse over the set of valid [`ContentType`] values.

use crate::clipboard::{ContentType, NativeFormatName};
use crate::platform::{NamingScheme, TargetPlatform};

const REVERSE_DNS_PREFIX: &str = "com.web.";
const CAPITALIZED_WORDS_PREFIX: &str = "Web ";
const MIME_NAMESPACED_PREFIX: &str = "application/web;type=\"";
const MIME_NAMESPACED_SUFFIX: &str = "\"";

/// The native name is not in the pickled namespace of this platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("not a pickled format name")]
pub struct NotAPickledFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatNameTranslator {
    scheme: NamingScheme,
}

impl FormatNameTranslator {
    pub fn new(scheme: NamingScheme) -> Self {
        Self { scheme }
    }

    pub fn for_platform(platform: TargetPlatform) -> Self {
        Self::new(platform.naming_scheme())
    }

    pub fn encode(&self, content_type: &ContentType) -> NativeFormatName {
        let category = content_type.category();
        let subtype = content_type.subtype();

        let name = match self.scheme {
            NamingScheme::ReverseDns => format!("{REVERSE_DNS_PREFIX}{category}.{subtype}"),
            NamingScheme::CapitalizedWords => format!(
                "{CAPITALIZED_WORDS_PREFIX}{} {}",
                capitalize(category),
                capitalize(subtype)
            ),
            NamingScheme::MimeNamespaced => {
                format!("{MIME_NAMESPACED_PREFIX}{content_type}{MIME_NAMESPACED_SUFFIX}")
            }
        };

        NativeFormatName::new(name)
    }

    pub fn decode(&self, name: &NativeFormatName) -> Result<ContentType, NotAPickledFormat> {
        let candidate = match self.scheme {
            NamingScheme::ReverseDns => decode_reverse_dns(name.as_str()),
            NamingScheme::CapitalizedWords => decode_capitalized_words(name.as_str()),
            NamingScheme::MimeNamespaced => decode_mime_namespaced(name.as_str()),
        }
        .ok_or(NotAPickledFormat)?;

        let content_type = ContentType::parse(&candidate).map_err(|_| NotAPickledFormat)?;

        if self.encode(&content_type) != *name {
            return Err(NotAPickledFormat);
        }

        Ok(content_type)
    }

    pub fn is_pickled(&self, name: &NativeFormatName) -> bool {
        self.decode(name).is_ok()
    }
}

/// `encode` keyed directly by platform.
pub fn encode(content_type: &ContentType, platform: TargetPlatform) -> NativeFormatName {
    FormatNameTranslator::for_platform(platform).encode(content_type)
}

/// `decode` keyed directly by platform.
pub fn decode(
    name: &NativeFormatName,
    platform: TargetPlatform,
) -> Result<ContentType, NotAPickledFormat> {
    FormatNameTranslator::for_platform(platform).decode(name)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn decapitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn decode_reverse_dns(name: &str) -> Option<String> {
    let rest = name.strip_prefix(REVERSE_DNS_PREFIX)?;
    // Categories never contain '.', so the first dot is the separator.
    let (category, subtype) = rest.split_once('.')?;
    Some(format!("{category}/{subtype}"))
}

fn decode_capitalized_words(name: &str) -> Option<String> {
    let rest = name.strip_prefix(CAPITALIZED_WORDS_PREFIX)?;
    let (category, subtype) = rest.split_once(' ')?;
    Some(format!("{}/{}", decapitalize(category), decapitalize(subtype)))
}

fn decode_mime_namespaced(name: &str) -> Option<String> {
    let quoted = name
        .strip_prefix(MIME_NAMESPACED_PREFIX)?
        .strip_suffix(MIME_NAMESPACED_SUFFIX)?;
    Some(quoted.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ct(raw: &str) -> ContentType {
        ContentType::parse(raw).unwrap()
    }

    fn corpus() -> Vec<ContentType> {
        [
            "custom/format",
            "text/plain",
            "text/custom",
            "text/html",
            "image/svg+xml",
            "application/vnd.ms-excel",
            "application/x-my.app.v2",
            "web/a",
            "a/web",
            "text/pLain",
            "1x/2y",
            "x/y.z",
            "application/json+ld",
            "font/woff2",
        ]
        .iter()
        .map(|raw| ct(raw))
        .collect()
    }

    #[test]
    fn test_documented_examples() {
        let custom = ct("custom/format");
        assert_eq!(
            encode(&custom, TargetPlatform::MacOS),
            "com.web.custom.format"
        );
        assert_eq!(encode(&custom, TargetPlatform::Windows), "Web Custom Format");
        assert_eq!(
            encode(&custom, TargetPlatform::Linux),
            "application/web;type=\"custom/format\""
        );
    }

    #[test]
    fn test_round_trip_every_platform() {
        for platform in TargetPlatform::ALL {
            for content_type in corpus() {
                let name = encode(&content_type, platform);
                assert_eq!(
                    decode(&name, platform),
                    Ok(content_type.clone()),
                    "platform {platform}, name {name}"
                );
            }
        }
    }

    #[test]
    fn test_encode_is_injective() {
        for platform in TargetPlatform::ALL {
            let types = corpus();
            for (i, x) in types.iter().enumerate() {
                for y in types.iter().skip(i + 1) {
                    assert_ne!(
                        encode(x, platform),
                        encode(y, platform),
                        "{x} and {y} collide on {platform}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_subtype_with_dots_decodes_on_reverse_dns() {
        let translator = FormatNameTranslator::new(NamingScheme::ReverseDns);
        assert_eq!(
            translator.decode(&"com.web.application.vnd.ms-excel".into()),
            Ok(ct("application/vnd.ms-excel"))
        );
    }

    #[test]
    fn test_decode_rejects_sanitized_and_foreign_names() {
        let cases = [
            (NamingScheme::ReverseDns, "public.utf8-plain-text"),
            (NamingScheme::ReverseDns, "com.web."),
            (NamingScheme::ReverseDns, "com.web.nodot"),
            (NamingScheme::ReverseDns, "com.web.Text.plain"),
            (NamingScheme::CapitalizedWords, "CF_UNICODETEXT"),
            (NamingScheme::CapitalizedWords, "HTML Format"),
            (NamingScheme::CapitalizedWords, "Web Custom"),
            (NamingScheme::CapitalizedWords, "Web custom Format"),
            (NamingScheme::CapitalizedWords, "Web Custom  Format"),
            (NamingScheme::CapitalizedWords, "Web Custom Format Extra"),
            (NamingScheme::MimeNamespaced, "text/plain"),
            (NamingScheme::MimeNamespaced, "application/web;type=custom/format"),
            (NamingScheme::MimeNamespaced, "application/web;type=\"custom\""),
            (NamingScheme::MimeNamespaced, "application/web;type=\"a/b\"junk"),
        ];

        for (scheme, name) in cases {
            assert_eq!(
                FormatNameTranslator::new(scheme).decode(&name.into()),
                Err(NotAPickledFormat),
                "{name} should not decode under {scheme:?}"
            );
        }
    }

    #[test]
    fn test_names_do_not_decode_across_schemes() {
        let content_type = ct("custom/format");
        let mac = encode(&content_type, TargetPlatform::MacOS);
        let win = encode(&content_type, TargetPlatform::Windows);
        let linux = encode(&content_type, TargetPlatform::Linux);

        assert!(decode(&mac, TargetPlatform::Windows).is_err());
        assert!(decode(&mac, TargetPlatform::Linux).is_err());
        assert!(decode(&win, TargetPlatform::MacOS).is_err());
        assert!(decode(&linux, TargetPlatform::IOS).is_err());
    }
}

use crate::clipboard::{ContentType, NativeFormatName};
use crate::platform::{NamingScheme, TargetPlatform};
use crate::ports::SanitizedFormatRegistryPort;

/// The standardized formats every platform exchanges in sanitized form.
///
/// Names per scheme: reverse-DNS uses uniform type identifiers, the
/// capitalized-words scheme uses the registered Windows formats, and the
/// MIME-namespaced scheme uses the content type itself.
#[derive(Debug, Clone)]
pub struct StandardFormatRegistry {
    entries: Vec<(ContentType, NativeFormatName)>,
}

impl StandardFormatRegistry {
    pub fn new(scheme: NamingScheme) -> Self {
        let names: [(ContentType, &str); 4] = match scheme {
            NamingScheme::ReverseDns => [
                (ContentType::text_plain(), "public.utf8-plain-text"),
                (ContentType::text_html(), "public.html"),
                (ContentType::image_png(), "public.png"),
                (ContentType::image_svg(), "public.svg-image"),
            ],
            NamingScheme::CapitalizedWords => [
                (ContentType::text_plain(), "CF_UNICODETEXT"),
                (ContentType::text_html(), "HTML Format"),
                (ContentType::image_png(), "PNG"),
                (ContentType::image_svg(), "image/svg+xml"),
            ],
            NamingScheme::MimeNamespaced => [
                (ContentType::text_plain(), "text/plain"),
                (ContentType::text_html(), "text/html"),
                (ContentType::image_png(), "image/png"),
                (ContentType::image_svg(), "image/svg+xml"),
            ],
        };

        Self {
            entries: names
                .into_iter()
                .map(|(ct, name)| (ct, NativeFormatName::from(name)))
                .collect(),
        }
    }

    pub fn for_platform(platform: TargetPlatform) -> Self {
        Self::new(platform.naming_scheme())
    }

    pub fn content_types(&self) -> impl Iterator<Item = &ContentType> {
        self.entries.iter().map(|(ct, _)| ct)
    }
}

impl SanitizedFormatRegistryPort for StandardFormatRegistry {
    fn native_name(&self, content_type: &ContentType) -> Option<NativeFormatName> {
        self.entries
            .iter()
            .find(|(ct, _)| ct == content_type)
            .map(|(_, name)| name.clone())
    }

    fn content_type_of(&self, name: &NativeFormatName) -> Option<ContentType> {
        self.entries
            .iter()
            .find(|(_, n)| n == name)
            .map(|(ct, _)| ct.clone())
    }
}

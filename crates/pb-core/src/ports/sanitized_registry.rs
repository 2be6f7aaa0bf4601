use crate::clipboard::{ContentType, NativeFormatName};

/// Lookup into the platform's standardized (sanitized) format table.
pub trait SanitizedFormatRegistryPort: Send + Sync {
    /// Native name of a standardized content type, `None` if not standardized.
    fn native_name(&self, content_type: &ContentType) -> Option<NativeFormatName>;

    /// Reverse lookup, `None` for names outside the standardized table.
    fn content_type_of(&self, name: &NativeFormatName) -> Option<ContentType>;

    fn is_standardized(&self, content_type: &ContentType) -> bool {
        self.native_name(content_type).is_some()
    }
}

#[cfg(test)]
mockall::mock! {
    pub SanitizedFormatRegistry {}

    impl SanitizedFormatRegistryPort for SanitizedFormatRegistry {
        fn native_name(&self, content_type: &ContentType) -> Option<NativeFormatName>;
        fn content_type_of(&self, name: &NativeFormatName) -> Option<ContentType>;
    }
}

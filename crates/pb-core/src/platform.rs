use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

/// Platform whose clipboard format namespace the engine writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetPlatform {
    MacOS,
    IOS,
    Windows,
    Linux,
    ChromeOS,
    Android,
    Fuchsia,
    Test,
    Headless,
}

/// How pickled content types are spelled in a platform's format table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingScheme {
    /// `com.web.custom.format`
    ReverseDns,
    /// `Web Custom Format`
    CapitalizedWords,
    /// `application/web;type="custom/format"`
    MimeNamespaced,
}

impl TargetPlatform {
    pub const ALL: [TargetPlatform; 9] = [
        TargetPlatform::MacOS,
        TargetPlatform::IOS,
        TargetPlatform::Windows,
        TargetPlatform::Linux,
        TargetPlatform::ChromeOS,
        TargetPlatform::Android,
        TargetPlatform::Fuchsia,
        TargetPlatform::Test,
        TargetPlatform::Headless,
    ];

    /// Platform of the compile target.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            TargetPlatform::MacOS
        } else if cfg!(target_os = "ios") {
            TargetPlatform::IOS
        } else if cfg!(target_os = "windows") {
            TargetPlatform::Windows
        } else if cfg!(target_os = "android") {
            TargetPlatform::Android
        } else if cfg!(target_os = "fuchsia") {
            TargetPlatform::Fuchsia
        } else if cfg!(target_os = "linux") {
            TargetPlatform::Linux
        } else {
            TargetPlatform::Headless
        }
    }

    pub fn naming_scheme(&self) -> NamingScheme {
        match self {
            TargetPlatform::MacOS | TargetPlatform::IOS => NamingScheme::ReverseDns,
            TargetPlatform::Windows => NamingScheme::CapitalizedWords,
            TargetPlatform::Linux
            | TargetPlatform::ChromeOS
            | TargetPlatform::Android
            | TargetPlatform::Fuchsia
            | TargetPlatform::Test
            | TargetPlatform::Headless => NamingScheme::MimeNamespaced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetPlatform::MacOS => "macos",
            TargetPlatform::IOS => "ios",
            TargetPlatform::Windows => "windows",
            TargetPlatform::Linux => "linux",
            TargetPlatform::ChromeOS => "chromeos",
            TargetPlatform::Android => "android",
            TargetPlatform::Fuchsia => "fuchsia",
            TargetPlatform::Test => "test",
            TargetPlatform::Headless => "headless",
        }
    }
}

impl FromStr for TargetPlatform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetPlatform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

impl Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

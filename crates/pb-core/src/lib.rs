//! # pb-core
//!
//! Core domain models and format resolution rules for Pickleboard.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! the OS clipboard, the standardized format table and user-gesture
//! detection are reached through [`ports`].

pub mod clipboard;
pub mod config;
pub mod pickling;
pub mod platform;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{
    ClipboardItem, ClipboardSnapshot, ContentType, NativeClipboardEntry, NativeFormatName,
    Provenance, ResolvedReadResult,
};
pub use config::PicklingConfig;
pub use pickling::{EngineSettings, PicklingError, UnsanitizeList};
pub use platform::{NamingScheme, TargetPlatform};

//! # pb-platform
//!
//! Platform-specific implementations for Pickleboard.
//!
//! This crate contains the adapters behind the `pb-core` ports (OS clipboard,
//! user activation) and process bootstrap (configuration, tracing).

pub mod adapters;
pub mod bootstrap;
pub mod clipboard;

pub use adapters::{FixedUserActivation, InMemoryNativeClipboard, TimedUserActivation};
pub use clipboard::SystemNativeClipboard;

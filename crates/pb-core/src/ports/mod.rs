//! Port interfaces for the external collaborators of the engine
//!
//! Ports define the contract between the resolution rules (and the use cases
//! built on them) and whatever implements clipboard access, the standardized
//! format table and user-gesture detection.

mod native_clipboard;
mod sanitized_registry;
mod user_activation;

pub use native_clipboard::{NativeClipboardError, NativeClipboardPort};
pub use sanitized_registry::SanitizedFormatRegistryPort;
pub use user_activation::UserActivationPort;

#[cfg(test)]
pub use sanitized_registry::MockSanitizedFormatRegistry;
#[cfg(test)]
pub use user_activation::MockUserActivation;

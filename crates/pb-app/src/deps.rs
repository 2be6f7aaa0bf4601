//! # Use Case Dependencies
//!
//! Parameter grouping for the clipboard use cases. Not a builder: no build
//! steps, no defaults, no optional fields.

use pb_core::ports::{NativeClipboardPort, SanitizedFormatRegistryPort, UserActivationPort};
use std::sync::Arc;

/// Every external collaborator a clipboard call needs.
#[derive(Clone)]
pub struct ClipboardDeps {
    pub clipboard: Arc<dyn NativeClipboardPort>,
    pub registry: Arc<dyn SanitizedFormatRegistryPort>,
    pub activation: Arc<dyn UserActivationPort>,
}

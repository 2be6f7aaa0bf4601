//! Pickled format resolution.
//!
//! Call order for a clipboard operation: [`GestureGate`], then
//! [`UnsanitizeList::validate`], then [`WriteResolver`] or [`ReadResolver`],
//! both of which use [`FormatNameTranslator`] per entry.

mod error;
mod format_name;
mod gesture;
mod read;
mod registry;
mod settings;
mod unsanitize;
mod write;

pub use error::{PicklingError, PicklingErrorKind};
pub use format_name::{decode, encode, FormatNameTranslator, NotAPickledFormat};
pub use gesture::{GateDecision, GateDenial, GestureGate};
pub use read::{PickledOnlyPolicy, ReadResolver, UnknownPolicy};
pub use registry::StandardFormatRegistry;
pub use settings::{
    EngineSettings, SettingsError, DEFAULT_ACTIVATION_WINDOW, DEFAULT_MAX_PICKLED_FORMATS,
};
pub use unsanitize::UnsanitizeList;
pub use write::WriteResolver;

mod activation;
mod in_memory_clipboard;

pub use activation::{FixedUserActivation, TimedUserActivation};
pub use in_memory_clipboard::InMemoryNativeClipboard;

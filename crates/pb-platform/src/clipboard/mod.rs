mod system;

pub use system::SystemNativeClipboard;

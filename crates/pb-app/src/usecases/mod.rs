pub mod read_clipboard;
pub mod write_clipboard;

pub use read_clipboard::{ClipboardReadItem, ReadClipboardUseCase};
pub use write_clipboard::{WriteClipboardUseCase, WriteRequestItem};

use pb_core::EngineSettings;

use crate::deps::ClipboardDeps;

/// Both clipboard use cases wired against the same collaborators.
pub struct ClipboardUseCases {
    pub read: ReadClipboardUseCase,
    pub write: WriteClipboardUseCase,
}

impl ClipboardUseCases {
    pub fn new(deps: ClipboardDeps, settings: EngineSettings) -> Self {
        Self {
            read: ReadClipboardUseCase::new(deps.clone(), settings.clone()),
            write: WriteClipboardUseCase::new(deps, settings),
        }
    }
}

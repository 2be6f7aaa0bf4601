//! Pickleboard application layer
//!
//! Use cases that run a clipboard call end to end: gesture gate, request
//! validation, resolution, then exactly one native clipboard operation.

pub mod deps;
pub mod usecases;

pub use deps::ClipboardDeps;
pub use usecases::{
    ClipboardReadItem, ClipboardUseCases, ReadClipboardUseCase, WriteClipboardUseCase,
    WriteRequestItem,
};

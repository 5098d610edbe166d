//! Injectable cart persistence.
//!
//! The cart actor writes through a [`CartBackend`] trait object, so tests run
//! against [`MemoryBackend`] while a deployment uses [`JsonFileBackend`].
//! Storage failures are never fatal to the cart: callers log and carry on
//! with the in-memory state.

mod json_file;
mod memory;

pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;

use crate::model::CartRecord;

/// Errors a backend can surface. Callers treat all of them as ignorable.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Keyed load/save of serialized cart records.
///
/// A record that exists but fails to deserialize is *discarded*: `load`
/// returns `Ok(None)` so the cart restarts empty rather than erroring.
pub trait CartBackend: Send + Sync {
    fn load(&self, id: &str) -> Result<Option<CartRecord>, StorageError>;
    fn save(&self, id: &str, record: &CartRecord) -> Result<(), StorageError>;
}

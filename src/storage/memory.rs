//! In-memory backend for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::warn;

use crate::model::CartRecord;
use crate::storage::{CartBackend, StorageError};

/// Stores the *serialized* record per key, so loads exercise the same
/// JSON round trip the file backend does.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    cells: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject a raw value under a key. Test hook for malformed records.
    #[doc(hidden)]
    pub fn put_raw(&self, id: &str, raw: &str) {
        self.cells
            .lock()
            .expect("memory backend poisoned")
            .insert(id.to_string(), raw.to_string());
    }
}

impl CartBackend for MemoryBackend {
    fn load(&self, id: &str) -> Result<Option<CartRecord>, StorageError> {
        let cells = self.cells.lock().expect("memory backend poisoned");
        let Some(raw) = cells.get(id) else {
            return Ok(None);
        };
        match serde_json::from_str(raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!(cart_id = id, error = %e, "Discarding malformed cart record");
                Ok(None)
            }
        }
    }

    fn save(&self, id: &str, record: &CartRecord) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record)?;
        self.cells
            .lock()
            .expect("memory backend poisoned")
            .insert(id.to_string(), raw);
        Ok(())
    }
}

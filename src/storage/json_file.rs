//! File-per-key JSON backend, the deployment analog of browser local
//! storage: one record per cart key, replaced wholesale on every save.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::warn;

use crate::model::CartRecord;
use crate::storage::{CartBackend, StorageError};

pub struct JsonFileBackend {
    root: PathBuf,
}

impl JsonFileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }
}

impl CartBackend for JsonFileBackend {
    fn load(&self, id: &str) -> Result<Option<CartRecord>, StorageError> {
        let path = self.path_for(id);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!(cart_id = id, path = %path.display(), error = %e,
                    "Discarding malformed cart record");
                Ok(None)
            }
        }
    }

    fn save(&self, id: &str, record: &CartRecord) -> Result<(), StorageError> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        let raw = serde_json::to_vec(record)?;
        fs::write(self.path_for(id), raw)?;
        Ok(())
    }
}

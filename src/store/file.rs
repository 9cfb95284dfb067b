use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::{Map, Value};

use super::KeyValueStore;
use crate::error::StoreError;

/// All keys live in one JSON object on disk. Writes go to a sibling temp file
/// and are renamed over the original.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn load_or_empty(&self) -> Map<String, Value> {
        self.load().unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "store unreadable, treating as empty");
            Map::new()
        })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.load_or_empty().remove(key)
    }

    /// A document that cannot be parsed is replaced; one that cannot be read
    /// is left alone and the error returned, so other keys are not lost.
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock();
        let mut document = match self.load() {
            Ok(document) => document,
            Err(StoreError::Json(err)) => {
                tracing::warn!(path = %self.path.display(), error = %err, "store corrupt, rewriting");
                Map::new()
            }
            Err(err) => return Err(err),
        };
        document.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_vec_pretty(&Value::Object(document))?;
        let tmp = self.tmp_path();
        std::fs::write(&tmp, payload)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

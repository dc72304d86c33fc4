//! Key-value storage for the high-score record.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The single persisted record: who holds the high score, and what it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
    pub name: String,
    pub high_score: u32,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            name: "CPU".to_string(),
            high_score: 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("save store i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("save data is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Backend for `SaveSlot`. `Ok(None)` means nothing was ever saved under `key`.
pub trait SaveStore: Send + Sync + 'static {
    fn load(&self, key: &str) -> Result<Option<SaveData>, StoreError>;
    fn save(&mut self, key: &str, data: &SaveData) -> Result<(), StoreError>;
}

/// One JSON file per key inside `dir`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SaveStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<SaveData>, StoreError> {
        let text = match fs::read_to_string(self.path_for(key)) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn save(&mut self, key: &str, data: &SaveData) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let txt = serde_json::to_string_pretty(data)?;
        fs::write(self.path_for(key), txt)?;
        Ok(())
    }
}

/// In-process store. Records still go through serde so the format is
/// exercised; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn with_record(key: &str, data: &SaveData) -> Result<Self, StoreError> {
        let mut store = Self::default();
        store.save(key, data)?;
        Ok(store)
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds valid strings.
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Raw serialized text under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    pub fn put_raw(&self, key: &str, text: impl Into<String>) {
        self.entries().insert(key.to_string(), text.into());
    }
}

impl SaveStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<SaveData>, StoreError> {
        match self.entries().get(key) {
            Some(text) => Ok(Some(serde_json::from_str(text)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, data: &SaveData) -> Result<(), StoreError> {
        let txt = serde_json::to_string(data)?;
        self.entries().insert(key.to_string(), txt);
        Ok(())
    }
}

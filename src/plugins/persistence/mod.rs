//! Persistence adapter: the high-score record.
//!
//! `SaveSlot` is loaded once when the plugin builds and then kept in memory.
//! Loading never fails the caller: a missing or unreadable record falls back
//! to `SaveData::default()` and the error is logged. Saving overwrites the
//! stored record unconditionally.

mod store;

use bevy::prelude::*;

use crate::common::config;

pub use store::{JsonFileStore, MemoryStore, SaveData, SaveStore, StoreError};

#[derive(Resource)]
pub struct SaveSlot {
    store: Box<dyn SaveStore>,
    key: String,
    record: SaveData,
}

impl SaveSlot {
    pub fn open(store: Box<dyn SaveStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let record = match store.load(&key) {
            Ok(Some(data)) => {
                debug!("Loaded high score {} ({})", data.high_score, data.name);
                data
            }
            Ok(None) => SaveData::default(),
            Err(e) => {
                warn!("Could not load {key}, using defaults: {e}");
                SaveData::default()
            }
        };

        Self { store, key, record }
    }

    /// Fresh in-memory slot with the default record.
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStore::default()), config::SAVE_KEY)
    }

    pub fn record(&self) -> &SaveData {
        &self.record
    }

    pub fn is_new_high_score(&self, score: u32) -> bool {
        score > self.record.high_score
    }

    /// Replace the record and write it through. The in-memory copy is
    /// updated even when the write fails.
    pub fn save(&mut self, record: SaveData) -> Result<(), StoreError> {
        self.record = record;
        match self.store.save(&self.key, &self.record) {
            Ok(()) => {
                info!(
                    "Saved high score {} ({})",
                    self.record.high_score, self.record.name
                );
                Ok(())
            }
            Err(e) => {
                error!("Could not save {}: {e}", self.key);
                Err(e)
            }
        }
    }
}

/// Installs a file-backed slot unless one was provided up front.
pub fn plugin(app: &mut App) {
    if app.world().contains_resource::<SaveSlot>() {
        return;
    }
    let store = JsonFileStore::new(config::save_dir());
    app.insert_resource(SaveSlot::open(Box::new(store), config::SAVE_KEY));
}

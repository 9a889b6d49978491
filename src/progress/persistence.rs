//! Durable save of player progress and display name.
//!
//! The save is a single JSON document under the `ecoquest-game-storage`
//! key. It carries a `version`; documents written before versioning parse
//! as version 0 and every missing field takes its serde default, after
//! which `migrate` brings the record up to `STORAGE_VERSION`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::PlayerProgress;
use crate::constants::{FIRST_LEVEL, STORAGE_KEY, STORAGE_VERSION, TOTAL_LEVELS};
use crate::utils::persistence::{save_json, save_path};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access save file: {0}")]
    Io(#[from] io::Error),

    #[error("Save file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The two fields that survive a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedState {
    /// Absent in pre-versioned saves, which then read as 0
    #[serde(default)]
    pub version: u32,
    pub player_progress: PlayerProgress,
    pub player_name: String,
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            player_progress: PlayerProgress::new(),
            player_name: String::new(),
        }
    }
}

/// Default save location: ~/.ecoquest/ecoquest-game-storage.json
pub fn default_save_path() -> io::Result<PathBuf> {
    save_path(&format!("{}.json", STORAGE_KEY))
}

/// Bring an older record up to the current layout.
pub fn migrate(mut state: SavedState) -> SavedState {
    if state.version < STORAGE_VERSION {
        // Pre-versioned saves may hold a zero frontier and unclamped stars.
        let progress = &mut state.player_progress;
        progress.current_level = progress.current_level.clamp(FIRST_LEVEL, TOTAL_LEVELS);
        for (level_id, record) in progress.levels_progress.iter_mut() {
            record.level_id = *level_id;
            record.stars = record.stars.min(3);
        }
        state.version = STORAGE_VERSION;
    }
    state
}

/// Load the save at `path`. A missing file is a fresh start, not an error.
pub fn load_saved_state(path: &Path) -> Result<SavedState, StoreError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SavedState::default()),
        Err(e) => return Err(e.into()),
    };
    let state: SavedState = serde_json::from_str(&json)?;
    Ok(migrate(state))
}

pub fn save_saved_state(path: &Path, state: &SavedState) -> Result<(), StoreError> {
    save_json(path, state)?;
    Ok(())
}

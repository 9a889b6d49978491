//! Durable player progression data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::FIRST_LEVEL;

/// Best results for one level. Created on first completion and only ever
/// improved afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelProgress {
    pub level_id: u32,
    pub completed: bool,
    /// 0-3, 0 only for records that were never completed
    pub stars: u8,
    pub best_score: u32,
    /// Seconds; `None` until a timed completion is recorded
    pub best_time: Option<f64>,
    /// Percentage, 0-100
    pub accuracy: f64,
}

impl LevelProgress {
    /// Empty record used as the base for manual patches.
    pub fn empty(level_id: u32) -> Self {
        Self {
            level_id,
            completed: false,
            stars: 0,
            best_score: 0,
            best_time: None,
            accuracy: 0.0,
        }
    }
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::empty(0)
    }
}

/// A partial update applied over an existing `LevelProgress`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelProgressPatch {
    pub completed: Option<bool>,
    pub stars: Option<u8>,
    pub best_score: Option<u32>,
    pub best_time: Option<f64>,
    pub accuracy: Option<f64>,
}

/// Cross-session progress for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProgress {
    /// Level frontier: every level up to and including this one is playable
    pub current_level: u32,
    pub total_xp: u64,
    pub levels_progress: BTreeMap<u32, LevelProgress>,
    /// Empty until a hero is picked
    pub selected_hero_id: String,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerProgress {
    pub fn new() -> Self {
        Self {
            current_level: FIRST_LEVEL,
            total_xp: 0,
            levels_progress: BTreeMap::new(),
            selected_hero_id: String::new(),
        }
    }
}

/// Everything computed when a level is settled, for the completion screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSummary {
    pub level_id: u32,
    pub score: u32,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    pub hints_used: u32,
    pub accuracy: f64,
    pub stars: u8,
    pub time_taken_secs: f64,
    pub xp_awarded: u64,
    /// Frontier after settlement
    pub current_level: u32,
}

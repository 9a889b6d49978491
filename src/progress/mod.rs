//! Durable player progression: per-level best results, XP, the level
//! frontier and the selected hero.

mod logic;
pub mod persistence;
mod types;

pub use logic::{calculate_stars, merge_best, xp_for_completion};
pub use persistence::{load_saved_state, save_saved_state, SavedState, StoreError};
pub use types::{LevelProgress, LevelProgressPatch, LevelSummary, PlayerProgress};

//! Static, read-only game content: heroes, the question bank, and the
//! seed leaderboard.

pub mod heroes;
pub mod leaderboard;
mod question_bank;
pub mod questions;

pub use heroes::{get_all_heroes, get_hero_by_id, Hero, HintStrength};
pub use leaderboard::{
    add_to_leaderboard, get_leaderboard, Leaderboard, LeaderboardEntry, NewLeaderboardEntry,
};
pub use questions::{
    get_all_questions, get_question_by_id, questions_for_level, total_levels, Difficulty,
    Question, Topic,
};

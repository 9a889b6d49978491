//! EcoQuest - environmental quiz adventure game core
//!
//! Heroes, leveled multiple-choice quizzes, hints, encouragement and
//! durable player progression. Presentation is left to the embedding
//! application, which drives a [`GameStore`].

pub mod config;
pub mod constants;
pub mod content;
pub mod hints;
pub mod progress;
pub mod services;
pub mod session;
pub mod store;
pub mod utils;

pub use config::GeneratorConfig;
pub use content::{Hero, HintStrength, Question, Topic};
pub use hints::{HintCategory, HintProvider, HintResult, TextGenerator};
pub use progress::{LevelProgress, LevelSummary, PlayerProgress};
pub use session::{AnswerOutcome, GameSession, SessionStatus};
pub use store::{Advance, GameStore};

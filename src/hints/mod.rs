//! Hints and answer feedback.
//!
//! `HintProvider` answers elimination hints locally and sends the other
//! categories through a `TextGenerator`, falling back to canned text when
//! generation fails. `encouragement` picks the line shown after an answer.

pub mod encouragement;
pub mod gemini;
pub mod prompt;
pub mod provider;
mod types;

pub use encouragement::encouragement;
pub use gemini::GeminiClient;
pub use provider::{eliminate_option, HintProvider};
pub use types::{GenerateError, HintCategory, HintResult, OfflineGenerator, TextGenerator};

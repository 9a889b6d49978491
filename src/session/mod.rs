//! Game session state machine.
//!
//! A session is one attempt at one level. It is `Active` until either the
//! last life is lost (`GameOver`) or the level is finished
//! (`LevelComplete`); the two are mutually exclusive.

mod logic;
mod types;

pub use logic::{accuracy, points_for_correct};
pub use types::{AnswerOutcome, GameSession, HintTicket, SessionStatus};

//! Game session data structures.

use serde::{Deserialize, Serialize};

use crate::content::HintStrength;

/// Where a session sits in its lifecycle. Both terminal states absorb:
/// nothing advances or scores once one is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    GameOver,
    LevelComplete,
}

/// Mutable state of a single level attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// Fresh per `start_level`; lets late hint results detect a replaced session
    pub session_id: u64,
    pub level_id: u32,
    /// 0-based, never decreases
    pub current_question: usize,
    pub lives: u32,
    pub score: u32,
    pub hints_used: u32,
    pub hints_remaining: u32,
    /// Strength of the hero that started the attempt
    pub hint_strength: HintStrength,
    /// Unix millis
    pub start_time_ms: i64,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    /// Consecutive correct answers, reset by a wrong one
    pub streak: u32,
    /// Display clock, advanced by `tick` while active. Settlement ignores it.
    pub elapsed_secs: u64,
    /// Options ruled out by elimination hints on the current question
    pub eliminated_options: Vec<usize>,
    pub is_game_over: bool,
    pub is_level_complete: bool,
}

/// What happened when an answer was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub points_awarded: u32,
    pub lives_remaining: u32,
    pub streak: u32,
    pub game_over: bool,
}

/// Proof that a hint was paid for on a particular session and question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintTicket {
    pub session_id: u64,
    pub question_index: usize,
}

//! Session transitions.
//!
//! Every mutating method checks the terminal flags first and reports
//! whether it did anything, so callers can treat a `false`/`None` as the
//! silent no-op the UI expects.

use super::{AnswerOutcome, GameSession, SessionStatus};
use crate::constants::{BASE_POINTS_PER_CORRECT, HINT_POINT_PENALTY, MIN_POINTS_PER_CORRECT};
use crate::content::Hero;

/// Points for a correct answer given the hints already spent this level.
pub fn points_for_correct(hints_used: u32) -> u32 {
    BASE_POINTS_PER_CORRECT
        .saturating_sub(hints_used.saturating_mul(HINT_POINT_PENALTY))
        .max(MIN_POINTS_PER_CORRECT)
}

/// Accuracy percentage (0-100), or 0 when nothing was answered.
pub fn accuracy(correct: u32, wrong: u32) -> f64 {
    let total = correct + wrong;
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

impl GameSession {
    /// Fresh attempt at `level_id` using the hero's lives and hint allowance.
    pub fn new(session_id: u64, level_id: u32, hero: &Hero, now_ms: i64) -> Self {
        Self {
            session_id,
            level_id,
            current_question: 0,
            lives: hero.max_lives,
            score: 0,
            hints_used: 0,
            hints_remaining: hero.hints,
            hint_strength: hero.hint_strength,
            start_time_ms: now_ms,
            correct_answers: 0,
            wrong_answers: 0,
            streak: 0,
            elapsed_secs: 0,
            eliminated_options: Vec::new(),
            is_game_over: false,
            is_level_complete: false,
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_game_over {
            SessionStatus::GameOver
        } else if self.is_level_complete {
            SessionStatus::LevelComplete
        } else {
            SessionStatus::Active
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.is_game_over || self.is_level_complete
    }

    pub fn accuracy(&self) -> f64 {
        accuracy(self.correct_answers, self.wrong_answers)
    }

    pub fn answered(&self) -> u32 {
        self.correct_answers + self.wrong_answers
    }

    /// Record an answer without moving to the next question.
    pub fn answer(&mut self, is_correct: bool) -> Option<AnswerOutcome> {
        if self.is_terminal() {
            return None;
        }

        let mut points_awarded = 0;
        if is_correct {
            points_awarded = points_for_correct(self.hints_used);
            self.correct_answers += 1;
            self.score += points_awarded;
            self.streak += 1;
        } else {
            self.wrong_answers += 1;
            self.streak = 0;
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.is_game_over = true;
            }
        }

        Some(AnswerOutcome {
            is_correct,
            points_awarded,
            lives_remaining: self.lives,
            streak: self.streak,
            game_over: self.is_game_over,
        })
    }

    /// Move to the next prompt. Returns false on a terminal session.
    pub fn advance_question(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.current_question += 1;
        self.eliminated_options.clear();
        true
    }

    /// Spend one hint. Returns false when none remain or the session ended.
    pub fn debit_hint(&mut self) -> bool {
        if self.is_terminal() || self.hints_remaining == 0 {
            return false;
        }
        self.hints_used += 1;
        self.hints_remaining -= 1;
        true
    }

    /// Flag the level as won. A game-over session can never complete.
    pub fn complete(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.is_level_complete = true;
        true
    }

    /// One second of display time. Stops counting once terminal.
    pub fn tick(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.elapsed_secs += 1;
        true
    }

    /// Seconds since the session started, from the start timestamp.
    pub fn elapsed_since_start(&self, now_ms: i64) -> f64 {
        (now_ms - self.start_time_ms).max(0) as f64 / 1000.0
    }

    pub fn record_elimination(&mut self, option: usize) {
        if !self.eliminated_options.contains(&option) {
            self.eliminated_options.push(option);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{get_hero_by_id, HintStrength};

    fn hero(max_lives: u32, hints: u32) -> Hero {
        Hero {
            id: "test",
            name: "Test",
            description: "",
            max_lives,
            hints,
            hint_strength: HintStrength::Weak,
        }
    }

    fn session(max_lives: u32, hints: u32) -> GameSession {
        GameSession::new(1, 1, &hero(max_lives, hints), 1_000)
    }

    #[test]
    fn test_new_session_uses_hero_attributes() {
        let gaia = get_hero_by_id("gaia").unwrap();
        let s = GameSession::new(7, 3, gaia, 42);
        assert_eq!(s.session_id, 7);
        assert_eq!(s.level_id, 3);
        assert_eq!(s.lives, 4);
        assert_eq!(s.hints_remaining, 2);
        assert_eq!(s.hints_used, 0);
        assert_eq!(s.start_time_ms, 42);
        assert_eq!(s.hint_strength, HintStrength::Medium);
        assert_eq!(s.status(), SessionStatus::Active);
    }

    #[test]
    fn test_points_floor() {
        assert_eq!(points_for_correct(0), 100);
        assert_eq!(points_for_correct(1), 90);
        assert_eq!(points_for_correct(5), 50);
        assert_eq!(points_for_correct(6), 50);
        assert_eq!(points_for_correct(u32::MAX), 50);
    }

    #[test]
    fn test_accuracy_without_answers_is_zero() {
        assert_eq!(accuracy(0, 0), 0.0);
        assert_eq!(accuracy(3, 1), 75.0);
        assert_eq!(accuracy(10, 0), 100.0);
    }

    #[test]
    fn test_correct_answer_scores_and_streaks() {
        let mut s = session(3, 0);
        let out = s.answer(true).unwrap();
        assert_eq!(out.points_awarded, 100);
        assert_eq!(out.streak, 1);
        s.answer(true);
        assert_eq!(s.score, 200);
        assert_eq!(s.streak, 2);
        assert_eq!(s.correct_answers, 2);
        assert_eq!(s.current_question, 0);
    }

    #[test]
    fn test_wrong_answer_costs_life_and_streak() {
        let mut s = session(3, 0);
        s.answer(true);
        let out = s.answer(false).unwrap();
        assert_eq!(out.lives_remaining, 2);
        assert_eq!(out.streak, 0);
        assert_eq!(out.points_awarded, 0);
        assert!(!out.game_over);
        assert_eq!(s.wrong_answers, 1);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut s = session(1, 0);
        let out = s.answer(false).unwrap();
        assert!(out.game_over);
        assert_eq!(s.lives, 0);
        assert_eq!(s.status(), SessionStatus::GameOver);
    }

    #[test]
    fn test_terminal_session_ignores_everything() {
        let mut s = session(1, 2);
        s.answer(false);
        let frozen = s.clone();

        assert!(s.answer(true).is_none());
        assert!(s.answer(false).is_none());
        assert!(!s.advance_question());
        assert!(!s.debit_hint());
        assert!(!s.complete());
        assert!(!s.tick());
        assert_eq!(s, frozen);
    }

    #[test]
    fn test_debit_hint_until_exhausted() {
        let mut s = session(3, 2);
        assert!(s.debit_hint());
        assert!(s.debit_hint());
        assert!(!s.debit_hint());
        assert_eq!(s.hints_used, 2);
        assert_eq!(s.hints_remaining, 0);
    }

    #[test]
    fn test_hints_lower_later_points() {
        let mut s = session(3, 4);
        s.debit_hint();
        s.debit_hint();
        assert_eq!(s.answer(true).unwrap().points_awarded, 80);
    }

    #[test]
    fn test_advance_clears_eliminations() {
        let mut s = session(3, 1);
        s.record_elimination(2);
        s.record_elimination(2);
        assert_eq!(s.eliminated_options, vec![2]);
        assert!(s.advance_question());
        assert_eq!(s.current_question, 1);
        assert!(s.eliminated_options.is_empty());
    }

    #[test]
    fn test_complete_is_exclusive_with_game_over() {
        let mut s = session(3, 0);
        assert!(s.complete());
        assert_eq!(s.status(), SessionStatus::LevelComplete);
        assert!(s.answer(false).is_none());
        assert!(!s.is_game_over);
    }

    #[test]
    fn test_tick_and_elapsed() {
        let mut s = session(3, 0);
        s.tick();
        s.tick();
        assert_eq!(s.elapsed_secs, 2);
        assert_eq!(s.elapsed_since_start(13_500), 12.5);
        assert_eq!(s.elapsed_since_start(0), 0.0);
    }
}

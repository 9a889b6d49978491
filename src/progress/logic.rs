//! Star rating, best-of merging, settlement and unlock rules.

use super::{LevelProgress, LevelProgressPatch, LevelSummary, PlayerProgress};
use crate::constants::{THREE_STAR_ACCURACY, TOTAL_LEVELS, TWO_STAR_ACCURACY, XP_PER_STAR};
use crate::content::{get_hero_by_id, Hero, NewLeaderboardEntry};
use crate::session::GameSession;

/// Stars for a completed level. Any completion earns at least one.
pub fn calculate_stars(accuracy: f64, hints_used: u32) -> u8 {
    if accuracy >= THREE_STAR_ACCURACY && hints_used == 0 {
        3
    } else if accuracy >= TWO_STAR_ACCURACY {
        2
    } else {
        1
    }
}

/// XP granted for a completion.
pub fn xp_for_completion(score: u32, stars: u8) -> u64 {
    score as u64 + stars as u64 * XP_PER_STAR
}

/// Fold a fresh result into the stored record, keeping the best of each field.
pub fn merge_best(
    existing: Option<&LevelProgress>,
    level_id: u32,
    stars: u8,
    score: u32,
    time_secs: f64,
    accuracy: f64,
) -> LevelProgress {
    let Some(old) = existing else {
        return LevelProgress {
            level_id,
            completed: true,
            stars,
            best_score: score,
            best_time: Some(time_secs),
            accuracy,
        };
    };

    let best_time = match old.best_time {
        Some(t) if t > 0.0 => t.min(time_secs),
        _ => time_secs,
    };

    LevelProgress {
        level_id,
        completed: true,
        stars: stars.max(old.stars),
        best_score: score.max(old.best_score),
        best_time: Some(best_time),
        accuracy: accuracy.max(old.accuracy),
    }
}

impl PlayerProgress {
    /// Levels up to and including the frontier are playable.
    pub fn can_play_level(&self, level_id: u32) -> bool {
        level_id <= self.current_level
    }

    pub fn get_level_progress(&self, level_id: u32) -> Option<&LevelProgress> {
        self.levels_progress.get(&level_id)
    }

    /// Pick a hero by id. Unknown ids leave the selection unchanged.
    pub fn select_hero(&mut self, hero_id: &str) -> bool {
        if get_hero_by_id(hero_id).is_none() {
            return false;
        }
        self.selected_hero_id = hero_id.to_string();
        true
    }

    pub fn selected_hero(&self) -> Option<&'static Hero> {
        get_hero_by_id(&self.selected_hero_id)
    }

    pub fn add_xp(&mut self, amount: u64) {
        self.total_xp = self.total_xp.saturating_add(amount);
    }

    /// Push the frontier one level forward, capped at the last level.
    pub fn unlock_next_level(&mut self) {
        self.current_level = (self.current_level + 1).min(TOTAL_LEVELS);
    }

    /// Raise the frontier to `level_id` if it is further; never lowers it.
    fn raise_frontier(&mut self, level_id: u32) {
        self.current_level = self.current_level.max(level_id.min(TOTAL_LEVELS));
    }

    /// Overwrite the given fields of a level record, creating it if needed.
    pub fn update_level_progress(&mut self, level_id: u32, patch: LevelProgressPatch) {
        let entry = self
            .levels_progress
            .entry(level_id)
            .or_insert_with(|| LevelProgress::empty(level_id));
        if let Some(completed) = patch.completed {
            entry.completed = completed;
        }
        if let Some(stars) = patch.stars {
            entry.stars = stars.min(3);
        }
        if let Some(score) = patch.best_score {
            entry.best_score = score;
        }
        if let Some(time) = patch.best_time {
            entry.best_time = Some(time);
        }
        if let Some(accuracy) = patch.accuracy {
            entry.accuracy = accuracy;
        }
    }

    /// Settle a won session: merge bests, award XP and open the next level.
    pub fn settle(&mut self, session: &GameSession, now_ms: i64) -> LevelSummary {
        let accuracy = session.accuracy();
        let stars = calculate_stars(accuracy, session.hints_used);
        let time_taken = session.elapsed_since_start(now_ms);

        let merged = merge_best(
            self.levels_progress.get(&session.level_id),
            session.level_id,
            stars,
            session.score,
            time_taken,
            accuracy,
        );
        self.levels_progress.insert(session.level_id, merged);

        let xp = xp_for_completion(session.score, stars);
        self.add_xp(xp);
        self.raise_frontier(session.level_id.saturating_add(1));

        LevelSummary {
            level_id: session.level_id,
            score: session.score,
            correct_answers: session.correct_answers,
            wrong_answers: session.wrong_answers,
            hints_used: session.hints_used,
            accuracy,
            stars,
            time_taken_secs: time_taken,
            xp_awarded: xp,
            current_level: self.current_level,
        }
    }

    pub fn levels_completed(&self) -> u32 {
        self.levels_progress.values().filter(|p| p.completed).count() as u32
    }

    /// Mean stored accuracy across completed levels.
    pub fn average_accuracy(&self) -> f64 {
        let completed: Vec<f64> = self
            .levels_progress
            .values()
            .filter(|p| p.completed)
            .map(|p| p.accuracy)
            .collect();
        if completed.is_empty() {
            return 0.0;
        }
        completed.iter().sum::<f64>() / completed.len() as f64
    }

    pub fn total_stars(&self) -> u32 {
        self.levels_progress.values().map(|p| p.stars as u32).sum()
    }

    /// This player's row for the leaderboard.
    pub fn leaderboard_entry(&self, player_name: &str) -> NewLeaderboardEntry {
        NewLeaderboardEntry {
            player_name: player_name.to_string(),
            hero_id: self.selected_hero_id.clone(),
            total_xp: self.total_xp,
            accuracy: self.average_accuracy(),
            levels_completed: self.levels_completed(),
        }
    }
}

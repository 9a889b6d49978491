//! The game controller.
//!
//! `GameStore` owns the durable progress, the display name and at most one
//! active session. Presentation code holds a `&mut GameStore` and drives it
//! through discrete operations; precondition failures come back as
//! `false`/`None` rather than errors. Durable fields are written through to
//! the save file after every change when a save path is configured.

use chrono::Utc;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::constants::{FIRST_LEVEL, TOTAL_LEVELS};
use crate::content::{Hero, Question};
use crate::hints::{HintCategory, HintProvider, HintResult, TextGenerator};
use crate::progress::persistence::default_save_path;
use crate::progress::{
    calculate_stars, load_saved_state, save_saved_state, LevelProgress, LevelProgressPatch,
    LevelSummary, PlayerProgress, SavedState, StoreError,
};
use crate::services::{save_player_name, IdentityProvider, ProfileStore};
use crate::session::{AnswerOutcome, GameSession, HintTicket};

/// Result of moving past the current question.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Moved on; carries the new question index
    NextQuestion(usize),
    /// That was the last question and the level has been settled
    Completed(LevelSummary),
    /// No active session, or the session already ended
    Ignored,
}

/// Where an unreadable save is kept: the same path with `.bak` appended.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[derive(Debug)]
pub struct GameStore {
    progress: PlayerProgress,
    player_name: String,
    session: Option<GameSession>,
    next_session_id: u64,
    save_path: Option<PathBuf>,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl GameStore {
    /// A fresh store that never touches disk.
    pub fn in_memory() -> Self {
        Self::from_saved(SavedState::default(), None)
    }

    /// Open the save at `path`. An unreadable save is logged and replaced
    /// by a fresh start. A save that does not parse is first moved aside to
    /// `<name>.bak` so the next write cannot destroy it.
    pub fn open(path: &Path) -> Self {
        let state = match load_saved_state(path) {
            Ok(state) => state,
            Err(e) => {
                warn!(path = %path.display(), "Could not load save, starting fresh: {}", e);
                if matches!(e, StoreError::Json(_)) {
                    let backup = backup_path(path);
                    if let Err(e) = fs::rename(path, &backup) {
                        warn!(path = %backup.display(), "Could not back up unreadable save: {}", e);
                    }
                }
                SavedState::default()
            }
        };
        Self::from_saved(state, Some(path.to_path_buf()))
    }

    /// Open the save in the default location, or run in memory when the
    /// home directory cannot be resolved.
    pub fn open_default() -> Self {
        match default_save_path() {
            Ok(path) => Self::open(&path),
            Err(e) => {
                warn!("No save location available, progress will not persist: {}", e);
                Self::in_memory()
            }
        }
    }

    fn from_saved(state: SavedState, save_path: Option<PathBuf>) -> Self {
        Self {
            progress: state.player_progress,
            player_name: state.player_name,
            session: None,
            next_session_id: 1,
            save_path,
        }
    }

    pub fn save_path(&self) -> Option<&Path> {
        self.save_path.as_deref()
    }

    /// Snapshot of the durable fields.
    pub fn saved_state(&self) -> SavedState {
        SavedState {
            player_progress: self.progress.clone(),
            player_name: self.player_name.clone(),
            ..SavedState::default()
        }
    }

    /// Write the durable fields now. A store without a save path succeeds
    /// trivially.
    pub fn save(&self) -> Result<(), StoreError> {
        match &self.save_path {
            Some(path) => save_saved_state(path, &self.saved_state()),
            None => Ok(()),
        }
    }

    /// Single best-effort write; in-memory state stays authoritative.
    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!("Failed to persist game state: {}", e);
        }
    }

    // ---- player ----

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn set_player_name(&mut self, name: &str) {
        self.player_name = name.to_string();
        self.persist();
    }

    /// Set the name locally, then push it to the signed-in user's profile.
    /// Returns whether the remote save happened; failures there are logged
    /// and otherwise ignored.
    pub fn set_player_name_synced<I, S>(&mut self, name: &str, identity: &I, profiles: &S) -> bool
    where
        I: IdentityProvider + ?Sized,
        S: ProfileStore + ?Sized,
    {
        self.set_player_name(name);
        match save_player_name(identity, profiles, name) {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Failed to save display name to profile: {}", e);
                false
            }
        }
    }

    /// Select a hero by id. Unknown ids are ignored.
    pub fn select_hero(&mut self, hero_id: &str) -> bool {
        if !self.progress.select_hero(hero_id) {
            debug!(hero_id, "Ignoring unknown hero");
            return false;
        }
        self.persist();
        true
    }

    pub fn selected_hero(&self) -> Option<&'static Hero> {
        self.progress.selected_hero()
    }

    // ---- session ----

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Begin a fresh attempt at `level_id`, replacing any current session.
    /// Returns false when no hero is selected or the level does not exist.
    pub fn start_level(&mut self, level_id: u32) -> bool {
        self.start_level_at(level_id, now_ms())
    }

    pub fn start_level_at(&mut self, level_id: u32, now_ms: i64) -> bool {
        if !(FIRST_LEVEL..=TOTAL_LEVELS).contains(&level_id) {
            debug!(level_id, "Ignoring start of unknown level");
            return false;
        }
        let Some(hero) = self.progress.selected_hero() else {
            debug!(level_id, "Hero selection required before starting a level");
            return false;
        };

        let session_id = self.next_session_id;
        self.next_session_id += 1;
        self.session = Some(GameSession::new(session_id, level_id, hero, now_ms));
        info!(level_id, hero = hero.id, session_id, "Level started");
        true
    }

    /// Record an answer on the active session.
    pub fn answer_question(&mut self, is_correct: bool) -> Option<AnswerOutcome> {
        let session = self.session.as_mut()?;
        let outcome = session.answer(is_correct)?;
        if outcome.game_over {
            info!(
                level_id = session.level_id,
                score = session.score,
                "Game over"
            );
        }
        Some(outcome)
    }

    pub fn next_question(&mut self) -> bool {
        self.session
            .as_mut()
            .map_or(false, |session| session.advance_question())
    }

    /// Spend a hint without producing any content.
    pub fn use_hint(&mut self) -> bool {
        self.session
            .as_mut()
            .map_or(false, |session| session.debit_hint())
    }

    /// Finish the active session. `completed == false` is an abort and
    /// grants nothing. A won level is settled into progress and persisted.
    pub fn end_level(&mut self, completed: bool) -> Option<LevelSummary> {
        self.end_level_at(completed, now_ms())
    }

    pub fn end_level_at(&mut self, completed: bool, now_ms: i64) -> Option<LevelSummary> {
        let session = self.session.as_mut()?;
        if !completed {
            debug!(level_id = session.level_id, "Level ended without completion");
            return None;
        }
        if !session.complete() {
            debug!(level_id = session.level_id, "Ignoring end of a finished session");
            return None;
        }

        let summary = self.progress.settle(session, now_ms);
        info!(
            level_id = summary.level_id,
            score = summary.score,
            stars = summary.stars,
            xp = summary.xp_awarded,
            "Level complete"
        );
        self.persist();
        Some(summary)
    }

    /// Move past the current question of a level with `question_count`
    /// questions, settling the level when it was the last one.
    pub fn advance(&mut self, question_count: usize) -> Advance {
        self.advance_at(question_count, now_ms())
    }

    pub fn advance_at(&mut self, question_count: usize, now_ms: i64) -> Advance {
        let Some(session) = self.session.as_mut() else {
            return Advance::Ignored;
        };
        if session.is_terminal() {
            return Advance::Ignored;
        }

        if session.current_question + 1 >= question_count {
            return match self.end_level_at(true, now_ms) {
                Some(summary) => Advance::Completed(summary),
                None => Advance::Ignored,
            };
        }

        session.advance_question();
        Advance::NextQuestion(session.current_question)
    }

    /// Drop the current session entirely.
    pub fn reset_game_session(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(session_id = session.session_id, "Session reset");
        }
    }

    /// One second of display time on the active session.
    pub fn tick(&mut self) -> bool {
        self.session.as_mut().map_or(false, |session| session.tick())
    }

    // ---- hints ----

    /// Pay for a hint and get a ticket identifying where it was paid.
    /// Content is produced separately and handed back to `accept_hint`.
    pub fn begin_hint(&mut self) -> Option<HintTicket> {
        let session = self.session.as_mut()?;
        if !session.debit_hint() {
            return None;
        }
        debug!(
            session_id = session.session_id,
            hints_remaining = session.hints_remaining,
            "Hint debited"
        );
        Some(HintTicket {
            session_id: session.session_id,
            question_index: session.current_question,
        })
    }

    /// Apply a hint produced for `ticket`. Results for a session that was
    /// replaced, reset or finished, or for a question already left behind,
    /// are dropped.
    pub fn accept_hint(&mut self, ticket: HintTicket, hint: HintResult) -> Option<HintResult> {
        let Some(session) = self.session.as_mut() else {
            debug!(session_id = ticket.session_id, "Dropping hint, no active session");
            return None;
        };
        if session.session_id != ticket.session_id
            || session.current_question != ticket.question_index
            || session.is_terminal()
        {
            debug!(
                session_id = ticket.session_id,
                question = ticket.question_index,
                "Dropping stale hint"
            );
            return None;
        }

        if let Some(option) = hint.eliminated_option {
            session.record_elimination(option);
        }
        Some(hint)
    }

    /// Pay for, produce and apply a hint for `question` in one call.
    pub fn request_hint<G, R>(
        &mut self,
        provider: &HintProvider<G>,
        question: &Question,
        category: HintCategory,
        rng: &mut R,
    ) -> Option<HintResult>
    where
        G: TextGenerator,
        R: Rng + ?Sized,
    {
        let ticket = self.begin_hint()?;
        let (strength, eliminated) = {
            let session = self.session.as_ref()?;
            (session.hint_strength, session.eliminated_options.clone())
        };
        let hint = provider.generate_hint(question, category, strength, &eliminated, rng);
        self.accept_hint(ticket, hint)
    }

    // ---- progress ----

    pub fn player_progress(&self) -> &PlayerProgress {
        &self.progress
    }

    pub fn can_play_level(&self, level_id: u32) -> bool {
        self.progress.can_play_level(level_id)
    }

    pub fn get_level_progress(&self, level_id: u32) -> Option<&LevelProgress> {
        self.progress.get_level_progress(level_id)
    }

    pub fn update_level_progress(&mut self, level_id: u32, patch: LevelProgressPatch) {
        self.progress.update_level_progress(level_id, patch);
        self.persist();
    }

    pub fn add_xp(&mut self, amount: u64) {
        self.progress.add_xp(amount);
        self.persist();
    }

    pub fn unlock_next_level(&mut self) {
        self.progress.unlock_next_level();
        self.persist();
    }

    pub fn calculate_stars(accuracy: f64, hints_used: u32) -> u8 {
        calculate_stars(accuracy, hints_used)
    }
}

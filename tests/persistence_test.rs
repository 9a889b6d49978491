//! Persistence integration tests
//!
//! Durable fields across store reopenings, legacy save migration and
//! recovery from unreadable saves.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use ecoquest::constants::STORAGE_VERSION;
use ecoquest::progress::{load_saved_state, save_saved_state, SavedState};
use ecoquest::GameStore;

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn temp_save() -> (PathBuf, PathBuf) {
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "ecoquest-it-{}-{}",
        std::process::id(),
        id
    ));
    let path = dir.join("ecoquest-game-storage.json");
    (dir, path)
}

#[test]
fn test_session_is_not_persisted() {
    let (dir, path) = temp_save();
    {
        let mut store = GameStore::open(&path);
        store.select_hero("gaia");
        store.start_level_at(1, 0);
        store.answer_question(true);
    }

    let store = GameStore::open(&path);
    assert!(store.session().is_none());
    assert_eq!(store.selected_hero().unwrap().id, "gaia");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_full_progress_round_trip() {
    let (dir, path) = temp_save();
    {
        let mut store = GameStore::open(&path);
        store.set_player_name("Rowan");
        store.select_hero("aether");
        for level in 1..=3 {
            store.start_level_at(level, 0);
            store.answer_question(true);
            store.answer_question(true);
            store.end_level_at(true, 20_000);
        }
    }

    let store = GameStore::open(&path);
    let progress = store.player_progress();
    assert_eq!(store.player_name(), "Rowan");
    assert_eq!(progress.current_level, 4);
    assert_eq!(progress.total_xp, 3 * (200 + 150));
    assert_eq!(progress.levels_completed(), 3);
    assert_eq!(
        store.get_level_progress(2).unwrap().best_time,
        Some(20.0)
    );

    let state = load_saved_state(&path).unwrap();
    assert_eq!(state.version, STORAGE_VERSION);
    assert_eq!(state, store.saved_state());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_legacy_save_gets_defaults() {
    let (dir, path) = temp_save();
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        &path,
        r#"{ "player_progress": { "total_xp": 40, "selected_hero_id": "solara" } }"#,
    )
    .unwrap();

    let store = GameStore::open(&path);
    assert_eq!(store.player_name(), "");
    assert_eq!(store.player_progress().current_level, 1);
    assert_eq!(store.player_progress().total_xp, 40);
    assert_eq!(store.selected_hero().unwrap().id, "solara");

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_unreadable_save_is_kept_aside_and_replaced() {
    let (dir, path) = temp_save();
    fs::create_dir_all(&dir).unwrap();
    fs::write(&path, "garbage").unwrap();

    let mut store = GameStore::open(&path);
    assert_eq!(store.player_progress().total_xp, 0);
    store.add_xp(75);

    let state = load_saved_state(&path).unwrap();
    assert_eq!(state.player_progress.total_xp, 75);
    assert_eq!(
        fs::read_to_string(dir.join("ecoquest-game-storage.json.bak")).unwrap(),
        "garbage"
    );

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_in_memory_store_never_writes() {
    let mut store = GameStore::in_memory();
    store.set_player_name("Nobody");
    assert!(store.save_path().is_none());
    assert!(store.save().is_ok());
}

#[test]
fn test_saved_state_helpers() {
    let (dir, path) = temp_save();
    let mut state = SavedState::default();
    state.player_name = "Ivy".to_string();
    state.player_progress.unlock_next_level();
    save_saved_state(&path, &state).unwrap();

    let store = GameStore::open(&path);
    assert!(store.can_play_level(2));
    assert_eq!(store.player_name(), "Ivy");

    fs::remove_dir_all(dir).ok();
}

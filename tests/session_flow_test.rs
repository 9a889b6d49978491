//! Session flow integration tests
//!
//! Drives whole level attempts through `GameStore` the way a game screen
//! would: start, answer, advance, hint, and finish or fail.

use ecoquest::content::{get_all_heroes, questions_for_level};
use ecoquest::session::{points_for_correct, SessionStatus};
use ecoquest::{Advance, GameStore};

fn store_with_hero(hero_id: &str) -> GameStore {
    let mut store = GameStore::in_memory();
    assert!(store.select_hero(hero_id));
    store
}

// ============================================================================
// Game over
// ============================================================================

#[test]
fn test_three_wrong_answers_with_three_lives_is_game_over() {
    // Aether: 3 lives
    let mut store = store_with_hero("aether");
    assert!(store.start_level_at(1, 0));

    for expected_lives in [2, 1, 0] {
        let outcome = store.answer_question(false).unwrap();
        assert_eq!(outcome.lives_remaining, expected_lives);
    }

    let session = store.session().unwrap();
    assert!(session.is_game_over);
    assert_eq!(session.lives, 0);
    assert!(!session.is_level_complete);
}

#[test]
fn test_game_over_fires_exactly_when_lives_hit_zero() {
    for hero in get_all_heroes() {
        let mut store = store_with_hero(hero.id);
        store.start_level_at(1, 0);

        for n in 1..=hero.max_lives {
            let outcome = store.answer_question(false).unwrap();
            assert_eq!(outcome.game_over, n == hero.max_lives, "hero {}", hero.id);
        }
        // Further answers never push lives below zero
        assert!(store.answer_question(false).is_none());
        assert_eq!(store.session().unwrap().lives, 0);
    }
}

#[test]
fn test_terminal_session_freezes_state() {
    let mut store = store_with_hero("aether");
    store.start_level_at(1, 0);
    for _ in 0..3 {
        store.answer_question(false);
    }
    let frozen = store.session().unwrap().clone();

    assert!(store.answer_question(true).is_none());
    assert!(!store.next_question());
    assert!(!store.use_hint());
    assert!(!store.tick());
    assert!(store.end_level_at(true, 99_000).is_none());
    assert_eq!(store.advance_at(10, 99_000), Advance::Ignored);

    assert_eq!(store.session().unwrap(), &frozen);
    assert_eq!(store.player_progress().total_xp, 0);
}

// ============================================================================
// Completion
// ============================================================================

#[test]
fn test_perfect_level_completes_with_three_stars() {
    let mut store = store_with_hero("gaia");
    let questions = questions_for_level(1);
    store.start_level_at(1, 0);

    let mut summary = None;
    for (i, question) in questions.iter().enumerate() {
        let outcome = store
            .answer_question(question.is_correct(question.correct_answer))
            .unwrap();
        assert!(outcome.is_correct);
        assert_eq!(outcome.streak as usize, i + 1);

        match store.advance_at(questions.len(), 60_000) {
            Advance::NextQuestion(index) => assert_eq!(index, i + 1),
            Advance::Completed(s) => summary = Some(s),
            Advance::Ignored => panic!("advance ignored at question {}", i),
        }
    }

    let summary = summary.expect("level should complete after the last question");
    assert_eq!(summary.accuracy, 100.0);
    assert_eq!(summary.stars, 3);
    assert_eq!(summary.score, questions.len() as u32 * 100);
    assert_eq!(summary.time_taken_secs, 60.0);

    let session = store.session().unwrap();
    assert_eq!(session.status(), SessionStatus::LevelComplete);
    assert!(!session.is_game_over);
}

#[test]
fn test_ten_question_level_answered_perfectly() {
    const QUESTION_COUNT: usize = 10;
    let mut store = store_with_hero("gaia");
    store.start_level_at(1, 0);

    for i in 0..QUESTION_COUNT {
        assert!(store.answer_question(true).unwrap().is_correct);
        let advance = store.advance_at(QUESTION_COUNT, 90_000);

        if i + 1 < QUESTION_COUNT {
            assert_eq!(advance, Advance::NextQuestion(i + 1));
            assert!(!store.session().unwrap().is_level_complete);
            continue;
        }

        let Advance::Completed(summary) = advance else {
            panic!("expected completion on question 10, got {:?}", advance);
        };
        assert_eq!(summary.correct_answers, 10);
        assert_eq!(summary.accuracy, 100.0);
        assert_eq!(summary.stars, 3);
        assert_eq!(summary.score, 1_000);
    }

    let session = store.session().unwrap();
    assert!(session.is_level_complete);
    assert!(!session.is_game_over);
    assert_eq!(store.get_level_progress(1).unwrap().stars, 3);
}

#[test]
fn test_answering_does_not_advance() {
    let mut store = store_with_hero("gaia");
    store.start_level_at(1, 0);
    store.answer_question(true);
    store.answer_question(false);
    assert_eq!(store.session().unwrap().current_question, 0);
    assert!(store.next_question());
    assert_eq!(store.session().unwrap().current_question, 1);
}

#[test]
fn test_hints_reduce_points_but_never_below_floor() {
    // Aether: 4 hints
    let mut store = store_with_hero("aether");
    store.start_level_at(1, 0);

    assert_eq!(store.answer_question(true).unwrap().points_awarded, 100);
    for _ in 0..4 {
        assert!(store.use_hint());
    }
    assert!(!store.use_hint());
    assert_eq!(store.answer_question(true).unwrap().points_awarded, 60);
    assert_eq!(points_for_correct(6), 50);
}

#[test]
fn test_tick_stops_at_terminal_state() {
    let mut store = store_with_hero("aether");
    store.start_level_at(1, 0);
    assert!(store.tick());
    assert!(store.tick());
    for _ in 0..3 {
        store.answer_question(false);
    }
    assert!(!store.tick());
    assert_eq!(store.session().unwrap().elapsed_secs, 2);
}

#[test]
fn test_retry_replaces_session() {
    let mut store = store_with_hero("gaia");
    store.start_level_at(3, 0);
    store.answer_question(false);
    store.reset_game_session();
    assert!(store.session().is_none());

    store.start_level_at(3, 1_000);
    let session = store.session().unwrap();
    assert_eq!(session.lives, 4);
    assert_eq!(session.wrong_answers, 0);
    assert_eq!(session.start_time_ms, 1_000);
}

//! Feedback lines shown after each answer. Local only, cannot fail.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{GOOD_STREAK, HOT_STREAK};

pub const PRAISE: [&str; 4] = [
    "🌟 Amazing work!",
    "🌍 Great job helping the planet!",
    "♻️ Eco-genius move!",
    "🌱 You're learning fast!",
];

pub const ENCOURAGEMENT: [&str; 4] = [
    "💪 Don't give up!",
    "🌱 Every mistake helps you learn!",
    "📘 You're improving!",
    "🌍 Try again, you got this!",
];

pub const GOOD_STREAK_MESSAGE: &str = "⭐ Awesome streak! Keep going!";
pub const LAST_LIFE_MESSAGE: &str = "⚠️ Last life! Think carefully!";

/// Pick a feedback line for an answer.
///
/// `streak` is the streak including this answer and `lives_remaining` the
/// lives left after it.
pub fn encouragement<R: Rng + ?Sized>(
    is_correct: bool,
    streak: u32,
    lives_remaining: u32,
    rng: &mut R,
) -> String {
    if is_correct {
        if streak >= HOT_STREAK {
            return format!("🔥 {} in a row! You're unstoppable!", streak);
        }
        if streak >= GOOD_STREAK {
            return GOOD_STREAK_MESSAGE.to_string();
        }
        return pick(&PRAISE, rng);
    }

    if lives_remaining <= 1 {
        return LAST_LIFE_MESSAGE.to_string();
    }
    pick(&ENCOURAGEMENT, rng)
}

fn pick<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_hot_streak_names_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            encouragement(true, 7, 3, &mut rng),
            "🔥 7 in a row! You're unstoppable!"
        );
        assert_eq!(
            encouragement(true, 5, 0, &mut rng),
            "🔥 5 in a row! You're unstoppable!"
        );
    }

    #[test]
    fn test_good_streak() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(encouragement(true, 3, 3, &mut rng), GOOD_STREAK_MESSAGE);
        assert_eq!(encouragement(true, 4, 3, &mut rng), GOOD_STREAK_MESSAGE);
    }

    #[test]
    fn test_plain_correct_picks_praise() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let line = encouragement(true, 1, 3, &mut rng);
            assert!(PRAISE.contains(&line.as_str()), "unexpected: {}", line);
        }
    }

    #[test]
    fn test_last_life_warning() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(encouragement(false, 0, 1, &mut rng), LAST_LIFE_MESSAGE);
        assert_eq!(encouragement(false, 0, 0, &mut rng), LAST_LIFE_MESSAGE);
    }

    #[test]
    fn test_wrong_picks_encouragement() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let line = encouragement(false, 0, 4, &mut rng);
            assert!(ENCOURAGEMENT.contains(&line.as_str()), "unexpected: {}", line);
        }
    }

    #[test]
    fn test_same_seed_same_line() {
        let a = encouragement(true, 0, 3, &mut ChaCha8Rng::seed_from_u64(99));
        let b = encouragement(true, 0, 3, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}

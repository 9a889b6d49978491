//! Question definitions and per-level lookup.

use serde::{Deserialize, Serialize};

use super::question_bank::QUESTION_BANK;
use crate::constants::{MAX_QUESTIONS_PER_LEVEL, TOTAL_LEVELS};

/// Environmental topic a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Climate,
    Waste,
    Energy,
    Pollution,
    Carbon,
}

impl Topic {
    pub fn name(&self) -> &'static str {
        match self {
            Topic::Climate => "climate",
            Topic::Waste => "waste",
            Topic::Energy => "energy",
            Topic::Pollution => "pollution",
            Topic::Carbon => "carbon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A multiple-choice question. Immutable, lives in the static bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub level: u32,
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options`
    pub correct_answer: usize,
    pub explanation: &'static str,
}

impl Question {
    pub fn is_correct(&self, answer_index: usize) -> bool {
        answer_index == self.correct_answer
    }

    /// Indices of every option except the correct one.
    pub fn incorrect_options(&self) -> Vec<usize> {
        (0..self.options.len())
            .filter(|&i| i != self.correct_answer)
            .collect()
    }

    pub fn correct_option(&self) -> Option<&'static str> {
        self.options.get(self.correct_answer).copied()
    }
}

/// Every question in the bank, in level order.
pub fn get_all_questions() -> &'static [Question] {
    QUESTION_BANK
}

/// Questions for a level, capped at `MAX_QUESTIONS_PER_LEVEL`.
pub fn questions_for_level(level: u32) -> Vec<Question> {
    QUESTION_BANK
        .iter()
        .filter(|q| q.level == level)
        .take(MAX_QUESTIONS_PER_LEVEL)
        .copied()
        .collect()
}

pub fn get_question_by_id(id: &str) -> Option<&'static Question> {
    QUESTION_BANK.iter().find(|q| q.id == id)
}

pub fn total_levels() -> u32 {
    TOTAL_LEVELS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_questions() {
        for level in 1..=total_levels() {
            let questions = questions_for_level(level);
            assert!(!questions.is_empty(), "level {} has no questions", level);
            assert!(questions.len() <= MAX_QUESTIONS_PER_LEVEL);
        }
    }

    #[test]
    fn test_unknown_level_is_empty() {
        assert!(questions_for_level(0).is_empty());
        assert!(questions_for_level(total_levels() + 1).is_empty());
    }

    #[test]
    fn test_correct_answer_indexes_an_option() {
        for q in get_all_questions() {
            assert!(
                q.correct_answer < q.options.len(),
                "{} has out of range answer",
                q.id
            );
            assert!(q.options.len() >= 2, "{} needs a wrong option", q.id);
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn test_question_ids_are_unique() {
        let all = get_all_questions();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_incorrect_options_excludes_answer() {
        let q = get_question_by_id("l1-q1").unwrap();
        let wrong = q.incorrect_options();
        assert_eq!(wrong, vec![0, 2, 3]);
        assert_eq!(q.correct_option(), Some("Carbon Dioxide"));
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn test_topic_serializes_lowercase() {
        let json = serde_json::to_string(&Topic::Pollution).unwrap();
        assert_eq!(json, "\"pollution\"");
        assert_eq!(Topic::Carbon.name(), "carbon");
    }
}

//! Prompt construction, response cleanup and offline fallbacks.

use regex::Regex;
use std::sync::LazyLock;

use super::HintCategory;
use crate::content::{HintStrength, Question};

static LEAKED_ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"(?i)correct answer.*").unwrap()
});

static OPTION_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"(?i)option\s*\d+").unwrap()
});

const WEAK_FALLBACK: &str = "Think about what best protects the environment 🌱";

pub fn build_hint_prompt(
    question: &Question,
    category: HintCategory,
    strength: HintStrength,
) -> String {
    format!(
        r#"You are an educational assistant for school students.

RULES:
- DO NOT reveal the correct answer
- DO NOT mention option numbers
- Use simple language
- Max 2 sentences

Hint type: {}
Hint strength: {}

Question:
"{}"

Options:
{}

Topic: {}

Provide a helpful learning hint."#,
        category.name(),
        strength.name(),
        question.prompt,
        question.options.join(", "),
        question.topic.name(),
    )
}

pub fn build_explanation_prompt(question: &Question) -> String {
    format!(
        r#"Explain this answer simply for a student.

Question:
{}

Correct Answer:
{}

Keep it short, simple, and educational."#,
        question.prompt,
        question.correct_option().unwrap_or_default(),
    )
}

/// Strip answer leaks, option numbers and bold markup from generated text.
pub fn sanitize(text: &str) -> String {
    let text = LEAKED_ANSWER.replace_all(text, "");
    let text = OPTION_NUMBER.replace_all(&text, "");
    text.replace("**", "").trim().to_string()
}

/// First sentence of `text`, ending at the first `.`, `!` or `?` that is
/// followed by whitespace or the end of the text.
fn first_sentence(text: &str) -> &str {
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
            if at_boundary {
                return text[..i + c.len_utf8()].trim();
            }
        }
    }
    text.trim()
}

/// Deterministic hint used whenever generation is unavailable. Never empty
/// and never names the correct option.
pub fn fallback_hint(question: &Question, strength: HintStrength) -> String {
    match strength {
        HintStrength::Weak => WEAK_FALLBACK.to_string(),
        HintStrength::Medium => format!("Focus on the idea related to {}.", question.topic.name()),
        HintStrength::Strong => {
            let sentence = first_sentence(question.explanation);
            if sentence.is_empty() {
                format!("Focus on the idea related to {}.", question.topic.name())
            } else {
                sentence.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{get_question_by_id, Difficulty, Topic};

    fn question(explanation: &'static str) -> Question {
        Question {
            id: "t-1",
            level: 1,
            topic: Topic::Energy,
            difficulty: Difficulty::Easy,
            prompt: "Which is renewable?",
            options: &["Coal", "Wind", "Oil"],
            correct_answer: 1,
            explanation,
        }
    }

    #[test]
    fn test_prompt_embeds_question_details() {
        let q = question("Wind never runs out.");
        let prompt = build_hint_prompt(&q, HintCategory::Keyword, HintStrength::Strong);
        assert!(prompt.contains("Which is renewable?"));
        assert!(prompt.contains("Coal, Wind, Oil"));
        assert!(prompt.contains("Topic: energy"));
        assert!(prompt.contains("Hint type: keyword"));
        assert!(prompt.contains("Hint strength: strong"));
        assert!(prompt.contains("DO NOT reveal the correct answer"));
        assert!(prompt.contains("Max 2 sentences"));
    }

    #[test]
    fn test_explanation_prompt_names_answer() {
        let q = question("Wind never runs out.");
        let prompt = build_explanation_prompt(&q);
        assert!(prompt.contains("Correct Answer:\nWind"));
    }

    #[test]
    fn test_sanitize_strips_leaks() {
        assert_eq!(
            sanitize("Think about air. The correct answer is Wind."),
            "Think about air. The"
        );
        assert_eq!(sanitize("Option 2 is tempting, but **think**."), "is tempting, but think.");
        assert_eq!(sanitize("Look at option3 closely"), "Look at  closely");
        assert_eq!(sanitize("  plain hint  "), "plain hint");
    }

    #[test]
    fn test_sanitize_only_cuts_the_leaking_line() {
        let text = "Correct Answer: Wind\nThink about what never runs out.";
        assert_eq!(sanitize(text), "Think about what never runs out.");
    }

    #[test]
    fn test_fallback_by_strength() {
        let q = question("Wind turbines use moving air. They never run out.");
        assert_eq!(fallback_hint(&q, HintStrength::Weak), WEAK_FALLBACK);
        assert_eq!(
            fallback_hint(&q, HintStrength::Medium),
            "Focus on the idea related to energy."
        );
        assert_eq!(
            fallback_hint(&q, HintStrength::Strong),
            "Wind turbines use moving air."
        );
    }

    #[test]
    fn test_strong_fallback_keeps_decimals() {
        let q = get_question_by_id("l6-q4").unwrap();
        assert_eq!(
            fallback_hint(q, HintStrength::Strong),
            "The Paris Agreement is an international treaty to limit global warming to 1.5-2°C."
        );
    }

    #[test]
    fn test_strong_fallback_never_empty() {
        let q = question("");
        assert_eq!(
            fallback_hint(&q, HintStrength::Strong),
            "Focus on the idea related to energy."
        );
        let q = question(".");
        assert!(!fallback_hint(&q, HintStrength::Strong).is_empty());
    }
}

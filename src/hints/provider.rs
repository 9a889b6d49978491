//! Hint provider.
//!
//! Elimination hints are computed from the question itself. Keyword and
//! explanation hints go to the text generator; any failure there is logged
//! and replaced by the deterministic fallback, so every call yields a usable
//! `HintResult`.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use super::prompt::{build_explanation_prompt, build_hint_prompt, fallback_hint, sanitize};
use super::{HintCategory, HintResult, TextGenerator};
use crate::content::{HintStrength, Question};

/// Rule out one wrong option, preferring ones not already eliminated.
/// Never returns the correct index.
pub fn eliminate_option<R: Rng + ?Sized>(
    question: &Question,
    already_eliminated: &[usize],
    rng: &mut R,
) -> HintResult {
    let wrong = question.incorrect_options();
    let fresh: Vec<usize> = wrong
        .iter()
        .copied()
        .filter(|i| !already_eliminated.contains(i))
        .collect();
    let pool = if fresh.is_empty() { &wrong } else { &fresh };

    match pool.choose(rng).copied() {
        Some(index) => HintResult {
            category: HintCategory::Eliminate,
            content: format!("❌ \"{}\" is not correct.", question.options[index]),
            eliminated_option: Some(index),
        },
        None => HintResult {
            category: HintCategory::Eliminate,
            content: "There are no wrong options left to rule out.".to_string(),
            eliminated_option: None,
        },
    }
}

pub struct HintProvider<G> {
    generator: G,
}

impl<G: TextGenerator> HintProvider<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Produce a hint of the requested category for `question`.
    pub fn generate_hint<R: Rng + ?Sized>(
        &self,
        question: &Question,
        category: HintCategory,
        strength: HintStrength,
        already_eliminated: &[usize],
        rng: &mut R,
    ) -> HintResult {
        if category.is_local() {
            return eliminate_option(question, already_eliminated, rng);
        }

        let prompt = build_hint_prompt(question, category, strength);
        let content = match self.generator.generate(&prompt) {
            Ok(text) => {
                let cleaned = sanitize(&text);
                if cleaned.is_empty() {
                    debug!(question = question.id, "Generated hint was empty after cleanup");
                    fallback_hint(question, strength)
                } else {
                    cleaned
                }
            }
            Err(e) => {
                warn!(question = question.id, "Hint generation failed, using fallback: {}", e);
                fallback_hint(question, strength)
            }
        };

        HintResult {
            category,
            content,
            eliminated_option: None,
        }
    }

    /// Short explanation of the correct answer, or the canonical explanation
    /// when generation is unavailable.
    pub fn explain_answer(&self, question: &Question) -> String {
        let prompt = build_explanation_prompt(question);
        match self.generator.generate(&prompt) {
            Ok(text) => {
                let cleaned = sanitize(&text);
                if cleaned.is_empty() {
                    question.explanation.to_string()
                } else {
                    cleaned
                }
            }
            Err(e) => {
                warn!(question = question.id, "Answer explanation failed: {}", e);
                question.explanation.to_string()
            }
        }
    }
}

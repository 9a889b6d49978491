//! Hint data structures and the text-generation seam.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HintCategory {
    /// Rule out one wrong option. Answered locally.
    #[serde(rename = "eliminate")]
    Eliminate,
    #[serde(rename = "keyword")]
    Keyword,
    #[serde(rename = "ai-explanation")]
    AiExplanation,
}

impl HintCategory {
    pub const ALL: [HintCategory; 3] = [
        HintCategory::Eliminate,
        HintCategory::Keyword,
        HintCategory::AiExplanation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HintCategory::Eliminate => "eliminate",
            HintCategory::Keyword => "keyword",
            HintCategory::AiExplanation => "ai-explanation",
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, HintCategory::Eliminate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintResult {
    pub category: HintCategory,
    pub content: String,
    /// Only set for elimination hints
    pub eliminated_option: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("No API key configured for text generation")]
    MissingApiKey,

    #[error("Text generation request failed: {0}")]
    Http(String),

    #[error("Malformed text generation response: {0}")]
    MalformedResponse(String),

    #[error("Text generation returned no content")]
    EmptyResponse,
}

/// Anything that turns a prompt into text.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        (**self).generate(prompt)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        (**self).generate(prompt)
    }
}

/// A generator with no backend; every call fails so callers use their fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGenerator;

impl TextGenerator for OfflineGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        Err(GenerateError::MissingApiKey)
    }
}

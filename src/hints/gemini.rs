//! Blocking HTTP client for the Gemini `generateContent` endpoint.

use serde::Deserialize;
use std::time::Duration;

use super::{GenerateError, TextGenerator};
use crate::config::GeneratorConfig;

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Pull the first candidate's first text part out of a response.
fn extract_text(response: GenerateResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text
        .filter(|t| !t.trim().is_empty())
}

pub struct GeminiClient {
    agent: ureq::Agent,
    config: GeneratorConfig,
}

impl GeminiClient {
    pub fn new(config: GeneratorConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("ecoquest-hints")
            .build();
        Self { agent, config }
    }

    pub fn from_env() -> Self {
        Self::new(GeneratorConfig::from_env())
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The API key goes in the `x-goog-api-key` header, never the URL.
    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model,
        )
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerateError::MissingApiKey)?;

        let body = serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }],
                }
            ]
        });

        let response: GenerateResponse = self
            .agent
            .post(&self.request_url())
            .set("x-goog-api-key", api_key)
            .send_json(body)
            .map_err(|e| GenerateError::Http(e.to_string()))?
            .into_json()
            .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;

        extract_text(response).ok_or(GenerateError::EmptyResponse)
    }
}

//! Async client for the Groq chat completions API
//!
//! OpenAI-compatible wire format. Scoring calls are speed-critical, so
//! the default model is the fast tier; the smart tier exists for the
//! rubric-heavy evaluations.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::core::error::{QuestError, Result};

/// Fast tier, for latency-sensitive scoring
pub const FAST_MODEL: &str = "llama-3.1-8b-instant";

/// Smart tier, for evaluations that need more care than speed
pub const SMART_MODEL: &str = "llama-3.3-70b-versatile";

const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Async LLM client for scoring calls
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl LlmClient {
    /// Create a client with explicit configuration
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url,
            model,
        }
    }

    /// Create a client from environment variables
    ///
    /// Required: GROQ_API_KEY
    /// Optional: GROQ_API_URL (defaults to the Groq endpoint)
    /// Optional: GROQ_MODEL (defaults to the fast tier)
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| QuestError::LlmError("GROQ_API_KEY not set".into()))?;
        let api_url = std::env::var("GROQ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| FAST_MODEL.into());
        Ok(Self::new(api_key, api_url, model))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a completion request expecting a JSON-object reply
    ///
    /// Low temperature keeps scoring consistent across calls. No retry:
    /// callers fall back to local heuristics on any failure.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            max_tokens: 300,
            temperature: 0.3,
            messages: vec![
                Message {
                    role: "system".into(),
                    content: system.into(),
                },
                Message {
                    role: "user".into(),
                    content: user.into(),
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object".into(),
            },
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| QuestError::LlmError(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(QuestError::LlmError(format!("API error: {}", error_text)));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| QuestError::LlmError(e.to_string()))?;

        completion
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| QuestError::LlmError("Empty response".into()))
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

//! Prompt evaluation with a local fallback
//!
//! The model replies with a JSON object `{score, feedback}`; the score is
//! clamped to 0-100. When the call or the parse fails, a keyword-overlap
//! heuristic stands in so offline play still gets a score.

use serde::Deserialize;
use tracing::warn;

use crate::core::error::Result;
use crate::llm::client::LlmClient;

/// Which scoring rubric to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptArena {
    /// Image-generation prompt vs a target prompt
    Visionary,
    /// Tool sequence vs a target outcome
    AgentHandler,
}

impl PromptArena {
    fn system_prompt(self) -> &'static str {
        match self {
            PromptArena::Visionary => {
                "You are an expert prompt engineer evaluating image generation prompts. \
                 Compare the user's prompt with the target prompt. Rate semantic similarity \
                 (0-100) considering: style, lighting, composition, mood, technical details. \
                 Be strict but fair. Reply as JSON: {\"score\": <0-100>, \"feedback\": \"...\"}"
            }
            PromptArena::AgentHandler => {
                "You are an AI agent architect. Evaluate if the user's tool sequence would \
                 achieve the target outcome. Consider logical flow, dependencies, and \
                 completeness. Reply as JSON: {\"score\": <0-100>, \"feedback\": \"...\"}"
            }
        }
    }

    fn user_prompt(self, user_prompt: &str, target: &str) -> String {
        match self {
            PromptArena::Visionary => format!(
                "Target Prompt: \"{}\"\n\nUser Prompt: \"{}\"\n\nRate similarity 0-100 and provide feedback.",
                target, user_prompt
            ),
            PromptArena::AgentHandler => format!(
                "Target Outcome: \"{}\"\n\nUser's Tool Sequence: \"{}\"\n\nWould this sequence achieve the outcome? Rate 0-100 and explain.",
                target, user_prompt
            ),
        }
    }
}

/// Result of scoring a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptEvaluation {
    /// 0-100
    pub score: u32,
    pub feedback: String,
    /// False when the local heuristic produced the score
    pub from_model: bool,
}

#[derive(Deserialize)]
struct ScorePayload {
    #[serde(default)]
    score: f64,
    #[serde(default)]
    feedback: String,
}

/// Extract the JSON object from a response that may carry prose or
/// markdown fences around it
fn extract_json(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&response[start..=end])
}

fn parse_evaluation(response: &str) -> Option<PromptEvaluation> {
    let json = extract_json(response)?;
    let payload: ScorePayload = serde_json::from_str(json).ok()?;
    let score = payload.score.round().clamp(0.0, 100.0) as u32;
    let feedback = if payload.feedback.is_empty() {
        "Evaluation complete.".to_string()
    } else {
        payload.feedback
    };
    Some(PromptEvaluation {
        score,
        feedback,
        from_model: true,
    })
}

/// Keyword-overlap similarity, the offline stand-in for model scoring
///
/// Counts user words longer than three characters that appear anywhere in
/// the target, normalized by the target's word count and capped at 100.
pub fn keyword_similarity(user_prompt: &str, target: &str) -> u32 {
    let user_lower = user_prompt.to_lowercase();
    let target_lower = target.to_lowercase();
    let target_words = target_lower.split_whitespace().count();
    if target_words == 0 {
        return 0;
    }
    let common = user_lower
        .split_whitespace()
        .filter(|word| word.len() > 3 && target_lower.contains(*word))
        .count();
    let similarity = (common as f64 / target_words as f64) * 100.0;
    similarity.min(100.0).round() as u32
}

fn fallback(user_prompt: &str, target: &str) -> PromptEvaluation {
    PromptEvaluation {
        score: keyword_similarity(user_prompt, target),
        feedback: "Basic similarity check completed. AI evaluation unavailable.".to_string(),
        from_model: false,
    }
}

/// Score a user prompt against a target, falling back locally on any
/// model failure
pub async fn evaluate_prompt(
    client: &LlmClient,
    arena: PromptArena,
    user_prompt: &str,
    target: &str,
) -> Result<PromptEvaluation> {
    match client
        .complete(arena.system_prompt(), &arena.user_prompt(user_prompt, target))
        .await
    {
        Ok(response) => match parse_evaluation(&response) {
            Some(evaluation) => Ok(evaluation),
            None => {
                warn!("unparseable scoring response, using keyword fallback");
                Ok(fallback(user_prompt, target))
            }
        },
        Err(e) => {
            warn!(error = %e, "scoring call failed, using keyword fallback");
            Ok(fallback(user_prompt, target))
        }
    }
}

//! LLM scoring boundary
//!
//! The LLM scores free-text prompts only; game outcomes are always
//! decided by the deterministic simulations. Every call has a local
//! fallback so the games stay playable offline.

pub mod client;
pub mod scoring;

pub use client::{LlmClient, FAST_MODEL, SMART_MODEL};
pub use scoring::{evaluate_prompt, keyword_similarity, PromptArena, PromptEvaluation};

//! Data Quest - Gamified Data-Career Learning Engine

pub mod catalog;
pub mod core;
pub mod games;
pub mod llm;
pub mod progress;

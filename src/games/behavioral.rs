//! Workplace scenario decisions
//!
//! A scenario presents a situation and a handful of responses. Each
//! response carries a score and written feedback; the best response earns
//! full marks and partial-credit answers exist for decent-but-flawed
//! judgment. XP scales with the score.

use serde::{Deserialize, Serialize};

use crate::core::error::{QuestError, Result};

/// One selectable response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioChoice {
    pub text: String,
    /// 0-100 credit for picking this response
    pub score: u32,
    pub feedback: String,
}

/// A workplace situation with scored responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub prompt: String,
    pub choices: Vec<ScenarioChoice>,
    /// Index of the full-credit response
    pub correct_choice: usize,
}

/// What picking a response produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOutcome {
    pub score: u32,
    pub feedback: String,
    /// Whether the player found the intended best response
    pub is_best: bool,
}

impl Scenario {
    /// A scenario must have at least two choices and a valid answer key
    pub fn validate(&self) -> Result<()> {
        if self.choices.len() < 2 {
            return Err(QuestError::LevelPack(format!(
                "scenario '{}' needs at least two choices",
                self.prompt
            )));
        }
        if self.correct_choice >= self.choices.len() {
            return Err(QuestError::LevelPack(format!(
                "scenario '{}' answer key {} out of range",
                self.prompt, self.correct_choice
            )));
        }
        Ok(())
    }

    /// Resolve the player's pick
    pub fn resolve(&self, choice: usize) -> Result<ChoiceOutcome> {
        let picked = self.choices.get(choice).ok_or_else(|| {
            QuestError::InvalidMove(format!(
                "choice {} out of range ({} available)",
                choice,
                self.choices.len()
            ))
        })?;
        Ok(ChoiceOutcome {
            score: picked.score.min(100),
            feedback: picked.feedback.clone(),
            is_best: choice == self.correct_choice,
        })
    }

    /// XP earned for a pick, scaled by the choice score
    pub fn xp_for(&self, base_xp: u32, outcome: &ChoiceOutcome) -> u32 {
        base_xp * outcome.score / 100
    }
}

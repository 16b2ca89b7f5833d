//! Completed-run records
//!
//! Every finished run, won or lost, is captured as a [`SessionRecord`]
//! and handed to a [`crate::progress::store::SessionSink`]. The record
//! carries a free-form config blob so each game can attach its own
//! run parameters without widening the schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::types::{GameType, PlayerId, SessionId};

/// One recorded play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: SessionId,
    pub player: PlayerId,
    pub game_type: GameType,
    pub level_id: String,
    /// Game-specific score (harvest count, runner score, 0-100, ...)
    pub score: u32,
    /// Wall-clock seconds from start to resolution
    pub duration_secs: u64,
    pub won: bool,
    pub xp_earned: u32,
    /// Run parameters worth keeping for analytics (final speed, hints
    /// used, the assembled sequence, ...)
    #[serde(default)]
    pub game_config: Value,
}

impl SessionRecord {
    pub fn new(player: PlayerId, game_type: GameType, level_id: &str) -> Self {
        Self {
            id: SessionId::new(),
            player,
            game_type,
            level_id: level_id.to_string(),
            score: 0,
            duration_secs: 0,
            won: false,
            xp_earned: 0,
            game_config: Value::Null,
        }
    }

    pub fn with_outcome(mut self, won: bool, score: u32, xp_earned: u32) -> Self {
        self.won = won;
        self.score = score;
        self.xp_earned = xp_earned;
        self
    }

    pub fn with_duration(mut self, duration_secs: u64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn with_config(mut self, config: Value) -> Self {
        self.game_config = config;
        self
    }
}

/// XP actually awarded after hint penalties
pub fn penalized_xp(base_xp: u32, hints_used: u32, hint_penalty: f64) -> u32 {
    let multiplier = (1.0 - hints_used as f64 * hint_penalty).max(0.0);
    (base_xp as f64 * multiplier).floor() as u32
}

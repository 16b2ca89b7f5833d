//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for recorded game sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// The mini-game families a level can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    /// Ordered-component puzzle (ETL pipelines, ML pipelines, report flows)
    Pipeline,
    /// Three-lane signal/noise runner
    Runner,
    /// Token-by-token query builder
    Query,
    /// Plot farm with idle production
    Farm,
    /// Single-parameter gradient descent trainer
    Gradient,
    /// Workplace scenario with scored choices
    Behavioral,
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pipeline => "PIPELINE",
            Self::Runner => "RUNNER",
            Self::Query => "QUERY",
            Self::Farm => "FARM",
            Self::Gradient => "GRADIENT",
            Self::Behavioral => "BEHAVIORAL",
        };
        write!(f, "{}", name)
    }
}

/// Which side of the career map a level sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CareerPath {
    Technical,
    Behavioral,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_uniqueness() {
        assert_ne!(PlayerId::new(), PlayerId::new());
    }

    #[test]
    fn test_game_type_serialization() {
        let json = serde_json::to_string(&GameType::Pipeline).unwrap();
        assert_eq!(json, "\"PIPELINE\"");
        let back: GameType = serde_json::from_str("\"RUNNER\"").unwrap();
        assert_eq!(back, GameType::Runner);
    }

    #[test]
    fn test_game_type_display_matches_serde() {
        for gt in [
            GameType::Pipeline,
            GameType::Runner,
            GameType::Query,
            GameType::Farm,
            GameType::Gradient,
            GameType::Behavioral,
        ] {
            let json = serde_json::to_string(&gt).unwrap();
            assert_eq!(json, format!("\"{}\"", gt));
        }
    }
}

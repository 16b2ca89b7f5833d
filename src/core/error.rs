use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestError {
    #[error("Level not found: {0}")]
    LevelNotFound(String),

    #[error("Level is locked: {0}")]
    LevelLocked(String),

    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("Game loop crashed: {0}")]
    GameLoop(String),

    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("Level pack error: {0}")]
    LevelPack(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuestError>;

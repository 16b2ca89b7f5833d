pub mod config;
pub mod error;
pub mod types;

pub use config::TuningConfig;
pub use error::{QuestError, Result};
pub use types::{CareerPath, GameType, PlayerId, SessionId};

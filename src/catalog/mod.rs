//! Built-in game content: components, personas, levels, mission framing
//!
//! Content lives in code so the default install needs no data files;
//! custom level packs can be layered on from TOML.

pub mod heroes;
pub mod items;
pub mod levels;
pub mod stories;

pub use heroes::HeroClass;
pub use items::{Item, ItemKind};
pub use levels::{Catalog, LevelConfig, LevelSpec};
pub use stories::GameStory;

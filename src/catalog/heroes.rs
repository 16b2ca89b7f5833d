//! Playable personas
//!
//! Each hero fronts one career track; the level catalog keys its tracks
//! by hero class and career path.

use serde::{Deserialize, Serialize};

/// The three data-career personas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeroClass {
    Engineer,
    Scientist,
    Analyst,
}

impl HeroClass {
    pub const ALL: [HeroClass; 3] = [HeroClass::Engineer, HeroClass::Scientist, HeroClass::Analyst];

    pub fn name(self) -> &'static str {
        match self {
            HeroClass::Engineer => "Data Engineer",
            HeroClass::Scientist => "Data Scientist",
            HeroClass::Analyst => "BI Analyst",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HeroClass::Engineer => "The Builder. Architect of pipelines and infrastructure.",
            HeroClass::Scientist => "The Optimizer. Master of algorithms and models.",
            HeroClass::Analyst => "The Visionary. Translator of data into insights.",
        }
    }

    /// Prefix shared by this hero's level ids
    pub fn level_prefix(self) -> &'static str {
        match self {
            HeroClass::Engineer => "ENGINEER",
            HeroClass::Scientist => "SCIENTIST",
            HeroClass::Analyst => "ANALYST",
        }
    }
}

impl std::fmt::Display for HeroClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&HeroClass::Scientist).unwrap();
        assert_eq!(json, "\"SCIENTIST\"");
        let back: HeroClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HeroClass::Scientist);
    }

    #[test]
    fn test_every_hero_has_content() {
        for hero in HeroClass::ALL {
            assert!(!hero.name().is_empty());
            assert!(!hero.description().is_empty());
        }
    }
}

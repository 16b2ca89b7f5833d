//! Level catalog for the career map
//!
//! The built-in catalog covers the three hero tracks, each mixing
//! pipeline, runner, query, and farm levels, plus the behavioral tracks.
//! Additional levels can be layered on from TOML packs.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::heroes::HeroClass;
use crate::core::error::{QuestError, Result};
use crate::core::types::{CareerPath, GameType};
use crate::games::behavioral::Scenario;

/// Per-game level parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LevelConfig {
    Pipeline {
        sequence: Vec<String>,
        #[serde(default)]
        extra: Vec<String>,
    },
    Runner {
        target: u32,
        speed: f64,
    },
    Query {
        target: String,
        #[serde(default)]
        blocks: Vec<String>,
    },
    Farm {
        target: u32,
    },
    /// The trainer has no per-level knobs; difficulty comes from the
    /// random start position
    Gradient,
    Behavioral {
        scenario: Scenario,
    },
}

impl LevelConfig {
    pub fn game_type(&self) -> GameType {
        match self {
            LevelConfig::Pipeline { .. } => GameType::Pipeline,
            LevelConfig::Runner { .. } => GameType::Runner,
            LevelConfig::Query { .. } => GameType::Query,
            LevelConfig::Farm { .. } => GameType::Farm,
            LevelConfig::Gradient => GameType::Gradient,
            LevelConfig::Behavioral { .. } => GameType::Behavioral,
        }
    }
}

/// One playable level on the career map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSpec {
    pub id: String,
    pub name: String,
    pub desc: String,
    /// Flavor text shown on the level card
    pub scenario: String,
    pub path: CareerPath,
    pub xp_reward: u32,
    pub config: LevelConfig,
}

impl LevelSpec {
    pub fn game_type(&self) -> GameType {
        self.config.game_type()
    }

    pub fn validate(&self) -> Result<()> {
        let err = |msg: String| Err(QuestError::LevelPack(format!("{}: {}", self.id, msg)));
        match &self.config {
            LevelConfig::Pipeline { sequence, .. } => {
                if sequence.is_empty() {
                    return err("pipeline sequence is empty".into());
                }
            }
            LevelConfig::Runner { target, speed } => {
                if *target == 0 || *speed <= 0.0 {
                    return err(format!("bad runner params target={} speed={}", target, speed));
                }
            }
            LevelConfig::Query { target, .. } => {
                if target.trim().is_empty() {
                    return err("query target is empty".into());
                }
            }
            LevelConfig::Farm { target } => {
                if *target == 0 {
                    return err("farm target is zero".into());
                }
            }
            LevelConfig::Gradient => {}
            LevelConfig::Behavioral { scenario } => scenario.validate()?,
        }
        Ok(())
    }
}

/// TOML level pack: `[[levels]]` entries matching [`LevelSpec`]
#[derive(Debug, Deserialize)]
struct LevelPack {
    #[serde(default)]
    levels: Vec<LevelSpec>,
}

/// Ordered level store with id lookup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    levels: Vec<LevelSpec>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The full built-in catalog
    pub fn builtin() -> Self {
        let mut catalog = Catalog::default();
        for spec in builtin_levels() {
            // Built-in content is validated by tests, so insert cannot fail.
            catalog
                .insert(spec)
                .unwrap_or_else(|e| panic!("builtin catalog is inconsistent: {}", e));
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&LevelSpec> {
        self.index
            .get(id)
            .map(|&i| &self.levels[i])
            .ok_or_else(|| QuestError::LevelNotFound(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelSpec> {
        self.levels.iter()
    }

    /// A hero's levels on one career path, in unlock order
    pub fn track(&self, hero: HeroClass, path: CareerPath) -> Vec<&LevelSpec> {
        self.levels
            .iter()
            .filter(|l| l.path == path && l.id.starts_with(hero.level_prefix()))
            .collect()
    }

    /// The level that must be completed before `id` unlocks, if any
    pub fn predecessor(&self, id: &str) -> Result<Option<&LevelSpec>> {
        let spec = self.get(id)?;
        for hero in HeroClass::ALL {
            let track = self.track(hero, spec.path);
            if let Some(pos) = track.iter().position(|l| l.id == id) {
                return Ok(if pos == 0 { None } else { Some(track[pos - 1]) });
            }
        }
        Ok(None)
    }

    fn insert(&mut self, spec: LevelSpec) -> Result<()> {
        spec.validate()?;
        if self.index.contains_key(&spec.id) {
            return Err(QuestError::LevelPack(format!("duplicate level id: {}", spec.id)));
        }
        self.index.insert(spec.id.clone(), self.levels.len());
        self.levels.push(spec);
        Ok(())
    }

    /// Parse a TOML pack and append its levels
    pub fn load_pack_str(&mut self, content: &str) -> Result<usize> {
        let pack: LevelPack = toml::from_str(content)
            .map_err(|e| QuestError::LevelPack(format!("invalid pack TOML: {}", e)))?;
        let count = pack.levels.len();
        for spec in pack.levels {
            self.insert(spec)?;
        }
        Ok(count)
    }

    /// Load a TOML pack file and append its levels
    pub fn load_pack(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)?;
        let count = self.load_pack_str(&content)?;
        info!(pack = %path.display(), levels = count, "loaded level pack");
        Ok(count)
    }
}

fn level(
    id: &str,
    name: &str,
    desc: &str,
    scenario: &str,
    path: CareerPath,
    xp_reward: u32,
    config: LevelConfig,
) -> LevelSpec {
    LevelSpec {
        id: id.into(),
        name: name.into(),
        desc: desc.into(),
        scenario: scenario.into(),
        path,
        xp_reward,
        config,
    }
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn scenario(prompt: &str, choices: &[(&str, u32, &str)], correct_choice: usize) -> Scenario {
    Scenario {
        prompt: prompt.into(),
        choices: choices
            .iter()
            .map(|(text, score, feedback)| crate::games::behavioral::ScenarioChoice {
                text: (*text).into(),
                score: *score,
                feedback: (*feedback).into(),
            })
            .collect(),
        correct_choice,
    }
}

#[rustfmt::skip]
fn builtin_levels() -> Vec<LevelSpec> {
    use crate::core::types::CareerPath::{Behavioral, Technical};
    vec![
        // Data Engineer track
        level("ENGINEER_1", "ETL Basics", "Data Pipeline",
            "Connect the source to the destination.",
            Technical, 100,
            LevelConfig::Pipeline {
                sequence: strs(&["CSV", "PYTHON_CLEAN", "DATABASE"]),
                extra: strs(&["JSON", "SQL_QUERY"]),
            }),
        level("ENGINEER_2", "Signal vs. Noise", "Clean the Stream",
            "Collect the Signal (Green), Avoid the Noise (Red)!",
            Technical, 150,
            LevelConfig::Runner { target: 20, speed: 10.0 }),
        level("ENGINEER_3", "SQL Basics", "Simple Query",
            "Select all users from the database.",
            Technical, 150,
            LevelConfig::Query {
                target: "SELECT * FROM USERS".into(),
                blocks: strs(&["SELECT", "*", "FROM", "USERS", "WHERE", "ID"]),
            }),
        level("ENGINEER_4", "Data Farm", "Harvesting Logs",
            "Collect the raw logs for processing.",
            Technical, 200,
            LevelConfig::Farm { target: 10 }),
        level("ENGINEER_5", "Descent Control", "Tune the Optimizer",
            "Pick a learning rate that lands the pipeline cost model in its minimum.",
            Technical, 250,
            LevelConfig::Gradient),
        level("ENGINEER_6", "Stream Processing", "Kafka Pipeline",
            "Build a real-time data streaming pipeline.",
            Technical, 300,
            LevelConfig::Pipeline {
                sequence: strs(&["IOT_SENSOR", "KAFKA", "SPARK", "DATALAKE"]),
                extra: strs(&["API", "REDIS"]),
            }),
        level("ENGINEER_7", "Data Quality", "Clean the Stream",
            "Filter out bad data and keep only quality signals!",
            Technical, 350,
            LevelConfig::Runner { target: 25, speed: 12.0 }),
        level("ENGINEER_8", "Complex Queries", "Advanced SQL",
            "Write complex queries to join and aggregate data.",
            Technical, 400,
            LevelConfig::Query {
                target: "SELECT u.name, COUNT(o.id) FROM USERS u JOIN ORDERS o ON u.id = o.user_id GROUP BY u.name".into(),
                blocks: strs(&["SELECT", "u.name,", "COUNT(o.id)", "FROM", "USERS", "u", "JOIN",
                    "ORDERS", "o", "ON", "u.id", "=", "o.user_id", "GROUP BY", "u.name",
                    "WHERE", "HAVING"]),
            }),
        level("ENGINEER_9", "Scale Farm", "Massive Harvest",
            "We need more data! Scale up the farm operations.",
            Technical, 600,
            LevelConfig::Farm { target: 20 }),

        // Data Scientist track
        level("SCIENTIST_1", "Data Prep", "Preprocessing",
            "Prepare the data for analysis.",
            Technical, 100,
            LevelConfig::Pipeline {
                sequence: strs(&["RAW_LOGS", "PANDAS", "DATASET"]),
                extra: strs(&["API", "EXCEL"]),
            }),
        level("SCIENTIST_2", "Overfit Runner", "Regularization",
            "Collect Signal, Avoid Noise/Overfitting!",
            Technical, 150,
            LevelConfig::Runner { target: 20, speed: 10.0 }),
        level("SCIENTIST_3", "Feature Select", "Select Features",
            "Select the best features for the model.",
            Technical, 150,
            LevelConfig::Query {
                target: "SELECT FEATURES FROM DATASET".into(),
                blocks: strs(&["SELECT", "FEATURES", "FROM", "DATASET", "DROP", "NULL"]),
            }),
        level("SCIENTIST_4", "Feature Farm", "Feature Engineering",
            "Harvest features for the model.",
            Technical, 200,
            LevelConfig::Farm { target: 10 }),
        level("SCIENTIST_5", "Learning Rate Lab", "Gradient Descent",
            "Roll the loss ball into the global minimum. Watch out for local minima!",
            Technical, 250,
            LevelConfig::Gradient),
        level("SCIENTIST_6", "Model Training", "Build Pipeline",
            "Create a complete ML training pipeline.",
            Technical, 300,
            LevelConfig::Pipeline {
                sequence: strs(&["DATASET", "SPLIT", "NORMALIZE", "RANDOM_FOREST", "VALIDATION"]),
                extra: strs(&["LINEAR_REG", "XGBOOST"]),
            }),
        level("SCIENTIST_7", "Feature Selection", "Find Signals",
            "Identify the most important features for your model!",
            Technical, 350,
            LevelConfig::Runner { target: 25, speed: 12.0 }),
        level("SCIENTIST_8", "Model Query", "Feature Engineering",
            "Select and transform features for optimal performance.",
            Technical, 400,
            LevelConfig::Query {
                target: "SELECT FEATURES, TRANSFORM(SCALE) FROM DATASET WHERE IMPORTANCE > 0.5".into(),
                blocks: strs(&["SELECT", "FEATURES,", "TRANSFORM(SCALE)", "FROM", "DATASET",
                    "WHERE", "IMPORTANCE", ">", "0.5", "GROUP BY", "DROP", "NULL"]),
            }),
        level("SCIENTIST_9", "Training Farm", "Epoch Harvest",
            "Train for more epochs! Harvest the results.",
            Technical, 600,
            LevelConfig::Farm { target: 20 }),

        // BI Analyst track
        level("ANALYST_1", "Data Viz", "Visualization",
            "Create a chart from the data.",
            Technical, 100,
            LevelConfig::Pipeline {
                sequence: strs(&["EXCEL", "PIVOT", "CHART_BAR"]),
                extra: strs(&["CSV", "SQL_QUERY"]),
            }),
        level("ANALYST_2", "Trend Runner", "Spot the Trend",
            "Follow the Signal, ignore the Noise!",
            Technical, 150,
            LevelConfig::Runner { target: 20, speed: 10.0 }),
        level("ANALYST_3", "KPI Query", "Calculate KPI",
            "Calculate the total revenue.",
            Technical, 150,
            LevelConfig::Query {
                target: "SELECT SUM(REVENUE) FROM SALES".into(),
                blocks: strs(&["SELECT", "SUM(REVENUE)", "FROM", "SALES", "COUNT", "DISTINCT"]),
            }),
        level("ANALYST_4", "Insight Farm", "Gathering Facts",
            "Harvest insights from the raw reports.",
            Technical, 200,
            LevelConfig::Farm { target: 10 }),
        level("ANALYST_5", "Forecast Tuning", "Fit the Curve",
            "Tune the forecast model's step size until the error bottoms out.",
            Technical, 250,
            LevelConfig::Gradient),
        level("ANALYST_6", "Report Pipeline", "Data to Insights",
            "Build a pipeline from raw data to executive reports.",
            Technical, 300,
            LevelConfig::Pipeline {
                sequence: strs(&["CSV", "PIVOT", "CHART_LINE", "DASHBOARD"]),
                extra: strs(&["EXCEL", "KPI"]),
            }),
        level("ANALYST_7", "Trend Analysis", "Follow the Data",
            "Track trends and patterns in the data stream!",
            Technical, 350,
            LevelConfig::Runner { target: 25, speed: 12.0 }),
        level("ANALYST_8", "Query Master", "Complex Aggregation",
            "Filter and aggregate the sales data.",
            Technical, 450,
            LevelConfig::Query {
                target: "SELECT REGION, SUM(SALES) FROM ORDERS GROUP BY REGION HAVING SUM(SALES) > 1000".into(),
                blocks: strs(&["SELECT", "REGION,", "SUM(SALES)", "FROM", "ORDERS", "GROUP BY",
                    "REGION", "HAVING", "SUM(SALES)", ">", "1000"]),
            }),
        level("ANALYST_9", "Report Farm", "Monthly Close",
            "Harvest all the monthly reports on time.",
            Technical, 600,
            LevelConfig::Farm { target: 20 }),

        // Engineer behavioral track
        level("ENGINEER_BEHAVIORAL_1", "Prioritization", "Real-time vs Batch",
            "Marketing wants a real-time pipeline for a monthly report.",
            Behavioral, 150,
            LevelConfig::Behavioral { scenario: scenario(
                "Marketing wants a real-time pipeline for a monthly report. They say it's \"urgent\" but the report only runs once per month.",
                &[
                    ("Build it immediately. They said it's urgent.", 0,
                     "You wasted resources on unnecessary real-time infrastructure. The monthly batch job would have sufficed."),
                    ("Refuse. Tell them they don't need it.", 0,
                     "Too aggressive. You damaged the relationship without explaining the reasoning."),
                    ("Explain cost/benefit and suggest batch processing.", 100,
                     "Perfect! You demonstrated technical leadership by explaining the trade-offs. Marketing agreed to batch processing, saving the company infrastructure costs."),
                ], 2) }),
        level("ENGINEER_BEHAVIORAL_2", "Incident Management", "Production Crisis",
            "Production DB is down. CEO is screaming.",
            Behavioral, 200,
            LevelConfig::Behavioral { scenario: scenario(
                "Production database crashed during peak hours. The CEO is in your Slack channel demanding answers. The team is panicking.",
                &[
                    ("Respond to CEO immediately with explanations.", 0,
                     "You wasted time on communication while the system was still down. Fix first, explain later."),
                    ("Ignore the CEO and focus on fixing.", 50,
                     "Good focus, but poor communication. You should acknowledge the issue briefly."),
                    ("Focus on fixing first, communicate ETA, debrief later.", 100,
                     "Excellent crisis management! You prioritized the fix, gave stakeholders visibility, and saved the post-mortem for after resolution."),
                ], 2) }),
        level("ENGINEER_BEHAVIORAL_3", "Saying No", "Code Quality Gate",
            "Dev team wants to push bad code to prod to hit deadline.",
            Behavioral, 250,
            LevelConfig::Behavioral { scenario: scenario(
                "The dev team wants to push code with known data quality issues to production to meet a deadline. They're pressuring you to approve the deployment.",
                &[
                    ("Approve it. Deadlines are important.", 0,
                     "Bad code reached production. Data integrity was compromised, causing downstream issues. You failed as a gatekeeper."),
                    ("Yell at them and refuse angrily.", 0,
                     "Too aggressive. You created team conflict without offering solutions."),
                    ("Block the deployment, cite data integrity risks, suggest alternatives.", 100,
                     "Perfect! You protected data integrity while offering solutions. The team found a workaround that didn't compromise quality."),
                ], 2) }),

        // Scientist behavioral track
        level("SCIENTIST_BEHAVIORAL_1", "Expectation Management", "100% Accuracy Myth",
            "Client expects 100% accuracy from your ML model.",
            Behavioral, 150,
            LevelConfig::Behavioral { scenario: scenario(
                "A client is demanding 100% accuracy from your machine learning model. They say \"if humans can do it, why can't the AI?\"",
                &[
                    ("Promise 100% accuracy and try to optimize.", 0,
                     "You set unrealistic expectations. When the model fails, the client lost trust in your team."),
                    ("Tell them ML is impossible and refuse.", 0,
                     "Too negative. You didn't explain the value ML can provide."),
                    ("Explain that ML is probabilistic, promise optimization not perfection.", 100,
                     "Excellent! You educated the client on ML fundamentals. They understood the value and set realistic expectations."),
                ], 2) }),
        level("SCIENTIST_BEHAVIORAL_2", "Ethics & Bias", "Model Bias Detection",
            "Model shows bias against a minority group but has high accuracy.",
            Behavioral, 200,
            LevelConfig::Behavioral { scenario: scenario(
                "Your model has 95% accuracy but shows significant bias against a protected demographic group. The product manager wants to deploy it anyway.",
                &[
                    ("Deploy it. High accuracy is what matters.", 0,
                     "You deployed a biased model. It caused harm to users and legal issues for the company."),
                    ("Refuse to deploy but don't explain why.", 50,
                     "Good instinct, but poor communication. The team doesn't understand the ethical implications."),
                    ("Flag it as a blocker, refuse to deploy until fixed, explain the ethical risks.", 100,
                     "Perfect! You demonstrated ethical leadership. The team fixed the bias, and the model was deployed safely."),
                ], 2) }),

        // Analyst behavioral track
        level("ANALYST_BEHAVIORAL_1", "Requirement Gathering", "Vague Dashboard Request",
            "Manager says \"I want a dashboard\" without specifics.",
            Behavioral, 150,
            LevelConfig::Behavioral { scenario: scenario(
                "Your manager says \"I want a dashboard\" but provides no details about what metrics, timeframe, or business questions it should answer.",
                &[
                    ("Build a generic dashboard with common metrics.", 0,
                     "You built something useless. The manager rejected it because it didn't answer their actual questions."),
                    ("Tell them you can't build it without more info.", 50,
                     "Good instinct, but too passive. You should ask the right questions."),
                    ("Ask \"What business question are we trying to solve?\" before building.", 100,
                     "Perfect! You uncovered the real need. The dashboard you built actually solved their problem and saved time."),
                ], 2) }),
        level("ANALYST_BEHAVIORAL_2", "Data Integrity", "Misleading Visualization",
            "VP wants to truncate the Y-axis to make growth look huge.",
            Behavioral, 200,
            LevelConfig::Behavioral { scenario: scenario(
                "A VP asks you to truncate the Y-axis on a chart to make a 2% growth look like 50% growth for a board presentation.",
                &[
                    ("Do it. They're the VP.", 0,
                     "You created a misleading visualization. When the board discovered the truth, you lost credibility."),
                    ("Refuse angrily and call them unethical.", 0,
                     "Too aggressive. You damaged the relationship without offering alternatives."),
                    ("Refuse politely, explain it creates a misleading narrative, suggest honest alternatives.", 100,
                     "Perfect! You maintained integrity while being diplomatic. The VP appreciated your honesty and used your alternative visualization."),
                ], 2) }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        for spec in catalog.iter() {
            assert!(spec.validate().is_ok(), "level {} failed validation", spec.id);
        }
    }

    #[test]
    fn test_pipeline_components_exist_in_registry() {
        let catalog = Catalog::builtin();
        for spec in catalog.iter() {
            if let LevelConfig::Pipeline { sequence, extra } = &spec.config {
                for id in sequence.iter().chain(extra) {
                    assert!(
                        crate::catalog::items::get(id).is_some(),
                        "level {} references unknown item {}",
                        spec.id,
                        id
                    );
                }
            }
        }
    }

    #[test]
    fn test_lookup_and_missing_level() {
        let catalog = Catalog::builtin();
        let spec = catalog.get("SCIENTIST_5").unwrap();
        assert_eq!(spec.game_type(), GameType::Gradient);
        assert!(matches!(
            catalog.get("ENGINEER_99"),
            Err(QuestError::LevelNotFound(_))
        ));
    }

    #[test]
    fn test_tracks_are_per_hero_and_ordered() {
        let catalog = Catalog::builtin();
        let track = catalog.track(HeroClass::Engineer, CareerPath::Technical);
        assert_eq!(track.len(), 9);
        assert_eq!(track[0].id, "ENGINEER_1");
        assert_eq!(track[8].id, "ENGINEER_9");
        assert!(track.iter().all(|l| l.path == CareerPath::Technical));

        let behavioral = catalog.track(HeroClass::Engineer, CareerPath::Behavioral);
        assert_eq!(behavioral.len(), 3);
    }

    #[test]
    fn test_every_hero_track_has_a_gradient_level() {
        let catalog = Catalog::builtin();
        for hero in HeroClass::ALL {
            let track = catalog.track(hero, CareerPath::Technical);
            assert!(
                track.iter().any(|l| l.game_type() == GameType::Gradient),
                "{} track missing a gradient level",
                hero
            );
        }
    }

    #[test]
    fn test_predecessor_follows_track_order() {
        let catalog = Catalog::builtin();
        assert!(catalog.predecessor("ENGINEER_1").unwrap().is_none());
        let prev = catalog.predecessor("ENGINEER_3").unwrap().unwrap();
        assert_eq!(prev.id, "ENGINEER_2");
        let prev = catalog.predecessor("ANALYST_BEHAVIORAL_2").unwrap().unwrap();
        assert_eq!(prev.id, "ANALYST_BEHAVIORAL_1");
    }

    #[test]
    fn test_load_pack_appends_levels() {
        let pack = r#"
[[levels]]
id = "ENGINEER_X1"
name = "Warehouse Modeling"
desc = "Star Schema"
scenario = "Model the warehouse for fast joins."
path = "TECHNICAL"
xp_reward = 500

[levels.config]
game = "QUERY"
target = "SELECT * FROM FACT_SALES"
blocks = ["SELECT", "*", "FROM", "FACT_SALES", "JOIN"]
"#;
        let mut catalog = Catalog::builtin();
        let before = catalog.len();
        assert_eq!(catalog.load_pack_str(pack).unwrap(), 1);
        assert_eq!(catalog.len(), before + 1);
        let spec = catalog.get("ENGINEER_X1").unwrap();
        assert_eq!(spec.game_type(), GameType::Query);
        assert_eq!(spec.xp_reward, 500);
    }

    #[test]
    fn test_load_pack_rejects_duplicate_id() {
        let pack = r#"
[[levels]]
id = "ENGINEER_1"
name = "Dup"
desc = "Dup"
scenario = "Dup"
path = "TECHNICAL"
xp_reward = 1

[levels.config]
game = "FARM"
target = 5
"#;
        let mut catalog = Catalog::builtin();
        assert!(matches!(
            catalog.load_pack_str(pack),
            Err(QuestError::LevelPack(_))
        ));
    }

    #[test]
    fn test_load_pack_rejects_invalid_config() {
        let pack = r#"
[[levels]]
id = "BAD_1"
name = "Bad"
desc = "Bad"
scenario = "Bad"
path = "TECHNICAL"
xp_reward = 100

[levels.config]
game = "RUNNER"
target = 0
speed = 10.0
"#;
        let mut catalog = Catalog::builtin();
        assert!(catalog.load_pack_str(pack).is_err());
    }

    #[test]
    fn test_behavioral_pack_round_trip() {
        let pack = r#"
[[levels]]
id = "ENGINEER_BEHAVIORAL_X"
name = "On-call Etiquette"
desc = "Pager Duty"
scenario = "It is 3am and the pager is firing."
path = "BEHAVIORAL"
xp_reward = 150

[levels.config]
game = "BEHAVIORAL"

[levels.config.scenario]
prompt = "The alert is a known flake. Acknowledge or escalate?"
correct_choice = 1

[[levels.config.scenario.choices]]
text = "Silence it and go back to sleep."
score = 0
feedback = "It was real this time."

[[levels.config.scenario.choices]]
text = "Check the dashboards, then acknowledge with a note."
score = 100
feedback = "Right call. Verified, documented, back to bed."
"#;
        let mut catalog = Catalog::builtin();
        catalog.load_pack_str(pack).unwrap();
        let spec = catalog.get("ENGINEER_BEHAVIORAL_X").unwrap();
        if let LevelConfig::Behavioral { scenario } = &spec.config {
            assert_eq!(scenario.choices.len(), 2);
            assert_eq!(scenario.correct_choice, 1);
        } else {
            panic!("expected behavioral config");
        }
    }
}

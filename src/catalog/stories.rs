//! Mission framing per game type
//!
//! Each mini-game carries an educational topic, a briefing shown before
//! play, and an impact blurb shown after a win.

use crate::core::types::GameType;

/// Briefing and debriefing text for a game family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStory {
    pub topic: &'static str,
    pub briefing: &'static str,
    pub impact: &'static str,
}

/// Story content for a game type, where one exists
pub fn story_for(game_type: GameType) -> Option<GameStory> {
    match game_type {
        GameType::Pipeline => Some(GameStory {
            topic: "ETL Pipelines & Data Lineage",
            briefing: "The CEO needs the Sales Dashboard updated immediately. The data is messy. \
                       You must build a robust pipeline to extract, transform, and load the data correctly.",
            impact: "Success! By building this pipeline, you automated a task that took 4 hours manually. \
                     The Data Warehouse is now synced in real-time.",
        }),
        GameType::Farm => Some(GameStory {
            topic: "Data Quality & Maturity Models",
            briefing: "We have raw data seeds, but they are useless without care. Cultivate the data \
                       through the 'Bronze', 'Silver', and 'Gold' layers to make it consumable for analytics.",
            impact: "Harvest Complete! You turned raw, unstructured logs into high-quality 'Gold Layer' \
                     tables. The Analytics team can now trust the data 100%.",
        }),
        GameType::Runner => Some(GameStory {
            topic: "Machine Learning: Overfitting vs. Generalization",
            briefing: "You are training a new AI model. You must collect valid 'Signals' (Green) while \
                       ignoring the 'Noise' (Red). Be careful not to Overfit!",
            impact: "Model Trained! Because you filtered out the noise, your model generalizes well on \
                     new data. The Prediction Accuracy increased by 15%.",
        }),
        GameType::Query => Some(GameStory {
            topic: "SQL Optimization & Syntax",
            briefing: "The Marketing Director is asking a complex question about user churn. You need to \
                       write the correct SQL query syntax to retrieve the answer quickly.",
            impact: "Query Executed! You extracted the exact insight needed without timing out the \
                     database. The marketing team is using your report for the new campaign.",
        }),
        GameType::Gradient => Some(GameStory {
            topic: "Gradient Descent & Learning Rates",
            briefing: "Your model's loss curve has local minima. Pick a learning rate that rolls the \
                       parameter into the global minimum without bouncing out of the bowl.",
            impact: "Converged! You balanced step size against stability. The model now trains in a \
                     fraction of the time without diverging.",
        }),
        GameType::Behavioral => None,
    }
}

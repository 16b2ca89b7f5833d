//! Away-time resource accrual
//!
//! Tracks when a player was last active per game and converts elapsed
//! wall time into resources on collection. Time is passed in explicitly
//! (unix seconds) so the logic is deterministic under test and a skewed
//! client clock cannot mint unbounded resources.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::config::TuningConfig;

/// Per-game idle production record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdleProduction {
    /// Resources generated per second while away
    pub production_rate: f64,
    /// Unix seconds of the last collection (or activity)
    pub last_active: i64,
}

impl IdleProduction {
    pub fn new(production_rate: f64, now: i64) -> Self {
        Self {
            production_rate,
            last_active: now,
        }
    }

    /// Convert elapsed time since `last_active` into whole resources
    ///
    /// Elapsed time is clamped to the configured cap, and a clock that
    /// runs backwards credits nothing. Collection stamps `last_active`,
    /// so an immediate second collect yields zero.
    pub fn collect(&mut self, now: i64, config: &TuningConfig) -> u32 {
        let elapsed = now - self.last_active;
        if elapsed < 0 {
            warn!(
                last_active = self.last_active,
                now, "clock went backwards, crediting no idle resources"
            );
        }
        let credited = elapsed.clamp(0, config.idle_cap_secs as i64) as f64;
        self.last_active = now;
        (self.production_rate * credited).floor() as u32
    }

    /// Permanently increase the production rate (earned by farm runs)
    pub fn boost_rate(&mut self, bonus: f64) {
        self.production_rate += bonus;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TuningConfig {
        TuningConfig::default()
    }

    #[test]
    fn test_collect_credits_elapsed_seconds() {
        let mut idle = IdleProduction::new(1.0, 1_000);
        assert_eq!(idle.collect(1_060, &config()), 60);
    }

    #[test]
    fn test_collect_floors_fractional_resources() {
        let mut idle = IdleProduction::new(0.5, 0);
        assert_eq!(idle.collect(5, &config()), 2);
    }

    #[test]
    fn test_collect_is_idempotent() {
        let mut idle = IdleProduction::new(2.0, 1_000);
        assert_eq!(idle.collect(1_030, &config()), 60);
        assert_eq!(idle.collect(1_030, &config()), 0);
    }

    #[test]
    fn test_elapsed_capped_at_configured_maximum() {
        let mut idle = IdleProduction::new(1.0, 0);
        // A week away still credits only the 8-hour cap.
        let week = 7 * 24 * 3600;
        assert_eq!(idle.collect(week, &config()), 8 * 3600);
    }

    #[test]
    fn test_backwards_clock_credits_nothing() {
        let mut idle = IdleProduction::new(1.0, 1_000);
        assert_eq!(idle.collect(500, &config()), 0);
        // The stamp still moves, so the rewound clock cannot be replayed
        // for credit later.
        assert_eq!(idle.last_active, 500);
    }

    #[test]
    fn test_boost_rate_accumulates() {
        let mut idle = IdleProduction::new(1.0, 0);
        idle.boost_rate(0.5);
        idle.boost_rate(0.5);
        assert_eq!(idle.collect(10, &config()), 20);
    }
}

//! Gameplay tuning with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other. Game structs take a reference at
//! construction time; there is no global store, so tests can tune freely.

/// Tuning values for the mini-game simulations
///
/// These values have been tuned to produce good gameplay pacing.
/// Changing them will affect difficulty and session length.
#[derive(Debug, Clone)]
pub struct TuningConfig {
    // === GRADIENT TRAINER ===
    /// Distance from the global minimum that counts as convergence
    ///
    /// At 0.01, the ball must land essentially on top of x=0.5.
    /// The sine ripple shifts the true minimum slightly off-center,
    /// so very small learning rates settle just outside this window.
    pub gradient_success_threshold: f64,

    /// Per-step displacement below which progress counts as stalled
    ///
    /// Checked once 10 iterations have elapsed. 0.05 is large enough
    /// to catch both tiny learning rates and local-minimum capture.
    pub gradient_stuck_threshold: f64,

    /// Per-step displacement above which the run counts as oscillating
    ///
    /// Checked once 20 iterations have elapsed, giving transient
    /// overshoot on the way downhill a chance to settle.
    pub gradient_oscillation_threshold: f64,

    /// Hard cap on training iterations per run
    ///
    /// At 100, a run always resolves within a couple of seconds of
    /// animation. On timeout, within 0.1 of the minimum still passes.
    pub gradient_max_iterations: u32,

    /// Points awarded for a converged run (halved on timeout-success)
    pub gradient_success_points: u32,

    // === RUNNER ===
    /// Base seconds between spawns at reference speed (5.0)
    ///
    /// Effective interval is `spawn_interval / (speed / 5)`, so spawns
    /// accelerate as the track speeds up.
    pub runner_spawn_interval: f64,

    /// Probability that a spawned object is a SIGNAL (rest are NOISE)
    pub runner_signal_probability: f64,

    /// Seconds between speed-up events
    pub runner_speedup_interval: f64,

    /// Speed added per speed-up event
    pub runner_speedup_amount: f64,

    /// Speed ceiling
    pub runner_max_speed: f64,

    /// Collision band on the 0-100 track, in track percent
    ///
    /// Objects are caught between 80 and 90, matching where the player
    /// avatar sits near the bottom of the track.
    pub runner_collision_band: (f64, f64),

    /// Starting health
    pub runner_starting_health: i32,

    // === FARM ===
    /// Growth progress per second for a planted plot (percent)
    ///
    /// At 100.0, a plot ripens in one second of play.
    pub farm_growth_rate: f64,

    /// Number of plots on the farm grid
    pub farm_plot_count: usize,

    // === IDLE ACCRUAL ===
    /// Maximum away-time credited per collection, in seconds
    ///
    /// Caps the elapsed-time exploit: a manipulated client clock can
    /// claim at most this much accrual. 8 hours rewards overnight
    /// absence without making longer gaps strictly better.
    pub idle_cap_secs: u64,

    // === PROGRESSION ===
    /// XP fraction forfeited per hint used
    ///
    /// At 0.2, five hints zero out the reward.
    pub hint_penalty: f64,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            gradient_success_threshold: 0.01,
            gradient_stuck_threshold: 0.05,
            gradient_oscillation_threshold: 0.1,
            gradient_max_iterations: 100,
            gradient_success_points: 100,

            runner_spawn_interval: 1.5,
            runner_signal_probability: 0.7,
            runner_speedup_interval: 10.0,
            runner_speedup_amount: 2.0,
            runner_max_speed: 20.0,
            runner_collision_band: (80.0, 90.0),
            runner_starting_health: 3,

            farm_growth_rate: 100.0,
            farm_plot_count: 16,

            idle_cap_secs: 8 * 3600,

            hint_penalty: 0.2,
        }
    }
}

impl TuningConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.gradient_stuck_threshold >= self.gradient_oscillation_threshold {
            return Err(format!(
                "gradient_stuck_threshold ({}) should be < gradient_oscillation_threshold ({})",
                self.gradient_stuck_threshold, self.gradient_oscillation_threshold
            ));
        }

        if !(0.0..=1.0).contains(&self.runner_signal_probability) {
            return Err(format!(
                "runner_signal_probability ({}) must be in [0, 1]",
                self.runner_signal_probability
            ));
        }

        let (band_start, band_end) = self.runner_collision_band;
        if band_start >= band_end || band_end > 100.0 {
            return Err(format!(
                "runner_collision_band ({}, {}) must be an increasing range within the track",
                band_start, band_end
            ));
        }

        if self.gradient_max_iterations == 0 {
            return Err("gradient_max_iterations must be positive".into());
        }

        if self.farm_growth_rate <= 0.0 {
            return Err("farm_growth_rate must be positive".into());
        }

        Ok(())
    }
}

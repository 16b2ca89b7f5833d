//! Plot farm with offline production
//!
//! A grid of plots cycles EMPTY -> GROWING -> READY. Planting is free,
//! growth advances with wall time, and each harvest banks one unit toward
//! the level target. Resources accrued while away (see
//! [`super::idle::IdleProduction`]) are banked into the same counter when
//! the farm opens.

use crate::core::config::TuningConfig;
use crate::core::error::{QuestError, Result};

/// Lifecycle of a single plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlotState {
    Empty,
    Growing { progress: f64 },
    Ready,
}

/// The farm grid and harvest counter
#[derive(Debug, Clone)]
pub struct FarmGame {
    config: TuningConfig,
    plots: Vec<PlotState>,
    harvested: u32,
    target: u32,
    won: bool,
}

impl FarmGame {
    pub fn new(config: TuningConfig, target: u32) -> Self {
        let plots = vec![PlotState::Empty; config.farm_plot_count];
        Self {
            config,
            plots,
            harvested: 0,
            target,
            won: false,
        }
    }

    pub fn plots(&self) -> &[PlotState] {
        &self.plots
    }

    pub fn harvested(&self) -> u32 {
        self.harvested
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Credit resources accrued while the player was away
    pub fn bank_idle(&mut self, resources: u32) {
        self.harvested += resources;
        self.check_win();
    }

    /// Start a crop on an empty plot
    pub fn plant(&mut self, index: usize) -> Result<()> {
        match self.plot_mut(index)? {
            slot @ PlotState::Empty => {
                *slot = PlotState::Growing { progress: 0.0 };
                Ok(())
            }
            _ => Err(QuestError::InvalidMove(format!(
                "plot {} is not empty",
                index
            ))),
        }
    }

    /// Collect a ripe plot, returning the running harvest total
    pub fn harvest(&mut self, index: usize) -> Result<u32> {
        match self.plot_mut(index)? {
            slot @ PlotState::Ready => {
                *slot = PlotState::Empty;
                self.harvested += 1;
                self.check_win();
                Ok(self.harvested)
            }
            _ => Err(QuestError::InvalidMove(format!(
                "plot {} is not ready",
                index
            ))),
        }
    }

    /// Advance growth on all planted plots by `dt` seconds
    pub fn tick(&mut self, dt: f64) {
        let growth = self.config.farm_growth_rate * dt;
        for plot in &mut self.plots {
            if let PlotState::Growing { progress } = plot {
                *progress += growth;
                if *progress >= 100.0 {
                    *plot = PlotState::Ready;
                }
            }
        }
    }

    /// Rate bonus earned by this run, proportional to overshoot of the
    /// target
    pub fn rate_bonus(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        (self.harvested as f64 / self.target as f64) * 0.5
    }

    fn plot_mut(&mut self, index: usize) -> Result<&mut PlotState> {
        let count = self.plots.len();
        self.plots
            .get_mut(index)
            .ok_or_else(|| QuestError::InvalidMove(format!("no plot {} (farm has {})", index, count)))
    }

    fn check_win(&mut self) {
        if self.harvested >= self.target {
            self.won = true;
        }
    }
}

//! Three-lane signal/noise runner
//!
//! Objects fall down a 0-100 track in three lanes. The player switches
//! lanes to catch SIGNAL orbs and dodge NOISE shards. The track speeds up
//! every few seconds, which also tightens the spawn interval. A frame that
//! receives a malformed delta puts the game in a terminal Crashed phase
//! instead of corrupting state.

use rand::Rng;

use crate::core::config::TuningConfig;
use crate::core::error::{QuestError, Result};

/// Lanes on the track
pub const LANE_COUNT: usize = 3;

/// Track percent at which falling objects enter
const SPAWN_Y: f64 = -10.0;

/// Track percent past which objects despawn uncaught
const DESPAWN_Y: f64 = 100.0;

/// What falls down the track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Signal,
    Noise,
}

/// A falling object
#[derive(Debug, Clone)]
pub struct FallingObject {
    pub id: u64,
    pub lane: usize,
    pub y: f64,
    pub kind: ObjectKind,
}

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerPhase {
    Idle,
    Playing,
    Won,
    Lost,
    /// A frame produced an invalid delta; the run cannot continue
    Crashed,
}

/// Observable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunnerEvent {
    Spawned(ObjectKind),
    SpeedUp(f64),
    SignalCaught,
    NoiseHit,
    Won,
    Lost,
}

/// Runner state machine, advanced by [`RunnerGame::tick`]
#[derive(Debug, Clone)]
pub struct RunnerGame {
    config: TuningConfig,
    phase: RunnerPhase,
    player_lane: usize,
    objects: Vec<FallingObject>,
    score: u32,
    target_score: u32,
    health: i32,
    base_speed: f64,
    speed: f64,
    spawn_timer: f64,
    speed_timer: f64,
    next_id: u64,
}

impl RunnerGame {
    /// Create a runner for a level with the given starting speed and
    /// score target
    pub fn new(config: TuningConfig, base_speed: f64, target_score: u32) -> Self {
        let health = config.runner_starting_health;
        let speed = base_speed;
        Self {
            config,
            phase: RunnerPhase::Idle,
            player_lane: 1,
            objects: Vec::new(),
            score: 0,
            target_score,
            health,
            base_speed,
            speed,
            spawn_timer: 0.0,
            speed_timer: 0.0,
            next_id: 0,
        }
    }

    pub fn phase(&self) -> RunnerPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn player_lane(&self) -> usize {
        self.player_lane
    }

    pub fn objects(&self) -> &[FallingObject] {
        &self.objects
    }

    /// Begin (or retry) a run, wiping all per-run state
    pub fn start(&mut self) {
        self.phase = RunnerPhase::Playing;
        self.player_lane = 1;
        self.objects.clear();
        self.score = 0;
        self.health = self.config.runner_starting_health;
        self.speed = self.base_speed;
        self.spawn_timer = 0.0;
        self.speed_timer = 0.0;
    }

    pub fn move_left(&mut self) {
        if self.phase == RunnerPhase::Playing {
            self.player_lane = self.player_lane.saturating_sub(1);
        }
    }

    pub fn move_right(&mut self) {
        if self.phase == RunnerPhase::Playing {
            self.player_lane = (self.player_lane + 1).min(LANE_COUNT - 1);
        }
    }

    /// Seconds between spawns at the current speed
    ///
    /// Normalized to a reference speed of 5, so the interval shrinks as
    /// the track accelerates.
    fn spawn_interval(&self) -> f64 {
        self.config.runner_spawn_interval / (self.speed / 5.0)
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// No-op outside the Playing phase. A non-finite or negative delta
    /// moves the game to Crashed and returns an error; the run must be
    /// restarted with [`Self::start`].
    pub fn tick<R: Rng + ?Sized>(&mut self, dt: f64, rng: &mut R) -> Result<Vec<RunnerEvent>> {
        if self.phase != RunnerPhase::Playing {
            return Ok(Vec::new());
        }
        if !dt.is_finite() || dt < 0.0 {
            self.phase = RunnerPhase::Crashed;
            return Err(QuestError::GameLoop(format!("invalid frame delta: {}", dt)));
        }

        let mut events = Vec::new();

        self.spawn_timer += dt;
        if self.spawn_timer >= self.spawn_interval() {
            self.spawn_timer = 0.0;
            let kind = if rng.gen::<f64>() < self.config.runner_signal_probability {
                ObjectKind::Signal
            } else {
                ObjectKind::Noise
            };
            let lane = rng.gen_range(0..LANE_COUNT);
            self.objects.push(FallingObject {
                id: self.next_id,
                lane,
                y: SPAWN_Y,
                kind,
            });
            self.next_id += 1;
            events.push(RunnerEvent::Spawned(kind));
        }

        self.speed_timer += dt;
        if self.speed_timer >= self.config.runner_speedup_interval {
            self.speed_timer = 0.0;
            self.speed =
                (self.speed + self.config.runner_speedup_amount).min(self.config.runner_max_speed);
            events.push(RunnerEvent::SpeedUp(self.speed));
        }

        // The speed bump above applies to this frame's movement too.
        let (band_start, band_end) = self.config.runner_collision_band;
        let mut caught_signals = 0u32;
        let mut hit_noises = 0u32;
        let player_lane = self.player_lane;
        let fall = self.speed * dt * 10.0;

        self.objects.retain_mut(|obj| {
            obj.y += fall;
            if obj.lane == player_lane && obj.y > band_start && obj.y < band_end {
                // Caught: the object is consumed this frame, so it can
                // never score or damage twice.
                match obj.kind {
                    ObjectKind::Signal => caught_signals += 1,
                    ObjectKind::Noise => hit_noises += 1,
                }
                return false;
            }
            obj.y < DESPAWN_Y
        });

        for _ in 0..caught_signals {
            self.score += 1;
            events.push(RunnerEvent::SignalCaught);
            if self.score >= self.target_score {
                self.phase = RunnerPhase::Won;
                events.push(RunnerEvent::Won);
            }
        }
        for _ in 0..hit_noises {
            self.health -= 1;
            events.push(RunnerEvent::NoiseHit);
            if self.health <= 0 {
                // A fatal hit on the winning frame still loses the run.
                self.phase = RunnerPhase::Lost;
                events.push(RunnerEvent::Lost);
            }
        }

        Ok(events)
    }
}

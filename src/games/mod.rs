//! Mini-game simulations - pure state machines driven by explicit steps
//!
//! Each game owns its state and is advanced by `step()`/`tick(dt)` calls from
//! whatever host loop is available (CLI, animation frame, test harness).
//! Randomness is always injected so runs can be replayed deterministically.

pub mod behavioral;
pub mod farm;
pub mod gradient;
pub mod idle;
pub mod runner;
pub mod sequence;

pub use behavioral::{ChoiceOutcome, Scenario, ScenarioChoice};
pub use farm::{FarmGame, PlotState};
pub use gradient::{run_episode, Episode, GradientTrainer, TrainingOutcome};
pub use idle::IdleProduction;
pub use runner::{ObjectKind, RunnerEvent, RunnerGame, RunnerPhase};
pub use sequence::{QueryPuzzle, SequencePuzzle, ValidationResult};

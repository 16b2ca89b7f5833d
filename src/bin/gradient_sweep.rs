//! Learning-rate sweep binary
//!
//! Runs the gradient trainer across a grid of start positions and
//! learning rates, prints an outcome summary, and writes the full grid
//! to JSON for plotting.

use std::time::Instant;

use serde::Serialize;

use data_quest::core::TuningConfig;
use data_quest::games::gradient::{run_episode, TrainingOutcome};

#[derive(Serialize)]
struct SweepPoint {
    start: f64,
    learning_rate: f64,
    outcome: String,
    iterations: u32,
    final_position: f64,
}

#[derive(Serialize)]
struct SweepOutput {
    start_steps: usize,
    rate_steps: usize,
    points: Vec<SweepPoint>,
}

fn main() {
    let config = TuningConfig::default();

    const START_STEPS: usize = 21;
    const RATE_STEPS: usize = 41;

    println!("Gradient Trainer Learning-Rate Sweep");
    println!("====================================");
    println!("Starts: {} steps across [0, 1]", START_STEPS);
    println!("Rates:  {} steps across [0, 0.4]", RATE_STEPS);
    println!();

    let begin = Instant::now();
    let mut points = Vec::with_capacity(START_STEPS * RATE_STEPS);
    let mut successes = 0usize;
    let mut oscillations = 0usize;
    let mut stuck = 0usize;

    for si in 0..START_STEPS {
        let start = si as f64 / (START_STEPS - 1) as f64;
        for ri in 0..RATE_STEPS {
            let rate = 0.4 * ri as f64 / (RATE_STEPS - 1) as f64;
            let episode = run_episode(start, rate, &config);
            match episode.outcome {
                TrainingOutcome::Success => successes += 1,
                TrainingOutcome::Oscillating => oscillations += 1,
                TrainingOutcome::Stuck => stuck += 1,
            }
            points.push(SweepPoint {
                start,
                learning_rate: rate,
                outcome: format!("{:?}", episode.outcome),
                iterations: episode.iterations,
                final_position: episode.final_position,
            });
        }
    }
    let elapsed = begin.elapsed();

    let total = points.len();
    println!("Episodes:    {}", total);
    println!("Success:     {} ({:.1}%)", successes, 100.0 * successes as f64 / total as f64);
    println!("Oscillating: {} ({:.1}%)", oscillations, 100.0 * oscillations as f64 / total as f64);
    println!("Stuck:       {} ({:.1}%)", stuck, 100.0 * stuck as f64 / total as f64);
    println!("Sweep time:  {:.2}ms", elapsed.as_secs_f64() * 1000.0);

    let output = SweepOutput {
        start_steps: START_STEPS,
        rate_steps: RATE_STEPS,
        points,
    };
    let json = serde_json::to_string_pretty(&output).expect("sweep output serializes");
    std::fs::write("gradient_sweep.json", &json).expect("Failed to write output");
    println!("\nFull grid written to gradient_sweep.json");
}

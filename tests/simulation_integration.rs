//! Cross-module simulation tests: full runs of each mini-game driven the
//! way the CLI drives them.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use data_quest::core::TuningConfig;
use data_quest::games::{
    gradient::{run_episode, TrainingOutcome},
    FarmGame, IdleProduction, ObjectKind, PlotState, RunnerGame, RunnerPhase,
};

#[test]
fn test_gradient_outcome_map_matches_intuition() {
    let config = TuningConfig::default();

    // Too small: stalls short of the window.
    for (start, rate) in [(0.3, 0.0), (0.9, 0.02), (0.65, 0.15)] {
        let episode = run_episode(start, rate, &config);
        assert_eq!(
            episode.outcome,
            TrainingOutcome::Stuck,
            "start={} rate={} should stall",
            start,
            rate
        );
    }

    // Moderate: converges well before the cap.
    for (start, rate) in [(0.35, 0.15), (0.45, 0.15), (0.55, 0.15), (0.7, 0.2)] {
        let episode = run_episode(start, rate, &config);
        assert_eq!(
            episode.outcome,
            TrainingOutcome::Success,
            "start={} rate={} should converge",
            start,
            rate
        );
        assert!(
            episode.iterations < 20,
            "convergence should be fast, took {} iterations",
            episode.iterations
        );
    }

    // Too large: keeps jumping across the bowl.
    for (start, rate) in [(0.3, 0.2), (0.05, 0.25)] {
        let episode = run_episode(start, rate, &config);
        assert_eq!(
            episode.outcome,
            TrainingOutcome::Oscillating,
            "start={} rate={} should oscillate",
            start,
            rate
        );
    }
}

#[test]
fn test_runner_full_game_reaches_a_terminal_phase() {
    let config = TuningConfig::default();
    let mut game = RunnerGame::new(config, 10.0, 15);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    game.start();

    // Greedy auto-player: chase the lowest signal, flee the lowest noise.
    let mut frames = 0;
    while game.phase() == RunnerPhase::Playing {
        frames += 1;
        assert!(frames < 10_000, "game must terminate");

        let lowest = game
            .objects()
            .iter()
            .max_by(|a, b| a.y.partial_cmp(&b.y).expect("object y is finite"));
        if let Some(obj) = lowest {
            let target_lane = match obj.kind {
                ObjectKind::Signal => obj.lane,
                ObjectKind::Noise => (obj.lane + 1) % 3,
            };
            if game.player_lane() < target_lane {
                game.move_right();
            } else if game.player_lane() > target_lane {
                game.move_left();
            }
        }
        game.tick(0.1, &mut rng).expect("valid frames never crash");
    }

    match game.phase() {
        RunnerPhase::Won => assert!(game.score() >= 15, "winner must have hit the target"),
        RunnerPhase::Lost => assert!(game.health() <= 0, "loser must be out of health"),
        other => panic!("unexpected terminal phase {:?}", other),
    }
}

#[test]
fn test_runner_speed_ramps_during_long_game() {
    let config = TuningConfig::default();
    // Unreachable target keeps the game running long enough to ramp.
    let mut game = RunnerGame::new(config, 5.0, 1_000_000);
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    game.start();

    let mut elapsed = 0.0;
    while elapsed < 35.0 && game.phase() == RunnerPhase::Playing {
        game.tick(0.25, &mut rng).unwrap();
        elapsed += 0.25;
    }
    if game.phase() == RunnerPhase::Playing {
        // Three speedups in 35 seconds: 5 -> 11.
        assert!(
            game.speed() >= 11.0,
            "speed should have ramped, got {}",
            game.speed()
        );
    }
}

#[test]
fn test_farm_session_with_idle_bank() {
    let config = TuningConfig::default();
    let mut idle = IdleProduction::new(1.0, 0);

    // Two hours away at 1/s: far more than a 10-target level needs,
    // so the banked resources win the level on entry.
    let banked = idle.collect(2 * 3600, &config);
    assert_eq!(banked, 7200);

    let mut farm = FarmGame::new(config.clone(), 10);
    farm.bank_idle(banked);
    assert!(farm.is_won(), "idle overshoot should clear the level");

    // Fresh level without idle: manual plant/harvest path.
    let mut idle = IdleProduction::new(1.0, 0);
    assert_eq!(idle.collect(0, &config), 0);
    let mut farm = FarmGame::new(config.clone(), 3);
    for round in 0..3 {
        farm.plant(round).expect("plot is empty");
        farm.tick(1.0);
        assert_eq!(farm.plots()[round], PlotState::Ready);
        farm.harvest(round).expect("plot is ready");
    }
    assert!(farm.is_won());

    // Winning boosts the idle rate for next time.
    idle.boost_rate(farm.rate_bonus());
    assert!(idle.collect(100, &config) > 100, "boosted rate should out-produce base rate");
}

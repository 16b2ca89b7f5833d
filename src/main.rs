//! Data Quest - Entry Point
//!
//! Interactive CLI for the career map: pick a hero, play levels from the
//! catalog, bank XP, and record sessions. Each mini-game gets a small
//! turn-based driver around its simulation; the runner advances in fixed
//! half-second frames per input.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tokio::runtime::Runtime;

use data_quest::catalog::{levels::LevelConfig, Catalog, HeroClass};
use data_quest::core::{QuestError, Result, TuningConfig};
use data_quest::games::{
    gradient, FarmGame, GradientTrainer, IdleProduction, PlotState, QueryPuzzle, RunnerGame,
    RunnerPhase, Scenario, SequencePuzzle, TrainingOutcome, ValidationResult,
};
use data_quest::llm::{evaluate_prompt, LlmClient, PromptArena};
use data_quest::progress::{session::penalized_xp, JsonFileSink, PlayerProfile, SessionRecord, SessionSink};

/// Fixed frame length for the turn-based runner driver
const RUNNER_FRAME_SECS: f64 = 0.5;

#[derive(Parser, Debug)]
#[command(name = "data-quest", about = "Gamified data-career trainer")]
struct Args {
    /// Hero to play (engineer, scientist, analyst)
    #[arg(long, default_value = "engineer")]
    hero: String,

    /// Extra level pack (TOML) to load on top of the built-in catalog
    #[arg(long)]
    pack: Option<PathBuf>,

    /// Where finished sessions are appended as JSON lines
    #[arg(long, default_value = "sessions.jsonl")]
    sessions: PathBuf,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_hero(name: &str) -> Result<HeroClass> {
    match name.to_ascii_lowercase().as_str() {
        "engineer" => Ok(HeroClass::Engineer),
        "scientist" => Ok(HeroClass::Scientist),
        "analyst" => Ok(HeroClass::Analyst),
        other => Err(QuestError::InvalidMove(format!("unknown hero: {}", other))),
    }
}

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "data_quest=info".into()),
        )
        .init();

    let args = Args::parse();
    let hero = parse_hero(&args.hero)?;
    let config = TuningConfig::new();
    config.validate().map_err(QuestError::GameLoop)?;

    let mut catalog = Catalog::builtin();
    if let Some(pack) = &args.pack {
        let added = catalog.load_pack(pack)?;
        println!("Loaded {} pack level(s) from {}", added, pack.display());
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let sink = JsonFileSink::new(&args.sessions);
    let mut profile = PlayerProfile::new(hero);
    let mut farm_idle = IdleProduction::new(1.0, now_secs());

    let llm_client = LlmClient::from_env().ok();
    if llm_client.is_none() {
        tracing::warn!("GROQ_API_KEY not set - prompt scoring uses the keyword fallback");
    }
    let rt = Runtime::new()?;

    println!("\n=== DATA QUEST ===");
    println!("{} - {}", hero.name(), hero.description());
    println!();
    println!("Commands:");
    println!("  levels          - Show your career map");
    println!("  play <id>       - Play a level");
    println!("  arcade          - Free-play gradient trainer");
    println!("  score           - Score a prompt against a target");
    println!("  status          - XP and completion");
    println!("  quit / q        - Exit");
    println!();

    loop {
        let input = read_line("> ")?;
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }
        if input == "levels" {
            show_levels(&catalog, &profile);
            continue;
        }
        if input == "status" {
            println!(
                "{} | XP: {} | Levels completed: {}",
                hero.name(),
                profile.total_xp,
                profile.completed_count()
            );
            continue;
        }
        if input == "arcade" {
            if let Err(e) = play_arcade(&config, &mut rng) {
                println!("Arcade error: {}", e);
            }
            continue;
        }
        if input == "score" {
            if let Err(e) = score_prompt(&rt, llm_client.as_ref()) {
                println!("Scoring error: {}", e);
            }
            continue;
        }
        if let Some(id) = input.strip_prefix("play ") {
            let id = id.trim().to_uppercase();
            match play_level(&catalog, &mut profile, &mut farm_idle, &config, &mut rng, &sink, &id) {
                Ok(()) => {}
                Err(QuestError::LevelLocked(id)) => {
                    println!("{} is locked. Finish the previous level first.", id)
                }
                Err(QuestError::LevelNotFound(id)) => println!("No such level: {}", id),
                Err(e) => println!("Error: {}", e),
            }
            continue;
        }
        println!("Unknown command: {}", input);
    }

    println!("Final XP: {}. See you at standup.", profile.total_xp);
    Ok(())
}

fn show_levels(catalog: &Catalog, profile: &PlayerProfile) {
    for path in [
        data_quest::core::CareerPath::Technical,
        data_quest::core::CareerPath::Behavioral,
    ] {
        println!("--- {:?} track ---", path);
        for spec in catalog.track(profile.hero, path) {
            let marker = if profile.is_completed(&spec.id) {
                "[done]"
            } else if profile.is_unlocked(catalog, &spec.id).unwrap_or(false) {
                "[open]"
            } else {
                "[locked]"
            };
            println!(
                "  {:8} {:24} {:10} {:4} XP  {}",
                marker,
                spec.id,
                spec.game_type().to_string(),
                spec.xp_reward,
                spec.name
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn play_level(
    catalog: &Catalog,
    profile: &mut PlayerProfile,
    farm_idle: &mut IdleProduction,
    config: &TuningConfig,
    rng: &mut StdRng,
    sink: &dyn SessionSink,
    id: &str,
) -> Result<()> {
    profile.ensure_unlocked(catalog, id)?;
    let spec = catalog.get(id)?;

    println!("\n== {} - {} ==", spec.name, spec.desc);
    if let Some(story) = data_quest::catalog::stories::story_for(spec.game_type()) {
        println!("[{}]", story.topic);
        println!("{}", story.briefing);
    }
    println!("{}\n", spec.scenario);

    let started = Instant::now();
    let outcome = match &spec.config {
        LevelConfig::Pipeline { sequence, extra } => {
            play_pipeline(config, sequence.clone(), extra.clone())?
        }
        LevelConfig::Runner { target, speed } => play_runner(config, *speed, *target, rng)?,
        LevelConfig::Query { target, blocks } => {
            let blocks = if blocks.is_empty() { None } else { Some(blocks.clone()) };
            play_query(target, blocks, rng)?
        }
        LevelConfig::Farm { target } => play_farm(config, *target, farm_idle)?,
        LevelConfig::Gradient => play_gradient(config, rng)?,
        LevelConfig::Behavioral { scenario } => play_behavioral(scenario)?,
    };

    let duration = started.elapsed().as_secs();
    let xp = if outcome.won {
        penalized_xp(spec.xp_reward, outcome.hints_used, config.hint_penalty)
            .min(spec.xp_reward)
            * outcome.score_fraction.0
            / outcome.score_fraction.1
    } else {
        0
    };

    let record = SessionRecord::new(profile.id, spec.game_type(), &spec.id)
        .with_outcome(outcome.won, outcome.score, xp)
        .with_duration(duration)
        .with_config(outcome.game_config);
    sink.save(&record)?;

    if outcome.won {
        profile.complete_level(&spec.id, xp);
        if let Some(story) = data_quest::catalog::stories::story_for(spec.game_type()) {
            println!("\n{}", story.impact);
        }
        println!("+{} XP (total {})", xp, profile.total_xp);
    } else {
        println!("\nNo XP this time. The level stays open for a retry.");
    }
    Ok(())
}

/// What a level driver reports back
struct PlayOutcome {
    won: bool,
    score: u32,
    hints_used: u32,
    /// Numerator/denominator applied to the XP reward (behavioral levels
    /// scale by choice score)
    score_fraction: (u32, u32),
    game_config: serde_json::Value,
}

impl PlayOutcome {
    fn lost() -> Self {
        Self {
            won: false,
            score: 0,
            hints_used: 0,
            score_fraction: (1, 1),
            game_config: serde_json::Value::Null,
        }
    }

    fn won(score: u32) -> Self {
        Self {
            won: true,
            score,
            hints_used: 0,
            score_fraction: (1, 1),
            game_config: serde_json::Value::Null,
        }
    }
}

fn play_pipeline(
    config: &TuningConfig,
    sequence: Vec<String>,
    extra: Vec<String>,
) -> Result<PlayOutcome> {
    let mut puzzle = SequencePuzzle::new(config.clone(), sequence, extra);
    println!("Commands: place <item>, clear <slot>, hint, run, quit");

    loop {
        let slots: Vec<String> = puzzle
            .slots()
            .iter()
            .enumerate()
            .map(|(i, s)| match s {
                Some(id) => data_quest::catalog::items::display_name(id).to_string(),
                None => format!("[{}]", i + 1),
            })
            .collect();
        println!("Pipeline: {}", slots.join(" -> "));
        let inventory: Vec<&str> = puzzle.inventory().collect();
        println!("Inventory: {}", inventory.join(", "));

        let input = read_line("pipeline> ")?;
        if input == "quit" {
            return Ok(PlayOutcome::lost());
        }
        if input == "hint" {
            match puzzle.hint() {
                Some(i) => println!("Hint used (-20% XP): slot {} corrected.", i + 1),
                None => println!("All filled slots are correct so far."),
            }
            continue;
        }
        if input == "run" {
            match puzzle.execute() {
                ValidationResult::Correct => {
                    println!("Pipeline executed successfully!");
                    let mut outcome = PlayOutcome::won(100);
                    outcome.hints_used = puzzle.hints_used();
                    outcome.game_config = json!({ "hints": puzzle.hints_used() });
                    return Ok(outcome);
                }
                ValidationResult::Incomplete => println!("Pipeline incomplete. Fill all slots."),
                ValidationResult::Incorrect => println!("Pipeline failed. Invalid sequence logic."),
            }
            continue;
        }
        if let Some(item) = input.strip_prefix("place ") {
            match puzzle.place(item.trim().to_uppercase().as_str()) {
                Ok(i) => println!("Placed into slot {}.", i + 1),
                Err(e) => println!("{}", e),
            }
            continue;
        }
        if let Some(n) = input.strip_prefix("clear ") {
            match n.trim().parse::<usize>() {
                Ok(n) if n >= 1 => {
                    if let Err(e) = puzzle.clear_slot(n - 1) {
                        println!("{}", e);
                    }
                }
                _ => println!("Usage: clear <slot number>"),
            }
            continue;
        }
        println!("Unknown command: {}", input);
    }
}

fn play_runner(
    config: &TuningConfig,
    speed: f64,
    target: u32,
    rng: &mut StdRng,
) -> Result<PlayOutcome> {
    let mut game = RunnerGame::new(config.clone(), speed, target);
    game.start();
    println!("Each input advances {}s. Commands: a (left), d (right), <enter> (stay), quit", RUNNER_FRAME_SECS);

    loop {
        println!(
            "lane {} | score {}/{} | hp {} | speed {:.0} | {} object(s) falling",
            game.player_lane(),
            game.score(),
            target,
            game.health(),
            game.speed(),
            game.objects().len()
        );
        let input = read_line("runner> ")?;
        match input.as_str() {
            "quit" => return Ok(PlayOutcome::lost()),
            "a" => game.move_left(),
            "d" => game.move_right(),
            _ => {}
        }
        game.tick(RUNNER_FRAME_SECS, rng)?;
        match game.phase() {
            RunnerPhase::Won => {
                println!("Signal acquired. Level complete!");
                let mut outcome = PlayOutcome::won(game.score());
                outcome.game_config = json!({ "final_speed": game.speed(), "target": target });
                return Ok(outcome);
            }
            RunnerPhase::Lost => {
                println!("Too much noise. Run over.");
                return Ok(PlayOutcome::lost());
            }
            _ => {}
        }
    }
}

fn play_query(
    target: &str,
    blocks: Option<Vec<String>>,
    rng: &mut StdRng,
) -> Result<PlayOutcome> {
    let mut puzzle = QueryPuzzle::new(target, blocks, rng);
    println!("Commands: pick <n>, unpick <n>, reset, run, quit");

    loop {
        println!("Query: {}", puzzle.selected().join(" "));
        let available: Vec<String> = puzzle
            .available()
            .iter()
            .enumerate()
            .map(|(i, b)| format!("{}:{}", i + 1, b))
            .collect();
        println!("Blocks: {}", available.join("  "));

        let input = read_line("query> ")?;
        if input == "quit" {
            return Ok(PlayOutcome::lost());
        }
        if input == "reset" {
            puzzle.reset(rng);
            continue;
        }
        if input == "run" {
            match puzzle.execute() {
                ValidationResult::Correct => {
                    println!("Query executed successfully!");
                    return Ok(PlayOutcome::won(100));
                }
                _ => println!("Query failed. Check your syntax."),
            }
            continue;
        }
        let (command, n) = match input.split_once(' ') {
            Some((c, n)) => (c, n.trim().parse::<usize>().ok()),
            None => (input.as_str(), None),
        };
        match (command, n) {
            ("pick", Some(n)) if n >= 1 => {
                if let Err(e) = puzzle.pick(n - 1) {
                    println!("{}", e);
                }
            }
            ("unpick", Some(n)) if n >= 1 => {
                if let Err(e) = puzzle.unpick(n - 1) {
                    println!("{}", e);
                }
            }
            _ => println!("Unknown command: {}", input),
        }
    }
}

fn play_farm(
    config: &TuningConfig,
    target: u32,
    idle: &mut IdleProduction,
) -> Result<PlayOutcome> {
    let mut game = FarmGame::new(config.clone(), target);
    let banked = idle.collect(now_secs(), config);
    if banked > 0 {
        println!("While you were away: +{} TB harvested.", banked);
        game.bank_idle(banked);
    }
    println!("Commands: plant <n>, harvest <n>, wait <secs>, quit");

    loop {
        let grid: Vec<String> = game
            .plots()
            .iter()
            .map(|p| match p {
                PlotState::Empty => ".".to_string(),
                PlotState::Growing { progress } => format!("{}%", *progress as u32),
                PlotState::Ready => "R".to_string(),
            })
            .collect();
        println!("Plots: {}", grid.join(" "));
        println!("Harvested: {}/{} TB", game.harvested(), game.target());

        if game.is_won() {
            println!("Harvest complete!");
            idle.boost_rate(game.rate_bonus());
            let mut outcome = PlayOutcome::won(game.harvested());
            outcome.game_config = json!({
                "target": target,
                "idle_banked": banked,
                "rate_bonus": game.rate_bonus(),
            });
            return Ok(outcome);
        }

        let input = read_line("farm> ")?;
        if input == "quit" {
            return Ok(PlayOutcome::lost());
        }
        let (command, arg) = match input.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (input.as_str(), ""),
        };
        match command {
            "plant" => match arg.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    if let Err(e) = game.plant(n - 1) {
                        println!("{}", e);
                    }
                }
                _ => println!("Usage: plant <plot number>"),
            },
            "harvest" => match arg.parse::<usize>() {
                Ok(n) if n >= 1 => match game.harvest(n - 1) {
                    Ok(total) => println!("+1 TB ({} total)", total),
                    Err(e) => println!("{}", e),
                },
                _ => println!("Usage: harvest <plot number>"),
            },
            "wait" => match arg.parse::<f64>() {
                Ok(secs) if secs > 0.0 => game.tick(secs),
                _ => println!("Usage: wait <seconds>"),
            },
            _ => println!("Unknown command: {}", input),
        }
    }
}

fn play_gradient(config: &TuningConfig, rng: &mut StdRng) -> Result<PlayOutcome> {
    let mut trainer = GradientTrainer::new(config.clone());
    trainer.reset(rng);
    println!("Commands: rate <0..1>, train, reset, done, quit");

    loop {
        println!(
            "level {} | score {} | position {:.3} | learning rate {:.3}",
            trainer.level(),
            trainer.score(),
            trainer.position(),
            trainer.learning_rate()
        );
        let input = read_line("gradient> ")?;
        if input == "quit" {
            return Ok(PlayOutcome::lost());
        }
        if input == "done" {
            // One successful run clears the level.
            if trainer.score() > 0 {
                let mut outcome = PlayOutcome::won(trainer.score());
                outcome.game_config = json!({ "runs_cleared": trainer.level() - 1 });
                return Ok(outcome);
            }
            println!("Converge at least once first.");
            continue;
        }
        if input == "reset" {
            trainer.reset(rng);
            continue;
        }
        if input == "train" {
            trainer.start_training();
            let result = loop {
                if let Some(outcome) = trainer.step() {
                    break outcome;
                }
            };
            match result {
                TrainingOutcome::Success => {
                    println!("Converged at {:.3}! +points", trainer.position());
                    trainer.reset(rng);
                }
                TrainingOutcome::Oscillating => {
                    println!("Oscillating - learning rate too high. Final position {:.3}.", trainer.position())
                }
                TrainingOutcome::Stuck => {
                    println!(
                        "Stuck at {:.3} (loss {:.3}) - learning rate too low or trapped.",
                        trainer.position(),
                        gradient::loss(trainer.position())
                    )
                }
            }
            continue;
        }
        if let Some(rate) = input.strip_prefix("rate ") {
            match rate.trim().parse::<f64>() {
                Ok(r) if (0.0..=1.0).contains(&r) => trainer.set_learning_rate(r),
                _ => println!("Usage: rate <0..1>"),
            }
            continue;
        }
        println!("Unknown command: {}", input);
    }
}

fn play_behavioral(scenario: &Scenario) -> Result<PlayOutcome> {
    println!("{}\n", scenario.prompt);
    for (i, choice) in scenario.choices.iter().enumerate() {
        println!("  {}. {}", i + 1, choice.text);
    }

    loop {
        let input = read_line("choice> ")?;
        if input == "quit" {
            return Ok(PlayOutcome::lost());
        }
        let Ok(n) = input.parse::<usize>() else {
            println!("Pick a choice number.");
            continue;
        };
        if n < 1 {
            println!("Pick a choice number.");
            continue;
        }
        match scenario.resolve(n - 1) {
            Ok(outcome) => {
                println!("\n{}", outcome.feedback);
                let mut play = PlayOutcome::won(outcome.score);
                play.won = outcome.score > 0;
                play.score_fraction = (outcome.score, 100);
                play.game_config = json!({ "choice": n - 1, "best": outcome.is_best });
                return Ok(play);
            }
            Err(e) => println!("{}", e),
        }
    }
}

fn score_prompt(rt: &Runtime, client: Option<&LlmClient>) -> Result<()> {
    let target = read_line("target> ")?;
    let prompt = read_line("prompt> ")?;
    let evaluation = match client {
        Some(client) => rt.block_on(evaluate_prompt(
            client,
            PromptArena::Visionary,
            &prompt,
            &target,
        ))?,
        None => data_quest::llm::PromptEvaluation {
            score: data_quest::llm::keyword_similarity(&prompt, &target),
            feedback: "Basic similarity check completed. AI evaluation unavailable.".into(),
            from_model: false,
        },
    };
    let source = if evaluation.from_model { "model" } else { "local" };
    println!("Score: {}/100 ({})", evaluation.score, source);
    println!("{}", evaluation.feedback);
    Ok(())
}

fn play_arcade(config: &TuningConfig, rng: &mut StdRng) -> Result<()> {
    // Free play: same trainer, no level bookkeeping.
    let _ = play_gradient(config, rng)?;
    Ok(())
}

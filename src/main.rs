use clap::Parser;

use route711::engine::config::GameConfig;
use route711::engine::snapshot::GameSnapshot;
use route711::engine::turn_engine::{BotTurnOutcome, TurnEngine};
use route711::game::catalog::TileCatalog;
use route711::game::player::PlayerKind;
use route711::logging::setup_logging;
use route711::strategy::move_selection::StrategyKind;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum StrategyCli {
    Random,
    Heuristic,
}

impl From<StrategyCli> for StrategyKind {
    fn from(cli: StrategyCli) -> Self {
        match cli {
            StrategyCli::Random => StrategyKind::Random,
            StrategyCli::Heuristic => StrategyKind::Heuristic,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "route711")]
struct Config {
    /// Number of games to simulate
    #[arg(short = 'g', long, default_value_t = 1)]
    num_games: usize,

    /// Number of bot seats per game
    #[arg(short = 'p', long, default_value_t = 2)]
    num_players: usize,

    /// Base RNG seed; game i runs with seed + i
    #[arg(short = 's', long, default_value_t = 0)]
    seed: u64,

    /// Move selection used by every bot seat
    #[arg(long, value_enum, default_value = "heuristic")]
    strategy: StrategyCli,

    /// Print the final state of each game as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() {
    if let Err(e) = setup_logging() {
        eprintln!("failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let config = Config::parse();
    if let Err(e) = run(&config) {
        eprintln!("simulation failed: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> route711::Result<()> {
    let catalog = TileCatalog::standard();
    let names: Vec<String> = (1..=config.num_players)
        .map(|n| format!("Bot {n}"))
        .collect();
    let seats: Vec<(&str, PlayerKind)> = names
        .iter()
        .map(|name| (name.as_str(), PlayerKind::Bot))
        .collect();

    let mut wins = vec![0usize; config.num_players];

    for game in 0..config.num_games {
        let game_config = GameConfig {
            seed: config.seed + game as u64,
            bot_strategy: config.strategy.into(),
            ..GameConfig::default()
        };

        let mut engine = TurnEngine::new(catalog.clone(), game_config);
        engine.start_game(&seats)?;

        let mut passes = 0usize;
        while !engine.is_game_over() {
            engine.begin_bot_turn()?;
            if let BotTurnOutcome::Passed = engine.finish_bot_turn()? {
                passes += 1;
            }
        }

        let winner = engine.winner().unwrap_or(0);
        wins[winner] += 1;

        let scores: Vec<String> = engine
            .players()
            .iter()
            .map(|p| format!("{} {}", p.name(), p.score()))
            .collect();
        log::info!(
            "game {}: winner {} [{}] ({} passes)",
            game,
            engine.players()[winner].name(),
            scores.join(", "),
            passes
        );

        if config.json {
            let snapshot = GameSnapshot::of(&engine);
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => println!("{json}"),
                Err(e) => log::error!("failed to serialize snapshot: {e}"),
            }
        }
    }

    for (seat, count) in wins.iter().enumerate() {
        println!(
            "Bot {}: {} wins / {} games",
            seat + 1,
            count,
            config.num_games
        );
    }
    Ok(())
}

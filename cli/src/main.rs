//! dungeon CLI - Command-line interface for the dungeon engine
//!
//! This binary provides a CLI harness for generating dungeons, replaying
//! moves against the map's advice, and timing generation.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Parser, Subcommand};
use dungeon_engine::{DungeonError, DungeonTree, Route, SessionStatus};
use dungeon_tree::{new_session, DungeonConfig, TreeGenerator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dungeon", version, about = "Generate and play branching dungeons")]
struct Cli {
    /// Seed for the dungeon RNG (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// TOML file with generation parameters
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a playable dungeon and print its metrics and best route
    Generate,
    /// Replay a move string such as "LMR" and print the session report
    Play { moves: String },
    /// Time generation of many dungeons
    Bench {
        #[arg(long, default_value_t = 1_000)]
        count: u32,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Dungeon(#[from] DungeonError),

    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v flags.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<DungeonConfig, CliError> {
    let Some(path) = path else {
        return Ok(DungeonConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&text).map_err(|source| CliError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed = seed, "seeded dungeon rng");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    match cli.command {
        Command::Generate => generate(config, &mut rng, seed),
        Command::Play { moves } => play(&config, &mut rng, seed, &moves),
        Command::Bench { count } => bench(config, &mut rng, count),
    }
}

fn generate(config: DungeonConfig, rng: &mut ChaCha8Rng, seed: u64) -> Result<(), CliError> {
    let generated = TreeGenerator::new(config)?.generate_playable(rng)?;
    let tree = &generated.tree;
    let route = dungeon_engine::find_shortest_safe_path(tree, DungeonTree::ROOT);

    println!("Seed: {seed}");
    println!("Attempts: {}", generated.attempts);
    println!("Rooms in discarded candidates: {}", generated.discarded_rooms);
    println!("Nodes: {} (depth {})", tree.len(), tree.max_depth());
    println!("Rooms: {}", generated.metrics.rooms);
    println!("Known hazards: {}", generated.metrics.known_hazards);
    println!("Hidden hazards: {}", generated.metrics.hidden_hazards);
    println!("Best route: {route} ({} steps)", route.len());
    if let Some(warning) = tree.root().and_then(|root| root.warning) {
        println!("{warning}");
    }
    Ok(())
}

fn play(
    config: &DungeonConfig,
    rng: &mut ChaCha8Rng,
    seed: u64,
    moves: &str,
) -> Result<(), CliError> {
    let moves: Route = moves.parse()?;
    let (mut session, metrics) = new_session(config, rng)?;

    println!("Seed: {seed}");
    println!("Map says: {}", session.best_route());
    for (step, &direction) in moves.directions().iter().enumerate() {
        let status = session.move_player(direction)?;
        let advice = if session.best_route().is_empty() {
            "no known route".to_string()
        } else {
            session.best_route().to_string()
        };
        println!(
            "Step {}: {} -> {:?} (map: {advice})",
            step + 1,
            direction.symbol(),
            status
        );
        if let Some(warning) = session.warning() {
            println!("  {warning}");
        }
        if status.is_over() {
            let ignored = moves.len() - step - 1;
            if ignored > 0 {
                println!("Ignoring {ignored} moves after the session ended");
            }
            break;
        }
    }

    let report = session.report(&metrics);
    let outcome = match session.status() {
        SessionStatus::InProgress => "still exploring",
        SessionStatus::Escaped => "escaped",
        SessionStatus::Died { hidden: true } => "died to a hidden hazard",
        SessionStatus::Died { hidden: false } => "died to a known hazard",
    };
    println!();
    println!("Outcome: {outcome}");
    println!("Shortest path length: {}", report.shortest_path_length);
    println!("Steps taken: {}", report.steps_taken);
    println!("Followed the map: {:.1}%", report.follow_percentage * 100.0);
    println!("Rooms: {}", report.rooms);
    println!("Known hazards: {}", report.known_hazards);
    println!("Hidden hazards: {}", report.hidden_hazards);
    Ok(())
}

fn bench(config: DungeonConfig, rng: &mut ChaCha8Rng, count: u32) -> Result<(), CliError> {
    let generator = TreeGenerator::new(config)?;
    println!("Generating {count} dungeons...");

    let start = Instant::now();
    let mut nodes = 0usize;
    let mut attempts = 0u64;
    for _ in 0..count {
        let generated = generator.generate(rng)?;
        nodes += generated.tree.len();
        attempts += u64::from(generated.attempts);
    }
    let duration = start.elapsed();

    let per_sec = f64::from(count) / duration.as_secs_f64();
    println!("Results:");
    println!("  Duration: {} ms", duration.as_millis());
    println!("  Throughput: {per_sec:.2} dungeons/sec");
    if count > 0 {
        println!("  Mean nodes: {:.1}", nodes as f64 / f64::from(count));
        println!("  Mean attempts: {:.3}", attempts as f64 / f64::from(count));
    }
    Ok(())
}

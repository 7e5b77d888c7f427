//! wpg-sim: run worker-placement games headlessly and print JSON reports.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use rust_wpg::cards::{Deck, Talent, Venue};
use rust_wpg::core::{GameConfig, Result};
use rust_wpg::schedule::PlacementPolicy;
use rust_wpg::sim::{run_batch, LoggingObserver, Simulation};

const BUNDLED_VENUES: &str = include_str!("../data/venues.json");
const BUNDLED_TALENT: &str = include_str!("../data/talent.json");

#[derive(Parser, Debug)]
#[command(name = "wpg-sim")]
#[command(about = "Simulate a worker-placement board game")]
struct Args {
    /// Venue cards as a JSON array (bundled deck if not specified)
    #[arg(long)]
    venues: Option<PathBuf>,

    /// Talent cards as a JSON array (bundled deck if not specified)
    #[arg(long)]
    talent: Option<PathBuf>,

    /// Game configuration as JSON; missing fields take defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of games; more than one prints an array of reports
    #[arg(short, long, default_value = "1")]
    runs: usize,

    /// Use the bounded-retry placement search with this many attempts
    #[arg(long)]
    retry_attempts: Option<u32>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(attempts) = args.retry_attempts {
        config = config.with_placement(PlacementPolicy::BoundedRetry { attempts });
    }
    config.validate()?;
    Ok(config)
}

fn load_decks(args: &Args) -> Result<(Deck<Venue>, Deck<Talent>)> {
    let mut venues = Deck::sorted_by(Venue::by_level);
    match &args.venues {
        Some(path) => venues.load_file(path)?,
        None => venues.load(BUNDLED_VENUES)?,
    };

    let mut talent = Deck::new();
    match &args.talent {
        Some(path) => talent.load_file(path)?,
        None => talent.load(BUNDLED_TALENT)?,
    };

    info!("Loaded {} venues and {} talent", venues.count(), talent.count());
    Ok((venues, talent))
}

fn run(args: &Args) -> Result<String> {
    let config = load_config(args)?;
    let (venues, talent) = load_decks(args)?;

    let json = if args.runs == 1 {
        let mut sim = Simulation::new(config, venues, talent)?;
        let report = sim.run(&mut LoggingObserver);
        if args.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        }
    } else {
        let reports = run_batch(&config, &venues, &talent, args.runs)?;
        if args.pretty {
            serde_json::to_string_pretty(&reports)?
        } else {
            serde_json::to_string(&reports)?
        }
    };
    Ok(json)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("wpg-sim: {e}");
            ExitCode::FAILURE
        }
    }
}

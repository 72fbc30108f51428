//! Rock-Paper-Scissors-Lizard-Spock simulator CLI.
//!
//! Plays many rounds of randomly chosen moves and prints how often each move
//! won. With no arguments it runs 10000 two-player rounds.

mod output;
mod types;

use std::io::Write;

use clap::Parser;
use rpssl_logic::{simulate, Report, RuleTable, SeededRng, SimulationConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;
use types::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "rpssl-sim")]
#[command(about = "Simulate Rock-Paper-Scissors-Lizard-Spock rounds and report win rates")]
struct Args {
    /// Players per round
    #[arg(short, long, default_value_t = SimulationConfig::DEFAULT_PLAYERS)]
    players: u32,

    /// Number of rounds to play
    #[arg(short, long, default_value_t = SimulationConfig::DEFAULT_GAMES)]
    games: u32,

    /// Seed for a reproducible run - fills first 8 bytes of the 32-byte seed
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print round and tie counts to stderr
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        SimulationConfig::new(self.players, self.games)
    }

    fn seed_bytes(&self) -> [u8; 32] {
        match self.seed {
            Some(s) => {
                let mut seed = [0u8; 32];
                seed[..8].copy_from_slice(&s.to_le_bytes());
                seed
            }
            None => rand::random(),
        }
    }
}

fn init_logging(verbose: bool) {
    // Quiet by default so stdout carries only the report
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let rules = RuleTable::standard()?;
    let config = args.config();
    let seed = args.seed_bytes();
    info!(
        players = config.players,
        games = config.games,
        seeded = args.seed.is_some(),
        "starting simulation"
    );

    let stats = simulate(&rules, config, SeededRng::new(&seed));
    let report = Report::from_statistics(&stats);

    let rendered = output::render(args.format, config, &stats, &report)?;
    std::io::stdout().lock().write_all(rendered.as_bytes())?;

    if args.summary {
        eprint!("{}", output::summary(&stats, &seed));
    }

    Ok(())
}

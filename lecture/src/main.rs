//! Console front end for the lecture demonstrations.
//!
//! Each subcommand runs one demo and prints to stdout:
//!
//! ```bash
//! cargo run -p lecture -- blog --width 40
//! cargo run -p lecture -- adventure --policy random --seed 7 --rounds 10
//! ```
//!
//! Set `RUST_LOG=lecture_core=debug` to see strategy swaps and turns.

mod demos;

use clap::{Parser, Subcommand};
use lecture_core::adventure::PolicyKind;
use lecture_core::strategy::ContentKind;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use demos::{PredictKind, WrapKind};

#[derive(Debug, Parser)]
#[command(name = "lecture", version, about = "Design-pattern demonstrations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Lay out a sample blog with one or all text-wrapping strategies.
    Blog {
        /// Console width in characters.
        #[arg(long, default_value_t = 40)]
        width: usize,
        /// Strategy to use; every strategy in turn when omitted.
        #[arg(long, value_enum)]
        strategy: Option<WrapKind>,
    },
    /// Predict the next value of a series.
    Predict {
        #[arg(long, value_enum, default_value_t = PredictKind::Mean)]
        strategy: PredictKind,
        /// Observed values.
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Publish content as a summary or in full.
    Publish {
        /// `summary` or `full`.
        kind: ContentKind,
        content: String,
    },
    /// Let a player take turns in an adventure world.
    Adventure {
        #[arg(long, default_value = "Alice")]
        name: String,
        #[arg(long, default_value = "Room 1")]
        start: String,
        /// `first` or `random`.
        #[arg(long, default_value = "random")]
        policy: PolicyKind,
        /// Seed for the random policy.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 10)]
        rounds: usize,
        /// JSON world description; the built-in four-room world when omitted.
        #[arg(long)]
        world: Option<PathBuf>,
    },
    /// Print the prime factors of a number.
    Primes { n: u64 },
    /// Flag cells on a minesweeper board and list the flagged ones.
    Minesweeper {
        #[arg(long, default_value_t = 64)]
        size: usize,
        /// Positions to flag.
        flags: Vec<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");
    match cli.command {
        Command::Blog { width, strategy } => demos::blog(width, strategy),
        Command::Predict { strategy, values } => demos::predict(strategy, &values),
        Command::Publish { kind, content } => demos::publish(kind, &content),
        Command::Adventure {
            name,
            start,
            policy,
            seed,
            rounds,
            world,
        } => {
            let mut config = lecture_core::AdventureConfig::new(name)
                .with_start_location(start)
                .with_policy(policy)
                .with_rounds(rounds);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            demos::adventure(&config, world.as_deref())
        }
        Command::Primes { n } => demos::primes(n),
        Command::Minesweeper { size, flags } => demos::minesweeper(size, &flags),
    }
}

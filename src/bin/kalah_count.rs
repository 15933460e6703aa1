//! Count every Kalah game from a start position.
//!
//! Prints the total number of games, how they end, and how many of them
//! follow perfect play by both sides.
//!
//! Usage: kalah-count [--seeds N] [--tt-bits BITS] [--count-bits BITS]
//!                    [--dist-bits BITS] [--config FILE]

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kalah_solver::core::{Board, SolverConfig, START_SEEDS};
use kalah_solver::enumerate::{percent, Enumerator};

#[derive(Parser, Debug)]
#[command(author, version, about = "Enumerate Kalah(6,n) game trees", long_about = None)]
struct Args {
    /// Seeds per pit in the start position (at most 3)
    #[arg(short, long, default_value_t = START_SEEDS)]
    seeds: u8,

    /// log2 of the transposition table size
    #[arg(long)]
    tt_bits: Option<u32>,

    /// log2 of the game count table size
    #[arg(long)]
    count_bits: Option<u32>,

    /// log2 of the score distribution table size
    #[arg(long)]
    dist_bits: Option<u32>,

    /// JSON file with table sizes; flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => SolverConfig::default(),
        };
        if let Some(bits) = self.tt_bits {
            config = config.with_tt_bits(bits);
        }
        if let Some(bits) = self.count_bits {
            config = config.with_count_bits(bits);
        }
        if let Some(bits) = self.dist_bits {
            config = config.with_dist_bits(bits);
        }
        Ok(config)
    }
}

fn progress(message: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}")?;
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let config = args.solver_config()?;
    let mut enumerator = Enumerator::new(config).context("Invalid table configuration")?;
    let board = Board::try_with_seeds(args.seeds)
        .with_context(|| format!("Unsupported start: {} seeds per pit", args.seeds))?;

    progress("Counting total games...")?;
    let total = enumerator.count_all(&board);
    println!("Total games: {total}\n");

    progress("Computing outcome distribution...")?;
    let distribution = enumerator
        .score_distribution(&board)
        .context("Failed to compute the outcome distribution")?;
    let outcomes = distribution.outcomes();
    let counted = outcomes.total();
    println!(
        "  P1 wins:  {:>14}  ({:5.2}%)",
        outcomes.first_wins,
        percent(outcomes.first_wins, counted)
    );
    println!(
        "  Draws:    {:>14}  ({:5.2}%)",
        outcomes.draws,
        percent(outcomes.draws, counted)
    );
    println!(
        "  P2 wins:  {:>14}  ({:5.2}%)\n",
        outcomes.second_wins,
        percent(outcomes.second_wins, counted)
    );
    if counted != total {
        log::warn!("distribution covers {counted} games, expected {total}");
    }

    progress("Counting perfect-play games...")?;
    let (root, perfect) = enumerator.perfect_play_wins(&board);
    println!("Perfect-play score: {:+}", root.score);
    println!("Perfect-play P1 wins: {perfect}");
    if perfect > 0 {
        println!("  = 1 in every {} games", total / perfect);
    }

    println!("\nScore distribution:");
    for (margin, count) in distribution.iter() {
        println!("  {margin:+3}: {count}");
    }

    Ok(())
}

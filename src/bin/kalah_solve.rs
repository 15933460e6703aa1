//! Solve a Kalah start position.
//!
//! Usage: kalah-solve [--seeds N] [--tt-bits BITS] [--config FILE]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kalah_solver::core::{Board, SolverConfig, START_SEEDS};
use kalah_solver::search::Solver;

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve Kalah(6,n) with empty capture", long_about = None)]
struct Args {
    /// Seeds per pit in the start position (at most 3)
    #[arg(short, long, default_value_t = START_SEEDS)]
    seeds: u8,

    /// log2 of the transposition table size (overrides the config file)
    #[arg(long)]
    tt_bits: Option<u32>,

    /// JSON file with table sizes
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SolverConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => SolverConfig::default(),
    };
    if let Some(bits) = args.tt_bits {
        config = config.with_tt_bits(bits);
    }
    config.validate()?;

    let board = Board::try_with_seeds(args.seeds)
        .with_context(|| format!("Unsupported start: {} seeds per pit", args.seeds))?;
    log::info!("solving Kalah(6,{}) with a 2^{} entry table", args.seeds, config.tt_bits);

    let mut solver = Solver::new(&config);
    let result = solver.search_full(&board);

    let stats = solver.stats();
    log::info!(
        "{} iterations, {:.1}% tt hits, {:.0} nodes/s",
        stats.iterations,
        100.0 * stats.hit_rate(),
        stats.nodes_per_second()
    );

    let best = result.best_move.map_or(-1, |pit| pit as i64);
    println!(
        "move={}  score={:+}  nodes_searched={}",
        best,
        result.score,
        solver.nodes_searched()
    );
    Ok(())
}

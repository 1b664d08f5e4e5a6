//! Parallel batch driver.
//!
//! Runs many independent games of one configuration across the rayon pool
//! and reduces their outcomes to summary statistics. Each run gets its own
//! forked RNG stream, so a batch is as reproducible as a single game.

use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::error::GameError;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::engine::game::{GameEngine, GameOutcome, GameResult};

/// Aggregate statistics over one batch of runs.
///
/// The turn-count moments (`mean`/`stdev`/`min`/`max`) cover only runs that
/// resolved naturally; tie-bounded and failed runs are counted separately so
/// they cannot skew the distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Runs requested.
    pub runs: usize,
    /// Runs that resolved with a winner.
    pub completed: usize,
    /// Runs that hit the max-turn bound (or lost every player).
    pub ties: usize,
    /// Runs aborted with a game error.
    pub failures: usize,
    /// Mean terminal turn count of completed runs.
    pub mean_turns: f64,
    /// Sample standard deviation of completed runs' turn counts.
    pub stdev_turns: f64,
    /// Shortest completed run.
    pub min_turns: u64,
    /// Longest completed run.
    pub max_turns: u64,
    /// Fraction of all runs that ended tied.
    pub tie_fraction: f64,
    /// Wins per player across the batch.
    pub wins: FxHashMap<PlayerId, usize>,
}

/// Play one game to completion with its own engine and seed.
pub fn run_one(config: GameConfig, seed: u64) -> Result<GameOutcome, GameError> {
    GameEngine::new(config, seed).run()
}

/// Run `runs` independent games in parallel and summarize them.
///
/// Seeds are forked from `seed` deterministically, so the same
/// (config, runs, seed) triple reproduces the same summary. A failed run is
/// recorded without losing the batch.
#[must_use]
pub fn run_batch(config: GameConfig, runs: usize, seed: u64) -> BatchSummary {
    config.validate();

    let mut master = GameRng::new(seed);
    let seeds: Vec<u64> = (0..runs).map(|_| master.fork().seed()).collect();

    let results: Vec<Result<GameOutcome, GameError>> = seeds
        .into_par_iter()
        .map(|run_seed| run_one(config, run_seed))
        .collect();

    summarize(runs, &results)
}

fn summarize(runs: usize, results: &[Result<GameOutcome, GameError>]) -> BatchSummary {
    let mut completed_turns: Vec<u64> = Vec::with_capacity(results.len());
    let mut wins: FxHashMap<PlayerId, usize> = FxHashMap::default();
    let mut ties = 0usize;
    let mut failures = 0usize;

    for result in results {
        match result {
            Ok(outcome) => match outcome.result {
                GameResult::Winner(id) => {
                    completed_turns.push(outcome.turns);
                    *wins.entry(id).or_insert(0) += 1;
                }
                GameResult::Tie => ties += 1,
            },
            Err(_) => failures += 1,
        }
    }

    let completed = completed_turns.len();
    let mean = mean(&completed_turns);
    let summary = BatchSummary {
        runs,
        completed,
        ties,
        failures,
        mean_turns: mean,
        stdev_turns: sample_stdev(&completed_turns, mean),
        min_turns: completed_turns.iter().copied().min().unwrap_or(0),
        max_turns: completed_turns.iter().copied().max().unwrap_or(0),
        tie_fraction: if runs == 0 { 0.0 } else { ties as f64 / runs as f64 },
        wins,
    };

    info!(
        "batch of {} runs: {} completed, {} tied, {} failed, mean turns {:.1}",
        summary.runs, summary.completed, summary.ties, summary.failures, summary.mean_turns
    );
    summary
}

fn mean(turns: &[u64]) -> f64 {
    if turns.is_empty() {
        return 0.0;
    }
    turns.iter().map(|&t| t as f64).sum::<f64>() / turns.len() as f64
}

fn sample_stdev(turns: &[u64], mean: f64) -> f64 {
    if turns.len() < 2 {
        return 0.0;
    }
    let variance = turns
        .iter()
        .map(|&t| {
            let delta = t as f64 - mean;
            delta * delta
        })
        .sum::<f64>()
        / (turns.len() - 1) as f64;
    variance.sqrt()
}

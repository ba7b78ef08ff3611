//! Bench command
//!
//! Runs many autoplay sessions over independently shuffled corpora in parallel.

use super::autoplay::run_autoplay;
use crate::puzzle::Puzzle;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Bench parameters
#[derive(Debug, Clone, Copy)]
pub struct BenchConfig {
    /// Number of sessions
    pub count: usize,
    /// Session `i` shuffles its corpus with seed `seed + i`
    pub seed: u64,
    /// Autoplay rounds per session
    pub rounds: usize,
    pub show_progress: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            count: 50,
            seed: 0,
            rounds: 100,
            show_progress: true,
        }
    }
}

/// Aggregate statistics across sessions
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub sessions: usize,
    pub total_placed: usize,
    pub total_failures: usize,
    pub average_placed: f64,
    pub min_placed: usize,
    pub max_placed: usize,
    /// Words placed per session -> number of sessions
    pub distribution: FxHashMap<usize, usize>,
    /// Most common first crossing word and how often it was chosen
    pub top_first_word: Option<(String, usize)>,
    pub duration: Duration,
    pub sessions_per_second: f64,
}

/// Per-session summary
struct SessionStats {
    placed: usize,
    failures: usize,
    first_word: Option<String>,
}

/// Run `config.count` autoplay sessions starting from `base`
#[must_use]
pub fn run_bench(base: &Puzzle, config: &BenchConfig) -> BenchResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        progress_bar(config.count as u64)
    } else {
        ProgressBar::hidden()
    };

    let stats: Vec<SessionStats> = (0..config.count)
        .into_par_iter()
        .map(|i| {
            let mut puzzle = base.clone();
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            puzzle.corpus_mut().shuffle(&mut rng);

            let result = run_autoplay(puzzle, config.rounds);
            pb.inc(1);

            SessionStats {
                placed: result.placed.len(),
                failures: result.failures.len(),
                first_word: result.placed.first().map(|w| w.text().to_string()),
            }
        })
        .collect();

    pb.finish_with_message("done");

    let duration = start.elapsed();
    let result = aggregate(&stats, duration);
    info!(
        sessions = result.sessions,
        average_placed = result.average_placed,
        elapsed_ms = duration.as_millis(),
        "bench finished"
    );
    result
}

fn aggregate(stats: &[SessionStats], duration: Duration) -> BenchResult {
    let sessions = stats.len();
    let total_placed: usize = stats.iter().map(|s| s.placed).sum();
    let total_failures: usize = stats.iter().map(|s| s.failures).sum();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut first_words: FxHashMap<&str, usize> = FxHashMap::default();
    for s in stats {
        *distribution.entry(s.placed).or_insert(0) += 1;
        if let Some(word) = &s.first_word {
            *first_words.entry(word.as_str()).or_insert(0) += 1;
        }
    }

    // Ties broken alphabetically so the report is stable
    let top_first_word = first_words
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(word, count)| (word.to_string(), count));

    BenchResult {
        sessions,
        total_placed,
        total_failures,
        average_placed: if sessions == 0 {
            0.0
        } else {
            total_placed as f64 / sessions as f64
        },
        min_placed: stats.iter().map(|s| s.placed).min().unwrap_or(0),
        max_placed: stats.iter().map(|s| s.placed).max().unwrap_or(0),
        distribution,
        top_first_word,
        duration,
        sessions_per_second: sessions as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PuzzleConfig;

    fn quiet(count: usize, seed: u64) -> BenchConfig {
        BenchConfig {
            count,
            seed,
            rounds: 20,
            show_progress: false,
        }
    }

    fn base() -> Puzzle {
        PuzzleConfig::default_puzzle().unwrap().build().unwrap()
    }

    #[test]
    fn bench_runs() {
        let result = run_bench(&base(), &quiet(8, 1));
        assert_eq!(result.sessions, 8);
        assert!(result.min_placed <= result.max_placed);
        assert!(result.average_placed >= result.min_placed as f64);
        assert!(result.average_placed <= result.max_placed as f64);
    }

    #[test]
    fn distribution_sums_to_sessions() {
        let result = run_bench(&base(), &quiet(6, 7));
        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.sessions);
    }

    #[test]
    fn same_seed_same_totals() {
        let a = run_bench(&base(), &quiet(5, 42));
        let b = run_bench(&base(), &quiet(5, 42));
        assert_eq!(a.total_placed, b.total_placed);
        assert_eq!(a.total_failures, b.total_failures);
        assert_eq!(a.top_first_word, b.top_first_word);
    }

    #[test]
    fn empty_bench() {
        let result = run_bench(&base(), &quiet(0, 0));
        assert_eq!(result.sessions, 0);
        assert_eq!(result.total_placed, 0);
        assert!(result.top_first_word.is_none());
    }
}

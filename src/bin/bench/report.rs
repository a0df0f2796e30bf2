// Benchmark Report Types
// Structured output for balance analysis of the policy game

use policy_engine::{Evaluation, GameStatus, IndicatorSnapshot};
use serde::Serialize;

// ─── Statistics (per-metric Monte Carlo aggregation) ────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }

    pub fn half_width(&self) -> f64 {
        (self.ci_upper - self.ci_lower) / 2.0
    }
}

// ─── Single-Game Result ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    pub strategy: String,
    pub seed: u64,
    pub status: GameStatus,
    pub rounds_played: u32,
    pub final_indicators: IndicatorSnapshot,
    /// Only rounds-exhausted games are scored.
    pub score: Option<f64>,
    pub evaluation: Option<Evaluation>,
    pub recession_rounds: u32,
    pub elapsed_us: u128,
}

// ─── Outcome Counts ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
pub struct OutcomeCounts {
    pub rounds_exhausted: usize,
    pub low_support: usize,
    pub severe_recession: usize,
}

impl OutcomeCounts {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::GameOverRoundsExhausted => self.rounds_exhausted += 1,
            GameStatus::GameOverLowSupport => self.low_support += 1,
            GameStatus::GameOverSevereRecession => self.severe_recession += 1,
            GameStatus::InProgress => {}
        }
    }
}

// ─── Monte Carlo Report (per-strategy aggregation) ──────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    pub strategy_name: String,
    pub label: String,
    pub description: String,
    pub n_runs: usize,
    pub survival_rate: f64,
    pub outcomes: OutcomeCounts,
    pub score: Stats,
    pub rounds_played: Stats,
    pub final_inflation: Stats,
    pub final_unemployment: Stats,
    pub final_gdp_growth: Stats,
    pub final_budget_balance: Stats,
    pub final_popular_support: Stats,
    pub recession_rounds: Stats,
    pub elapsed_us: Stats,
    pub individual_runs: Vec<GameResult>,
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub base_seed: u64,
    pub n_runs_per_strategy: usize,
    pub summary: Summary,
    pub strategies: Vec<StrategyReport>,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total_games: usize,
    pub survived: usize,
    pub survival_rate: f64,
    pub best_strategy: Option<String>,
    pub best_mean_score: f64,
}

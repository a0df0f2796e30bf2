// Monte Carlo Infrastructure: N games per strategy with statistical aggregation
// Each strategy plays N games with seeds base..base+N, computing mean ± 95% CI

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use policy_engine::*;

use crate::report::*;
use crate::strategies::Strategy;
use crate::time_series::TimeSeriesRecorder;

use std::time::Instant;

/// Play one full game with a specific seed.
pub fn run_single(
    strategy: &Strategy,
    config: &EngineConfig,
    seed: u64,
    time_series_dir: Option<&std::path::Path>,
) -> Result<GameResult, EngineError> {
    let start = Instant::now();
    let mut engine = RoundEngine::new(config.clone(), ChaCha8Rng::seed_from_u64(seed))?;
    let mut state = engine.new_game();

    let mut time_series = time_series_dir.map(|_| TimeSeriesRecorder::new());
    let mut recession_rounds = 0;

    while !state.status().is_terminal() {
        let (monetary, fiscal) = (strategy.choose)(&state);
        let report = engine.apply_round(&mut state, monetary, fiscal)?;
        if report.health == EconomicHealth::Recession {
            recession_rounds += 1;
        }
        if let Some(ref mut ts) = time_series {
            ts.record(&report);
        }
    }

    if let (Some(ts), Some(dir)) = (&time_series, time_series_dir) {
        let path = dir.join(format!("seed-{}.jsonl", seed));
        if let Err(e) = ts.write_jsonl(&path) {
            eprintln!("  Warning: failed to write time series: {}", e);
        }
    }

    let summary = engine.summary(&state)?;
    Ok(GameResult {
        strategy: strategy.name.to_string(),
        seed,
        status: summary.status,
        rounds_played: summary.rounds_played,
        final_indicators: summary.indicators,
        score: summary.final_score.map(|s| s.total),
        evaluation: summary.final_score.map(|s| s.evaluation),
        recession_rounds,
        elapsed_us: start.elapsed().as_micros(),
    })
}

/// Run Monte Carlo: N games of a strategy, aggregate stats.
pub fn run_monte_carlo(
    strategy: &Strategy,
    config: &EngineConfig,
    n_runs: usize,
    base_seed: u64,
    time_series_base: Option<&std::path::Path>,
) -> Result<StrategyReport, EngineError> {
    let ts_dir = time_series_base.map(|base| base.join(strategy.name.to_lowercase()));

    let mut results = Vec::with_capacity(n_runs);
    for i in 0..n_runs {
        let seed = base_seed + i as u64;
        results.push(run_single(strategy, config, seed, ts_dir.as_deref())?);
    }

    Ok(aggregate(strategy, results))
}

fn stats_of(results: &[GameResult], metric: impl Fn(&GameResult) -> f64) -> Stats {
    Stats::from_samples(&results.iter().map(metric).collect::<Vec<_>>())
}

/// Aggregate individual games into a StrategyReport.
fn aggregate(strategy: &Strategy, results: Vec<GameResult>) -> StrategyReport {
    let n = results.len();
    let mut outcomes = OutcomeCounts::default();
    for r in &results {
        outcomes.record(r.status);
    }
    let survival_rate = if n > 0 { outcomes.rounds_exhausted as f64 / n as f64 } else { 0.0 };

    // Early terminations carry no score and are left out of the score sample
    let scores: Vec<f64> = results.iter().filter_map(|r| r.score).collect();

    StrategyReport {
        strategy_name: strategy.name.to_string(),
        label: strategy.label.to_string(),
        description: strategy.description.to_string(),
        n_runs: n,
        survival_rate,
        outcomes,
        score: Stats::from_samples(&scores),
        rounds_played: stats_of(&results, |r| r.rounds_played as f64),
        final_inflation: stats_of(&results, |r| r.final_indicators.inflation_rate),
        final_unemployment: stats_of(&results, |r| r.final_indicators.unemployment_rate),
        final_gdp_growth: stats_of(&results, |r| r.final_indicators.gdp_growth),
        final_budget_balance: stats_of(&results, |r| r.final_indicators.budget_balance),
        final_popular_support: stats_of(&results, |r| r.final_indicators.popular_support),
        recession_rounds: stats_of(&results, |r| r.recession_rounds as f64),
        elapsed_us: stats_of(&results, |r| r.elapsed_us as f64),
        individual_runs: results,
    }
}

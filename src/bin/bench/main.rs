// Policy Game Benchmark Runner v1.0.0: Monte Carlo balance testing
// Scripted strategies, seedable PRNG, optional per-round audit trail
//
// Usage:
//   cargo run --release --bin bench                     # Run all strategies (30 games each)
//   cargo run --release --bin bench -- --runs 5         # Quick mode (5 games each)
//   cargo run --release --bin bench -- ADVISOR          # Filter by name
//   cargo run --release --bin bench -- --time-series    # Enable JSONL output
//   cargo run --release --bin bench -- --seed 42        # Custom base seed
//   cargo run --release --bin bench -- --config c.json  # Override engine constants

mod report;
mod strategies;
mod monte_carlo;
mod time_series;

use policy_engine::EngineConfig;
use report::*;
use strategies::*;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    runs: usize,
    seed: u64,
    time_series: bool,
    filter: Option<String>,
    config: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        runs: 30,
        seed: 0,
        time_series: false,
        filter: None,
        config: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                if i < args.len() {
                    cli.runs = args[i].parse().unwrap_or(30);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            "--config" => {
                i += 1;
                if i < args.len() {
                    cli.config = Some(args[i].clone());
                }
            }
            "--time-series" => {
                cli.time_series = true;
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

fn load_config(path: Option<&str>) -> Result<EngineConfig, String> {
    match path {
        None => Ok(EngineConfig::default()),
        Some(p) => {
            let json = std::fs::read_to_string(p).map_err(|e| format!("{}: {}", p, e))?;
            EngineConfig::from_json(&json).map_err(|e| e.to_string())
        }
    }
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("  Error: {}", msg);
    std::process::exit(1);
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    let cli = parse_args();
    let config = load_config(cli.config.as_deref()).unwrap_or_else(|e| fail(e));
    let all_strategies = strategies();

    let to_run: Vec<&Strategy> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_strategies.iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower)
                          || s.label.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all_strategies.iter().collect(),
    };

    if to_run.is_empty() {
        fail(format!("No strategies match filter: {:?}", cli.filter));
    }

    let ts_dir = if cli.time_series {
        Some(std::path::Path::new("benchmark-results/time-series").to_path_buf())
    } else {
        None
    };

    println!("\n  Policy Game Benchmark Runner v1.0.0");
    println!("  PRNG: ChaCha8Rng | Games/strategy: {} | Base seed: {} | Rounds: {}",
        cli.runs, cli.seed, config.max_rounds);
    println!("  Running {} strategy(ies)...\n", to_run.len());
    println!("  {:<24} {:>8} {:>13} {:>7} {:>7} {:>7} {:>8}",
        "Strategy", "Survive%", "Score", "LowSup", "Severe", "Rounds", "Time");
    println!("  {}", "-".repeat(80));

    let suite_start = Instant::now();
    let mut reports = Vec::new();

    for strategy in &to_run {
        let report = monte_carlo::run_monte_carlo(
            strategy,
            &config,
            cli.runs,
            cli.seed,
            ts_dir.as_deref(),
        )
        .unwrap_or_else(|e| fail(e));

        let score = if report.score.n > 0 {
            format!("{:.1}±{:.1}", report.score.mean, report.score.half_width())
        } else {
            "-".to_string()
        };

        println!("  {:<24} {:>7.1}% {:>13} {:>7} {:>7} {:>7.1} {:>6.0}us",
            report.label,
            report.survival_rate * 100.0,
            score,
            report.outcomes.low_support,
            report.outcomes.severe_recession,
            report.rounds_played.mean,
            report.elapsed_us.mean,
        );

        reports.push(report);
    }

    let suite_elapsed = suite_start.elapsed();

    // ─── Summary ────────────────────────────────────────────────────────

    let total_games: usize = reports.iter().map(|r| r.n_runs).sum();
    let survived: usize = reports.iter().map(|r| r.outcomes.rounds_exhausted).sum();
    let best = reports.iter()
        .filter(|r| r.score.n > 0)
        .max_by(|a, b| a.score.mean.total_cmp(&b.score.mean));

    println!("  {}", "-".repeat(80));
    println!("  Games: {}  Survived: {}  Suite time: {:.2}s",
        total_games, survived, suite_elapsed.as_secs_f64());
    if let Some(b) = best {
        println!("  Best strategy: {} (mean score {:.1})\n", b.label, b.score.mean);
    } else {
        println!("  No strategy survived to the final round\n");
    }

    // ─── Write JSON Report ──────────────────────────────────────────────

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let timestamp = format!("{}", ts);

    let summary = Summary {
        total_games,
        survived,
        survival_rate: if total_games > 0 { survived as f64 / total_games as f64 } else { 0.0 },
        best_strategy: best.map(|b| b.strategy_name.clone()),
        best_mean_score: best.map(|b| b.score.mean).unwrap_or(0.0),
    };

    let report = BenchReport {
        timestamp: timestamp.clone(),
        version: "1.0.0",
        prng: "ChaCha8Rng",
        base_seed: cli.seed,
        n_runs_per_strategy: cli.runs,
        summary,
        strategies: reports,
    };

    let dir = std::path::Path::new("benchmark-results");
    if let Err(e) = std::fs::create_dir_all(dir) {
        fail(format!("failed to create benchmark-results/: {}", e));
    }
    let path = dir.join(format!("bench-{}.json", timestamp));
    let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| fail(e));
    if let Err(e) = std::fs::write(&path, &json) {
        fail(format!("failed to write {}: {}", path.display(), e));
    }
    println!("  Results saved to: {}\n", path.display());
}

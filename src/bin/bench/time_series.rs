// Per-Round JSONL Time Series Recorder
// Outputs one JSON line per round for independent analysis

use policy_engine::{EconomicHealth, EventName, FiscalAction, GameStatus, MonetaryAction, RoundReport};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct RoundSnapshot {
    pub round: u32,
    pub monetary: MonetaryAction,
    pub fiscal: FiscalAction,
    pub phillips_shift: f64,
    pub event: EventName,
    pub inflation_rate: f64,
    pub unemployment_rate: f64,
    pub interest_rate: f64,
    pub gdp_growth: f64,
    pub budget_balance: f64,
    pub popular_support: f64,
    pub health: EconomicHealth,
    pub health_score: f64,
    pub status: GameStatus,
}

impl RoundSnapshot {
    pub fn from_report(report: &RoundReport) -> Self {
        let after = &report.after;
        Self {
            round: report.round,
            monetary: report.monetary,
            fiscal: report.fiscal,
            phillips_shift: report.phillips_shift,
            event: report.event.name,
            inflation_rate: after.inflation_rate,
            unemployment_rate: after.unemployment_rate,
            interest_rate: after.interest_rate,
            gdp_growth: after.gdp_growth,
            budget_balance: after.budget_balance,
            popular_support: after.popular_support,
            health: report.health,
            health_score: report.health_score,
            status: report.status,
        }
    }
}

/// Time series recorder that accumulates snapshots and writes JSONL
pub struct TimeSeriesRecorder {
    snapshots: Vec<RoundSnapshot>,
}

impl TimeSeriesRecorder {
    pub fn new() -> Self {
        Self { snapshots: Vec::new() }
    }

    pub fn record(&mut self, report: &RoundReport) {
        self.snapshots.push(RoundSnapshot::from_report(report));
    }

    /// Write all snapshots to a JSONL file
    pub fn write_jsonl(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(path)?;
        for snapshot in &self.snapshots {
            let line = serde_json::to_string(snapshot)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }
}

// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Economic Policy Simulator - Economic State

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::{EngineConfig, TargetBands};
use crate::health;
use crate::policy::{FiscalAction, MonetaryAction};
use crate::types::*;

// ─── PolicyLogEntry ──────────────────────────────────────────────────────────

/// Audit record of one round: the indicators before it and the choices made.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PolicyLogEntry {
    pub before: IndicatorSnapshot,
    pub monetary: MonetaryAction,
    pub fiscal: FiscalAction,
}

// ─── EconomicState ───────────────────────────────────────────────────────────

/// One game session's mutable aggregate.
///
/// Fields are private so health can only change through an indicator
/// mutation, and history/log can only grow.
#[derive(Debug, Clone, Serialize)]
pub struct EconomicState {
    round: u32,
    max_rounds: u32,
    indicators: IndicatorSnapshot,
    health: EconomicHealth,
    health_score: f64,
    status: GameStatus,
    bands: TargetBands,
    history: Vec<HistoryEntry>,
    policy_log: BTreeMap<u32, PolicyLogEntry>,
}

impl EconomicState {
    /// Fresh game at round 1; history opens with the round-0 snapshot.
    /// Public callers go through [`RoundEngine::new_game`](crate::engine::RoundEngine::new_game).
    pub(crate) fn new(config: &EngineConfig) -> Self {
        let mut state = Self {
            round: 1,
            max_rounds: config.max_rounds,
            indicators: config.initial,
            health: EconomicHealth::Stable,
            health_score: 0.0,
            status: GameStatus::InProgress,
            bands: config.bands,
            history: vec![HistoryEntry { round: 0, indicators: config.initial }],
            policy_log: BTreeMap::new(),
        };
        state.refresh_health();
        state
    }

    pub fn round(&self) -> u32 { self.round }
    pub fn max_rounds(&self) -> u32 { self.max_rounds }
    pub fn status(&self) -> GameStatus { self.status }
    pub fn health(&self) -> EconomicHealth { self.health }
    pub fn health_score(&self) -> f64 { self.health_score }
    pub fn bands(&self) -> &TargetBands { &self.bands }

    pub fn snapshot(&self) -> IndicatorSnapshot { self.indicators }

    pub fn inflation_rate(&self) -> f64 { self.indicators.inflation_rate }
    pub fn unemployment_rate(&self) -> f64 { self.indicators.unemployment_rate }
    pub fn interest_rate(&self) -> f64 { self.indicators.interest_rate }
    pub fn gdp_growth(&self) -> f64 { self.indicators.gdp_growth }
    pub fn budget_balance(&self) -> f64 { self.indicators.budget_balance }
    pub fn popular_support(&self) -> f64 { self.indicators.popular_support }

    /// Full chronological history.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Up to `window` most recent entries, oldest first.
    pub fn history_window(&self, window: usize) -> &[HistoryEntry] {
        let start = self.history.len().saturating_sub(window);
        &self.history[start..]
    }

    pub fn policy_log(&self) -> &BTreeMap<u32, PolicyLogEntry> {
        &self.policy_log
    }

    /// Rounds left to play including the current one.
    pub fn rounds_remaining(&self) -> u32 {
        if self.status.is_terminal() {
            0
        } else {
            (self.max_rounds + 1).saturating_sub(self.round)
        }
    }

    // ─── Engine-only mutation ────────────────────────────────────────────────

    /// Log the pre-round snapshot and choices for the current round.
    pub(crate) fn record_round_start(&mut self, monetary: MonetaryAction, fiscal: FiscalAction) {
        self.history.push(HistoryEntry { round: self.round, indicators: self.indicators });
        self.policy_log.entry(self.round).or_insert(PolicyLogEntry {
            before: self.indicators,
            monetary,
            fiscal,
        });
    }

    pub(crate) fn apply_deltas(&mut self, deltas: &DeltaBundle) {
        self.indicators.apply(deltas);
        self.refresh_health();
    }

    pub(crate) fn shift(&mut self, indicator: Indicator, amount: f64) {
        self.indicators.shift(indicator, amount);
        self.refresh_health();
    }

    pub(crate) fn advance_round(&mut self, status: GameStatus) {
        self.round += 1;
        self.status = status;
    }

    fn refresh_health(&mut self) {
        self.health_score = health::health_score(&self.indicators, &self.bands);
        self.health = health::classify_score(self.health_score);
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> EconomicState {
        EconomicState::new(&EngineConfig::default())
    }

    #[test]
    fn opening_state() {
        let s = fresh();
        assert_eq!(s.round(), 1);
        assert_eq!(s.max_rounds(), 10);
        assert_eq!(s.status(), GameStatus::InProgress);
        assert_eq!(s.snapshot(), IndicatorSnapshot::default());
        assert_eq!(s.health(), EconomicHealth::Healthy);
        assert_eq!(s.health_score(), 3.0);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history()[0].round, 0);
        assert!(s.policy_log().is_empty());
        assert_eq!(s.rounds_remaining(), 10);
    }

    #[test]
    fn mutation_refreshes_health() {
        let mut s = fresh();
        s.shift(Indicator::InflationRate, 3.0);
        // inflation 5.0 is above band: 3.0 - 1 - 1
        assert_eq!(s.health_score(), 1.0);
        assert_eq!(s.health(), EconomicHealth::Recession);

        s.apply_deltas(&DeltaBundle(&[(Indicator::InflationRate, -3.0)]));
        assert_eq!(s.health(), EconomicHealth::Healthy);
    }

    #[test]
    fn round_start_records_history_and_log() {
        let mut s = fresh();
        s.record_round_start(MonetaryAction::RaiseRates, FiscalAction::NoChange);
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history()[1].round, 1);

        let entry = s.policy_log().get(&1).expect("test: round 1 logged");
        assert_eq!(entry.before, IndicatorSnapshot::default());
        assert_eq!(entry.monetary, MonetaryAction::RaiseRates);
        assert_eq!(entry.fiscal, FiscalAction::NoChange);
    }

    #[test]
    fn policy_log_is_never_overwritten() {
        let mut s = fresh();
        s.record_round_start(MonetaryAction::RaiseRates, FiscalAction::NoChange);
        s.record_round_start(MonetaryAction::LowerRates, FiscalAction::CutTaxes);
        assert_eq!(s.policy_log().len(), 1);
        assert_eq!(s.policy_log()[&1].monetary, MonetaryAction::RaiseRates);
    }

    #[test]
    fn history_window_is_most_recent_chronological() {
        let mut s = fresh();
        for _ in 0..7 {
            s.record_round_start(MonetaryAction::NoChange, FiscalAction::NoChange);
            s.advance_round(GameStatus::InProgress);
        }
        assert_eq!(s.history().len(), 8);

        let window = s.history_window(5);
        let rounds: Vec<u32> = window.iter().map(|h| h.round).collect();
        assert_eq!(rounds, vec![3, 4, 5, 6, 7]);

        assert_eq!(s.history_window(50).len(), 8);
        assert!(s.history_window(0).is_empty());
    }

    #[test]
    fn rounds_remaining_drops_to_zero_on_terminal() {
        let mut s = fresh();
        s.advance_round(GameStatus::GameOverLowSupport);
        assert_eq!(s.rounds_remaining(), 0);
    }
}

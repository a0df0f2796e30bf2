// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Economic Policy Simulator - Round Engine

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::events::{EventDefinition, RandomEventGenerator};
use crate::policy::{effects_for, principles_for, FiscalAction, MonetaryAction};
use crate::scoring::{self, FinalScore};
use crate::state::EconomicState;
use crate::types::*;

// ─── RoundReport ─────────────────────────────────────────────────────────────

/// Everything the presentation layer needs to render one round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    /// The round that was just played.
    pub round: u32,
    pub monetary: MonetaryAction,
    pub fiscal: FiscalAction,
    pub monetary_narrative: &'static str,
    pub fiscal_narrative: &'static str,
    /// Rationale for the instrument families used, monetary first.
    pub principles: Vec<&'static str>,
    /// Uniform draw added to inflation (unemployment moved by `-draw * ratio`).
    pub phillips_shift: f64,
    pub event: EventDefinition,
    pub before: IndicatorSnapshot,
    pub after: IndicatorSnapshot,
    pub health: EconomicHealth,
    pub health_label: &'static str,
    pub health_score: f64,
    pub status: GameStatus,
    pub game_over: bool,
    pub termination_reason: Option<&'static str>,
    /// Present only when the game ended by exhausting its rounds.
    pub final_score: Option<FinalScore>,
}

// ─── GameSummary ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub rounds_played: u32,
    pub indicators: IndicatorSnapshot,
    pub health: EconomicHealth,
    pub health_label: &'static str,
    pub status: GameStatus,
    pub reason: Option<&'static str>,
    pub final_score: Option<FinalScore>,
}

// ─── RoundEngine ─────────────────────────────────────────────────────────────

/// Applies rounds to an [`EconomicState`].
///
/// The engine owns the configuration and the random source; the state is
/// passed in by reference so callers can hold several sessions against one
/// engine or inspect state between rounds.
pub struct RoundEngine<R: Rng> {
    config: EngineConfig,
    events: RandomEventGenerator,
    rng: R,
}

impl<R: Rng> RoundEngine<R> {
    /// Validate `config` and build the engine around an injected random source.
    pub fn new(config: EngineConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        let events = RandomEventGenerator::new(config.event_inflation_threshold)?;
        Ok(Self { config, events, rng })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn events(&self) -> &RandomEventGenerator {
        &self.events
    }

    /// A fresh session configured by this engine.
    pub fn new_game(&self) -> EconomicState {
        EconomicState::new(&self.config)
    }

    /// Play one round. Rejected without mutation when the game is over or
    /// when `state` was started by an engine with a different configuration.
    pub fn apply_round(
        &mut self,
        state: &mut EconomicState,
        monetary: MonetaryAction,
        fiscal: FiscalAction,
    ) -> Result<RoundReport, EngineError> {
        self.check_owns(state)?;
        let status = state.status();
        if status.is_terminal() {
            warn!(?status, round = state.round(), "round rejected: game is over");
            return Err(EngineError::InvalidStateTransition { status });
        }

        let round = state.round();
        let before = state.snapshot();
        // Event weights follow the health the round opened with
        let opening_health = state.health();
        state.record_round_start(monetary, fiscal);

        let monetary_effect = effects_for(monetary);
        let fiscal_effect = effects_for(fiscal);
        state.apply_deltas(&monetary_effect.deltas);
        state.apply_deltas(&fiscal_effect.deltas);

        let phillips_shift = self.phillips_draw();
        state.shift(Indicator::InflationRate, phillips_shift);
        state.shift(
            Indicator::UnemploymentRate,
            -phillips_shift * self.config.phillips_unemployment_ratio,
        );

        let event = *self.events.next_event(&mut self.rng, opening_health, state.inflation_rate());
        state.apply_deltas(&event.deltas);

        let next_status = self.evaluate_termination(state, round + 1);
        state.advance_round(next_status);

        debug!(
            round,
            %monetary,
            %fiscal,
            phillips_shift,
            event = ?event.name,
            health = ?state.health(),
            "round applied"
        );

        let final_score = match next_status {
            GameStatus::GameOverRoundsExhausted => Some(scoring::final_score(&state.snapshot())),
            _ => None,
        };
        if let Some(reason) = next_status.reason() {
            info!(
                round,
                status = ?next_status,
                score = final_score.map(|s| s.total),
                reason,
                "game over"
            );
        }

        Ok(RoundReport {
            round,
            monetary,
            fiscal,
            monetary_narrative: monetary_effect.narrative,
            fiscal_narrative: fiscal_effect.narrative,
            principles: principles_for(monetary, fiscal),
            phillips_shift,
            event,
            before,
            after: state.snapshot(),
            health: state.health(),
            health_label: state.health().label(),
            health_score: state.health_score(),
            status: next_status,
            game_over: next_status.is_terminal(),
            termination_reason: next_status.reason(),
            final_score,
        })
    }

    /// Terminal checks in priority order, given the round counter after increment.
    pub fn evaluate_termination(&self, state: &EconomicState, next_round: u32) -> GameStatus {
        let c = &self.config;
        if next_round > c.max_rounds {
            GameStatus::GameOverRoundsExhausted
        } else if state.popular_support() <= c.support_floor {
            GameStatus::GameOverLowSupport
        } else if state.inflation_rate() > c.severe_inflation_limit
            || state.unemployment_rate() > c.severe_unemployment_limit
        {
            GameStatus::GameOverSevereRecession
        } else {
            GameStatus::InProgress
        }
    }

    /// End-of-game report. Only rounds-exhausted games carry a score.
    pub fn summary(&self, state: &EconomicState) -> Result<GameSummary, EngineError> {
        let status = state.status();
        if !status.is_terminal() {
            return Err(EngineError::InvalidStateTransition { status });
        }
        let final_score = match status {
            GameStatus::GameOverRoundsExhausted => Some(scoring::final_score(&state.snapshot())),
            _ => None,
        };
        Ok(GameSummary {
            rounds_played: state.round() - 1,
            indicators: state.snapshot(),
            health: state.health(),
            health_label: state.health().label(),
            status,
            reason: status.reason(),
            final_score,
        })
    }

    fn check_owns(&self, state: &EconomicState) -> Result<(), EngineError> {
        if state.max_rounds() != self.config.max_rounds || state.bands() != &self.config.bands {
            warn!(
                state_rounds = state.max_rounds(),
                engine_rounds = self.config.max_rounds,
                "round rejected: state belongs to another configuration"
            );
            return Err(EngineError::Configuration(
                "game state was started under a different engine configuration".into(),
            ));
        }
        Ok(())
    }

    fn phillips_draw(&mut self) -> f64 {
        let amplitude = self.config.phillips_amplitude;
        if amplitude > 0.0 {
            self.rng.gen_range(-amplitude..=amplitude)
        } else {
            0.0
        }
    }
}

/// Up to `window` most recent history entries, oldest first.
pub fn history_window(state: &EconomicState, window: usize) -> &[HistoryEntry] {
    state.history_window(window)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventRegime;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn engine(seed: u64) -> RoundEngine<ChaCha8Rng> {
        RoundEngine::new(EngineConfig::default(), ChaCha8Rng::seed_from_u64(seed))
            .expect("test: default config is valid")
    }

    fn quiet_engine(seed: u64) -> RoundEngine<ChaCha8Rng> {
        let config = EngineConfig { phillips_amplitude: 0.0, ..EngineConfig::default() };
        RoundEngine::new(config, ChaCha8Rng::seed_from_u64(seed))
            .expect("test: quiet config is valid")
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn malformed_config_fails_construction() {
        let config = EngineConfig { max_rounds: 0, ..EngineConfig::default() };
        let result = RoundEngine::new(config, ChaCha8Rng::seed_from_u64(0));
        assert!(matches!(result, Err(EngineError::Configuration(_))));
    }

    #[test]
    fn raise_rates_from_opening_position() {
        let mut engine = quiet_engine(3);
        let mut state = engine.new_game();
        let report = engine
            .apply_round(&mut state, MonetaryAction::RaiseRates, FiscalAction::NoChange)
            .expect("test: round 1 is playable");

        assert_eq!(report.phillips_shift, 0.0);
        // Strip the event to recover the policy-only outcome
        let e = report.event.deltas;
        let a = report.after;
        assert!(approx(a.interest_rate - e.get(Indicator::InterestRate), 4.5));
        assert!(approx(a.inflation_rate - e.get(Indicator::InflationRate), 1.3));
        assert!(approx(a.unemployment_rate - e.get(Indicator::UnemploymentRate), 5.4));
        assert!(approx(a.gdp_growth - e.get(Indicator::GdpGrowth), 2.2));
        assert!(approx(a.popular_support - e.get(Indicator::PopularSupport), 48.0));
        assert!(approx(a.budget_balance - e.get(Indicator::BudgetBalance), 0.0));
    }

    #[test]
    fn phillips_draw_moves_inflation_and_unemployment_inversely() {
        let mut engine = engine(11);
        let mut state = engine.new_game();
        let report = engine
            .apply_round(&mut state, MonetaryAction::NoChange, FiscalAction::NoChange)
            .expect("test: round 1 is playable");

        let phi = report.phillips_shift;
        assert!((-0.3..=0.3).contains(&phi), "draw {phi} outside amplitude");
        let e = report.event.deltas;
        assert!(approx(report.after.inflation_rate, 2.0 + phi + e.get(Indicator::InflationRate)));
        assert!(approx(
            report.after.unemployment_rate,
            5.0 - phi * 0.5 + e.get(Indicator::UnemploymentRate)
        ));
    }

    #[test]
    fn report_carries_narratives_and_principles() {
        let mut engine = engine(5);
        let mut state = engine.new_game();
        let report = engine
            .apply_round(&mut state, MonetaryAction::LowerRates, FiscalAction::RaiseTaxes)
            .expect("test: round 1 is playable");
        assert_eq!(report.round, 1);
        assert_eq!(report.monetary_narrative, effects_for(MonetaryAction::LowerRates).narrative);
        assert_eq!(report.fiscal_narrative, effects_for(FiscalAction::RaiseTaxes).narrative);
        assert_eq!(report.principles.len(), 2);
        assert_eq!(report.before, IndicatorSnapshot::default());
        assert_eq!(report.health, state.health());
        assert!(!report.game_over);
        assert!(report.termination_reason.is_none());
        assert!(report.final_score.is_none());
    }

    #[test]
    fn history_and_log_track_round() {
        let mut engine = engine(8);
        let mut state = engine.new_game();
        for expected_round in 1..=5u32 {
            assert_eq!(state.history().len() as u32, state.round());
            let before = state.snapshot();
            engine
                .apply_round(&mut state, MonetaryAction::NoChange, FiscalAction::DecreaseSpending)
                .expect("test: early rounds are playable");
            let logged = state.policy_log()[&expected_round];
            assert_eq!(logged.before, before);
            assert_eq!(logged.fiscal, FiscalAction::DecreaseSpending);
            assert_eq!(state.history()[expected_round as usize].indicators, before);
        }
        assert_eq!(state.history().len() as u32, state.round());
        assert_eq!(state.policy_log().len(), 5);
    }

    #[test]
    fn rounds_exhausted_after_max_rounds() {
        let mut engine = engine(21);
        let mut state = engine.new_game();
        let mut last = None;
        for _ in 0..10 {
            last = Some(
                engine
                    .apply_round(&mut state, MonetaryAction::NoChange, FiscalAction::NoChange)
                    .expect("test: hold policy survives ten rounds"),
            );
        }
        let last = last.expect("test: ten rounds played");
        assert_eq!(last.status, GameStatus::GameOverRoundsExhausted);
        assert!(last.game_over);
        assert!(last.final_score.is_some());
        assert_eq!(state.round(), 11);

        let err = engine
            .apply_round(&mut state, MonetaryAction::NoChange, FiscalAction::NoChange)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidStateTransition { .. }));
        assert_eq!(state.round(), 11);
        assert_eq!(state.history().len(), 11);
    }

    #[test]
    fn collapsing_support_ends_game_early() {
        let config = EngineConfig {
            initial: IndicatorSnapshot { popular_support: 4.0, ..Default::default() },
            ..EngineConfig::default()
        };
        let mut engine = RoundEngine::new(config, ChaCha8Rng::seed_from_u64(2))
            .expect("test: config is valid");
        let mut state = engine.new_game();
        // Both levers cost support: -3 and -4 put support at or below -3
        let report = engine
            .apply_round(&mut state, MonetaryAction::ContractMoneySupply, FiscalAction::RaiseTaxes)
            .expect("test: round 1 is playable");
        assert_eq!(report.status, GameStatus::GameOverLowSupport);
        assert!(report.final_score.is_none());

        let snapshot = state.snapshot();
        let err = engine
            .apply_round(&mut state, MonetaryAction::LowerRates, FiscalAction::CutTaxes)
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidStateTransition { status: GameStatus::GameOverLowSupport });
        assert_eq!(state.snapshot(), snapshot);
    }

    #[test]
    fn runaway_inflation_is_severe_recession() {
        let config = EngineConfig {
            initial: IndicatorSnapshot { inflation_rate: 16.0, popular_support: 80.0, ..Default::default() },
            phillips_amplitude: 0.0,
            ..EngineConfig::default()
        };
        let mut engine = RoundEngine::new(config, ChaCha8Rng::seed_from_u64(4))
            .expect("test: config is valid");
        let mut state = engine.new_game();
        let report = engine
            .apply_round(&mut state, MonetaryAction::ExpandMoneySupply, FiscalAction::NoChange)
            .expect("test: round 1 is playable");
        assert_eq!(report.status, GameStatus::GameOverSevereRecession);
    }

    #[test]
    fn termination_priority() {
        let engine = engine(0);
        let mut state = engine.new_game();
        // Support wiped out and inflation runaway: low support wins
        state.shift(Indicator::PopularSupport, -60.0);
        state.shift(Indicator::InflationRate, 20.0);
        assert_eq!(engine.evaluate_termination(&state, 5), GameStatus::GameOverLowSupport);
        // Past the final round, exhaustion wins over everything
        assert_eq!(engine.evaluate_termination(&state, 11), GameStatus::GameOverRoundsExhausted);

        let mut state = engine.new_game();
        state.shift(Indicator::UnemploymentRate, 10.5);
        assert_eq!(engine.evaluate_termination(&state, 2), GameStatus::GameOverSevereRecession);

        let state = engine.new_game();
        assert_eq!(engine.evaluate_termination(&state, 2), GameStatus::InProgress);
        assert_eq!(engine.evaluate_termination(&state, 10), GameStatus::InProgress);
    }

    #[test]
    fn same_seed_same_game() {
        let play = |seed| {
            let mut engine = engine(seed);
            let mut state = engine.new_game();
            let mut reports = Vec::new();
            for (m, f) in [
                (MonetaryAction::QuantitativeEasing, FiscalAction::StructuralTaxCut),
                (MonetaryAction::RaiseRates, FiscalAction::RaiseTaxes),
                (MonetaryAction::NoChange, FiscalAction::IncreaseSpending),
            ] {
                let r = engine.apply_round(&mut state, m, f).expect("test: round playable");
                reports.push((r.event.name, r.phillips_shift, r.after));
            }
            (reports, state.snapshot())
        };
        assert_eq!(play(77), play(77));
    }

    #[test]
    fn summary_requires_terminal_state() {
        let engine = engine(1);
        let state = engine.new_game();
        let err = engine.summary(&state).unwrap_err();
        assert_eq!(err, EngineError::InvalidStateTransition { status: GameStatus::InProgress });
    }

    #[test]
    fn summary_scores_only_exhausted_games() {
        let mut engine = engine(12);
        let mut state = engine.new_game();
        while !state.status().is_terminal() {
            engine
                .apply_round(&mut state, MonetaryAction::NoChange, FiscalAction::NoChange)
                .expect("test: game still running");
        }
        let summary = engine.summary(&state).expect("test: game over");
        assert_eq!(summary.status, state.status());
        if summary.status == GameStatus::GameOverRoundsExhausted {
            let score = summary.final_score.expect("test: exhausted games are scored");
            assert_eq!(score, scoring::final_score(&state.snapshot()));
            assert_eq!(summary.rounds_played, 10);
        } else {
            assert!(summary.final_score.is_none());
        }
    }

    #[test]
    fn event_weights_follow_opening_health() {
        // Contraction plus tax rises tips a healthy opening into recession
        let config = EngineConfig { phillips_amplitude: 0.0, ..EngineConfig::default() };
        let mut after_policy = config.initial;
        after_policy.apply(&effects_for(MonetaryAction::ContractMoneySupply).deltas);
        after_policy.apply(&effects_for(FiscalAction::RaiseTaxes).deltas);
        let late_health = crate::health::classify(&after_policy, &config.bands);
        assert_eq!(late_health, EconomicHealth::Recession);

        for seed in 0..40u64 {
            let mut engine = RoundEngine::new(config.clone(), ChaCha8Rng::seed_from_u64(seed))
                .expect("test: config is valid");
            let mut state = engine.new_game();
            assert_eq!(state.health(), EconomicHealth::Healthy);
            let inflation = after_policy.inflation_rate;
            assert_eq!(engine.events().regime(EconomicHealth::Healthy, inflation), EventRegime::Baseline);
            assert_eq!(engine.events().regime(late_health, inflation), EventRegime::Recession);

            let report = engine
                .apply_round(&mut state, MonetaryAction::ContractMoneySupply, FiscalAction::RaiseTaxes)
                .expect("test: round 1 is playable");

            // No Phillips draw, so the event is the first value off the stream
            let mut twin = ChaCha8Rng::seed_from_u64(seed);
            let expected = engine.events().next_event(&mut twin, EconomicHealth::Healthy, inflation);
            assert_eq!(report.event.name, expected.name, "seed {seed}");
        }
    }

    #[test]
    fn state_from_another_config_is_rejected() {
        let short = RoundEngine::new(
            EngineConfig { max_rounds: 3, ..EngineConfig::default() },
            ChaCha8Rng::seed_from_u64(1),
        )
        .expect("test: config is valid");
        let mut state = short.new_game();

        let mut engine = engine(1);
        let err = engine
            .apply_round(&mut state, MonetaryAction::NoChange, FiscalAction::NoChange)
            .unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
        assert_eq!(state.round(), 1);
        assert_eq!(state.history().len(), 1);
        assert!(state.policy_log().is_empty());

        let mut state = engine.new_game();
        let mut bands = *state.bands();
        bands.inflation = crate::config::TargetBand::new(0.0, 10.0);
        let config = EngineConfig { bands, ..EngineConfig::default() };
        let mut wide = RoundEngine::new(config, ChaCha8Rng::seed_from_u64(1))
            .expect("test: config is valid");
        assert!(wide
            .apply_round(&mut state, MonetaryAction::NoChange, FiscalAction::NoChange)
            .is_err());
    }

    #[test]
    fn report_labels_health() {
        let mut engine = engine(4);
        let mut state = engine.new_game();
        let report = engine
            .apply_round(&mut state, MonetaryAction::NoChange, FiscalAction::NoChange)
            .expect("test: round 1 is playable");
        assert_eq!(report.health_label, report.health.label());
        let json = serde_json::to_value(&report).expect("test: report serializes");
        assert!(["healthy", "stable", "recession"].contains(&json["health_label"].as_str().unwrap_or("")));
    }
}

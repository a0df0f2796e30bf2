// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Economic Policy Simulator

pub mod types;
pub mod error;
pub mod config;
pub mod health;
pub mod policy;
pub mod events;
pub mod state;
pub mod scoring;
pub mod advisor;
pub mod engine;

pub use types::*;
pub use error::{EngineError, ErrorKind, ErrorPayload};
pub use config::{EngineConfig, TargetBand, TargetBands};
pub use policy::{effects_for, FiscalAction, InstrumentFamily, MonetaryAction, PolicyEffect};
pub use events::{EventDefinition, EventName, RandomEventGenerator};
pub use state::{EconomicState, PolicyLogEntry};
pub use scoring::{final_score, Evaluation, FinalScore};
pub use advisor::{advice_for, advice_items, Advice, AdvisorRole};
pub use engine::{GameSummary, RoundEngine, RoundReport};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ─── WASM Interface ──────────────────────────────────────────────────────────

/// One game session exposed to the browser UI.
#[wasm_bindgen]
pub struct PolicyGame {
    engine: RoundEngine<ChaCha8Rng>,
    state: EconomicState,
    seed: u64,
}

#[derive(Serialize)]
struct ActionOption {
    key: &'static str,
    family: Option<InstrumentFamily>,
    narrative: &'static str,
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn error_to_js(err: EngineError) -> JsValue {
    to_js(&err.payload())
}

impl PolicyGame {
    fn build(config: EngineConfig, seed: u64) -> Result<Self, EngineError> {
        let engine = RoundEngine::new(config, ChaCha8Rng::seed_from_u64(seed))?;
        let state = engine.new_game();
        Ok(Self { engine, state, seed })
    }

    pub fn engine(&self) -> &RoundEngine<ChaCha8Rng> {
        &self.engine
    }

    pub fn state(&self) -> &EconomicState {
        &self.state
    }

    /// Parse both keys before touching the session.
    pub fn play(&mut self, monetary: &str, fiscal: &str) -> Result<RoundReport, EngineError> {
        let monetary: MonetaryAction = monetary.parse()?;
        let fiscal: FiscalAction = fiscal.parse()?;
        self.engine.apply_round(&mut self.state, monetary, fiscal)
    }
}

#[wasm_bindgen]
impl PolicyGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<PolicyGame, JsValue> {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        Self::build(EngineConfig::default(), seed).map_err(error_to_js)
    }

    /// Start a session from a JSON config; omitted fields keep their defaults.
    pub fn with_config(json: &str, seed: u64) -> Result<PolicyGame, JsValue> {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        EngineConfig::from_json(json)
            .and_then(|config| Self::build(config, seed))
            .map_err(error_to_js)
    }

    pub fn play_round(&mut self, monetary: &str, fiscal: &str) -> Result<JsValue, JsValue> {
        self.play(monetary, fiscal).map(|r| to_js(&r)).map_err(error_to_js)
    }

    pub fn get_state(&self) -> JsValue {
        to_js(&self.state)
    }

    pub fn get_advice(&self) -> JsValue {
        to_js(&advice_items(&self.state.snapshot(), self.state.bands()))
    }

    pub fn get_history(&self, window: usize) -> JsValue {
        to_js(engine::history_window(&self.state, window))
    }

    pub fn get_summary(&self) -> Result<JsValue, JsValue> {
        self.engine.summary(&self.state).map(|s| to_js(&s)).map_err(error_to_js)
    }

    pub fn monetary_options(&self) -> JsValue {
        let options: Vec<ActionOption> = MonetaryAction::ALL
            .iter()
            .map(|a| ActionOption { key: a.key(), family: a.family(), narrative: effects_for(*a).narrative })
            .collect();
        to_js(&options)
    }

    pub fn fiscal_options(&self) -> JsValue {
        let options: Vec<ActionOption> = FiscalAction::ALL
            .iter()
            .map(|a| ActionOption { key: a.key(), family: a.family(), narrative: effects_for(*a).narrative })
            .collect();
        to_js(&options)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart with the same config and seed.
    pub fn reset(&mut self) -> Result<(), JsValue> {
        let config = self.engine.config().clone();
        *self = Self::build(config, self.seed).map_err(error_to_js)?;
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn game(seed: u64) -> PolicyGame {
        PolicyGame::build(EngineConfig::default(), seed).expect("test: default config is valid")
    }

    #[test]
    fn unknown_action_rejected_without_mutation() {
        let mut g = game(1);
        let err = g.play("raise_rates", "print_money").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPolicyChoice);
        assert_eq!(g.state().round(), 1);
        assert_eq!(g.state().history().len(), 1);
        assert!(g.state().policy_log().is_empty());
    }

    #[test]
    fn keys_drive_rounds() {
        let mut g = game(2);
        let report = g.play("quantitative_easing", "structural_tax_cut").expect("test: valid keys");
        assert_eq!(report.monetary, MonetaryAction::QuantitativeEasing);
        assert_eq!(report.fiscal, FiscalAction::StructuralTaxCut);
        assert_eq!(g.state().round(), 2);
    }

    #[test]
    fn reset_replays_same_seed() {
        let mut g = game(42);
        let first = g.play("lower_rates", "cut_taxes").expect("test: valid keys").after;
        g.play("no_change", "no_change").expect("test: valid keys");

        let config = g.engine().config().clone();
        let seed = g.seed;
        g = PolicyGame::build(config, seed).expect("test: rebuild");
        assert_eq!(g.state().round(), 1);
        let again = g.play("lower_rates", "cut_taxes").expect("test: valid keys").after;
        assert_eq!(first, again);
    }
}

// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Economic Policy Simulator - Engine Configuration
//
// Every tunable constant of the model lives here. Defaults reproduce the
// reference game; a JSON document may override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::IndicatorSnapshot;

// ---------------------------------------------------------------------------
// TargetBand
// ---------------------------------------------------------------------------

/// Closed acceptable range `[lower, upper]` for one indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetBand {
    pub lower: f64,
    pub upper: f64,
}

impl TargetBand {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn is_below(&self, value: f64) -> bool {
        value < self.lower
    }

    pub fn is_above(&self, value: f64) -> bool {
        value > self.upper
    }

    fn validate(&self, name: &str) -> Result<(), EngineError> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(EngineError::Configuration(format!(
                "{name} band bounds must be finite"
            )));
        }
        if self.lower > self.upper {
            return Err(EngineError::Configuration(format!(
                "{name} band lower bound {} exceeds upper bound {}",
                self.lower, self.upper
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TargetBands
// ---------------------------------------------------------------------------

/// Target ranges shared by health scoring and advisor advice.
///
/// Interest rate has no target: it is an instrument, not an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetBands {
    pub inflation: TargetBand,
    pub unemployment: TargetBand,
    pub gdp_growth: TargetBand,
    pub budget_balance: TargetBand,
    pub popular_support: TargetBand,
}

impl Default for TargetBands {
    fn default() -> Self {
        Self {
            inflation: TargetBand::new(1.0, 3.0),
            unemployment: TargetBand::new(3.0, 6.0),
            gdp_growth: TargetBand::new(2.0, 4.0),
            budget_balance: TargetBand::new(-20.0, 20.0),
            popular_support: TargetBand::new(60.0, 100.0),
        }
    }
}

impl TargetBands {
    pub fn validate(&self) -> Result<(), EngineError> {
        self.inflation.validate("inflation")?;
        self.unemployment.validate("unemployment")?;
        self.gdp_growth.validate("gdp_growth")?;
        self.budget_balance.validate("budget_balance")?;
        self.popular_support.validate("popular_support")?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rounds in a full game.
    pub max_rounds: u32,
    /// Opening indicator values.
    pub initial: IndicatorSnapshot,
    pub bands: TargetBands,
    /// Half-width of the uniform Phillips draw.
    pub phillips_amplitude: f64,
    /// Unemployment moves by `-draw * ratio`.
    pub phillips_unemployment_ratio: f64,
    /// Support at or below this ends the game.
    pub support_floor: f64,
    pub severe_inflation_limit: f64,
    pub severe_unemployment_limit: f64,
    /// Inflation above this (outside recession) tilts the event weights.
    pub event_inflation_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_rounds: 10,
            initial: IndicatorSnapshot::default(),
            bands: TargetBands::default(),
            phillips_amplitude: 0.3,
            phillips_unemployment_ratio: 0.5,
            support_floor: 0.0,
            severe_inflation_limit: 15.0,
            severe_unemployment_limit: 15.0,
            event_inflation_threshold: 5.0,
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON override document and validate it.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::Configuration(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_rounds == 0 {
            return Err(EngineError::Configuration(
                "max_rounds must be at least 1".into(),
            ));
        }
        if !self.initial.is_finite() {
            return Err(EngineError::Configuration(
                "initial indicators must be finite".into(),
            ));
        }
        self.bands.validate()?;

        let scalars = [
            ("phillips_amplitude", self.phillips_amplitude),
            ("phillips_unemployment_ratio", self.phillips_unemployment_ratio),
            ("support_floor", self.support_floor),
            ("severe_inflation_limit", self.severe_inflation_limit),
            ("severe_unemployment_limit", self.severe_unemployment_limit),
            ("event_inflation_threshold", self.event_inflation_threshold),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(EngineError::Configuration(format!("{name} must be finite")));
            }
        }
        if self.phillips_amplitude < 0.0 {
            return Err(EngineError::Configuration(
                "phillips_amplitude must not be negative".into(),
            ));
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

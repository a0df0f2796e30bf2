// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Economic Policy Simulator - Random Events
//
// Fixed catalog of 13 exogenous shocks. One event is drawn per round from a
// weighted distribution whose weights depend on the economy's condition.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::Indicator::{
    BudgetBalance, GdpGrowth, InflationRate, InterestRate, PopularSupport, UnemploymentRate,
};
use crate::types::{DeltaBundle, EconomicHealth, Indicator};

pub const EVENT_COUNT: usize = 13;

// ─── Event Name ──────────────────────────────────────────────────────────────

/// Discriminants index into [`EVENT_CATALOG`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    OilPriceShock = 0,
    TechnologyBreakthrough = 1,
    TradeWarEscalation = 2,
    ConsumerConfidenceSurge = 3,
    NaturalDisaster = 4,
    CentralBankLiquidityInjection = 5,
    HousingBoom = 6,
    StockMarketCrash = 7,
    FinancialCrisis = 8,
    PandemicOutbreak = 9,
    ExchangeRateVolatility = 10,
    EmergingMarketCrisis = 11,
    NoEvent = 12,
}

impl EventName {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::OilPriceShock => "Oil price shock",
            Self::TechnologyBreakthrough => "Technology breakthrough",
            Self::TradeWarEscalation => "Trade war escalation",
            Self::ConsumerConfidenceSurge => "Consumer confidence surge",
            Self::NaturalDisaster => "Natural disaster",
            Self::CentralBankLiquidityInjection => "Central bank liquidity injection",
            Self::HousingBoom => "Housing market boom",
            Self::StockMarketCrash => "Stock market crash",
            Self::FinancialCrisis => "Financial crisis",
            Self::PandemicOutbreak => "Pandemic outbreak",
            Self::ExchangeRateVolatility => "Exchange rate volatility",
            Self::EmergingMarketCrisis => "Emerging market crisis",
            Self::NoEvent => "No event",
        }
    }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventDefinition {
    pub name: EventName,
    pub title: &'static str,
    pub description: &'static str,
    pub deltas: DeltaBundle,
}

const fn event(
    name: EventName,
    description: &'static str,
    deltas: &'static [(Indicator, f64)],
) -> EventDefinition {
    EventDefinition { name, title: name.title(), description, deltas: DeltaBundle(deltas) }
}

pub static EVENT_CATALOG: [EventDefinition; EVENT_COUNT] = [
    event(
        EventName::OilPriceShock,
        "International oil prices surge, lifting domestic energy costs and pushing inflation up.",
        &[(InflationRate, 1.2), (GdpGrowth, -0.3)],
    ),
    event(
        EventName::TechnologyBreakthrough,
        "A technology breakthrough raises productivity, boosting growth and lowering unemployment.",
        &[(GdpGrowth, 0.8), (UnemploymentRate, -0.5)],
    ),
    event(
        EventName::TradeWarEscalation,
        "An escalating trade war disrupts international commerce and slows growth.",
        &[(GdpGrowth, -0.6), (InflationRate, 0.5)],
    ),
    event(
        EventName::ConsumerConfidenceSurge,
        "Consumer confidence strengthens, stimulating spending and growth.",
        &[(GdpGrowth, 0.7), (UnemploymentRate, -0.3)],
    ),
    event(
        EventName::NaturalDisaster,
        "A natural disaster damages infrastructure and slows growth.",
        &[(GdpGrowth, -0.5), (BudgetBalance, -3.0)],
    ),
    event(
        EventName::CentralBankLiquidityInjection,
        "A central bank liquidity injection lowers market rates and spurs investment.",
        &[(InterestRate, -0.4), (GdpGrowth, 0.4)],
    ),
    event(
        EventName::HousingBoom,
        "A housing market boom lifts related industries and growth.",
        &[(GdpGrowth, 0.6), (InflationRate, 0.4)],
    ),
    event(
        EventName::StockMarketCrash,
        "A stock market crash erodes consumer confidence and slows growth.",
        &[(GdpGrowth, -0.7), (PopularSupport, -5.0)],
    ),
    event(
        EventName::FinancialCrisis,
        "A financial crisis tightens credit and stalls growth.",
        &[(GdpGrowth, -1.0), (UnemploymentRate, 1.0)],
    ),
    event(
        EventName::PandemicOutbreak,
        "A global pandemic disrupts supply chains and sharply slows growth.",
        &[(GdpGrowth, -1.5), (UnemploymentRate, 1.5), (PopularSupport, -8.0)],
    ),
    event(
        EventName::ExchangeRateVolatility,
        "Currency appreciation weighs on exports and shifts the trade balance.",
        &[(GdpGrowth, -0.2)],
    ),
    event(
        EventName::EmergingMarketCrisis,
        "Shifting global capital flows unsettle domestic financial markets.",
        &[(InterestRate, 0.5), (BudgetBalance, -1.0)],
    ),
    event(
        EventName::NoEvent,
        "The economy runs smoothly this round with no major events.",
        &[],
    ),
];

pub fn definition(name: EventName) -> &'static EventDefinition {
    &EVENT_CATALOG[name.index()]
}

// ─── Weighting ───────────────────────────────────────────────────────────────

const BASE_WEIGHT: f64 = 1.0;

const RECESSION_WEIGHTS: &[(EventName, f64)] = &[
    (EventName::OilPriceShock, 1.5),
    (EventName::TradeWarEscalation, 1.5),
    (EventName::NaturalDisaster, 1.5),
    (EventName::StockMarketCrash, 1.5),
    (EventName::FinancialCrisis, 1.5),
    (EventName::PandemicOutbreak, 1.2),
    (EventName::ExchangeRateVolatility, 0.8),
    (EventName::EmergingMarketCrisis, 1.3),
];

const HIGH_INFLATION_WEIGHTS: &[(EventName, f64)] = &[
    (EventName::OilPriceShock, 1.5),
    (EventName::TradeWarEscalation, 1.2),
    (EventName::CentralBankLiquidityInjection, 0.8),
];

/// Which weight table applies this round.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventRegime {
    Baseline,
    Recession,
    HighInflation,
}

impl EventRegime {
    fn overrides(&self) -> &'static [(EventName, f64)] {
        match self {
            Self::Baseline => &[],
            Self::Recession => RECESSION_WEIGHTS,
            Self::HighInflation => HIGH_INFLATION_WEIGHTS,
        }
    }

    pub fn weights(&self) -> [f64; EVENT_COUNT] {
        let mut weights = [BASE_WEIGHT; EVENT_COUNT];
        for &(name, weight) in self.overrides() {
            weights[name.index()] = weight;
        }
        weights
    }
}

// ─── RandomEventGenerator ────────────────────────────────────────────────────

/// Weighted event sampler. Distributions are built once at construction so a
/// draw can never fail mid-round.
#[derive(Debug, Clone)]
pub struct RandomEventGenerator {
    inflation_threshold: f64,
    baseline: WeightedIndex<f64>,
    recession: WeightedIndex<f64>,
    high_inflation: WeightedIndex<f64>,
}

impl RandomEventGenerator {
    pub fn new(inflation_threshold: f64) -> Result<Self, EngineError> {
        Ok(Self {
            inflation_threshold,
            baseline: build_distribution(EventRegime::Baseline)?,
            recession: build_distribution(EventRegime::Recession)?,
            high_inflation: build_distribution(EventRegime::HighInflation)?,
        })
    }

    /// Recession takes precedence over high inflation.
    pub fn regime(&self, health: EconomicHealth, inflation_rate: f64) -> EventRegime {
        if health == EconomicHealth::Recession {
            EventRegime::Recession
        } else if inflation_rate > self.inflation_threshold {
            EventRegime::HighInflation
        } else {
            EventRegime::Baseline
        }
    }

    pub fn weights(&self, health: EconomicHealth, inflation_rate: f64) -> [f64; EVENT_COUNT] {
        self.regime(health, inflation_rate).weights()
    }

    /// Draw one event (a single pick; weights are normalized implicitly).
    pub fn next_event<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        health: EconomicHealth,
        inflation_rate: f64,
    ) -> &'static EventDefinition {
        let dist = match self.regime(health, inflation_rate) {
            EventRegime::Baseline => &self.baseline,
            EventRegime::Recession => &self.recession,
            EventRegime::HighInflation => &self.high_inflation,
        };
        &EVENT_CATALOG[dist.sample(rng)]
    }
}

fn build_distribution(regime: EventRegime) -> Result<WeightedIndex<f64>, EngineError> {
    WeightedIndex::new(regime.weights())
        .map_err(|e| EngineError::Configuration(format!("{regime:?} event weights: {e}")))
}

// ===========================================================================
// Tests
// ===========================================================================

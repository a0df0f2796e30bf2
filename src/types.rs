// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Economic Policy Simulator - Type Definitions

use serde::{Deserialize, Serialize, Serializer};

// ─── Indicator ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    InflationRate = 0,
    UnemploymentRate = 1,
    InterestRate = 2,
    GdpGrowth = 3,
    BudgetBalance = 4,
    PopularSupport = 5,
}

impl Indicator {
    pub const ALL: [Indicator; 6] = [
        Self::InflationRate,
        Self::UnemploymentRate,
        Self::InterestRate,
        Self::GdpGrowth,
        Self::BudgetBalance,
        Self::PopularSupport,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::InflationRate => "Inflation rate (%)",
            Self::UnemploymentRate => "Unemployment rate (%)",
            Self::InterestRate => "Interest rate (%)",
            Self::GdpGrowth => "GDP growth (%)",
            Self::BudgetBalance => "Budget balance (billions)",
            Self::PopularSupport => "Popular support (%)",
        }
    }
}

// ─── IndicatorSnapshot ───────────────────────────────────────────────────────

/// The six macro indicators at one point in time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IndicatorSnapshot {
    pub inflation_rate: f64,
    pub unemployment_rate: f64,
    pub interest_rate: f64,
    pub gdp_growth: f64,
    pub budget_balance: f64,
    pub popular_support: f64,
}

impl Default for IndicatorSnapshot {
    fn default() -> Self {
        Self {
            inflation_rate: 2.0,
            unemployment_rate: 5.0,
            interest_rate: 4.0,
            gdp_growth: 2.5,
            budget_balance: 0.0,
            popular_support: 50.0,
        }
    }
}

impl IndicatorSnapshot {
    pub fn get(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::InflationRate => self.inflation_rate,
            Indicator::UnemploymentRate => self.unemployment_rate,
            Indicator::InterestRate => self.interest_rate,
            Indicator::GdpGrowth => self.gdp_growth,
            Indicator::BudgetBalance => self.budget_balance,
            Indicator::PopularSupport => self.popular_support,
        }
    }

    fn slot(&mut self, indicator: Indicator) -> &mut f64 {
        match indicator {
            Indicator::InflationRate => &mut self.inflation_rate,
            Indicator::UnemploymentRate => &mut self.unemployment_rate,
            Indicator::InterestRate => &mut self.interest_rate,
            Indicator::GdpGrowth => &mut self.gdp_growth,
            Indicator::BudgetBalance => &mut self.budget_balance,
            Indicator::PopularSupport => &mut self.popular_support,
        }
    }

    /// Additive update of a single indicator.
    pub fn shift(&mut self, indicator: Indicator, amount: f64) {
        *self.slot(indicator) += amount;
    }

    /// Apply every entry of `deltas`; indicators it does not list are untouched.
    pub fn apply(&mut self, deltas: &DeltaBundle) {
        for &(indicator, amount) in deltas.entries() {
            self.shift(indicator, amount);
        }
    }

    pub fn is_finite(&self) -> bool {
        Indicator::ALL.iter().all(|&i| self.get(i).is_finite())
    }
}

// ─── DeltaBundle ─────────────────────────────────────────────────────────────

/// Static, declarative set of additive indicator changes.
///
/// Serializes as a map (`{"inflation_rate": -0.7, ...}`) so renderers can
/// show exactly which indicators an effect touches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaBundle(pub &'static [(Indicator, f64)]);

impl DeltaBundle {
    pub const ZERO: DeltaBundle = DeltaBundle(&[]);

    pub fn entries(&self) -> &'static [(Indicator, f64)] {
        self.0
    }

    /// Net change to `indicator` (0.0 when the bundle does not list it).
    pub fn get(&self, indicator: Indicator) -> f64 {
        self.0
            .iter()
            .filter(|(i, _)| *i == indicator)
            .map(|(_, v)| v)
            .sum()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|(_, v)| *v == 0.0)
    }
}

impl Serialize for DeltaBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

// ─── Economic Health ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EconomicHealth {
    Healthy = 0,
    Stable = 1,
    Recession = 2,
}

impl EconomicHealth {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Stable => "stable",
            Self::Recession => "recession",
        }
    }
}

// ─── Game Status ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    InProgress = 0,
    GameOverLowSupport = 1,      // TERMINAL: support fell to the floor
    GameOverSevereRecession = 2, // TERMINAL: inflation or unemployment blew out
    GameOverRoundsExhausted = 3, // TERMINAL: every round played, scored
}

impl Default for GameStatus {
    fn default() -> Self { GameStatus::InProgress }
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Self::InProgress => None,
            Self::GameOverLowSupport => {
                Some("Popular support has collapsed and the government has lost its mandate.")
            }
            Self::GameOverSevereRecession => {
                Some("The economy has fallen into a severe crisis and the policymaker was dismissed.")
            }
            Self::GameOverRoundsExhausted => Some("All rounds have been completed."),
        }
    }
}

// ─── HistoryEntry ────────────────────────────────────────────────────────────

/// Indicators as they stood at the start of `round` (round 0 is the opening state).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub round: u32,
    pub indicators: IndicatorSnapshot,
}

// ===========================================================================
// Tests
// ===========================================================================

// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Economic Policy Simulator - Advisor Panel

use serde::{Deserialize, Serialize};

use crate::config::TargetBands;
use crate::state::EconomicState;
use crate::types::{Indicator, IndicatorSnapshot};

// ---------------------------------------------------------------------------
// Advisors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorRole {
    Monetary,
    Fiscal,
    Macroeconomic,
}

impl AdvisorRole {
    pub const ALL: [AdvisorRole; 3] = [Self::Monetary, Self::Fiscal, Self::Macroeconomic];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Monetary => "Monetary Policy Advisor",
            Self::Fiscal => "Fiscal Policy Advisor",
            Self::Macroeconomic => "Macroeconomic Advisor",
        }
    }

    pub fn specialty(&self) -> &'static str {
        match self {
            Self::Monetary => "monetary policy",
            Self::Fiscal => "fiscal policy",
            Self::Macroeconomic => "economic forecasting",
        }
    }

    fn responsible_for(indicator: Indicator) -> Self {
        match indicator {
            Indicator::InflationRate | Indicator::InterestRate => Self::Monetary,
            Indicator::UnemploymentRate | Indicator::BudgetBalance => Self::Fiscal,
            Indicator::GdpGrowth | Indicator::PopularSupport => Self::Macroeconomic,
        }
    }
}

// ---------------------------------------------------------------------------
// Advice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub advisor: AdvisorRole,
    pub indicator: Indicator,
    pub indicator_label: &'static str,
    pub message: &'static str,
}

const INFLATION_HIGH: &str = "Inflation is too high: consider raising rates or contracting the money supply.";
const INFLATION_LOW: &str = "Inflation is too low: consider cutting rates or expanding the money supply.";
const UNEMPLOYMENT_HIGH: &str = "Unemployment is too high: consider more government spending or tax cuts.";
const UNEMPLOYMENT_LOW: &str =
    "Unemployment is very low and may feed inflation: consider modestly tightening policy.";
const GDP_LOW: &str = "Growth is weak: stimulate the economy by cutting rates or raising spending.";
const GDP_HIGH: &str = "Growth is running hot: watch for overheating and avoid further stimulus.";
const DEFICIT_HIGH: &str = "The budget deficit is too large: consider cutting spending or raising taxes.";
const SURPLUS_HIGH: &str = "The budget surplus is too large: consider more spending or tax cuts.";
const SUPPORT_LOW: &str = "Popular support is low: focus on policies that improve living standards.";
const SUPPORT_HIGH: &str =
    "Popular support is exceptionally high: there is room for unpopular but necessary reforms.";

/// Advice for every band violation, ordered inflation, unemployment, growth,
/// budget, support. Empty exactly when every outcome indicator is in band.
pub fn advice_items(s: &IndicatorSnapshot, bands: &TargetBands) -> Vec<Advice> {
    let checks = [
        (Indicator::InflationRate, bands.inflation, INFLATION_LOW, INFLATION_HIGH),
        (Indicator::UnemploymentRate, bands.unemployment, UNEMPLOYMENT_LOW, UNEMPLOYMENT_HIGH),
        (Indicator::GdpGrowth, bands.gdp_growth, GDP_LOW, GDP_HIGH),
        (Indicator::BudgetBalance, bands.budget_balance, DEFICIT_HIGH, SURPLUS_HIGH),
        (Indicator::PopularSupport, bands.popular_support, SUPPORT_LOW, SUPPORT_HIGH),
    ];

    checks
        .into_iter()
        .filter_map(|(indicator, band, below, above)| {
            let value = s.get(indicator);
            let message = if band.is_above(value) {
                above
            } else if band.is_below(value) {
                below
            } else {
                return None;
            };
            Some(Advice {
                advisor: AdvisorRole::responsible_for(indicator),
                indicator,
                indicator_label: indicator.label(),
                message,
            })
        })
        .collect()
}

/// Message-only advice for the current state.
pub fn advice_for(state: &EconomicState) -> Vec<String> {
    advice_items(&state.snapshot(), state.bands())
        .into_iter()
        .map(|a| a.message.to_string())
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================

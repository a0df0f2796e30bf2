// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Economic Policy Simulator - Policy Effect Table
//
// Static, declarative mapping from each monetary and fiscal action to the
// indicator deltas it produces and the narrative shown to the player.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;
use crate::types::DeltaBundle;
use crate::types::Indicator::{
    BudgetBalance, GdpGrowth, InflationRate, InterestRate, PopularSupport, UnemploymentRate,
};

// ─── Monetary Action ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MonetaryAction {
    RaiseRates,
    LowerRates,
    ExpandMoneySupply,
    ContractMoneySupply,
    QuantitativeEasing,
    NoChange,
}

impl MonetaryAction {
    pub const ALL: [MonetaryAction; 6] = [
        Self::RaiseRates,
        Self::LowerRates,
        Self::ExpandMoneySupply,
        Self::ContractMoneySupply,
        Self::QuantitativeEasing,
        Self::NoChange,
    ];

    /// Stable wire key, identical to the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            Self::RaiseRates => "raise_rates",
            Self::LowerRates => "lower_rates",
            Self::ExpandMoneySupply => "expand_money_supply",
            Self::ContractMoneySupply => "contract_money_supply",
            Self::QuantitativeEasing => "quantitative_easing",
            Self::NoChange => "no_change",
        }
    }

    pub fn family(&self) -> Option<InstrumentFamily> {
        match self {
            Self::RaiseRates | Self::LowerRates => Some(InstrumentFamily::InterestRate),
            Self::ExpandMoneySupply | Self::ContractMoneySupply | Self::QuantitativeEasing => {
                Some(InstrumentFamily::MoneySupply)
            }
            Self::NoChange => None,
        }
    }
}

impl fmt::Display for MonetaryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MonetaryAction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| EngineError::InvalidPolicyChoice { value: s.to_string() })
    }
}

// ─── Fiscal Action ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FiscalAction {
    IncreaseSpending,
    DecreaseSpending,
    RaiseTaxes,
    CutTaxes,
    StructuralTaxCut,
    NoChange,
}

impl FiscalAction {
    pub const ALL: [FiscalAction; 6] = [
        Self::IncreaseSpending,
        Self::DecreaseSpending,
        Self::RaiseTaxes,
        Self::CutTaxes,
        Self::StructuralTaxCut,
        Self::NoChange,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::IncreaseSpending => "increase_spending",
            Self::DecreaseSpending => "decrease_spending",
            Self::RaiseTaxes => "raise_taxes",
            Self::CutTaxes => "cut_taxes",
            Self::StructuralTaxCut => "structural_tax_cut",
            Self::NoChange => "no_change",
        }
    }

    pub fn family(&self) -> Option<InstrumentFamily> {
        match self {
            Self::IncreaseSpending | Self::DecreaseSpending => Some(InstrumentFamily::Spending),
            Self::RaiseTaxes | Self::CutTaxes | Self::StructuralTaxCut => {
                Some(InstrumentFamily::Taxation)
            }
            Self::NoChange => None,
        }
    }
}

impl fmt::Display for FiscalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FiscalAction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| EngineError::InvalidPolicyChoice { value: s.to_string() })
    }
}

// ─── Instrument Family ───────────────────────────────────────────────────────

/// Group of related policy levers sharing one economic rationale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentFamily {
    InterestRate,
    MoneySupply,
    Spending,
    Taxation,
}

impl InstrumentFamily {
    pub fn principle(&self) -> &'static str {
        match self {
            Self::InterestRate => {
                "Interest rates are the central bank's main lever. Higher rates raise the cost of \
                 borrowing, cooling consumption, investment and with them inflation; lower rates \
                 stimulate growth instead."
            }
            Self::MoneySupply => {
                "Changes in the money supply act directly on inflation and growth. More money can \
                 lift output in the short run, but more money chasing the same goods and services \
                 pushes prices up."
            }
            Self::Spending => {
                "Government spending is a core fiscal tool. Higher spending lifts growth and \
                 creates jobs directly, but it can widen the budget deficit."
            }
            Self::Taxation => {
                "Taxes shape household disposable income and business investment. Higher taxes \
                 reduce aggregate demand and restrain inflation, but can slow growth."
            }
        }
    }
}

// ─── Effect Table ────────────────────────────────────────────────────────────

/// Deltas plus the human-readable rationale for one action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolicyEffect {
    pub deltas: DeltaBundle,
    pub narrative: &'static str,
}

/// Either side of a round's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyChoice {
    Monetary(MonetaryAction),
    Fiscal(FiscalAction),
}

impl From<MonetaryAction> for PolicyChoice {
    fn from(a: MonetaryAction) -> Self { PolicyChoice::Monetary(a) }
}

impl From<FiscalAction> for PolicyChoice {
    fn from(a: FiscalAction) -> Self { PolicyChoice::Fiscal(a) }
}

const RAISE_RATES: PolicyEffect = PolicyEffect {
    deltas: DeltaBundle(&[
        (InterestRate, 0.5),
        (InflationRate, -0.7),
        (UnemploymentRate, 0.4),
        (GdpGrowth, -0.3),
        (PopularSupport, -2.0),
    ]),
    narrative: "Interest rates raised by 0.5%. Inflation is restrained, but unemployment rises \
                and growth slows.",
};

const LOWER_RATES: PolicyEffect = PolicyEffect {
    deltas: DeltaBundle(&[
        (InterestRate, -0.5),
        (InflationRate, 0.7),
        (UnemploymentRate, -0.4),
        (GdpGrowth, 0.3),
        (PopularSupport, 2.0),
    ]),
    narrative: "Interest rates cut by 0.5%. Growth and inflation pick up while unemployment falls.",
};

const EXPAND_MONEY_SUPPLY: PolicyEffect = PolicyEffect {
    deltas: DeltaBundle(&[
        (InflationRate, 1.0),
        (UnemploymentRate, -0.6),
        (GdpGrowth, 0.5),
        (PopularSupport, 3.0),
    ]),
    narrative: "Money supply expanded. Growth is stimulated and unemployment falls, but inflation \
                accelerates.",
};

const CONTRACT_MONEY_SUPPLY: PolicyEffect = PolicyEffect {
    deltas: DeltaBundle(&[
        (InflationRate, -1.0),
        (UnemploymentRate, 0.6),
        (GdpGrowth, -0.5),
        (PopularSupport, -3.0),
    ]),
    narrative: "Money supply contracted. Inflation is restrained, but unemployment rises and \
                growth slows.",
};

const QUANTITATIVE_EASING: PolicyEffect = PolicyEffect {
    deltas: DeltaBundle(&[
        (InflationRate, 0.8),
        (UnemploymentRate, -0.5),
        (GdpGrowth, 0.4),
        (PopularSupport, 2.0),
    ]),
    narrative: "Quantitative easing launched. Market liquidity rises and growth is stimulated, \
                at the risk of higher inflation.",
};

const MONETARY_HOLD: PolicyEffect = PolicyEffect {
    deltas: DeltaBundle::ZERO,
    narrative: "Monetary policy left unchanged.",
};

const INCREASE_SPENDING: PolicyEffect = PolicyEffect {
    deltas: DeltaBundle(&[
        (BudgetBalance, -5.0),
        (GdpGrowth, 0.5),
        (UnemploymentRate, -0.3),
        (InflationRate, 0.5),
        (PopularSupport, 3.0),
    ]),
    narrative: "Government spending increased by 5 billion. Growth is stimulated and unemployment \
                falls, but inflation and the budget deficit rise.",
};

const DECREASE_SPENDING: PolicyEffect = PolicyEffect {
    deltas: DeltaBundle(&[
        (BudgetBalance, 5.0),
        (GdpGrowth, -0.5),
        (UnemploymentRate, 0.3),
        (InflationRate, -0.5),
        (PopularSupport, -3.0),
    ]),
    narrative: "Government spending cut by 5 billion. The deficit and inflation shrink, but growth \
                slows and unemployment rises.",
};

const RAISE_TAXES: PolicyEffect = PolicyEffect {
    deltas: DeltaBundle(&[
        (BudgetBalance, 7.0),
        (GdpGrowth, -0.4),
        (InflationRate, -0.4),
        (PopularSupport, -4.0),
    ]),
    narrative: "Taxes raised by 7 billion. The budget improves and inflation is restrained, but \
                growth slows.",
};

const CUT_TAXES: PolicyEffect = PolicyEffect {
    deltas: DeltaBundle(&[
        (BudgetBalance, -7.0),
        (GdpGrowth, 0.4),
        (InflationRate, 0.4),
        (PopularSupport, 4.0),
    ]),
    narrative: "Taxes cut by 7 billion. Growth and inflation pick up, but the budget deficit widens.",
};

const STRUCTURAL_TAX_CUT: PolicyEffect = PolicyEffect {
    deltas: DeltaBundle(&[
        (BudgetBalance, -3.0),
        (GdpGrowth, 0.3),
        (UnemploymentRate, -0.2),
        (PopularSupport, 2.0),
    ]),
    narrative: "Structural tax cut enacted. Targeted industries expand and productivity improves, \
                supporting growth and employment.",
};

const FISCAL_HOLD: PolicyEffect = PolicyEffect {
    deltas: DeltaBundle::ZERO,
    narrative: "Fiscal policy left unchanged.",
};

/// Look up the fixed effect of a monetary or fiscal action. Pure and total.
pub fn effects_for(choice: impl Into<PolicyChoice>) -> PolicyEffect {
    match choice.into() {
        PolicyChoice::Monetary(action) => match action {
            MonetaryAction::RaiseRates => RAISE_RATES,
            MonetaryAction::LowerRates => LOWER_RATES,
            MonetaryAction::ExpandMoneySupply => EXPAND_MONEY_SUPPLY,
            MonetaryAction::ContractMoneySupply => CONTRACT_MONEY_SUPPLY,
            MonetaryAction::QuantitativeEasing => QUANTITATIVE_EASING,
            MonetaryAction::NoChange => MONETARY_HOLD,
        },
        PolicyChoice::Fiscal(action) => match action {
            FiscalAction::IncreaseSpending => INCREASE_SPENDING,
            FiscalAction::DecreaseSpending => DECREASE_SPENDING,
            FiscalAction::RaiseTaxes => RAISE_TAXES,
            FiscalAction::CutTaxes => CUT_TAXES,
            FiscalAction::StructuralTaxCut => STRUCTURAL_TAX_CUT,
            FiscalAction::NoChange => FISCAL_HOLD,
        },
    }
}

/// Principle explanations for the instrument families used this round,
/// monetary first.
pub fn principles_for(monetary: MonetaryAction, fiscal: FiscalAction) -> Vec<&'static str> {
    monetary
        .family()
        .into_iter()
        .chain(fiscal.family())
        .map(|f| f.principle())
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================

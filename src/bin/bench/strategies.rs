// Strategy Definitions: scripted players for balance testing
// Each strategy maps the visible state to one monetary and one fiscal choice

use policy_engine::{advice_items, EconomicState, FiscalAction, Indicator, MonetaryAction};

// ─── Strategy ───────────────────────────────────────────────────────────────

pub struct Strategy {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub choose: fn(&EconomicState) -> (MonetaryAction, FiscalAction),
}

// ─── Fixed Strategies ───────────────────────────────────────────────────────

fn hold(_: &EconomicState) -> (MonetaryAction, FiscalAction) {
    (MonetaryAction::NoChange, FiscalAction::NoChange)
}

fn hawk(_: &EconomicState) -> (MonetaryAction, FiscalAction) {
    (MonetaryAction::RaiseRates, FiscalAction::NoChange)
}

fn dove(_: &EconomicState) -> (MonetaryAction, FiscalAction) {
    (MonetaryAction::LowerRates, FiscalAction::NoChange)
}

fn populist(_: &EconomicState) -> (MonetaryAction, FiscalAction) {
    (MonetaryAction::ExpandMoneySupply, FiscalAction::CutTaxes)
}

fn austerity(_: &EconomicState) -> (MonetaryAction, FiscalAction) {
    (MonetaryAction::NoChange, FiscalAction::DecreaseSpending)
}

// ─── Reactive Strategy ──────────────────────────────────────────────────────

/// Acts on the first monetary and first fiscal concern the advisors raise.
fn advisor_following(state: &EconomicState) -> (MonetaryAction, FiscalAction) {
    let s = state.snapshot();
    let bands = state.bands();
    let advice = advice_items(&s, bands);
    let flagged = |i: Indicator| advice.iter().any(|a| a.indicator == i);

    let monetary = if flagged(Indicator::InflationRate) {
        if bands.inflation.is_above(s.inflation_rate) { MonetaryAction::RaiseRates }
        else { MonetaryAction::LowerRates }
    } else if flagged(Indicator::GdpGrowth) && bands.gdp_growth.is_below(s.gdp_growth) {
        MonetaryAction::LowerRates
    } else {
        MonetaryAction::NoChange
    };

    let fiscal = if flagged(Indicator::BudgetBalance) {
        if bands.budget_balance.is_below(s.budget_balance) { FiscalAction::RaiseTaxes }
        else { FiscalAction::IncreaseSpending }
    } else if flagged(Indicator::UnemploymentRate) && bands.unemployment.is_above(s.unemployment_rate) {
        FiscalAction::IncreaseSpending
    } else if flagged(Indicator::PopularSupport) && bands.popular_support.is_below(s.popular_support) {
        FiscalAction::StructuralTaxCut
    } else {
        FiscalAction::NoChange
    };

    (monetary, fiscal)
}

// ─── Registry ───────────────────────────────────────────────────────────────

pub fn strategies() -> Vec<Strategy> {
    vec![
        Strategy {
            name: "HOLD",
            label: "Hold steady",
            description: "Never touches either lever",
            choose: hold,
        },
        Strategy {
            name: "HAWK",
            label: "Inflation hawk",
            description: "Raises rates every round",
            choose: hawk,
        },
        Strategy {
            name: "DOVE",
            label: "Growth dove",
            description: "Cuts rates every round",
            choose: dove,
        },
        Strategy {
            name: "POPULIST",
            label: "Populist stimulus",
            description: "Prints money and cuts taxes every round",
            choose: populist,
        },
        Strategy {
            name: "AUSTERITY",
            label: "Austerity",
            description: "Cuts spending every round",
            choose: austerity,
        },
        Strategy {
            name: "ADVISOR",
            label: "Advisor-following",
            description: "Reacts to whatever the advisors flag",
            choose: advisor_following,
        },
    ]
}

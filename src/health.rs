// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Economic Policy Simulator - Health Classification

//! Band-based health scoring.
//!
//! Each outcome indicator contributes a reward when inside its target band and
//! a penalty only on the side of the band that hurts: low unemployment, fast
//! growth and a large surplus are never penalized.

use crate::config::TargetBands;
use crate::types::{EconomicHealth, IndicatorSnapshot};

/// Scores at or above this classify as [`EconomicHealth::Healthy`].
pub const HEALTHY_THRESHOLD: f64 = 3.0;
/// Scores at or above this (and below healthy) classify as [`EconomicHealth::Stable`].
pub const STABLE_THRESHOLD: f64 = 1.5;

/// Scalar health score in `[-3.5, 4.0]`.
pub fn health_score(s: &IndicatorSnapshot, bands: &TargetBands) -> f64 {
    let mut score = 0.0;

    if bands.inflation.contains(s.inflation_rate) { score += 1.0; }
    else if bands.inflation.is_below(s.inflation_rate) { score -= 0.5; }
    else { score -= 1.0; }

    if bands.unemployment.contains(s.unemployment_rate) { score += 1.0; }
    else if bands.unemployment.is_above(s.unemployment_rate) { score -= 1.0; }

    if bands.gdp_growth.contains(s.gdp_growth) { score += 1.0; }
    else if bands.gdp_growth.is_below(s.gdp_growth) { score -= 1.0; }

    if bands.budget_balance.contains(s.budget_balance) { score += 0.5; }
    else if bands.budget_balance.is_below(s.budget_balance) { score -= 0.5; }

    if s.popular_support >= bands.popular_support.lower { score += 0.5; }
    else { score -= 0.5; }

    score
}

/// Map a health score onto its category.
pub fn classify_score(score: f64) -> EconomicHealth {
    if score >= HEALTHY_THRESHOLD { EconomicHealth::Healthy }
    else if score >= STABLE_THRESHOLD { EconomicHealth::Stable }
    else { EconomicHealth::Recession }
}

pub fn classify(s: &IndicatorSnapshot, bands: &TargetBands) -> EconomicHealth {
    classify_score(health_score(s, bands))
}

// ===========================================================================
// Tests
// ===========================================================================

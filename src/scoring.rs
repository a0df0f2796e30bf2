// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Economic Policy Simulator - Final Scoring

//! End-of-game scoring.
//!
//! Five components sum to at most 100: inflation (20), unemployment (20),
//! GDP growth (20), budget balance (15) and popular support (25). The scoring
//! targets are deliberately tighter than the advisory target bands.

use serde::{Deserialize, Serialize};

use crate::types::IndicatorSnapshot;

const INFLATION_TARGET: f64 = 2.0;
const UNEMPLOYMENT_RANGE: (f64, f64) = (4.0, 6.0);
const GDP_RANGE: (f64, f64) = (2.0, 4.0);
const SUPPORT_FULL_MARKS: f64 = 70.0;
const SUPPORT_SLOPE: f64 = 0.357;

/// Per-component points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub inflation: f64,
    pub unemployment: f64,
    pub gdp_growth: f64,
    pub budget_balance: f64,
    pub popular_support: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.inflation + self.unemployment + self.gdp_growth + self.budget_balance
            + self.popular_support
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluation {
    Excellent,
    Good,
    Passing,
    NeedsImprovement,
}

impl Evaluation {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 { Self::Excellent }
        else if score >= 75.0 { Self::Good }
        else if score >= 60.0 { Self::Passing }
        else { Self::NeedsImprovement }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Passing => "passing",
            Self::NeedsImprovement => "needs improvement",
        }
    }

    pub fn commentary(&self) -> &'static str {
        match self {
            Self::Excellent => {
                "An outstanding policymaker: the economy grew steadily while inflation stayed low."
            }
            Self::Good => "The economy was managed well and most indicators ended in a reasonable range.",
            Self::Passing => "An average performance; several indicators still need work.",
            Self::NeedsImprovement => {
                "The economy faces real challenges; the policy strategy deserves a rethink."
            }
        }
    }
}

/// Serialized with the display label and commentary alongside the
/// snake_case evaluation tag so UIs can render it directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinalScore {
    pub breakdown: ScoreBreakdown,
    pub total: f64,
    pub evaluation: Evaluation,
    pub evaluation_label: &'static str,
    pub commentary: &'static str,
}

/// Distance from `value` to the nearer edge of `range`, zero inside it.
fn distance_outside(value: f64, range: (f64, f64)) -> f64 {
    if range.0 <= value && value <= range.1 {
        0.0
    } else {
        (value - range.0).abs().min((value - range.1).abs())
    }
}

pub fn score_breakdown(s: &IndicatorSnapshot) -> ScoreBreakdown {
    let inflation = (20.0 - (s.inflation_rate - INFLATION_TARGET).abs() * 4.0).max(0.0);

    let unemployment = (20.0 - distance_outside(s.unemployment_rate, UNEMPLOYMENT_RANGE) * 4.0).max(0.0);

    let gdp_growth = (20.0 - distance_outside(s.gdp_growth, GDP_RANGE) * 10.0).max(0.0);

    let budget_balance = (15.0 - s.budget_balance.abs() * 1.5).max(0.0);

    let popular_support = if s.popular_support >= SUPPORT_FULL_MARKS {
        25.0
    } else {
        s.popular_support * SUPPORT_SLOPE
    };

    ScoreBreakdown { inflation, unemployment, gdp_growth, budget_balance, popular_support }
}

/// Score a terminal snapshot. Pure; callers decide when scoring applies.
pub fn final_score(s: &IndicatorSnapshot) -> FinalScore {
    let breakdown = score_breakdown(s);
    let total = breakdown.total();
    let evaluation = Evaluation::from_score(total);
    FinalScore {
        breakdown,
        total,
        evaluation,
        evaluation_label: evaluation.label(),
        commentary: evaluation.commentary(),
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn opening_position_scores() {
        let score = final_score(&IndicatorSnapshot::default());
        let b = score.breakdown;
        assert_eq!(b.inflation, 20.0);
        assert_eq!(b.unemployment, 20.0);
        assert_eq!(b.gdp_growth, 20.0);
        assert_eq!(b.budget_balance, 15.0);
        assert!(approx(b.popular_support, 17.85), "support {}", b.popular_support);
        assert!(approx(score.total, 92.85), "total {}", score.total);
        assert_eq!(score.evaluation, Evaluation::Excellent);
    }

    #[test]
    fn inflation_component_decays_linearly() {
        let s = IndicatorSnapshot { inflation_rate: 4.5, ..Default::default() };
        assert_eq!(score_breakdown(&s).inflation, 10.0);
        let s = IndicatorSnapshot { inflation_rate: -4.0, ..Default::default() };
        assert_eq!(score_breakdown(&s).inflation, 0.0);
    }

    #[test]
    fn unemployment_uses_nearest_edge() {
        let s = IndicatorSnapshot { unemployment_rate: 3.0, ..Default::default() };
        assert_eq!(score_breakdown(&s).unemployment, 16.0);
        let s = IndicatorSnapshot { unemployment_rate: 8.5, ..Default::default() };
        assert_eq!(score_breakdown(&s).unemployment, 10.0);
        let s = IndicatorSnapshot { unemployment_rate: 6.0, ..Default::default() };
        assert_eq!(score_breakdown(&s).unemployment, 20.0);
    }

    #[test]
    fn gdp_penalty_is_steeper() {
        let s = IndicatorSnapshot { gdp_growth: 1.0, ..Default::default() };
        assert_eq!(score_breakdown(&s).gdp_growth, 10.0);
        let s = IndicatorSnapshot { gdp_growth: 6.5, ..Default::default() };
        assert_eq!(score_breakdown(&s).gdp_growth, 0.0);
    }

    #[test]
    fn budget_penalizes_both_directions() {
        let deficit = IndicatorSnapshot { budget_balance: -4.0, ..Default::default() };
        let surplus = IndicatorSnapshot { budget_balance: 4.0, ..Default::default() };
        assert_eq!(score_breakdown(&deficit).budget_balance, 9.0);
        assert_eq!(score_breakdown(&surplus).budget_balance, 9.0);
        let ruin = IndicatorSnapshot { budget_balance: -40.0, ..Default::default() };
        assert_eq!(score_breakdown(&ruin).budget_balance, 0.0);
    }

    #[test]
    fn support_caps_at_seventy() {
        let s = IndicatorSnapshot { popular_support: 70.0, ..Default::default() };
        assert_eq!(score_breakdown(&s).popular_support, 25.0);
        let s = IndicatorSnapshot { popular_support: 69.0, ..Default::default() };
        assert!(approx(score_breakdown(&s).popular_support, 24.633));
    }

    #[test]
    fn perfect_game_scores_one_hundred() {
        let s = IndicatorSnapshot { popular_support: 80.0, ..Default::default() };
        assert_eq!(final_score(&s).total, 100.0);
    }

    #[test]
    fn evaluation_boundaries() {
        assert_eq!(Evaluation::from_score(90.0), Evaluation::Excellent);
        assert_eq!(Evaluation::from_score(89.99), Evaluation::Good);
        assert_eq!(Evaluation::from_score(75.0), Evaluation::Good);
        assert_eq!(Evaluation::from_score(60.0), Evaluation::Passing);
        assert_eq!(Evaluation::from_score(59.9), Evaluation::NeedsImprovement);
        assert_eq!(Evaluation::NeedsImprovement.label(), "needs improvement");
    }

    #[test]
    fn final_score_carries_display_text() {
        let s = IndicatorSnapshot { inflation_rate: 8.0, popular_support: 20.0, ..Default::default() };
        let score = final_score(&s);
        assert_eq!(score.evaluation, Evaluation::NeedsImprovement);
        assert_eq!(score.evaluation_label, "needs improvement");
        assert_eq!(score.commentary, Evaluation::NeedsImprovement.commentary());

        let json = serde_json::to_value(score).expect("test: score serializes");
        assert_eq!(json["evaluation"], "needs_improvement");
        assert_eq!(json["evaluation_label"], "needs improvement");
        assert_eq!(json["commentary"], Evaluation::NeedsImprovement.commentary());
    }
}

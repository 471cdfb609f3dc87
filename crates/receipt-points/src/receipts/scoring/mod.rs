mod rules;

use serde::Serialize;

use super::domain::ValidatedReceipt;

/// Stateless evaluator applying the points rules to a validated receipt.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointsEngine;

impl PointsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score a receipt. Never fails; unparsable dates and times contribute nothing.
    ///
    /// A receipt without items scores zero whatever the other rules award. The validator
    /// rejects such receipts, so this only applies when the engine is called directly.
    pub fn score(&self, receipt: &ValidatedReceipt) -> PointsOutcome {
        let contributions = rules::score_receipt(receipt);

        let total_points = if receipt.items.is_empty() {
            0
        } else {
            contributions
                .iter()
                .fold(0u64, |acc, contribution| acc.saturating_add(contribution.points))
        };

        PointsOutcome {
            total_points,
            contributions,
        }
    }
}

/// Individual points rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl ScoringRule {
    pub const fn label(self) -> &'static str {
        match self {
            ScoringRule::RetailerName => "retailer name",
            ScoringRule::RoundDollarTotal => "round dollar total",
            ScoringRule::QuarterMultipleTotal => "quarter multiple total",
            ScoringRule::ItemPairs => "item pairs",
            ScoringRule::DescriptionLength => "description length",
            ScoringRule::OddPurchaseDay => "odd purchase day",
            ScoringRule::AfternoonPurchase => "afternoon purchase",
        }
    }
}

/// Discrete contribution to a receipt's points, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: ScoringRule,
    pub points: u64,
    pub notes: String,
}

/// Scoring output describing the total and the per-rule trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsOutcome {
    pub total_points: u64,
    pub contributions: Vec<RuleContribution>,
}

impl PointsOutcome {
    pub fn points_for(&self, rule: ScoringRule) -> u64 {
        self.contributions
            .iter()
            .find(|contribution| contribution.rule == rule)
            .map(|contribution| contribution.points)
            .unwrap_or(0)
    }
}

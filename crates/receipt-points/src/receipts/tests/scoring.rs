use super::common::*;
use crate::receipts::scoring::{PointsEngine, ScoringRule};
use crate::receipts::validation::ReceiptValidator;
use crate::receipts::{PointsOutcome, ReceiptSubmission};

fn score_submission(submission: ReceiptSubmission) -> PointsOutcome {
    let receipt = ReceiptValidator
        .validate(submission)
        .expect("fixture is valid");
    PointsEngine::new().score(&receipt)
}

#[test]
fn target_receipt_scores_twenty_eight() {
    let outcome = score_submission(target_submission());

    assert_eq!(outcome.total_points, 28);
    assert_eq!(outcome.points_for(ScoringRule::RetailerName), 6);
    assert_eq!(outcome.points_for(ScoringRule::RoundDollarTotal), 0);
    assert_eq!(outcome.points_for(ScoringRule::QuarterMultipleTotal), 0);
    assert_eq!(outcome.points_for(ScoringRule::ItemPairs), 10);
    assert_eq!(outcome.points_for(ScoringRule::DescriptionLength), 6);
    assert_eq!(outcome.points_for(ScoringRule::OddPurchaseDay), 6);
    assert_eq!(outcome.points_for(ScoringRule::AfternoonPurchase), 0);
}

#[test]
fn corner_market_receipt_scores_one_hundred_nine() {
    let outcome = score_submission(corner_market_submission());

    assert_eq!(outcome.total_points, 109);
    assert_eq!(outcome.points_for(ScoringRule::RetailerName), 14);
    assert_eq!(outcome.points_for(ScoringRule::RoundDollarTotal), 50);
    assert_eq!(outcome.points_for(ScoringRule::QuarterMultipleTotal), 25);
    assert_eq!(outcome.points_for(ScoringRule::AfternoonPurchase), 10);
}

#[test]
fn contributions_follow_rule_order() {
    let outcome = score_submission(target_submission());
    let rules: Vec<ScoringRule> = outcome.contributions.iter().map(|c| c.rule).collect();

    assert_eq!(
        rules,
        vec![
            ScoringRule::RetailerName,
            ScoringRule::RoundDollarTotal,
            ScoringRule::QuarterMultipleTotal,
            ScoringRule::ItemPairs,
            ScoringRule::DescriptionLength,
            ScoringRule::OddPurchaseDay,
            ScoringRule::AfternoonPurchase,
        ]
    );
}

#[test]
fn retailer_points_ignore_punctuation_spaces_and_non_ascii() {
    let engine = PointsEngine::new();
    let receipt = validated("Café & Co. 24/7", "1.01", "2022-01-02", "10:00", &[("a", "1")]);

    assert_eq!(
        engine.score(&receipt).points_for(ScoringRule::RetailerName),
        8
    );
}

#[test]
fn quarter_and_round_totals_are_exact() {
    let engine = PointsEngine::new();

    let quarter = validated("X", "10.75", "2022-01-02", "10:00", &[("a", "1")]);
    let outcome = engine.score(&quarter);
    assert_eq!(outcome.points_for(ScoringRule::RoundDollarTotal), 0);
    assert_eq!(outcome.points_for(ScoringRule::QuarterMultipleTotal), 25);

    let near_quarter = validated("X", "10.251", "2022-01-02", "10:00", &[("a", "1")]);
    assert_eq!(
        engine
            .score(&near_quarter)
            .points_for(ScoringRule::QuarterMultipleTotal),
        0
    );

    let round = validated("X", "0", "2022-01-02", "10:00", &[("a", "1")]);
    let outcome = engine.score(&round);
    assert_eq!(outcome.points_for(ScoringRule::RoundDollarTotal), 50);
    assert_eq!(outcome.points_for(ScoringRule::QuarterMultipleTotal), 25);
}

#[test]
fn empty_items_force_zero_points() {
    let receipt = validated("M&M Corner Market", "9.00", "2022-03-21", "14:33", &[]);

    let outcome = PointsEngine::new().score(&receipt);

    assert_eq!(outcome.total_points, 0);
    assert_eq!(outcome.points_for(ScoringRule::RetailerName), 14);
}

#[test]
fn whitespace_only_descriptions_earn_nothing() {
    let engine = PointsEngine::new();
    let receipt = validated(
        "X",
        "1.01",
        "2022-01-02",
        "10:00",
        &[("      ", "100.00"), (" abc ", "10.01")],
    );

    assert_eq!(
        engine
            .score(&receipt)
            .points_for(ScoringRule::DescriptionLength),
        3
    );
}

#[test]
fn description_length_counts_characters_not_bytes() {
    let engine = PointsEngine::new();
    let receipt = validated("X", "1.01", "2022-01-02", "10:00", &[("été", "5.00")]);

    assert_eq!(
        engine
            .score(&receipt)
            .points_for(ScoringRule::DescriptionLength),
        1
    );
}

#[test]
fn afternoon_boundaries() {
    let engine = PointsEngine::new();
    let at = |time: &str| {
        engine
            .score(&validated("X", "1.01", "2022-01-02", time, &[("a", "1")]))
            .points_for(ScoringRule::AfternoonPurchase)
    };

    assert_eq!(at("14:00"), 10);
    assert_eq!(at("15:59"), 10);
    assert_eq!(at("16:00"), 0);
    assert_eq!(at("13:59"), 0);
    assert_eq!(at("1400"), 0);
}

#[test]
fn malformed_dates_contribute_nothing() {
    let engine = PointsEngine::new();
    for date in ["2022-01", "20220101", "2022-01-xx", "---"] {
        let receipt = validated("X", "1.01", date, "10:00", &[("a", "1")]);
        assert_eq!(
            engine.score(&receipt).points_for(ScoringRule::OddPurchaseDay),
            0,
            "date '{date}' should not earn odd-day points"
        );
    }
}

#[test]
fn scoring_is_deterministic() {
    let receipt = ReceiptValidator
        .validate(target_submission())
        .expect("fixture is valid");
    let engine = PointsEngine::new();

    assert_eq!(engine.score(&receipt), engine.score(&receipt));
}

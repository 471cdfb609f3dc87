use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::super::amount::Amount;
use super::super::domain::{ValidatedItem, ValidatedReceipt};
use super::{RuleContribution, ScoringRule};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
const AFTERNOON_START_HOUR: i64 = 14;
const AFTERNOON_END_HOUR: i64 = 16;

pub(crate) fn score_receipt(receipt: &ValidatedReceipt) -> Vec<RuleContribution> {
    vec![
        retailer_name(&receipt.retailer),
        round_dollar_total(receipt.total),
        quarter_multiple_total(receipt.total),
        item_pairs(receipt.items.len()),
        description_length(&receipt.items),
        odd_purchase_day(&receipt.purchase_date),
        afternoon_purchase(&receipt.purchase_time),
    ]
}

fn retailer_name(retailer: &str) -> RuleContribution {
    let count = retailer
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .count() as u64;

    RuleContribution {
        rule: ScoringRule::RetailerName,
        points: count,
        notes: format!("{count} alphanumeric character(s) in '{retailer}'"),
    }
}

fn round_dollar_total(total: Amount) -> RuleContribution {
    let round = total.value().fract().is_zero();

    RuleContribution {
        rule: ScoringRule::RoundDollarTotal,
        points: if round { ROUND_DOLLAR_POINTS } else { 0 },
        notes: if round {
            format!("total {total} has no cents")
        } else {
            format!("total {total} has cents")
        },
    }
}

fn quarter_multiple_total(total: Amount) -> RuleContribution {
    let quarter = Decimal::new(25, 2);
    let multiple = (total.value() % quarter).is_zero();

    RuleContribution {
        rule: ScoringRule::QuarterMultipleTotal,
        points: if multiple { QUARTER_MULTIPLE_POINTS } else { 0 },
        notes: if multiple {
            format!("total {total} is a multiple of 0.25")
        } else {
            format!("total {total} is not a multiple of 0.25")
        },
    }
}

fn item_pairs(item_count: usize) -> RuleContribution {
    if item_count == 0 {
        return RuleContribution {
            rule: ScoringRule::ItemPairs,
            points: 0,
            notes: "no items; receipt scores zero".to_string(),
        };
    }

    let pairs = (item_count / 2) as u64;
    RuleContribution {
        rule: ScoringRule::ItemPairs,
        points: pairs.saturating_mul(POINTS_PER_ITEM_PAIR),
        notes: format!("{pairs} pair(s) across {item_count} item(s)"),
    }
}

fn description_length(items: &[ValidatedItem]) -> RuleContribution {
    let mut points = 0u64;
    let mut matched = Vec::new();

    for item in items {
        let trimmed = item.short_description.trim();
        let length = trimmed.chars().count();
        if length == 0 || length % 3 != 0 {
            continue;
        }

        let earned = fifth_of_price_rounded_up(item.amount);
        points = points.saturating_add(earned);
        matched.push(format!("'{trimmed}' +{earned}"));
    }

    let notes = if matched.is_empty() {
        "no descriptions with a length divisible by 3".to_string()
    } else {
        matched.join(", ")
    };

    RuleContribution {
        rule: ScoringRule::DescriptionLength,
        points,
        notes,
    }
}

fn fifth_of_price_rounded_up(price: Amount) -> u64 {
    price
        .value()
        .checked_mul(Decimal::new(2, 1))
        .map(|scaled| scaled.ceil())
        .and_then(|ceiled| ceiled.to_u64())
        .unwrap_or(u64::MAX)
}

fn odd_purchase_day(purchase_date: &str) -> RuleContribution {
    let day = purchase_date
        .split('-')
        .nth(2)
        .and_then(|field| field.parse::<i64>().ok());

    let (points, notes) = match day {
        Some(day) if day % 2 != 0 => (ODD_DAY_POINTS, format!("day {day} is odd")),
        Some(day) => (0, format!("day {day} is even")),
        None => (0, format!("no day field in '{purchase_date}'")),
    };

    RuleContribution {
        rule: ScoringRule::OddPurchaseDay,
        points,
        notes,
    }
}

fn afternoon_purchase(purchase_time: &str) -> RuleContribution {
    let hour = purchase_time
        .split(':')
        .next()
        .and_then(|field| field.parse::<i64>().ok());

    let (points, notes) = match hour {
        Some(hour) if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&hour) => (
            AFTERNOON_POINTS,
            format!("hour {hour} within 14:00-16:00"),
        ),
        Some(hour) => (0, format!("hour {hour} outside 14:00-16:00")),
        None => (0, format!("no hour field in '{purchase_time}'")),
    };

    RuleContribution {
        rule: ScoringRule::AfternoonPurchase,
        points,
        notes,
    }
}

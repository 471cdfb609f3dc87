use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Non-negative fixed-point monetary value parsed from receipt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Parse plain decimal text such as `"6"`, `"6.5"`, `".5"` or `"+6.50"`.
    ///
    /// Fractional digits beyond the supported precision are rounded. Exponents, signs other
    /// than a leading `+`, whitespace, and magnitudes outside the representable range are
    /// rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let unsigned = raw.strip_prefix('+').unwrap_or(raw);
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return None;
        }

        let whole = if whole.is_empty() { "0" } else { whole };
        let canonical = if fraction.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{fraction}")
        };

        Decimal::from_str(&canonical).ok().map(Amount)
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    /// Text form with exactly two fractional digits; midpoints round away from zero.
    pub fn to_cents_string(self) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded.to_string()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalize price text to two fractional digits, or `None` when it is not a valid amount.
pub fn normalize_price(raw: &str) -> Option<String> {
    Amount::parse(raw).map(Amount::to_cents_string)
}

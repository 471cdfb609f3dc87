use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::amount::Amount;

/// Identifier wrapper for processed receipts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

/// Receipt payload as submitted by the caller.
///
/// Missing and `null` fields deserialize as empty values so validation can name the absent
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptSubmission {
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<ReceiptItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,
}

/// Line item on a submitted receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptItem {
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Receipt that passed validation, with amounts parsed once for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedReceipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ValidatedItem>,
    pub total: Amount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedItem {
    pub short_description: String,
    /// Price text normalized to two fractional digits.
    pub price: String,
    pub amount: Amount,
}

/// Points stored for one accepted receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    pub id: ReceiptId,
    pub points: u64,
    pub processed_at: DateTime<Utc>,
}

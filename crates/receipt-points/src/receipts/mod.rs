//! Receipt intake pipeline: validation, points scoring, and the in-memory score store.
//!
//! Submissions flow through [`ReceiptValidator`] into [`PointsEngine`]; the resulting
//! [`ScoreRecord`] is kept in a [`ScoreRepository`] injected into [`ReceiptService`].

pub mod amount;
pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use amount::{normalize_price, Amount};
pub use domain::{
    ReceiptId, ReceiptItem, ReceiptSubmission, ScoreRecord, ValidatedItem, ValidatedReceipt,
};
pub use repository::{InMemoryScoreRepository, RepositoryError, ScoreRepository};
pub use router::receipt_router;
pub use scoring::{PointsEngine, PointsOutcome, RuleContribution, ScoringRule};
pub use service::{ReceiptService, ReceiptServiceError};
pub use validation::{ReceiptValidator, ValidationError};

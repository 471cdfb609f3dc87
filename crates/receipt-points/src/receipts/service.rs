use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::domain::{ReceiptId, ReceiptSubmission, ScoreRecord};
use super::repository::{RepositoryError, ScoreRepository};
use super::scoring::{PointsEngine, PointsOutcome};
use super::validation::{ReceiptValidator, ValidationError};

/// Service composing the validator, points engine, and score repository.
pub struct ReceiptService<R> {
    validator: ReceiptValidator,
    engine: PointsEngine,
    repository: Arc<R>,
}

fn next_receipt_id() -> ReceiptId {
    ReceiptId(Uuid::new_v4().to_string())
}

impl<R> ReceiptService<R>
where
    R: ScoreRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            validator: ReceiptValidator,
            engine: PointsEngine::new(),
            repository,
        }
    }

    /// Validate and score a submission without storing anything.
    pub fn evaluate(
        &self,
        submission: ReceiptSubmission,
    ) -> Result<PointsOutcome, ReceiptServiceError> {
        let receipt = self.validator.validate(submission).map_err(|error| {
            warn!(reason = %error, "receipt rejected");
            error
        })?;

        let outcome = self.engine.score(&receipt);
        for contribution in &outcome.contributions {
            debug!(
                rule = contribution.rule.label(),
                points = contribution.points,
                notes = %contribution.notes,
                "points rule applied"
            );
        }

        Ok(outcome)
    }

    /// Validate, score, and store a submission under a freshly minted identifier.
    pub fn process(
        &self,
        submission: ReceiptSubmission,
    ) -> Result<ScoreRecord, ReceiptServiceError> {
        let outcome = self.evaluate(submission)?;

        let record = ScoreRecord {
            id: next_receipt_id(),
            points: outcome.total_points,
            processed_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(receipt_id = %stored.id.0, points = stored.points, "receipt processed");
        Ok(stored)
    }

    /// Fetch the stored points for a receipt.
    pub fn points(&self, receipt_id: &ReceiptId) -> Result<ScoreRecord, ReceiptServiceError> {
        let record = self
            .repository
            .fetch(receipt_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

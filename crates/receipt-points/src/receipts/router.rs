use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use super::domain::{ReceiptId, ReceiptSubmission};
use super::repository::{RepositoryError, ScoreRepository};
use super::service::{ReceiptService, ReceiptServiceError};

/// Body returned after a receipt is accepted.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedReceiptView {
    pub id: String,
}

/// Body returned for a points lookup.
#[derive(Debug, Clone, Serialize)]
pub struct PointsView {
    pub points: u64,
}

/// Router builder exposing the receipt processing and lookup endpoints.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ScoreRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:receipt_id/points", get(points_handler::<R>))
        .with_state(service)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let payload = json!({ "error": message.into() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    body: Bytes,
) -> Response
where
    R: ScoreRepository + 'static,
{
    // Content-Type is not required.
    let submission = match serde_json::from_slice::<ReceiptSubmission>(&body) {
        Ok(submission) => submission,
        Err(error) => {
            warn!(error = %error, "receipt body rejected");
            return error_response(StatusCode::BAD_REQUEST, "Failed to parse the request body");
        }
    };

    match service.process(submission) {
        Ok(record) => {
            let view = ProcessedReceiptView { id: record.id.0 };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ReceiptServiceError::Validation(error)) => {
            error_response(StatusCode::BAD_REQUEST, error.to_string())
        }
        Err(ReceiptServiceError::Repository(RepositoryError::Conflict)) => {
            error_response(StatusCode::CONFLICT, "receipt identifier already issued")
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    R: ScoreRepository + 'static,
{
    match service.points(&ReceiptId(receipt_id)) {
        Ok(record) => {
            let view = PointsView {
                points: record.points,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ReceiptServiceError::Repository(RepositoryError::NotFound)) => {
            error_response(StatusCode::NOT_FOUND, "Receipt not found")
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

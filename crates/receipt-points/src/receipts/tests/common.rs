use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::receipts::amount::Amount;
use crate::receipts::domain::{
    ReceiptId, ReceiptItem, ReceiptSubmission, ScoreRecord, ValidatedItem, ValidatedReceipt,
};
use crate::receipts::repository::{InMemoryScoreRepository, RepositoryError, ScoreRepository};
use crate::receipts::{receipt_router, ReceiptService};

pub(super) fn item(short_description: &str, price: &str) -> ReceiptItem {
    ReceiptItem {
        short_description: short_description.to_string(),
        price: price.to_string(),
    }
}

pub(super) fn target_submission() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

pub(super) fn corner_market_submission() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
        total: "9.00".to_string(),
    }
}

/// Build a receipt that skips validation so engine edge cases can be exercised directly.
pub(super) fn validated(
    retailer: &str,
    total: &str,
    purchase_date: &str,
    purchase_time: &str,
    items: &[(&str, &str)],
) -> ValidatedReceipt {
    ValidatedReceipt {
        retailer: retailer.to_string(),
        purchase_date: purchase_date.to_string(),
        purchase_time: purchase_time.to_string(),
        items: items
            .iter()
            .map(|(description, price)| {
                let amount = Amount::parse(price).expect("valid fixture price");
                ValidatedItem {
                    short_description: description.to_string(),
                    price: amount.to_cents_string(),
                    amount,
                }
            })
            .collect(),
        total: Amount::parse(total).expect("valid fixture total"),
    }
}

pub(super) fn build_service() -> (
    ReceiptService<InMemoryScoreRepository>,
    Arc<InMemoryScoreRepository>,
) {
    let repository = Arc::new(InMemoryScoreRepository::default());
    let service = ReceiptService::new(repository.clone());
    (service, repository)
}

pub(super) fn receipt_router_with_service(
    service: ReceiptService<InMemoryScoreRepository>,
) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) struct ConflictRepository;

impl ScoreRepository for ConflictRepository {
    fn insert(&self, _record: ScoreRecord) -> Result<ScoreRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl ScoreRepository for UnavailableRepository {
    fn insert(&self, _record: ScoreRecord) -> Result<ScoreRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

use super::amount::Amount;
use super::domain::{ReceiptSubmission, ValidatedItem, ValidatedReceipt};

/// Rejection reasons raised by the receipt validator, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Retailer name is required")]
    MissingRetailer,
    #[error("Total amount is required")]
    MissingTotal,
    #[error("Invalid total amount")]
    InvalidTotal,
    #[error("Purchase date is required")]
    MissingPurchaseDate,
    #[error("Purchase time is required")]
    MissingPurchaseTime,
    #[error("Receipt should have at least one item")]
    NoItems,
    #[error("Item short description is required")]
    MissingItemDescription,
    #[error("Invalid item price")]
    InvalidItemPrice,
}

/// Guard producing [`ValidatedReceipt`] instances from raw submissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptValidator;

impl ReceiptValidator {
    /// Validate a submission, reporting only the first violation found.
    pub fn validate(
        &self,
        submission: ReceiptSubmission,
    ) -> Result<ValidatedReceipt, ValidationError> {
        if submission.retailer.is_empty() {
            return Err(ValidationError::MissingRetailer);
        }

        if submission.total.is_empty() {
            return Err(ValidationError::MissingTotal);
        }
        let total = Amount::parse(&submission.total).ok_or(ValidationError::InvalidTotal)?;

        if submission.purchase_date.is_empty() {
            return Err(ValidationError::MissingPurchaseDate);
        }

        if submission.purchase_time.is_empty() {
            return Err(ValidationError::MissingPurchaseTime);
        }

        if submission.items.is_empty() {
            return Err(ValidationError::NoItems);
        }

        let mut items = Vec::with_capacity(submission.items.len());
        for item in submission.items {
            if item.short_description.is_empty() {
                return Err(ValidationError::MissingItemDescription);
            }
            let amount = Amount::parse(&item.price).ok_or(ValidationError::InvalidItemPrice)?;
            items.push(ValidatedItem {
                short_description: item.short_description,
                price: amount.to_cents_string(),
                amount,
            });
        }

        Ok(ValidatedReceipt {
            retailer: submission.retailer,
            purchase_date: submission.purchase_date,
            purchase_time: submission.purchase_time,
            items,
            total,
        })
    }
}

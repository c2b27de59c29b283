//! Feature encoding for fraud classifier inference.
//!
//! This module encodes a transaction into the fixed-order feature vector
//! that matches the features used during Python model training.

use chrono::Datelike;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::features::{slot, FeatureVector, FEATURE_COUNT};
use crate::types::transaction::{PaymentMethod, TransactionInput};

/// Encoder that transforms transactions into model input features.
///
/// Slot order matches the training pipeline exactly.
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Create a new feature extractor.
    pub fn new() -> Self {
        Self
    }

    /// Encode a transaction into the fixed 15-slot record.
    ///
    /// Every build starts from a fresh all-zero vector, so a failed attempt
    /// can never leak slot values from a previous transaction. Range
    /// violations are rejected before any capability is involved.
    pub fn extract(&self, tx: &TransactionInput) -> Result<FeatureVector> {
        if !tx.amount.is_finite() || tx.amount < 0.0 {
            return Err(Error::InvalidInput {
                field: "amount",
                message: format!("must be a non-negative number, got {}", tx.amount),
            });
        }
        if tx.quantity == 0 {
            return Err(Error::InvalidInput {
                field: "quantity",
                message: "must be at least 1".to_string(),
            });
        }
        if tx.hour > 23 {
            return Err(Error::InvalidInput {
                field: "hour",
                message: format!("must be in 0..=23, got {}", tx.hour),
            });
        }

        let mut features = FeatureVector::zeroed();

        features.set(slot::TRANSACTION_AMOUNT, tx.amount as f32);
        features.set(slot::PRODUCT_CATEGORY, tx.product_category.code());
        features.set(slot::QUANTITY, tx.quantity as f32);
        // The model was fitted with the age-group code in two slots.
        features.set(slot::CUSTOMER_AGE, tx.age_group.code());
        features.set(slot::AGE_GROUP, tx.age_group.code());
        features.set(slot::CUSTOMER_LOCATION, tx.location.code());
        features.set(slot::DEVICE_USED, tx.device.code());
        features.set(slot::TRANSACTION_HOUR, tx.hour as f32);

        features.set(slot::TRANSACTION_YEAR, tx.date.year() as f32);
        features.set(slot::TRANSACTION_MONTH, tx.date.month() as f32);
        features.set(slot::TRANSACTION_DAY, tx.date.day() as f32);
        // Monday = 0 .. Sunday = 6, matching the fitted artifacts
        features.set(
            slot::TRANSACTION_DOW,
            tx.date.weekday().num_days_from_monday() as f32,
        );

        let payment_slot = match tx.payment_method {
            PaymentMethod::BankTransfer => slot::PAYMENT_BANK_TRANSFER,
            PaymentMethod::CreditCard => slot::PAYMENT_CREDIT_CARD,
            PaymentMethod::DebitCard => slot::PAYMENT_DEBIT_CARD,
        };
        features.set(payment_slot, 1.0);

        debug!(payment = tx.payment_method.label(), "Transaction encoded");

        Ok(features)
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::transaction::{AgeGroup, CustomerLocation, Device, ProductCategory};
    use chrono::NaiveDate;

    fn sample() -> TransactionInput {
        TransactionInput {
            amount: 150.0,
            quantity: 2,
            hour: 14,
            product_category: ProductCategory::Electronics,
            age_group: AgeGroup::Age25To34,
            location: CustomerLocation::North,
            device: Device::Mobile,
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            payment_method: PaymentMethod::CreditCard,
        }
    }

    #[test]
    fn test_extract_known_transaction() {
        let extractor = FeatureExtractor::new();
        let features = extractor.extract(&sample()).unwrap();

        assert_eq!(features.get(slot::TRANSACTION_AMOUNT), 150.0);
        assert_eq!(features.get(slot::PRODUCT_CATEGORY), 0.0);
        assert_eq!(features.get(slot::QUANTITY), 2.0);
        assert_eq!(features.get(slot::CUSTOMER_AGE), 1.0);
        assert_eq!(features.get(slot::CUSTOMER_LOCATION), 0.0);
        assert_eq!(features.get(slot::DEVICE_USED), 0.0);
        assert_eq!(features.get(slot::TRANSACTION_HOUR), 14.0);
        assert_eq!(features.get(slot::AGE_GROUP), 1.0);
        assert_eq!(features.get(slot::TRANSACTION_YEAR), 2024.0);
        assert_eq!(features.get(slot::TRANSACTION_MONTH), 3.0);
        assert_eq!(features.get(slot::TRANSACTION_DAY), 15.0);
        // 2024-03-15 was a Friday
        assert_eq!(features.get(slot::TRANSACTION_DOW), 4.0);
        assert_eq!(features.get(slot::PAYMENT_BANK_TRANSFER), 0.0);
        assert_eq!(features.get(slot::PAYMENT_CREDIT_CARD), 1.0);
        assert_eq!(features.get(slot::PAYMENT_DEBIT_CARD), 0.0);
    }

    #[test]
    fn test_exactly_one_payment_flag() {
        let extractor = FeatureExtractor::new();

        for method in [
            PaymentMethod::BankTransfer,
            PaymentMethod::CreditCard,
            PaymentMethod::DebitCard,
        ] {
            let mut tx = sample();
            tx.payment_method = method;
            let features = extractor.extract(&tx).unwrap();

            let flags = [
                features.get(slot::PAYMENT_BANK_TRANSFER),
                features.get(slot::PAYMENT_CREDIT_CARD),
                features.get(slot::PAYMENT_DEBIT_CARD),
            ];
            assert_eq!(flags.iter().filter(|&&f| f == 1.0).count(), 1);
            assert_eq!(flags.iter().filter(|&&f| f == 0.0).count(), 2);
        }
    }

    #[test]
    fn test_age_slots_always_equal() {
        let extractor = FeatureExtractor::new();

        for age_group in [
            AgeGroup::Age18To24,
            AgeGroup::Age25To34,
            AgeGroup::Age35To44,
            AgeGroup::Age45To54,
            AgeGroup::Age55To64,
            AgeGroup::Age65Plus,
        ] {
            let mut tx = sample();
            tx.age_group = age_group;
            let features = extractor.extract(&tx).unwrap();

            assert_eq!(
                features.get(slot::CUSTOMER_AGE),
                features.get(slot::AGE_GROUP)
            );
        }
    }

    #[test]
    fn test_day_of_week_convention() {
        let extractor = FeatureExtractor::new();

        // 2024-03-11 was a Monday
        let mut tx = sample();
        tx.date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let features = extractor.extract(&tx).unwrap();
        assert_eq!(features.get(slot::TRANSACTION_DOW), 0.0);

        // 2024-03-17 was a Sunday
        tx.date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        let features = extractor.extract(&tx).unwrap();
        assert_eq!(features.get(slot::TRANSACTION_DOW), 6.0);
    }

    #[test]
    fn test_rejects_out_of_range_fields() {
        let extractor = FeatureExtractor::new();

        let mut tx = sample();
        tx.amount = -1.0;
        match extractor.extract(&tx).unwrap_err() {
            Error::InvalidInput { field, .. } => assert_eq!(field, "amount"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }

        let mut tx = sample();
        tx.quantity = 0;
        match extractor.extract(&tx).unwrap_err() {
            Error::InvalidInput { field, .. } => assert_eq!(field, "quantity"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }

        let mut tx = sample();
        tx.hour = 24;
        match extractor.extract(&tx).unwrap_err() {
            Error::InvalidInput { field, .. } => assert_eq!(field, "hour"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_extractions_are_independent() {
        let extractor = FeatureExtractor::new();

        let first = extractor.extract(&sample()).unwrap();

        let mut tx = sample();
        tx.amount = 9_000.0;
        tx.payment_method = PaymentMethod::DebitCard;
        let second = extractor.extract(&tx).unwrap();

        // The first vector is untouched by the second build
        assert_eq!(first.get(slot::TRANSACTION_AMOUNT), 150.0);
        assert_eq!(first.get(slot::PAYMENT_CREDIT_CARD), 1.0);
        assert_eq!(second.get(slot::TRANSACTION_AMOUNT), 9_000.0);
        assert_eq!(second.get(slot::PAYMENT_CREDIT_CARD), 0.0);
    }
}

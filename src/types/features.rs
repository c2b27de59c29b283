//! The fixed-order feature vector consumed by the classifier

use serde::{Deserialize, Serialize};

/// Number of feature slots the classifier was fitted with
pub const FEATURE_COUNT: usize = 15;

/// Slot indices into a [`FeatureVector`], in fitted order.
///
/// The order must match the training artifacts exactly; reordering or
/// omitting a slot silently corrupts predictions.
pub mod slot {
    pub const TRANSACTION_AMOUNT: usize = 0;
    pub const PRODUCT_CATEGORY: usize = 1;
    pub const QUANTITY: usize = 2;
    /// Encoded age group. The fitted model expects the same value again in
    /// [`AGE_GROUP`].
    pub const CUSTOMER_AGE: usize = 3;
    pub const CUSTOMER_LOCATION: usize = 4;
    pub const DEVICE_USED: usize = 5;
    pub const TRANSACTION_HOUR: usize = 6;
    /// Duplicate of [`CUSTOMER_AGE`], an upstream feature-engineering quirk
    /// baked into the fitted artifacts.
    pub const AGE_GROUP: usize = 7;
    pub const TRANSACTION_YEAR: usize = 8;
    pub const TRANSACTION_MONTH: usize = 9;
    pub const TRANSACTION_DAY: usize = 10;
    /// Day of week, Monday = 0 through Sunday = 6
    pub const TRANSACTION_DOW: usize = 11;
    pub const PAYMENT_BANK_TRANSFER: usize = 12;
    pub const PAYMENT_CREDIT_CARD: usize = 13;
    pub const PAYMENT_DEBIT_CARD: usize = 14;
}

/// Feature names in fitted order (matching the training pipeline)
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Transaction Amount",
    "Product Category",
    "Quantity",
    "Customer Age",
    "Customer Location",
    "Device Used",
    "Transaction Hour",
    "AgeGroup",
    "Transaction_Year",
    "Transaction_Month",
    "Transaction_Day",
    "Transaction_DOW",
    "Payment Method_bank transfer",
    "Payment Method_credit card",
    "Payment Method_debit card",
];

/// Slots passed through the numeric scaler, in scaler column order.
///
/// Every other slot bypasses scaling untouched.
pub const SCALED_SLOTS: [usize; 7] = [
    slot::TRANSACTION_AMOUNT,
    slot::PRODUCT_CATEGORY,
    slot::QUANTITY,
    slot::CUSTOMER_AGE,
    slot::CUSTOMER_LOCATION,
    slot::DEVICE_USED,
    slot::TRANSACTION_HOUR,
];

/// One transaction encoded as the fixed 15-slot record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector {
    values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// All-zero vector, the starting point of every build
    pub fn zeroed() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
        }
    }

    pub fn get(&self, slot: usize) -> f32 {
        self.values[slot]
    }

    pub fn set(&mut self, slot: usize, value: f32) {
        self.values[slot] = value;
    }

    /// The raw slots in fitted order, as the classifier consumes them
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Iterate (name, value) pairs in fitted order
    pub fn named_values(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_names_match_count() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_scaled_slots_are_leading_columns() {
        // The scaler was fitted on the first seven columns in order
        assert_eq!(SCALED_SLOTS, [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_zeroed_vector() {
        let features = FeatureVector::zeroed();
        assert_eq!(features.as_slice().len(), FEATURE_COUNT);
        assert!(features.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_named_values_order() {
        let mut features = FeatureVector::zeroed();
        features.set(slot::TRANSACTION_AMOUNT, 42.0);

        let (name, value) = features.named_values().next().unwrap();
        assert_eq!(name, "Transaction Amount");
        assert_eq!(value, 42.0);
    }
}

//! The prediction pipeline: encode, scale, classify

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::error::Result;
use crate::feature_extractor::FeatureExtractor;
use crate::models::{scale_in_place, Classifier, FeatureScaler};
use crate::types::transaction::TransactionInput;
use crate::types::verdict::{Prediction, Verdict};

/// Runs one transaction through encode, scale, and classify.
///
/// The capabilities are shared read-only; the pipeline holds no per-session
/// state and can serve any number of sessions.
pub struct PredictionPipeline {
    extractor: FeatureExtractor,
    scaler: Arc<dyn FeatureScaler>,
    classifier: Arc<dyn Classifier>,
}

impl PredictionPipeline {
    pub fn new(scaler: Arc<dyn FeatureScaler>, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            extractor: FeatureExtractor::new(),
            scaler,
            classifier,
        }
    }

    /// Score a single transaction.
    ///
    /// The classifier is invoked exactly once per attempt; an error at any
    /// stage aborts the attempt and nothing downstream runs.
    pub fn predict(&self, tx: &TransactionInput) -> Result<Prediction> {
        let start = Instant::now();

        let mut features = self.extractor.extract(tx)?;
        scale_in_place(&mut features, self.scaler.as_ref())?;
        let label = self.classifier.predict(features.as_slice())?;
        let verdict = Verdict::from_label(label);

        info!(
            %verdict,
            label,
            processing_time_us = start.elapsed().as_micros() as u64,
            "Prediction complete"
        );

        Ok(Prediction::new(verdict, features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::transaction::{
        AgeGroup, CustomerLocation, Device, PaymentMethod, ProductCategory,
    };
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct IdentityScaler;

    impl FeatureScaler for IdentityScaler {
        fn transform(&self, values: &[f32]) -> Result<Vec<f32>> {
            Ok(values.to_vec())
        }
    }

    struct FailingScaler;

    impl FeatureScaler for FailingScaler {
        fn transform(&self, _values: &[f32]) -> Result<Vec<f32>> {
            Err(Error::Scaling("dimension mismatch".to_string()))
        }
    }

    struct FixedClassifier {
        label: i64,
        calls: AtomicUsize,
    }

    impl FixedClassifier {
        fn new(label: i64) -> Self {
            Self {
                label,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Classifier for FixedClassifier {
        fn predict(&self, features: &[f32]) -> Result<i64> {
            assert_eq!(features.len(), 15);
            self.calls.fetch_add(1, Ordering::Relaxed);
            Ok(self.label)
        }
    }

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
    fn test_label_one_is_fraudulent() {
        let pipeline = PredictionPipeline::new(
            Arc::new(IdentityScaler),
            Arc::new(FixedClassifier::new(1)),
        );

        let prediction = pipeline.predict(&sample()).unwrap();
        assert_eq!(prediction.verdict, Verdict::Fraudulent);
    }

    #[test]
    fn test_label_zero_is_legitimate() {
        let pipeline = PredictionPipeline::new(
            Arc::new(IdentityScaler),
            Arc::new(FixedClassifier::new(0)),
        );

        let prediction = pipeline.predict(&sample()).unwrap();
        assert_eq!(prediction.verdict, Verdict::Legitimate);
    }

    #[test]
    fn test_invalid_input_stops_before_capabilities() {
        let classifier = Arc::new(FixedClassifier::new(0));
        let pipeline = PredictionPipeline::new(Arc::new(FailingScaler), classifier.clone());

        let mut tx = sample();
        tx.hour = 24;

        // The builder rejects the input before the scaler or classifier run
        match pipeline.predict(&tx).unwrap_err() {
            Error::InvalidInput { field, .. } => assert_eq!(field, "hour"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
        assert_eq!(classifier.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_scaler_failure_stops_before_classifier() {
        let classifier = Arc::new(FixedClassifier::new(1));
        let pipeline = PredictionPipeline::new(Arc::new(FailingScaler), classifier.clone());

        match pipeline.predict(&sample()).unwrap_err() {
            Error::Scaling(message) => assert!(message.contains("dimension mismatch")),
            other => panic!("expected Scaling, got {other:?}"),
        }
        assert_eq!(classifier.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_classifier_invoked_once_per_prediction() {
        let classifier = Arc::new(FixedClassifier::new(0));
        let pipeline = PredictionPipeline::new(Arc::new(IdentityScaler), classifier.clone());

        pipeline.predict(&sample()).unwrap();
        pipeline.predict(&sample()).unwrap();
        assert_eq!(classifier.calls.load(Ordering::Relaxed), 2);
    }
}

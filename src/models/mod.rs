//! Model capabilities and their concrete providers

pub mod inference;
pub mod loader;
pub mod scaler;

use crate::error::Result;

/// Pre-trained binary classifier capability.
///
/// Takes the full 15-slot record in fitted order and returns the raw integer
/// class label (1 = fraud). Implementations are shared read-only across
/// sessions.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f32]) -> Result<i64>;
}

/// Fitted numeric scaler capability.
///
/// Receives the scaled-column sub-vector in fitted order and returns the
/// transformed values in the same order and length.
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, values: &[f32]) -> Result<Vec<f32>>;
}

pub use inference::OnnxClassifier;
pub use loader::ModelLoader;
pub use scaler::{scale_in_place, StandardScaleParams};

//! Numeric scaling for the model's standardized columns

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::models::FeatureScaler;
use crate::types::features::{FeatureVector, SCALED_SLOTS};

/// Fitted standard-scale parameters, one mean/scale pair per scaled column.
///
/// The JSON artifact is exported from the training pipeline's fitted scaler
/// and must carry exactly one pair per scaled column, in column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaleParams {
    pub means: Vec<f64>,
    pub scales: Vec<f64>,
}

impl StandardScaleParams {
    /// Build parameters directly, validating the column count.
    pub fn new(means: Vec<f64>, scales: Vec<f64>) -> anyhow::Result<Self> {
        let params = Self { means, scales };
        params.validate().map_err(anyhow::Error::msg)?;
        Ok(params)
    }

    /// Load scaler parameters from a JSON artifact.
    ///
    /// Unreadable files and column-count mismatches are fatal at startup.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scaler parameters from {:?}", path))?;
        let params: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse scaler parameters from {:?}", path))?;
        params.validate().map_err(anyhow::Error::msg)?;

        info!(
            path = %path.display(),
            columns = params.means.len(),
            "Scaler parameters loaded"
        );
        Ok(params)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.means.len() != SCALED_SLOTS.len() || self.scales.len() != SCALED_SLOTS.len() {
            return Err(format!(
                "expected {} mean/scale pairs, got {} means and {} scales",
                SCALED_SLOTS.len(),
                self.means.len(),
                self.scales.len()
            ));
        }
        if self.scales.iter().any(|&s| s == 0.0) {
            return Err("scale of 0.0 would divide by zero".to_string());
        }
        Ok(())
    }
}

impl FeatureScaler for StandardScaleParams {
    fn transform(&self, values: &[f32]) -> Result<Vec<f32>> {
        if values.len() != self.means.len() {
            return Err(Error::Scaling(format!(
                "expected {} columns, got {}",
                self.means.len(),
                values.len()
            )));
        }

        Ok(values
            .iter()
            .zip(self.means.iter().zip(self.scales.iter()))
            .map(|(&value, (&mean, &scale))| ((value as f64 - mean) / scale) as f32)
            .collect())
    }
}

/// Apply the fitted transform to the scaled columns of a feature vector.
///
/// Exactly the declared subset is replaced in place, in fitted column order;
/// every other slot is left bit-identical. A wrong-length scaler output is a
/// scaling error and the vector keeps its unscaled values.
pub fn scale_in_place(features: &mut FeatureVector, scaler: &dyn FeatureScaler) -> Result<()> {
    let subset: Vec<f32> = SCALED_SLOTS.iter().map(|&s| features.get(s)).collect();

    let scaled = scaler.transform(&subset)?;
    if scaled.len() != SCALED_SLOTS.len() {
        return Err(Error::Scaling(format!(
            "scaler returned {} columns, expected {}",
            scaled.len(),
            SCALED_SLOTS.len()
        )));
    }

    for (&slot, value) in SCALED_SLOTS.iter().zip(scaled) {
        features.set(slot, value);
    }
    Ok(())
}

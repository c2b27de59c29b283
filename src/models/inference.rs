//! ONNX-backed classifier capability

use std::sync::RwLock;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::loader::LoadedSession;
use crate::models::Classifier;

/// Binary fraud classifier backed by an ONNX Runtime session.
///
/// `Session::run` needs mutable access, so the session sits behind a lock;
/// the classifier itself is shared read-only across sessions.
pub struct OnnxClassifier {
    inner: RwLock<LoadedSession>,
}

impl OnnxClassifier {
    pub fn new(session: LoadedSession) -> Self {
        Self {
            inner: RwLock::new(session),
        }
    }

    /// Run the session on a single feature vector
    fn run_session(model: &mut LoadedSession, features: &[f32]) -> Result<i64> {
        use ort::value::Tensor;

        // Input tensor shape [1, num_features]
        let shape = vec![1_i64, features.len() as i64];
        let input_tensor = Tensor::from_array((shape, features.to_vec()))
            .map_err(|e| Error::Inference(format!("failed to create input tensor: {e}")))?;

        let output_name = model.output_name.clone();

        let outputs = model
            .session
            .run(ort::inputs![&model.input_name => input_tensor])
            .map_err(|e| Error::Inference(e.to_string()))?;

        Self::extract_label(&outputs, &output_name)
    }

    /// Extract the class label from model output.
    ///
    /// Primary path is the `label` output as an i64 tensor; models that only
    /// expose class probabilities fall back to an argmax over the f32 tensor.
    fn extract_label(outputs: &ort::session::SessionOutputs, output_name: &str) -> Result<i64> {
        if let Some(output) = outputs.get(output_name) {
            if let Ok((_, data)) = output.try_extract_tensor::<i64>() {
                if let Some(&label) = data.first() {
                    return Ok(label);
                }
            }
        }

        // Fallback: scan all outputs for a label tensor, then for
        // probabilities
        for (_name, output) in outputs.iter() {
            if let Ok((_, data)) = output.try_extract_tensor::<i64>() {
                if let Some(&label) = data.first() {
                    return Ok(label);
                }
            }

            if let Ok((shape, data)) = output.try_extract_tensor::<f32>() {
                let dims: Vec<i64> = shape.iter().copied().collect();
                let num_classes = dims.last().copied().unwrap_or(0) as usize;

                if num_classes >= 2 && data.len() >= 2 {
                    // [batch, num_classes] probabilities; class 1 is fraud
                    return Ok(if data[1] >= data[0] { 1 } else { 0 });
                }
                if let Some(&prob) = data.first() {
                    // Single fraud probability
                    return Ok(if prob >= 0.5 { 1 } else { 0 });
                }
            }
        }

        Err(Error::Inference(
            "no label output in classifier result".to_string(),
        ))
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &[f32]) -> Result<i64> {
        let mut model = self
            .inner
            .write()
            .map_err(|e| Error::Inference(format!("classifier lock poisoned: {e}")))?;

        let label = Self::run_session(&mut model, features)?;
        debug!(label, "Classifier invoked");
        Ok(label)
    }
}

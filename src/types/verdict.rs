//! Verdict types produced by the classifier

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::features::FeatureVector;

/// Binary classification outcome for one transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Fraudulent,
    Legitimate,
}

impl Verdict {
    /// Map the classifier's raw integer label to a verdict.
    ///
    /// Label 1 means fraud; any other value (0 in practice) is legitimate.
    pub fn from_label(label: i64) -> Self {
        if label == 1 {
            Verdict::Fraudulent
        } else {
            Verdict::Legitimate
        }
    }

    pub fn is_fraudulent(self) -> bool {
        matches!(self, Verdict::Fraudulent)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Fraudulent => write!(f, "fraudulent"),
            Verdict::Legitimate => write!(f, "legitimate"),
        }
    }
}

/// A completed prediction: the verdict plus the exact record that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Final classification outcome
    pub verdict: Verdict,

    /// The scaled feature vector the classifier saw
    pub features: FeatureVector,

    /// When the prediction was made
    pub timestamp: DateTime<Utc>,
}

impl Prediction {
    pub fn new(verdict: Verdict, features: FeatureVector) -> Self {
        Self {
            verdict,
            features,
            timestamp: Utc::now(),
        }
    }
}

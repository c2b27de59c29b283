//! E-Commerce Fraud Detection
//!
//! Encodes a single transaction into the fixed-order feature vector a
//! pre-trained binary classifier was fitted with, runs the classifier, and
//! carries the verdict through a page/session state machine.

pub mod config;
pub mod error;
pub mod feature_extractor;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use feature_extractor::FeatureExtractor;
pub use pipeline::PredictionPipeline;
pub use session::{Page, Session};
pub use types::{features::FeatureVector, transaction::TransactionInput, verdict::Verdict};

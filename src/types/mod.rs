//! Type definitions for the fraud verdict pipeline

pub mod features;
pub mod transaction;
pub mod verdict;

pub use features::FeatureVector;
pub use transaction::TransactionInput;
pub use verdict::{Prediction, Verdict};

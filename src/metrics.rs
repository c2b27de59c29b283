//! Prediction counters and latency statistics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Duration;
use tracing::info;

use crate::types::verdict::Verdict;

/// Metrics collector for the prediction pipeline
pub struct PipelineMetrics {
    /// Total predictions served
    pub predictions_total: AtomicU64,
    /// Predictions judged fraudulent
    pub fraud_total: AtomicU64,
    /// Predictions judged legitimate
    pub legit_total: AtomicU64,
    /// Failed prediction attempts
    pub errors_total: AtomicU64,
    /// Processing times (in microseconds)
    processing_times: RwLock<Vec<u64>>,
}

impl PipelineMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            predictions_total: AtomicU64::new(0),
            fraud_total: AtomicU64::new(0),
            legit_total: AtomicU64::new(0),
            errors_total: AtomicU64::new(0),
            processing_times: RwLock::new(Vec::with_capacity(1000)),
        }
    }

    /// Record a completed prediction
    pub fn record_prediction(&self, verdict: Verdict, processing_time: Duration) {
        self.predictions_total.fetch_add(1, Ordering::Relaxed);
        match verdict {
            Verdict::Fraudulent => self.fraud_total.fetch_add(1, Ordering::Relaxed),
            Verdict::Legitimate => self.legit_total.fetch_add(1, Ordering::Relaxed),
        };

        if let Ok(mut times) = self.processing_times.write() {
            times.push(processing_time.as_micros() as u64);
            // Keep only the recent window for memory efficiency
            if times.len() > 10000 {
                times.drain(0..5000);
            }
        }
    }

    /// Record a failed prediction attempt
    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get processing time statistics
    pub fn get_processing_stats(&self) -> ProcessingStats {
        let times = self.processing_times.read().unwrap();
        if times.is_empty() {
            return ProcessingStats::default();
        }

        let mut sorted: Vec<u64> = times.clone();
        sorted.sort();

        let sum: u64 = sorted.iter().sum();
        let count = sorted.len();

        ProcessingStats {
            count: count as u64,
            mean_us: sum / count as u64,
            p50_us: sorted[count / 2],
            p95_us: sorted[(count as f64 * 0.95) as usize],
            p99_us: sorted[(count as f64 * 0.99) as usize],
            max_us: *sorted.last().unwrap_or(&0),
        }
    }

    /// Print summary statistics
    pub fn print_summary(&self) {
        let predictions = self.predictions_total.load(Ordering::Relaxed);
        let fraud = self.fraud_total.load(Ordering::Relaxed);
        let legit = self.legit_total.load(Ordering::Relaxed);
        let errors = self.errors_total.load(Ordering::Relaxed);
        let fraud_rate = if predictions > 0 {
            (fraud as f64 / predictions as f64) * 100.0
        } else {
            0.0
        };

        let processing = self.get_processing_stats();

        info!(
            predictions,
            fraudulent = fraud,
            legitimate = legit,
            errors,
            fraud_rate = format!("{:.1}%", fraud_rate),
            "Session summary"
        );
        info!(
            mean_us = processing.mean_us,
            p50_us = processing.p50_us,
            p95_us = processing.p95_us,
            p99_us = processing.p99_us,
            "Prediction latency (μs)"
        );
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Processing time statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub count: u64,
    pub mean_us: u64,
    pub p50_us: u64,
    pub p95_us: u64,
    pub p99_us: u64,
    pub max_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_recording() {
        let metrics = PipelineMetrics::new();

        metrics.record_prediction(Verdict::Fraudulent, Duration::from_micros(100));
        metrics.record_prediction(Verdict::Legitimate, Duration::from_micros(200));
        metrics.record_error();

        assert_eq!(metrics.predictions_total.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.fraud_total.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.legit_total.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.errors_total.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_processing_stats() {
        let metrics = PipelineMetrics::new();

        for us in [100, 200, 300, 400] {
            metrics.record_prediction(Verdict::Legitimate, Duration::from_micros(us));
        }

        let stats = metrics.get_processing_stats();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean_us, 250);
        assert_eq!(stats.max_us, 400);
    }

    #[test]
    fn test_empty_stats_default_to_zero() {
        let metrics = PipelineMetrics::new();
        let stats = metrics.get_processing_stats();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean_us, 0);
    }
}

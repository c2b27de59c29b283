//! E-Commerce Fraud Detection - Main Entry Point
//!
//! Loads the classifier and scaler artifacts, then drives one interactive
//! session through the page state machine with line commands on stdin.

use std::io::{self, BufRead};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use ecommerce_fraud_detection::{
    config::AppConfig,
    metrics::PipelineMetrics,
    models::{ModelLoader, OnnxClassifier, StandardScaleParams},
    pipeline::PredictionPipeline,
    session::{Page, Session},
    types::transaction::TransactionInput,
    types::verdict::Verdict,
};
use tracing::{error, info};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ecommerce_fraud_detection=info".parse()?),
        )
        .init();

    info!("Starting E-Commerce Fraud Detection");

    // Load configuration
    let config = AppConfig::load()?;
    info!("Configuration loaded successfully");

    // Both artifacts load once at startup; failure here is fatal.
    let scaler = Arc::new(
        StandardScaleParams::load_from_path(&config.scaler.path)
            .context("Scaler artifact unavailable")?,
    );

    let loader = ModelLoader::with_threads(config.model.onnx_threads)?;
    let classifier = Arc::new(OnnxClassifier::new(
        loader
            .load(&config.model.path)
            .context("Classifier artifact unavailable")?,
    ));

    let pipeline = PredictionPipeline::new(scaler, classifier);
    let metrics = PipelineMetrics::new();
    let mut session = Session::new();
    info!(session_id = %session.id(), "Session ready");

    render_page(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "home" => session.navigate(Page::Home),
            "prediction" => session.navigate(Page::Prediction),
            "result" => session.navigate(Page::Result),
            "about" => session.navigate(Page::About),
            "predict" => match serde_json::from_str::<TransactionInput>(rest) {
                Ok(tx) => {
                    let start = Instant::now();
                    match session.run_prediction(&tx, &pipeline) {
                        Ok(verdict) => {
                            metrics.record_prediction(verdict, start.elapsed());
                        }
                        Err(e) => {
                            metrics.record_error();
                            error!(error = %e, "Prediction failed");
                            println!("error: {e}");
                        }
                    }
                }
                Err(e) => {
                    metrics.record_error();
                    println!("error: transaction JSON not understood: {e}");
                }
            },
            "another" => session.predict_another(),
            "quit" | "exit" => break,
            _ => {
                println!("commands: home | prediction | result | about | predict <json> | another | quit");
                continue;
            }
        }

        render_page(&session);
    }

    info!("Session ended");
    metrics.print_summary();

    Ok(())
}

/// Render the current page to stdout
fn render_page(session: &Session) {
    match session.page() {
        Page::Home => {
            println!("== Home ==");
            println!("Welcome to the E-Commerce Fraud Detection System.");
            println!("This system predicts fraudulent transactions using a pre-trained model.");
        }
        Page::Prediction => {
            println!("== Prediction ==");
            println!("Submit a transaction with: predict <json>");
            println!(
                "example: predict {}",
                r#"{"amount":150.0,"quantity":2,"hour":14,"product_category":"Electronics","age_group":"25-34","location":"North","device":"Mobile","date":"2024-03-15","payment_method":"credit card"}"#
            );
        }
        Page::Result => {
            println!("== Result ==");
            match session.last_prediction() {
                Some(prediction) => {
                    match prediction.verdict {
                        Verdict::Fraudulent => println!("Fraudulent Transaction Detected!"),
                        Verdict::Legitimate => println!("Legitimate Transaction"),
                    }
                    println!("Transaction details:");
                    for (name, value) in prediction.features.named_values() {
                        println!("  {name}: {value}");
                    }
                    println!("Start a new prediction with: another");
                }
                None => println!("No prediction yet. Go to the Prediction page first."),
            }
        }
        Page::About => {
            println!("== About ==");
            println!("Predicts fraudulent e-commerce transactions with a pre-trained classifier.");
            println!("Numeric features are scaled and categoricals encoded to match training.");
        }
    }
}

//! Session and page state machine.
//!
//! Navigation and carried prediction state for one user's interaction
//! lifetime, decoupled from any rendering mechanism. Each session is an
//! owned object, so concurrent sessions never share state.

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::Result;
use crate::pipeline::PredictionPipeline;
use crate::types::features::FeatureVector;
use crate::types::transaction::TransactionInput;
use crate::types::verdict::{Prediction, Verdict};

/// Pages a session can be on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Prediction,
    Result,
    About,
}

/// One user's sequential interaction lifetime.
///
/// Holds the current page and the last completed prediction. Mutated only
/// through the transition handlers below; dropped at session end, never
/// persisted.
#[derive(Debug)]
pub struct Session {
    session_id: Uuid,
    page: Page,
    last_prediction: Option<Prediction>,
}

impl Session {
    /// Start a fresh session on the Home page.
    pub fn new() -> Self {
        let session_id = Uuid::new_v4();
        debug!(%session_id, "Session started");
        Self {
            session_id,
            page: Page::Home,
            last_prediction: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.session_id
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Navigate to any page.
    ///
    /// Navigation alone never touches carried state, so a completed Result
    /// survives a detour through Home or About.
    pub fn navigate(&mut self, page: Page) {
        debug!(
            session_id = %self.session_id,
            from = ?self.page,
            to = ?page,
            "Navigating"
        );
        self.page = page;
    }

    /// Run a prediction and move to the Result page.
    ///
    /// The stored vector and verdict are replaced together, and only after
    /// the whole pipeline has succeeded; on any error the session keeps its
    /// page and its previous prediction untouched.
    pub fn run_prediction(
        &mut self,
        tx: &TransactionInput,
        pipeline: &PredictionPipeline,
    ) -> Result<Verdict> {
        let prediction = pipeline.predict(tx)?;
        let verdict = prediction.verdict;

        info!(session_id = %self.session_id, %verdict, "Prediction stored");
        self.last_prediction = Some(prediction);
        self.page = Page::Result;
        Ok(verdict)
    }

    /// Clear the stored prediction and return to the form.
    ///
    /// A stale Result must never reappear for a new, incomplete round.
    pub fn predict_another(&mut self) {
        self.last_prediction = None;
        self.page = Page::Prediction;
    }

    /// Feature vector from the last successful prediction, if any.
    pub fn last_vector(&self) -> Option<&FeatureVector> {
        self.last_prediction.as_ref().map(|p| &p.features)
    }

    /// Verdict from the last successful prediction, if any.
    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last_prediction.as_ref().map(|p| p.verdict)
    }

    pub fn last_prediction(&self) -> Option<&Prediction> {
        self.last_prediction.as_ref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

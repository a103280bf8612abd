//! Trip planning pipeline
//!
//! One run per user action: collect, build queries, fetch evidence,
//! synthesize, present. Nothing is kept between runs.

use crate::collector::{TripForm, collect};
use crate::evidence::fetch_evidence;
use crate::models::{TripRequest, evidence_context};
use crate::presenter::{Presentation, present};
use crate::query::{TripQueries, build_queries};
use crate::search::SearchProvider;
use crate::synthesizer::ReportSynthesizer;
use crate::Result;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Transient state of a planning run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStage {
    Idle,
    Collecting,
    Fetching,
    Synthesizing,
    Presenting,
}

impl PlanStage {
    /// Progress line shown while the stage runs, if it has one
    #[must_use]
    pub fn progress_message(self, request: Option<&TripRequest>) -> Option<String> {
        match (self, request) {
            (PlanStage::Fetching, Some(request)) => Some(format!(
                "🔎 Buscando vuelos desde {} y hoteles en {}...",
                request.origin(),
                request.destination()
            )),
            (PlanStage::Synthesizing, _) => {
                Some("💡 Armando cotización e itinerario...".to_string())
            }
            _ => None,
        }
    }
}

impl fmt::Display for PlanStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlanStage::Idle => "idle",
            PlanStage::Collecting => "collecting",
            PlanStage::Fetching => "fetching",
            PlanStage::Synthesizing => "synthesizing",
            PlanStage::Presenting => "presenting",
        };
        f.write_str(name)
    }
}

/// Notified on every stage transition
pub trait StageObserver: Send + Sync {
    fn on_stage(&self, stage: PlanStage, request: Option<&TripRequest>);
}

pub struct NoopObserver;

impl StageObserver for NoopObserver {
    fn on_stage(&self, _stage: PlanStage, _request: Option<&TripRequest>) {}
}

/// Result of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct TripPlan {
    pub request: TripRequest,
    pub queries: TripQueries,
    pub presentation: Presentation,
}

pub struct TripPlanner {
    search: Arc<dyn SearchProvider>,
    synthesizer: ReportSynthesizer,
    observer: Arc<dyn StageObserver>,
}

impl TripPlanner {
    pub fn new(search: Arc<dyn SearchProvider>, synthesizer: ReportSynthesizer) -> Self {
        Self {
            search,
            synthesizer,
            observer: Arc::new(NoopObserver),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn StageObserver>) -> Self {
        self.observer = observer;
        self
    }

    fn enter(&self, stage: PlanStage, request: Option<&TripRequest>) {
        info!(%stage, "Plan stage");
        self.observer.on_stage(stage, request);
    }

    /// Run the whole pipeline for one form submission.
    ///
    /// Collection errors stop the run before any search or model call. A
    /// search failure does not: the failure line stands in for the evidence.
    /// A model failure ends the run with an error.
    #[instrument(skip_all)]
    pub async fn generate(&self, form: TripForm) -> Result<TripPlan> {
        self.enter(PlanStage::Collecting, None);
        let collected = match collect(form) {
            Ok(collected) => collected,
            Err(e) => {
                warn!("Trip form rejected: {}", e);
                self.enter(PlanStage::Idle, None);
                return Err(e);
            }
        };
        let request = collected.request;

        let queries = build_queries(&request);

        self.enter(PlanStage::Fetching, Some(&request));
        let outcome = fetch_evidence(self.search.as_ref(), &queries).await;
        let evidence = evidence_context(&outcome);

        self.enter(PlanStage::Synthesizing, Some(&request));
        let report = match self
            .synthesizer
            .synthesize(&request, &evidence, &collected.credential)
            .await
        {
            Ok(report) => report,
            Err(e) => {
                self.enter(PlanStage::Idle, Some(&request));
                return Err(e);
            }
        };

        self.enter(PlanStage::Presenting, Some(&request));
        let presentation = present(report, evidence);
        self.enter(PlanStage::Idle, Some(&request));

        Ok(TripPlan {
            request,
            queries,
            presentation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetTier, Interest};
    use chrono::NaiveDate;

    #[test]
    fn test_progress_messages() {
        let request = TripRequest::new(
            "Lima",
            "Cusco",
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
            1,
            BudgetTier::Economy,
            Interest::defaults(),
        )
        .unwrap();

        assert_eq!(
            PlanStage::Fetching.progress_message(Some(&request)).unwrap(),
            "🔎 Buscando vuelos desde Lima y hoteles en Cusco..."
        );
        assert!(PlanStage::Synthesizing.progress_message(None).is_some());
        assert!(PlanStage::Collecting.progress_message(Some(&request)).is_none());
        assert!(PlanStage::Idle.progress_message(None).is_none());
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(PlanStage::Synthesizing.to_string(), "synthesizing");
        assert_eq!(PlanStage::Idle.to_string(), "idle");
    }
}

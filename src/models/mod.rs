//! Data models for the Viajero planner
//!
//! Every value here lives for a single planning run:
//! - Trip: the validated trip request and its fixed option sets
//! - Evidence: raw web search text gathered for the request
//! - Report: the Markdown report returned by the language model

pub mod evidence;
pub mod report;
pub mod trip;

// Re-export all public types for convenient access
pub use evidence::{EvidenceBundle, EvidenceFailure, EvidenceOutcome, evidence_context};
pub use report::TripReport;
pub use trip::{BudgetTier, Interest, TripRequest};

//! Viajero - AI travel planning assistant
//!
//! Collects a trip request, searches the web for flight, hotel and weather
//! references, and asks a language model for a cost estimate and a
//! day-by-day itinerary.

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod evidence;
pub mod llm;
pub mod models;
pub mod planner;
pub mod presenter;
pub mod prompt;
pub mod query;
pub mod search;
pub mod synthesizer;

// Re-export core types for public API
pub use collector::{CollectedTrip, TripForm, collect};
pub use config::ViajeroConfig;
pub use error::ViajeroError;
pub use evidence::fetch_evidence;
pub use llm::{LlmClient, OpenAiClient};
pub use models::{BudgetTier, EvidenceBundle, Interest, TripReport, TripRequest};
pub use planner::{PlanStage, StageObserver, TripPlan, TripPlanner};
pub use presenter::{Presentation, present};
pub use query::{TripQueries, build_queries};
pub use search::{DuckDuckGoClient, SearchProvider};
pub use synthesizer::ReportSynthesizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ViajeroError>;

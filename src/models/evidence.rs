//! Web evidence gathered for one planning run

use serde::Serialize;
use std::fmt;

/// Raw search text for the three evidence queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceBundle {
    pub flights: String,
    pub hotels: String,
    pub weather: String,
}

impl EvidenceBundle {
    /// Labelled evidence block handed to the prompt and the evidence pane
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "- INFO VUELOS ENCONTRADA: {}\n- INFO HOTELES ENCONTRADA: {}\n- CLIMA PRONOSTICADO: {}",
            self.flights, self.hotels, self.weather
        )
    }
}

/// The evidence step failed as a whole
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceFailure {
    pub message: String,
}

impl EvidenceFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for EvidenceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error buscando datos en vivo: {}", self.message)
    }
}

pub type EvidenceOutcome = Result<EvidenceBundle, EvidenceFailure>;

/// Evidence text that flows downstream: the rendered bundle, or the failure
/// line in its place.
#[must_use]
pub fn evidence_context(outcome: &EvidenceOutcome) -> String {
    match outcome {
        Ok(bundle) => bundle.render(),
        Err(failure) => failure.to_string(),
    }
}

//! Input collection
//!
//! Turns the raw trip form into a validated [`TripRequest`] plus the
//! credential for the run, or stops the run before any external call.

use crate::models::{BudgetTier, Interest, TripRequest};
use crate::{Result, ViajeroError};
use chrono::{Days, NaiveDate};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Display format of the date selector (day/month/year)
pub const FORM_DATE_FORMAT: &str = "%d/%m/%Y";

pub const MIN_PASSENGERS: u8 = 1;
pub const MAX_PASSENGERS: u8 = 10;

/// Raw values of the trip form, as entered by the user
#[derive(Debug, Clone)]
pub struct TripForm {
    pub credential: Option<SecretString>,
    pub origin: String,
    pub destination: String,
    /// Whatever the date selector produced; a valid run needs exactly two
    pub dates: Vec<NaiveDate>,
    pub budget: BudgetTier,
    pub interests: Vec<Interest>,
    pub passengers: u8,
}

impl TripForm {
    /// A fresh form with the preset values
    #[must_use]
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            credential: None,
            origin: "Ciudad de México".to_string(),
            destination: "Madrid, España".to_string(),
            dates: default_dates(today),
            budget: BudgetTier::Standard,
            interests: Interest::defaults(),
            passengers: 2,
        }
    }
}

/// Outbound in 30 days, back a week later
#[must_use]
pub fn default_dates(today: NaiveDate) -> Vec<NaiveDate> {
    [30, 37]
        .into_iter()
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .collect()
}

/// Parse a `DD/MM/YYYY` date as shown by the form
pub fn parse_form_date(input: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), FORM_DATE_FORMAT)
        .map_err(|e| format!("fecha inválida '{input}' (formato DD/MM/AAAA): {e}"))
}

/// A validated run: the credential and the trip request
#[derive(Debug, Clone)]
pub struct CollectedTrip {
    pub credential: SecretString,
    pub request: TripRequest,
}

/// Validate the form.
///
/// Only the credential and the date range are checked; origin and destination
/// accept any text and the passenger count is clamped to the widget bounds.
pub fn collect(form: TripForm) -> Result<CollectedTrip> {
    let credential = match form.credential {
        Some(key) if !key.expose_secret().trim().is_empty() => key,
        _ => {
            return Err(ViajeroError::config(
                "Necesitas proporcionar tu API Key de OpenAI (--api-key o la variable OPENAI_API_KEY).",
            ));
        }
    };

    let &[start_date, end_date] = form.dates.as_slice() else {
        debug!(count = form.dates.len(), "collect: wrong number of dates");
        return Err(ViajeroError::validation(
            "Por favor selecciona una fecha de inicio Y una de fin en el calendario.",
        ));
    };

    let passengers = form.passengers.clamp(MIN_PASSENGERS, MAX_PASSENGERS);

    let request = TripRequest::new(
        form.origin,
        form.destination,
        start_date,
        end_date,
        passengers,
        form.budget,
        form.interests,
    )?;

    debug!(
        origin = request.origin(),
        destination = request.destination(),
        days = request.duration_days(),
        passengers,
        "collect: trip request accepted"
    );

    Ok(CollectedTrip {
        credential,
        request,
    })
}

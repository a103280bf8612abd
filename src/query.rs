//! Search query construction
//!
//! Pure formatting: the trip fields are substituted verbatim, with no escaping.

use crate::models::TripRequest;
use serde::Serialize;

/// The three evidence queries for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripQueries {
    pub flights: String,
    pub hotels: String,
    pub weather: String,
}

/// Build the flight, hotel and weather queries for a request.
///
/// The weather query only carries the month of departure.
#[must_use]
pub fn build_queries(request: &TripRequest) -> TripQueries {
    let origin = request.origin();
    let destination = request.destination();
    let start = request.start_date();
    let end = request.end_date();

    TripQueries {
        flights: format!("precio vuelos baratos {origin} a {destination} fechas {start} a {end}"),
        hotels: format!(
            "mejores hoteles {} en {destination} precios {start} a {end}",
            request.budget().label()
        ),
        weather: format!("clima en {destination} en {}", start.format("%B")),
    }
}

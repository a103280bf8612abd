//! Web evidence fetching
//!
//! The three queries run strictly one after another. The step succeeds or
//! fails as a whole: the first search error ends it, later queries are not
//! issued and results already gathered are dropped.

use crate::models::{EvidenceBundle, EvidenceFailure, EvidenceOutcome};
use crate::query::TripQueries;
use crate::search::SearchProvider;
use tracing::{info, instrument, warn};

#[instrument(skip_all)]
pub async fn fetch_evidence(search: &dyn SearchProvider, queries: &TripQueries) -> EvidenceOutcome {
    match gather(search, queries).await {
        Ok(bundle) => {
            info!(
                flights_len = bundle.flights.len(),
                hotels_len = bundle.hotels.len(),
                weather_len = bundle.weather.len(),
                "Evidence gathered"
            );
            Ok(bundle)
        }
        Err(e) => {
            warn!("Evidence search failed, continuing without live data: {}", e);
            Err(EvidenceFailure::new(e.to_string()))
        }
    }
}

async fn gather(
    search: &dyn SearchProvider,
    queries: &TripQueries,
) -> Result<EvidenceBundle, crate::search::SearchError> {
    let flights = search.search(&queries.flights).await?;
    let hotels = search.search(&queries.hotels).await?;
    let weather = search.search(&queries.weather).await?;

    Ok(EvidenceBundle {
        flights,
        hotels,
        weather,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Answers from a script, recording each query it receives
    struct ScriptedSearch {
        answers: Mutex<Vec<Result<String, SearchError>>>,
        seen: Mutex<Vec<String>>,
    }

    impl ScriptedSearch {
        fn new(mut answers: Vec<Result<String, SearchError>>) -> Self {
            answers.reverse();
            Self {
                answers: Mutex::new(answers),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchProvider for ScriptedSearch {
        async fn search(&self, query: &str) -> Result<String, SearchError> {
            self.seen.lock().unwrap().push(query.to_string());
            self.answers
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(SearchError::InvalidResponse("script exhausted".into())))
        }
    }

    fn queries() -> TripQueries {
        TripQueries {
            flights: "q-flights".to_string(),
            hotels: "q-hotels".to_string(),
            weather: "q-weather".to_string(),
        }
    }

    #[tokio::test]
    async fn test_queries_run_in_order() {
        let search = ScriptedSearch::new(vec![
            Ok("vuelos".to_string()),
            Ok("hoteles".to_string()),
            Ok("clima".to_string()),
        ]);

        let bundle = fetch_evidence(&search, &queries()).await.unwrap();

        assert_eq!(search.seen(), vec!["q-flights", "q-hotels", "q-weather"]);
        assert_eq!(bundle.flights, "vuelos");
        assert_eq!(bundle.hotels, "hoteles");
        assert_eq!(bundle.weather, "clima");
    }

    #[tokio::test]
    async fn test_failure_discards_earlier_results_and_stops() {
        let search = ScriptedSearch::new(vec![
            Ok("vuelos baratos 500 USD".to_string()),
            Err(SearchError::Status { status: 503 }),
            Ok("never reached".to_string()),
        ]);

        let failure = fetch_evidence(&search, &queries()).await.unwrap_err();

        assert_eq!(search.seen(), vec!["q-flights", "q-hotels"]);
        assert_eq!(
            failure.to_string(),
            "Error buscando datos en vivo: Search returned HTTP 503"
        );
        assert!(!failure.to_string().contains("500 USD"));
    }
}

//! Anonymous DuckDuckGo search over the HTML endpoint

use super::{SearchError, SearchProvider};
use crate::config::SearchConfig;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Result text when the page carries no snippets
pub const NO_RESULTS: &str = "Sin resultados de búsqueda.";

static SNIPPET_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".result:not(.result--ad) .result__snippet").expect("static selector")
});

/// DuckDuckGo client; no API key required
pub struct DuckDuckGoClient {
    http: Client,
    base_url: String,
    region: String,
    max_results: usize,
}

impl DuckDuckGoClient {
    /// Create a new client from the search settings
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("viajero/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            region: config.region.clone(),
            max_results: config.max_results as usize,
        })
    }

    fn query_url(&self, query: &str) -> String {
        format!(
            "{}?q={}&kl={}",
            self.base_url,
            urlencoding::encode(query),
            urlencoding::encode(&self.region)
        )
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoClient {
    #[instrument(skip(self), fields(max_results = self.max_results))]
    async fn search(&self, query: &str) -> Result<String, SearchError> {
        let start_time = Instant::now();
        let url = self.query_url(query);
        debug!("DuckDuckGo request URL: {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("DuckDuckGo returned HTTP {}", status);
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let snippets = extract_snippets(&body, self.max_results);

        info!(
            "Search returned {} snippets in {:.3}s",
            snippets.len(),
            start_time.elapsed().as_secs_f64()
        );

        if snippets.is_empty() {
            return Ok(NO_RESULTS.to_string());
        }
        Ok(snippets.join(" "))
    }
}

/// Pull the organic result snippets out of a results page, whitespace collapsed
#[must_use]
pub fn extract_snippets(html: &str, max_results: usize) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&SNIPPET_SELECTOR)
        .map(|element| {
            element
                .text()
                .flat_map(str::split_whitespace)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|snippet| !snippet.is_empty())
        .take(max_results)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r##"
        <html><body>
          <div class="result result--ad">
            <a class="result__snippet" href="#">Sponsored: book now!</a>
          </div>
          <div class="result results_links web-result">
            <h2 class="result__title"><a href="#">Vuelos MEX-MAD</a></h2>
            <a class="result__snippet" href="#">Vuelos desde <b>$850</b>
               ida y vuelta con Iberia.</a>
          </div>
          <div class="result results_links web-result">
            <a class="result__snippet" href="#">Aeroméxico ofrece tarifas desde 17,000 MXN.</a>
          </div>
          <div class="result results_links web-result">
            <a class="result__snippet" href="#">   </a>
          </div>
          <div class="result results_links web-result">
            <a class="result__snippet" href="#">Tercer resultado.</a>
          </div>
        </body></html>
    "##;

    #[test]
    fn test_extract_snippets_skips_ads_and_blanks() {
        let snippets = extract_snippets(RESULTS_PAGE, 10);
        assert_eq!(
            snippets,
            vec![
                "Vuelos desde $850 ida y vuelta con Iberia.".to_string(),
                "Aeroméxico ofrece tarifas desde 17,000 MXN.".to_string(),
                "Tercer resultado.".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_snippets_honours_limit() {
        assert_eq!(extract_snippets(RESULTS_PAGE, 2).len(), 2);
    }

    #[test]
    fn test_extract_snippets_empty_page() {
        assert!(extract_snippets("<html><body>No results.</body></html>", 5).is_empty());
    }

    #[test]
    fn test_query_url_is_encoded() {
        let client = DuckDuckGoClient::new(&SearchConfig::default()).unwrap();
        let url = client.query_url("clima en Madrid, España en June");
        assert_eq!(
            url,
            "https://html.duckduckgo.com/html/?q=clima%20en%20Madrid%2C%20Espa%C3%B1a%20en%20June&kl=wt-wt"
        );
    }
}

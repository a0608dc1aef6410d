//! HTTP client for the statistics API

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{FetchError, FetchResult, StatsSource};
use crate::stats::{CountryStat, HistoricalRecord};

/// Default statistics API base URL
pub const DEFAULT_BASE_URL: &str = "https://corona.lmao.ninja/v2";

/// Statistics API REST client
pub struct DiseaseClient {
    client: Client,
    config: ClientConfig,
}

/// Configuration for the statistics client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://corona.lmao.ninja/v2")
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("covid-dashboard/{}", env!("CARGO_PKG_VERSION")),
            request_timeout: None,
        }
    }
}

impl From<&crate::config::ApiConfig> for ClientConfig {
    fn from(api: &crate::config::ApiConfig) -> Self {
        Self {
            base_url: api.base_url.clone(),
            user_agent: api.user_agent.clone(),
            request_timeout: api.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl DiseaseClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> FetchResult<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn countries_url(&self) -> String {
        format!("{}/countries", self.base())
    }

    fn country_url(&self, country: &str) -> String {
        format!("{}/countries/{}", self.base(), urlencoding::encode(country))
    }

    fn historical_url(&self) -> String {
        format!("{}/historical", self.base())
    }

    /// GET a URL and decode its JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        tracing::debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(FetchError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        let body = response.bytes().await.map_err(FetchError::from_transport)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl StatsSource for DiseaseClient {
    async fn fetch_countries(&self) -> FetchResult<Vec<CountryStat>> {
        self.get_json(&self.countries_url()).await
    }

    async fn fetch_country(&self, country: &str) -> FetchResult<CountryStat> {
        self.get_json(&self.country_url(country)).await
    }

    async fn fetch_historical(&self) -> FetchResult<Vec<HistoricalRecord>> {
        self.get_json(&self.historical_url()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://corona.lmao.ninja/v2");
        assert!(config.request_timeout.is_none());
        assert!(config.user_agent.starts_with("covid-dashboard/"));
    }

    #[test]
    fn test_urls() {
        let client = DiseaseClient::new(ClientConfig {
            base_url: "http://localhost:3000/v2/".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(client.countries_url(), "http://localhost:3000/v2/countries");
        assert_eq!(client.historical_url(), "http://localhost:3000/v2/historical");
        assert_eq!(
            client.country_url("United Kingdom"),
            "http://localhost:3000/v2/countries/United%20Kingdom"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = DiseaseClient::new(ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }
}

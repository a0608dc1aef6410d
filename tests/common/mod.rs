//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

use covid_dashboard::client::{ClientConfig, DiseaseClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub mod fixtures;

pub use fixtures::*;

/// Initialize logging once for a test binary
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("covid_dashboard=debug")
        .with_test_writer()
        .try_init();
}

/// Mock statistics API
pub struct TestApi {
    pub server: MockServer,
}

impl TestApi {
    pub async fn start() -> Self {
        init_test_logging();
        Self {
            server: MockServer::start().await,
        }
    }

    /// Serve `body` as JSON at `route`
    pub async fn json(&self, route: &str, body: serde_json::Value) -> &Self {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
        self
    }

    /// Fail `route` with `status`
    pub async fn status(&self, route: &str, status: u16, message: &str) -> &Self {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(message))
            .mount(&self.server)
            .await;
        self
    }

    /// Client pointed at the mock server
    pub fn client(&self) -> DiseaseClient {
        DiseaseClient::new(ClientConfig {
            base_url: self.server.uri(),
            ..Default::default()
        })
        .expect("mock server URL is valid")
    }
}

//! Statistics API Client
//!
//! The remote statistics API is an opaque JSON source with three GET
//! endpoints:
//!
//! - `/countries`: current snapshot for every country
//! - `/countries/{country}`: current snapshot for one country
//! - `/historical`: day-keyed series for every country
//!
//! Views talk to it through the [`StatsSource`] trait so they can be
//! driven by any source, including in-memory fixtures.

mod http;
mod error;

pub use http::{ClientConfig, DiseaseClient, DEFAULT_BASE_URL};
pub use error::{FetchError, FetchResult};

use async_trait::async_trait;
use std::sync::Arc;

use crate::stats::{CountryStat, HistoricalRecord};

/// A source of country statistics
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Snapshot for every country
    async fn fetch_countries(&self) -> FetchResult<Vec<CountryStat>>;

    /// Snapshot for a single country
    async fn fetch_country(&self, country: &str) -> FetchResult<CountryStat>;

    /// Historical series for every country
    async fn fetch_historical(&self) -> FetchResult<Vec<HistoricalRecord>>;
}

#[async_trait]
impl<S: StatsSource + ?Sized> StatsSource for Arc<S> {
    async fn fetch_countries(&self) -> FetchResult<Vec<CountryStat>> {
        (**self).fetch_countries().await
    }

    async fn fetch_country(&self, country: &str) -> FetchResult<CountryStat> {
        (**self).fetch_country(country).await
    }

    async fn fetch_historical(&self) -> FetchResult<Vec<HistoricalRecord>> {
        (**self).fetch_historical().await
    }
}

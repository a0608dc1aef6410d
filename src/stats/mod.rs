//! Statistics Data Model
//!
//! Shapes of the payloads returned by the statistics API:
//!
//! - **CountryStat**: current snapshot counters for one country
//! - **HistoricalRecord**: day-keyed cumulative series for one country
//! - **FieldValue**: dynamic view of one snapshot field, used for sorting
//!
//! No validation is applied to incoming payloads. Missing fields
//! deserialize as absent values and are rendered with a placeholder.

mod types;

pub use types::{CountryInfo, CountryStat, FieldValue, HistoricalRecord, Timeline};

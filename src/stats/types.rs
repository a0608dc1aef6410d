//! Statistics payload types
//!
//! Field names follow the upstream JSON (camelCase). Every field is
//! optional: a record missing a field still deserializes and the field
//! reads as [`FieldValue::Absent`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Current snapshot statistics for one country
///
/// Identity is the `country` name. A snapshot is immutable: each fetch
/// replaces the previous one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStat {
    #[serde(default)]
    pub country: String,
    pub country_info: Option<CountryInfo>,
    /// Last update time (Unix epoch milliseconds)
    pub updated: Option<i64>,
    pub cases: Option<f64>,
    pub today_cases: Option<f64>,
    pub deaths: Option<f64>,
    pub today_deaths: Option<f64>,
    pub recovered: Option<f64>,
    pub today_recovered: Option<f64>,
    pub active: Option<f64>,
    pub critical: Option<f64>,
    pub cases_per_one_million: Option<f64>,
    pub deaths_per_one_million: Option<f64>,
    pub tests: Option<f64>,
    pub tests_per_one_million: Option<f64>,
    pub population: Option<f64>,
    pub continent: Option<String>,
    pub one_case_per_people: Option<f64>,
    pub one_death_per_people: Option<f64>,
    pub one_test_per_people: Option<f64>,
    pub active_per_one_million: Option<f64>,
    pub recovered_per_one_million: Option<f64>,
    pub critical_per_one_million: Option<f64>,
    /// Fields the model does not name, kept so any field can be sorted on
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Nested country metadata (identifiers, location, flag image)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryInfo {
    #[serde(rename = "_id")]
    pub id: Option<i64>,
    pub iso2: Option<String>,
    pub iso3: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub flag: Option<String>,
}

impl CountryStat {
    /// Create a snapshot with only the country name set
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Default::default()
        }
    }

    /// Builder: set a numeric field by its upstream name
    ///
    /// Unknown names are stored in `extra`.
    pub fn with(mut self, field: &str, value: f64) -> Self {
        if field == "updated" {
            self.updated = Some(value as i64);
            return self;
        }
        match self.number_slot(field) {
            Some(slot) => *slot = Some(value),
            None => {
                if let Some(number) = serde_json::Number::from_f64(value) {
                    self.extra.insert(field.to_string(), Value::Number(number));
                }
            }
        }
        self
    }

    /// Builder: set an unmodelled text field
    pub fn with_text(mut self, field: &str, value: impl Into<String>) -> Self {
        match field {
            "country" => self.country = value.into(),
            "continent" => self.continent = Some(value.into()),
            _ => {
                self.extra.insert(field.to_string(), Value::String(value.into()));
            }
        }
        self
    }

    /// Resolve a field by its upstream (camelCase) name
    pub fn field(&self, name: &str) -> FieldValue {
        match name {
            "country" => FieldValue::Text(self.country.clone()),
            "continent" => FieldValue::from(self.continent.clone()),
            "updated" => FieldValue::from(self.updated.map(|ms| ms as f64)),
            _ => match self.number(name) {
                Some(value) => FieldValue::from(value),
                None => self
                    .extra
                    .get(name)
                    .map(FieldValue::from_json)
                    .unwrap_or(FieldValue::Absent),
            },
        }
    }

    /// Flag image URL, if the payload carried one
    pub fn flag(&self) -> Option<&str> {
        self.country_info.as_ref()?.flag.as_deref()
    }

    fn number(&self, name: &str) -> Option<Option<f64>> {
        let value = match name {
            "cases" => self.cases,
            "todayCases" => self.today_cases,
            "deaths" => self.deaths,
            "todayDeaths" => self.today_deaths,
            "recovered" => self.recovered,
            "todayRecovered" => self.today_recovered,
            "active" => self.active,
            "critical" => self.critical,
            "casesPerOneMillion" => self.cases_per_one_million,
            "deathsPerOneMillion" => self.deaths_per_one_million,
            "tests" => self.tests,
            "testsPerOneMillion" => self.tests_per_one_million,
            "population" => self.population,
            "oneCasePerPeople" => self.one_case_per_people,
            "oneDeathPerPeople" => self.one_death_per_people,
            "oneTestPerPeople" => self.one_test_per_people,
            "activePerOneMillion" => self.active_per_one_million,
            "recoveredPerOneMillion" => self.recovered_per_one_million,
            "criticalPerOneMillion" => self.critical_per_one_million,
            _ => return None,
        };
        Some(value)
    }

    fn number_slot(&mut self, name: &str) -> Option<&mut Option<f64>> {
        let slot = match name {
            "cases" => &mut self.cases,
            "todayCases" => &mut self.today_cases,
            "deaths" => &mut self.deaths,
            "todayDeaths" => &mut self.today_deaths,
            "recovered" => &mut self.recovered,
            "todayRecovered" => &mut self.today_recovered,
            "active" => &mut self.active,
            "critical" => &mut self.critical,
            "casesPerOneMillion" => &mut self.cases_per_one_million,
            "deathsPerOneMillion" => &mut self.deaths_per_one_million,
            "tests" => &mut self.tests,
            "testsPerOneMillion" => &mut self.tests_per_one_million,
            "population" => &mut self.population,
            "oneCasePerPeople" => &mut self.one_case_per_people,
            "oneDeathPerPeople" => &mut self.one_death_per_people,
            "oneTestPerPeople" => &mut self.one_test_per_people,
            "activePerOneMillion" => &mut self.active_per_one_million,
            "recoveredPerOneMillion" => &mut self.recovered_per_one_million,
            "criticalPerOneMillion" => &mut self.critical_per_one_million,
            _ => return None,
        };
        Some(slot)
    }
}

/// Dynamic value of a single snapshot field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Absent,
}

impl FieldValue {
    /// Convert a raw JSON value; arrays, objects, booleans and null are absent
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Absent),
            Value::String(s) => FieldValue::Text(s.clone()),
            _ => FieldValue::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Render the value, or `placeholder` when absent
    pub fn display_or(&self, placeholder: &str) -> String {
        match self {
            FieldValue::Absent => placeholder.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        value.map(FieldValue::Number).unwrap_or(FieldValue::Absent)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map(FieldValue::Text).unwrap_or(FieldValue::Absent)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Absent => Ok(()),
        }
    }
}

/// Historical series for one country (or one province of a country)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub timeline: Option<Timeline>,
}

/// Three day-keyed cumulative counters
///
/// Keys are "M/D/YY" date labels. Maps keep the key order of the source
/// payload; nothing checks that the three maps share the same keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(default)]
    pub cases: IndexMap<String, f64>,
    #[serde(default)]
    pub deaths: IndexMap<String, f64>,
    #[serde(default)]
    pub recovered: IndexMap<String, f64>,
}

impl HistoricalRecord {
    pub fn new(country: impl Into<String>, timeline: Timeline) -> Self {
        Self {
            country: country.into(),
            province: None,
            timeline: Some(timeline),
        }
    }
}

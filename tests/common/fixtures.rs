//! Sample API payloads

use serde_json::{json, Value};

/// Snapshot row as the countries endpoint returns it
pub fn country(name: &str, cases: u64, deaths: u64) -> Value {
    json!({
        "updated": 1_600_000_000_000_i64,
        "country": name,
        "countryInfo": {
            "_id": 356,
            "iso2": "XX",
            "iso3": "XXX",
            "lat": 20,
            "long": 77,
            "flag": format!("https://disease.sh/assets/img/flags/{}.png", name.to_lowercase())
        },
        "cases": cases,
        "todayCases": 0,
        "deaths": deaths,
        "todayDeaths": 0,
        "recovered": cases / 2,
        "active": cases / 2,
        "critical": 0,
        "casesPerOneMillion": 1.5,
        "deathsPerOneMillion": 0.1,
        "tests": 1000,
        "testsPerOneMillion": 700,
        "population": 1_380_004_385_u64,
        "continent": "Asia",
        "oneCasePerPeople": 0,
        "oneDeathPerPeople": 0,
        "oneTestPerPeople": 0,
        "activePerOneMillion": 0.75,
        "recoveredPerOneMillion": 0.7,
        "criticalPerOneMillion": 0
    })
}

/// Countries endpoint body with the given case counts
pub fn countries(rows: &[(&str, u64)]) -> Value {
    Value::Array(rows.iter().map(|(name, cases)| country(name, *cases, 0)).collect())
}

/// Historical record with two days of data
pub fn history(name: &str, province: Option<&str>, cases: [u64; 2]) -> Value {
    json!({
        "country": name,
        "province": province,
        "timeline": {
            "cases": { "1/22/20": cases[0], "1/23/20": cases[1] },
            "deaths": { "1/22/20": 0, "1/23/20": 1 },
            "recovered": { "1/22/20": 0, "1/23/20": 0 }
        }
    })
}

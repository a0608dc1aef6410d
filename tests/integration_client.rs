//! Integration tests for the statistics API client

mod common;

use common::*;
use covid_dashboard::client::{FetchError, StatsSource};
use covid_dashboard::FieldValue;
use serde_json::json;

#[tokio::test]
async fn test_fetch_countries() {
    let api = TestApi::start().await;
    api.json("/countries", countries(&[("India", 10), ("Chile", 5)]))
        .await;

    let rows = api.client().fetch_countries().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].country, "India");
    assert_eq!(rows[0].cases, Some(10.0));
    assert_eq!(rows[1].continent.as_deref(), Some("Asia"));
    assert!(rows[0].flag().unwrap().ends_with("india.png"));
}

#[tokio::test]
async fn test_unknown_fields_are_kept() {
    let api = TestApi::start().await;
    api.json(
        "/countries",
        json!([{ "country": "Chile", "date": "01-02-2021", "undocumented": 7 }]),
    )
    .await;

    let rows = api.client().fetch_countries().await.unwrap();
    assert_eq!(rows[0].cases, None);
    assert_eq!(rows[0].field("undocumented"), FieldValue::Number(7.0));
    assert_eq!(rows[0].field("date"), FieldValue::Text("01-02-2021".into()));
}

#[tokio::test]
async fn test_fetch_country() {
    let api = TestApi::start().await;
    api.json("/countries/India", country("India", 42, 1)).await;

    let stat = api.client().fetch_country("India").await.unwrap();
    assert_eq!(stat.country, "India");
    assert_eq!(stat.deaths, Some(1.0));
}

#[tokio::test]
async fn test_fetch_historical_keeps_key_order() {
    let api = TestApi::start().await;
    api.json(
        "/historical",
        json!([{
            "country": "India",
            "province": null,
            "timeline": {
                "cases": { "1/30/20": 1, "1/22/20": 0, "1/25/20": 0 },
                "deaths": {},
                "recovered": {}
            }
        }]),
    )
    .await;

    let records = api.client().fetch_historical().await.unwrap();
    let timeline = records[0].timeline.as_ref().unwrap();
    let keys: Vec<&str> = timeline.cases.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["1/30/20", "1/22/20", "1/25/20"]);
}

#[tokio::test]
async fn test_error_status() {
    let api = TestApi::start().await;
    api.status("/countries/Atlantis", 404, "Country not found").await;

    match api.client().fetch_country("Atlantis").await {
        Err(FetchError::ApiError { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Country not found");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let api = TestApi::start().await;
    api.json("/countries", json!({ "message": "not a list" })).await;

    assert!(matches!(
        api.client().fetch_countries().await,
        Err(FetchError::Decode(_))
    ));
}

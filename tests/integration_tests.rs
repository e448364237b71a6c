//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: query URL → HTTP fetch → GeoJSON decode → records

use quakefeed::{
    load_config_from_str, DecodeError, FeedQuery, FetchError, HttpClientConfig, LoadError,
    LoadState, OrderBy, QuakeLoader,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn usgs_feed() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "metadata": {
            "generated": 1_700_000_000_000_i64,
            "url": "https://earthquake.usgs.gov/fdsnws/event/1/query",
            "title": "USGS Earthquakes",
            "status": 200,
            "count": 3
        },
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "mag": 7.1,
                    "place": "18km SW of Searles Valley, CA",
                    "time": 1_562_383_193_040_i64,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/ci38457511",
                    "tsunami": 0,
                    "type": "earthquake"
                },
                "geometry": {"type": "Point", "coordinates": [-117.599, 35.77, 8.0]},
                "id": "ci38457511"
            },
            {
                "type": "Feature",
                "properties": {
                    "mag": null,
                    "place": "Unreviewed event",
                    "time": 1_562_383_000_000_i64,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/ci0"
                },
                "geometry": null,
                "id": "ci0"
            },
            {
                "type": "Feature",
                "properties": {
                    "mag": 6.4,
                    "place": "Ridgecrest Earthquake Sequence",
                    "time": 1_562_213_573_760_i64,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/ci38443183"
                },
                "geometry": {"type": "Point", "coordinates": [-117.504, 35.705, 10.5]},
                "id": "ci38443183"
            }
        ]
    })
}

fn loader() -> QuakeLoader {
    QuakeLoader::with_http(HttpClientConfig::default()).unwrap()
}

// ============================================================================
// End-to-end Loads
// ============================================================================

#[tokio::test]
async fn test_load_from_built_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fdsnws/event/1/query"))
        .and(query_param("format", "geojson"))
        .and(query_param("limit", "10"))
        .and(query_param("minmag", "6"))
        .and(query_param("orderby", "magnitude"))
        .respond_with(ResponseTemplate::new(200).set_body_json(usgs_feed()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = FeedQuery::new(format!("{}/fdsnws/event/1/query", mock_server.uri()))
        .min_magnitude(6.0)
        .order_by(OrderBy::Magnitude)
        .build()
        .unwrap();

    let report = loader().run(Some(&url)).await;

    assert_eq!(report.final_state(), LoadState::Decoded);
    assert_eq!(report.anomalies.len(), 1);
    assert_eq!(report.anomalies[0].index, 1);

    let records = report.into_result().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].magnitude(), 7.1);
    assert_eq!(records[0].place(), "18km SW of Searles Valley, CA");
    assert_eq!(records[0].occurred_at_millis(), 1_562_383_193_040);
    assert_eq!(
        records[0].detail_url(),
        "https://earthquake.usgs.gov/earthquakes/eventpage/ci38457511"
    );
    assert_eq!(records[1].place(), "Ridgecrest Earthquake Sequence");
}

#[tokio::test]
async fn test_load_on_background_task() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(usgs_feed()))
        .mount(&mock_server)
        .await;

    let handle = loader().spawn(Some(format!("{}/query", mock_server.uri())));
    let records = handle.join().await.unwrap().unwrap();

    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_load_with_config_file_settings() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("limit", "2"))
        .and(query_param("minmag", "4.5"))
        .and(wiremock::matchers::header("Accept", "application/geo+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let yaml = format!(
        "endpoint: {}/query\nlimit: 2\nmin_magnitude: 4.5\nhttp:\n  headers:\n    Accept: application/geo+json\n",
        mock_server.uri()
    );
    let config = load_config_from_str(&yaml).unwrap();
    let loader = QuakeLoader::with_http(config.http_client_config()).unwrap();

    let url = config.query().build().unwrap();
    let records = loader.load(Some(&url)).await.unwrap();

    assert!(records.is_empty());
}

// ============================================================================
// Failure Outcomes
// ============================================================================

#[tokio::test]
async fn test_server_error_is_fetch_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = loader()
        .run(Some(&format!("{}/query", mock_server.uri())))
        .await;

    assert_eq!(report.final_state(), LoadState::FetchFailed);
    assert!(!report.states.contains(&LoadState::Decoding));
    assert!(matches!(
        report.result,
        Err(LoadError::Fetch(FetchError::Status { status: 500, .. }))
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_fetch_failure() {
    let mock_server = MockServer::start().await;
    let url = format!("{}/query", mock_server.uri());
    drop(mock_server);

    let err = loader().load(Some(&url)).await.unwrap_err();

    assert!(err.is_fetch());
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(usgs_feed())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(200))
        .build();
    let loader = QuakeLoader::with_http(config).unwrap();

    let err = loader
        .load(Some(&format!("{}/query", mock_server.uri())))
        .await
        .unwrap_err();

    assert!(matches!(err, LoadError::Fetch(FetchError::Timeout { .. })));
}

#[tokio::test]
async fn test_html_error_page_is_decode_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let err = loader()
        .load(Some(&format!("{}/query", mock_server.uri())))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LoadError::Decode(DecodeError::InvalidJson { .. })
    ));
}

#[tokio::test]
async fn test_missing_features_is_decode_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"type": "FeatureCollection"})),
        )
        .mount(&mock_server)
        .await;

    let err = loader()
        .load(Some(&format!("{}/query", mock_server.uri())))
        .await
        .unwrap_err();

    assert!(matches!(err, LoadError::Decode(DecodeError::MissingFeatures)));
}

#[tokio::test]
async fn test_no_url_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(usgs_feed()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let records = loader().load(None).await.unwrap();

    assert!(records.is_empty());
}

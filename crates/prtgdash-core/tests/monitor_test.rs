#![allow(clippy::unwrap_used)]
// End-to-end tests for `Monitor` against a wiremock PRTG server.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use prtgdash_core::{
    AuthCredentials, CoreError, CrossSensorReduction, DailyTotal, Monitor, SensorRef,
    ServerConfig,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Monitor) {
    let server = MockServer::start().await;
    let config = ServerConfig::new(
        Url::parse(&server.uri()).unwrap(),
        AuthCredentials {
            username: "api_user".into(),
            passhash: SecretString::from("PASSHASH".to_string()),
        },
    );
    let monitor = Monitor::new(config).unwrap();
    (server, monitor)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn mount_day(server: &MockServer, sensor: &str, day: &str, rows: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/historicdata.json"))
        .and(query_param("id", sensor))
        .and(query_param("sdate", format!("{day}-00-00-00")))
        .and(query_param("edate", format!("{day}-23-59-59")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "histdata": rows })))
        .mount(server)
        .await;
}

// ── Stats ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_stats_are_normalized_to_mbps() {
    let (server, monitor) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/table.json"))
        .and(query_param("id", "12435"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "channels": [
                { "name": "Traffic In", "maximum_raw": "104500000", "average_raw": "50000000" }
            ]
        })))
        .mount(&server)
        .await;

    let stats = monitor.fetch_bandwidth_stats("12435").await;

    let keys: Vec<(&str, f64)> = stats.iter().collect();
    assert_eq!(keys, vec![("Traffic In_max", 104.5), ("Traffic In_avg", 50.0)]);
}

#[tokio::test]
async fn test_stats_on_server_error_are_empty() {
    let (server, monitor) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let stats = monitor.fetch_bandwidth_stats("12435").await;
    assert!(stats.is_empty());
}

#[tokio::test]
async fn test_stats_on_bad_credentials_are_empty() {
    let (server, monitor) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    assert!(monitor.fetch_bandwidth_stats("12435").await.is_empty());
}

#[tokio::test]
async fn test_peak_summary_defaults_missing_to_zero() {
    let (server, monitor) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/table.json"))
        .and(query_param("id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "channels": [
                { "name": "Traffic In", "maximum_raw": 100_000_000, "average_raw": 40_000_000 },
                { "name": "Traffic Out", "maximum_raw": 30_000_000, "average_raw": " " }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/table.json"))
        .and(query_param("id", "2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let sensors = vec![SensorRef::new("Firstlight", "1"), SensorRef::new("Cogent", "2")];
    let (peaks, totals) = monitor.peak_summary(&sensors).await;

    assert_eq!(peaks.len(), 2);
    assert_eq!(peaks[0].peak_in_mbps, 100.0);
    assert_eq!(peaks[0].avg_out_mbps, 0.0);
    assert_eq!(peaks[1].peak_in_mbps, 0.0);
    assert_eq!(totals.total_peak_in_mbps, 100.0);
    assert_eq!(totals.total_peak_out_mbps, 30.0);
}

// ── Trend ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_trend_takes_max_across_sensors() {
    let (server, monitor) = setup().await;

    mount_day(
        &server,
        "12435",
        "2026-10-15",
        json!([
            { "datetime": "a", "Traffic In (Speed)": "60000000", "Traffic Out (Speed)": "5000000" },
            { "datetime": "b", "Traffic In (Speed)": "100000000", "Traffic Out (Speed)": "-" }
        ]),
    )
    .await;
    mount_day(
        &server,
        "12506",
        "2026-10-15",
        json!([
            { "datetime": "a", "Traffic In (Speed)": "250000000", "Traffic Out (Speed)": "2000000" }
        ]),
    )
    .await;

    let ids = vec!["12435".to_string(), "12506".to_string()];
    let totals = monitor.daily_totals(&ids, 1, date(2026, 10, 16)).await;

    assert_eq!(
        totals,
        vec![DailyTotal {
            date: date(2026, 10, 15),
            total_in_mbps: 250.0,
            total_out_mbps: 5.0,
        }]
    );
}

#[tokio::test]
async fn test_trend_sum_reduction() {
    let (server, monitor) = setup().await;

    mount_day(&server, "1", "2026-10-15", json!([{ "Traffic In (Speed)": 100_000_000 }])).await;
    mount_day(&server, "2", "2026-10-15", json!([{ "Traffic In (Speed)": 250_000_000 }])).await;

    let ids = vec!["1".to_string(), "2".to_string()];
    let totals = monitor
        .daily_totals_with(&ids, 1, date(2026, 10, 16), CrossSensorReduction::Sum)
        .await;

    assert_eq!(totals[0].total_in_mbps, 350.0);
    assert_eq!(totals[0].total_out_mbps, 0.0);
}

#[tokio::test]
async fn test_trend_keeps_days_when_upstream_fails() {
    let (server, monitor) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/historicdata.json"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"no data"}"#))
        .mount(&server)
        .await;

    let ids = vec!["12435".to_string()];
    let totals = monitor.daily_totals(&ids, 7, date(2026, 10, 16)).await;

    assert_eq!(totals.len(), 7);
    assert_eq!(totals[0].date, date(2026, 10, 9));
    assert_eq!(totals[6].date, date(2026, 10, 15));
    assert!(totals.iter().all(|t| t.total_in_mbps == 0.0 && t.total_out_mbps == 0.0));
}

#[tokio::test]
async fn test_malformed_channel_name_keeps_other_channels() {
    let (server, monitor) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/table.json"))
        .and(query_param("id", "12435"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "channels": [
                { "name": 7, "maximum_raw": "1000000" },
                { "name": "Traffic In", "maximum_raw": "2000000" }
            ]
        })))
        .mount(&server)
        .await;

    let stats = monitor.fetch_bandwidth_stats("12435").await;

    assert_eq!(stats.get("Traffic In_max"), Some(2.0));
    assert_eq!(stats.get("7_max"), Some(1.0));
}

#[tokio::test]
async fn test_malformed_datetime_keeps_the_day() {
    let (server, monitor) = setup().await;
    let today = date(2026, 10, 16);

    mount_day(
        &server,
        "12435",
        "2026-10-15",
        json!([
            { "datetime": 20261015, "Traffic In (Speed)": "3000000", "Traffic Out (Speed)": "1000000" },
            { "datetime": "10/15/2026 01:00:00 - 02:00:00", "Traffic In (Speed)": "2000000" }
        ]),
    )
    .await;

    let totals = monitor.daily_totals(&["12435".to_string()], 1, today).await;

    assert_eq!(
        totals,
        vec![DailyTotal {
            date: date(2026, 10, 15),
            total_in_mbps: 3.0,
            total_out_mbps: 1.0,
        }]
    );
}

// ── Strict reads ────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_sensors_maps_rows() {
    let (server, monitor) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/table.json"))
        .and(query_param("content", "sensors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sensors": [
                { "objid": "", "sensor": "Placeholder" },
                { "objid": 12363, "sensor": "HE", "device": "edge-1", "status": "Up" }
            ]
        })))
        .mount(&server)
        .await;

    let sensors = monitor.list_sensors().await.unwrap();

    assert_eq!(sensors.len(), 1);
    assert_eq!(sensors[0].id, 12363);
    assert_eq!(sensors[0].name, "HE");
}

#[tokio::test]
async fn test_list_sensors_auth_failure() {
    let (server, monitor) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = monitor.list_sensors().await;
    assert!(
        matches!(result, Err(CoreError::AuthenticationFailed { .. })),
        "expected AuthenticationFailed, got: {result:?}"
    );
}

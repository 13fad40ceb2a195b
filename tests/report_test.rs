// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Report Pipeline Tests
 * Rendering, persistence and end-to-end report generation
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::path::PathBuf;
use std::time::Duration;

use zap_harness::errors::HarnessError;
use zap_harness::grouping::{group_by_severity, ordered_by_severity};
use zap_harness::reporting::{self, persist, render};
use zap_harness::types::{Alert, ReportRun};
use zap_harness::zap_client::ZapClient;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn alert(name: &str, risk: &str) -> Alert {
    Alert {
        name: name.to_string(),
        risk: risk.to_string(),
        confidence: "High".to_string(),
        url: "http://localhost:8080/WebGoat/login".to_string(),
        param: String::new(),
        description: format!("{} description", name),
        solution: "Fix it".to_string(),
        reference: String::new(),
        evidence: String::new(),
    }
}

fn scratch_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "zap-harness-test-{}-{}-{}",
        label,
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ))
}

#[test]
fn test_render_empty_alert_list_produces_zero_count_shell() {
    let buckets = group_by_severity(&[]).unwrap();
    let run = ReportRun::new("http://localhost:8080/WebGoat", buckets.counts());

    let html = render(&ordered_by_severity(&buckets), &run).unwrap();

    assert!(html.contains("ZAP Alert Report"));
    assert!(html.contains("http://localhost:8080/WebGoat"));
    // All five summary counters present at zero
    assert_eq!(html.matches(r#"<div class="count">0</div>"#).count(), 5);
}

#[test]
fn test_render_counts_and_severity_order() {
    let alerts = vec![
        alert("high-one", "High"),
        alert("low-one", "Low"),
        alert("high-two", "High"),
        alert("info-one", "Informational"),
    ];
    let buckets = group_by_severity(&alerts).unwrap();
    let run = ReportRun::new("http://target", buckets.counts());

    let html = render(&ordered_by_severity(&buckets), &run).unwrap();

    let pos = |needle: &str| html.find(needle).unwrap_or_else(|| panic!("missing {needle}"));
    assert!(pos("high-one") < pos("high-two"));
    assert!(pos("high-two") < pos("low-one"));
    assert!(pos("low-one") < pos("info-one"));

    assert!(html.contains(r#"<div class="count">4</div>"#));
    assert!(html.contains(r#"<div class="count">2</div>"#));
}

#[test]
fn test_render_escapes_scanner_supplied_markup() {
    let mut hostile = alert("Reflected payload", "High");
    hostile.evidence = "<script>alert('pwned')</script>".to_string();
    hostile.description = "Found <img src=x onerror=alert(1)> in response".to_string();

    let alerts = vec![hostile];
    let buckets = group_by_severity(&alerts).unwrap();
    let run = ReportRun::new("http://target", buckets.counts());

    let html = render(&ordered_by_severity(&buckets), &run).unwrap();

    assert!(!html.contains("<script>alert('pwned')</script>"));
    assert!(!html.contains("<img src=x"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_persist_writes_timestamp_named_pair_and_json_round_trips() {
    let alerts = vec![
        alert("xss", "High"),
        alert("csrf", "Medium"),
        alert("headers", "Informational"),
    ];
    let buckets = group_by_severity(&alerts).unwrap();
    let run = ReportRun::new("http://target", buckets.counts());
    let html = render(&ordered_by_severity(&buckets), &run).unwrap();
    let json = serde_json::to_string_pretty(&alerts).unwrap();

    let dir = scratch_dir("persist");
    let report = persist(&dir, &run, &json, &html).unwrap();

    assert_eq!(
        report.json_path.file_name().unwrap().to_str().unwrap(),
        format!("zap-alerts-{}.json", run.timestamp_millis)
    );
    assert_eq!(
        report.html_path.file_name().unwrap().to_str().unwrap(),
        format!("zap-alerts-{}.html", run.timestamp_millis)
    );

    let restored: Vec<Alert> =
        serde_json::from_str(&std::fs::read_to_string(&report.json_path).unwrap()).unwrap();
    assert_eq!(restored.len(), alerts.len());

    let restored_counts = group_by_severity(&restored).unwrap().counts();
    assert_eq!(restored_counts, buckets.counts());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_persist_overwrites_stale_files_without_error() {
    let run = ReportRun::new("http://target", Default::default());
    let dir = scratch_dir("overwrite");

    persist(&dir, &run, "[]", "<html>first</html>").unwrap();
    let report = persist(&dir, &run, "[]", "<html>second</html>").unwrap();

    let html = std::fs::read_to_string(&report.html_path).unwrap();
    assert_eq!(html, "<html>second</html>");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_consecutive_runs_produce_distinct_file_pairs() {
    let dir = scratch_dir("runs");

    let first = ReportRun::new("http://target", Default::default());
    let first_report = persist(&dir, &first, "[]", "<html>one</html>").unwrap();

    // Timestamps are millisecond-resolution; make sure the clock moved
    std::thread::sleep(Duration::from_millis(5));

    let second = ReportRun::new("http://target", Default::default());
    let second_report = persist(&dir, &second, "[]", "<html>two</html>").unwrap();

    assert_ne!(first.timestamp_millis, second.timestamp_millis);
    assert_ne!(first_report.html_path, second_report.html_path);
    assert!(first_report.html_path.exists());
    assert!(second_report.html_path.exists());
    assert!(first_report.json_path.exists());
    assert!(second_report.json_path.exists());

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_generate_report_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/JSON/core/view/numberOfAlerts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "numberOfAlerts": "2"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/JSON/core/view/alerts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "alerts": [
                {
                    "alert": "Cookie No HttpOnly Flag",
                    "risk": "Low",
                    "confidence": "Medium",
                    "url": "http://localhost:8080/WebGoat/login",
                    "description": "A cookie has been set without the HttpOnly flag"
                },
                {
                    "alert": "SQL Injection",
                    "risk": "High",
                    "confidence": "High",
                    "url": "http://localhost:8080/WebGoat/attack",
                    "param": "username",
                    "description": "SQL injection may be possible"
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let addr = mock_server.address();
    let client = ZapClient::new(&addr.ip().to_string(), addr.port(), 5).unwrap();

    let dir = scratch_dir("e2e");
    let report = reporting::generate_report(&client, "http://localhost:8080/WebGoat", &dir)
        .await
        .unwrap();

    let html = std::fs::read_to_string(&report.html_path).unwrap();
    // High alert ordered before the Low one regardless of fetch order
    assert!(html.find("SQL Injection").unwrap() < html.find("Cookie No HttpOnly Flag").unwrap());

    // JSON dump keeps the scanner's own order
    let dumped: Vec<Alert> =
        serde_json::from_str(&std::fs::read_to_string(&report.json_path).unwrap()).unwrap();
    assert_eq!(dumped[0].name, "Cookie No HttpOnly Flag");
    assert_eq!(dumped[1].name, "SQL Injection");

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_unknown_severity_from_scanner_aborts_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/JSON/core/view/numberOfAlerts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "numberOfAlerts": "1"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/JSON/core/view/alerts/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "alerts": [
                { "alert": "Odd finding", "risk": "Severe", "url": "http://t" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let addr = mock_server.address();
    let client = ZapClient::new(&addr.ip().to_string(), addr.port(), 5).unwrap();

    let dir = scratch_dir("unknown-severity");
    let err = reporting::generate_report(&client, "http://t", &dir)
        .await
        .unwrap_err();

    assert!(matches!(err, HarnessError::UnknownSeverity { .. }));
    // Aborted before persistence: nothing was written
    assert!(!dir.exists());
}

#[tokio::test]
async fn test_failed_stop_writes_no_report_files() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/JSON/core/action/shutdown/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "code": "bad_api_key"
        })))
        .mount(&mock_server)
        .await;

    let addr = mock_server.address();
    let client = ZapClient::new(&addr.ip().to_string(), addr.port(), 5).unwrap();

    let dir = scratch_dir("stop");
    let err = client.shutdown("wrong-key").await.unwrap_err();

    assert!(matches!(err, HarnessError::ScannerApi { .. }));
    assert!(!dir.exists());
}

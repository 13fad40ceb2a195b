// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Scan Report Pipeline
 * Fetch alerts, group and order by severity, render, persist
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod persister;
pub mod renderer;

pub use persister::{persist, PersistedReport};
pub use renderer::render;

use std::path::Path;
use tracing::info;

use crate::errors::{HarnessError, Result};
use crate::grouping::{group_by_severity, ordered_by_severity};
use crate::types::{Alert, ReportRun};
use crate::zap_client::ZapClient;

/// Runs the whole report pipeline for one `report` invocation.
///
/// Single pass, no partial-report recovery: any failure aborts the run and
/// the only recovery path is rerunning, which produces fresh filenames.
pub async fn generate_report(
    client: &ZapClient,
    site: &str,
    report_dir: &Path,
) -> Result<PersistedReport> {
    let alerts = client.fetch_all_alerts(site).await?;
    info!("Generating report for {:?} ({} alerts)", site, alerts.len());

    let buckets = group_by_severity(&alerts)?;
    let run = ReportRun::new(site, buckets.counts());

    let ordered = ordered_by_severity(&buckets);
    let html = render(&ordered, &run)?;
    let json = alerts_to_json(&alerts, &run)?;

    persist(report_dir, &run, &json, &html)
}

/// Machine-readable dump of the alerts exactly as the scanner returned them.
fn alerts_to_json(alerts: &[Alert], run: &ReportRun) -> Result<String> {
    serde_json::to_string_pretty(alerts).map_err(|e| HarnessError::Io {
        path: format!("zap-alerts-{}.json", run.timestamp_millis),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })
}

// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Report persistence: timestamp-named JSON dump and HTML document.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::{HarnessError, Result};
use crate::types::ReportRun;

/// Paths the report artifacts were written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedReport {
    pub json_path: PathBuf,
    pub html_path: PathBuf,
}

/// Writes the alert dump and the rendered HTML into `report_dir`, both
/// named by the run timestamp. Overwrite is idempotent: stale files at the
/// target paths are removed first, absence is not an error.
///
/// The HTML location is the run's primary user-visible output and is
/// printed after a successful write.
pub fn persist(
    report_dir: &Path,
    run: &ReportRun,
    alerts_json: &str,
    report_html: &str,
) -> Result<PersistedReport> {
    fs::create_dir_all(report_dir).map_err(|e| HarnessError::Io {
        path: report_dir.display().to_string(),
        source: e,
    })?;

    let json_path = report_dir.join(format!("zap-alerts-{}.json", run.timestamp_millis));
    let html_path = report_dir.join(format!("zap-alerts-{}.html", run.timestamp_millis));

    write_fresh(&json_path, alerts_json)?;
    write_fresh(&html_path, report_html)?;

    info!("Wrote alert dump to {}", json_path.display());
    println!("ZAP report generated at: {}", html_path.display());

    Ok(PersistedReport {
        json_path,
        html_path,
    })
}

fn write_fresh(path: &Path, content: &str) -> Result<()> {
    // Delete quietly, then write; a leftover from a failed run never blocks
    let _ = fs::remove_file(path);

    fs::write(path, content).map_err(|e| HarnessError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

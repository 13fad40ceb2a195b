// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Harness Core Types
 * Alert model, severity ranks and per-run report metadata
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use serde::{Deserialize, Serialize};

use crate::errors::HarnessError;

/// One finding reported by the scanner, as returned by the ZAP alerts view.
///
/// Immutable once fetched. Apart from `risk` the fields are opaque to the
/// harness: they flow straight into the JSON dump and the HTML report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    /// ZAP calls the finding name "alert"
    #[serde(rename = "alert")]
    pub name: String,
    /// Raw risk rank string as the scanner emitted it
    pub risk: String,
    #[serde(default)]
    pub confidence: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub param: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub evidence: String,
}

/// Severity rank, in priority order. ZAP only ever emits these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    High,
    Medium,
    Low,
    Informational,
}

impl Severity {
    /// All ranks in report order, high to low.
    pub const ORDERED: [Severity; 4] = [
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Informational,
    ];

    /// Parses a scanner-supplied risk string. Anything outside the four
    /// known ranks is a data contract violation.
    pub fn parse(value: &str) -> Result<Self, HarnessError> {
        match value {
            "High" => Ok(Severity::High),
            "Medium" => Ok(Severity::Medium),
            "Low" => Ok(Severity::Low),
            "Informational" => Ok(Severity::Informational),
            other => Err(HarnessError::UnknownSeverity {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
            Severity::Informational => write!(f, "Informational"),
        }
    }
}

/// Alerts partitioned by severity rank.
///
/// One field per rank, so every rank always exists; absent severities are
/// empty vectors and render as zero counts, never missing keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeverityBuckets {
    pub high: Vec<Alert>,
    pub medium: Vec<Alert>,
    pub low: Vec<Alert>,
    pub informational: Vec<Alert>,
}

impl SeverityBuckets {
    pub fn bucket(&self, severity: Severity) -> &Vec<Alert> {
        match severity {
            Severity::High => &self.high,
            Severity::Medium => &self.medium,
            Severity::Low => &self.low,
            Severity::Informational => &self.informational,
        }
    }

    pub fn bucket_mut(&mut self, severity: Severity) -> &mut Vec<Alert> {
        match severity {
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
            Severity::Informational => &mut self.informational,
        }
    }

    pub fn counts(&self) -> SeverityCounts {
        SeverityCounts {
            high: self.high.len(),
            medium: self.medium.len(),
            low: self.low.len(),
            informational: self.informational.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len() + self.informational.len()
    }
}

/// Per-severity alert counts for the report summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub informational: usize,
}

impl SeverityCounts {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low + self.informational
    }
}

/// Ephemeral per-invocation report metadata. Lives only for the duration of
/// one `report` action; persisted solely through the artifacts named by its
/// timestamp.
#[derive(Debug, Clone)]
pub struct ReportRun {
    /// Unix timestamp in milliseconds, the filename correlation key
    pub timestamp_millis: i64,
    /// Human-readable run date for the report header
    pub run_date: String,
    /// Target site the alerts were fetched for
    pub site: String,
    pub counts: SeverityCounts,
}

impl ReportRun {
    pub fn new(site: &str, counts: SeverityCounts) -> Self {
        let now = chrono::Utc::now();
        Self {
            timestamp_millis: now.timestamp_millis(),
            run_date: now.to_rfc2822(),
            site: site.to_string(),
            counts,
        }
    }
}

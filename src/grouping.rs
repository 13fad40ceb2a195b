// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Severity bucketing for fetched alerts.
//!
//! Pure functions: partition a flat alert list into the four fixed severity
//! buckets, then concatenate them back high-to-low for the report.

use crate::errors::Result;
use crate::types::{Alert, Severity, SeverityBuckets};

/// Partitions alerts into the four severity buckets.
///
/// Every bucket exists even when empty. Relative order within a bucket is
/// the scanner's order, untouched. An unrecognized risk string violates the
/// scanner data contract and fails with `UnknownSeverity`.
pub fn group_by_severity(alerts: &[Alert]) -> Result<SeverityBuckets> {
    let mut buckets = SeverityBuckets::default();

    for alert in alerts {
        let severity = Severity::parse(&alert.risk)?;
        buckets.bucket_mut(severity).push(alert.clone());
    }

    Ok(buckets)
}

/// Concatenates the buckets in fixed High, Medium, Low, Informational order.
/// Total function: always succeeds, no secondary sort.
pub fn ordered_by_severity(buckets: &SeverityBuckets) -> Vec<&Alert> {
    Severity::ORDERED
        .iter()
        .flat_map(|severity| buckets.bucket(*severity).iter())
        .collect()
}

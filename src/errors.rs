// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Harness Error Types
 * Production-ready error handling with thiserror
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::time::Duration;
use thiserror::Error;

/// Harness error type covering every failure the CLI actions can surface.
///
/// Propagation policy: no local recovery anywhere. Every error aborts the
/// current action and travels to the process boundary.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Scanner process could not be spawned
    #[error("Failed to launch ZAP at {install_path}: {reason}")]
    Launch {
        install_path: String,
        reason: String,
    },

    /// Network, auth or protocol failure talking to the ZAP control API
    #[error("ZAP API error for {endpoint}: {reason}")]
    ScannerApi {
        endpoint: String,
        reason: String,
    },

    /// Scanner emitted a risk rank outside the four known values
    #[error("Unknown alert severity from scanner: {value}")]
    UnknownSeverity {
        value: String,
    },

    /// Report template resource missing or malformed
    #[error("Report template error: {0}")]
    Template(String),

    /// Template merge failed (missing context variable, helper failure)
    #[error("Report render error: {0}")]
    Render(String),

    /// Report file write failure
    #[error("Report I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Polling wait exceeded its bound
    #[error("Wait condition not met within {waited:?}")]
    WaitTimeout {
        waited: Duration,
    },
}

pub type Result<T> = std::result::Result<T, HarnessError>;

// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use anyhow::Result;
use std::path::PathBuf;

/// Runtime configuration for the harness.
///
/// Defaults cover every knob; environment variables override.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the report artifacts land in
    pub report_dir: PathBuf,
    /// Request timeout for the ZAP control API, in seconds
    pub http_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report_dir: PathBuf::from("zap-reports"),
            http_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(report_dir) = std::env::var("ZAP_REPORT_DIR") {
            config.report_dir = PathBuf::from(report_dir);
        }

        if let Ok(timeout) = std::env::var("ZAP_HTTP_TIMEOUT_SECS") {
            config.http_timeout_secs = timeout
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid ZAP_HTTP_TIMEOUT_SECS value"))?;
        }

        Ok(config)
    }
}

// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - ZAP Process Launcher
 * Spawns the scanner binary and hands the caller an explicit process handle
 *
 * @copyright 2025 Bountyy Oy
 * @license Proprietary
 */

use std::path::Path;
use std::process::{Child, Command, Stdio};
use tracing::info;

use crate::errors::{HarnessError, Result};

/// Handle to a spawned ZAP scanner process.
///
/// Held by the caller, never a process-wide global. Launching returns as
/// soon as the child is spawned; readiness must be polled separately
/// through the control API or the intercepting proxy.
#[derive(Debug)]
pub struct ZapProcess {
    child: Child,
    install_path: String,
}

impl ZapProcess {
    /// Spawns `<install_path> -config api.key=<api_key>`.
    pub fn launch(install_path: &str, api_key: &str) -> Result<Self> {
        let binary = Path::new(install_path);
        if !binary.exists() {
            return Err(HarnessError::Launch {
                install_path: install_path.to_string(),
                reason: "binary does not exist".to_string(),
            });
        }

        let child = Command::new(install_path)
            .arg("-config")
            .arg(format!("api.key={}", api_key))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| HarnessError::Launch {
                install_path: install_path.to_string(),
                reason: e.to_string(),
            })?;

        info!("Launched ZAP from {} (pid {})", install_path, child.id());

        Ok(Self {
            child,
            install_path: install_path.to_string(),
        })
    }

    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    pub fn install_path(&self) -> &str {
        &self.install_path
    }
}

// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Zap Harness - DAST Scanner Harness CLI
 * Single-action dispatcher: launch the scanner, stop it, or build the
 * severity-ordered alert report
 *
 * (c) 2025 Bountyy Oy
 */

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use zap_harness::config::AppConfig;
use zap_harness::launcher::ZapProcess;
use zap_harness::reporting;
use zap_harness::zap_client::ZapClient;

/// ZAP DAST harness - proxy-intercepted scans with severity-ordered reports
#[derive(Parser)]
#[command(name = "zap-harness")]
#[command(author = "Bountyy Oy <info@bountyy.fi>")]
#[command(version = "1.0.0")]
#[command(about = "Controls a ZAP scanner instance and generates alert reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    action: Action,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Action {
    /// Launch the ZAP scanner process
    Start {
        /// Path to the ZAP executable
        install_path: String,
        /// API key the scanner is configured with
        api_key: String,
    },
    /// Ask a running scanner to shut down
    Stop {
        host: String,
        port: u16,
        api_key: String,
    },
    /// Fetch alerts and write the JSON dump plus the HTML report
    Report {
        host: String,
        port: u16,
        /// Target site to report on; empty means all sites
        site: String,
    },
    /// Anything that is not a known action
    #[command(external_subcommand)]
    Other(Vec<String>),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    let config = AppConfig::from_env()?;

    match cli.action {
        Action::Start {
            install_path,
            api_key,
        } => {
            let process = ZapProcess::launch(&install_path, &api_key)?;
            println!("ZAP launched (pid {})", process.pid());
        }
        Action::Stop {
            host,
            port,
            api_key,
        } => {
            let client = ZapClient::new(&host, port, config.http_timeout_secs)?;
            client.shutdown(&api_key).await?;
            println!("shutdown ZAP signal sent");
        }
        Action::Report { host, port, site } => {
            let client = ZapClient::new(&host, port, config.http_timeout_secs)?;
            let report = reporting::generate_report(&client, &site, &config.report_dir).await?;
            info!("Report artifacts: {:?}", report);
        }
        Action::Other(args) => {
            // Usability nicety, not a failure: print and exit cleanly
            let action = args.first().map(String::as_str).unwrap_or("");
            println!("can't understand the action: {}", action);
        }
    }

    Ok(())
}

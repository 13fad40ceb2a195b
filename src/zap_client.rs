// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - ZAP Control API Client
 * Thin client over the scanner's JSON control API: alert count, alert
 * listing and shutdown
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::{HarnessError, Result};
use crate::types::Alert;

/// Client for one running ZAP instance.
///
/// Every call is a single attempt. The control API is assumed reliable
/// within one report run; a failed call propagates immediately, no retry.
pub struct ZapClient {
    client: Client,
    base_url: String,
}

/// ZAP returns numeric views as strings, e.g. {"numberOfAlerts":"42"}
#[derive(Deserialize)]
struct NumberOfAlertsResponse {
    #[serde(rename = "numberOfAlerts")]
    number_of_alerts: String,
}

#[derive(Deserialize)]
struct AlertsResponse {
    alerts: Vec<Alert>,
}

impl ZapClient {
    pub fn new(host: &str, port: u16, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| HarnessError::ScannerApi {
                endpoint: format!("{}:{}", host, port),
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: format!("http://{}:{}", host, port),
        })
    }

    /// Total alert count ZAP holds for `site`. An empty `site` is the
    /// scanner's own convention for "all sites" and is passed through as-is.
    pub async fn number_of_alerts(&self, site: &str) -> Result<usize> {
        let endpoint = "/JSON/core/view/numberOfAlerts/";
        let body: NumberOfAlertsResponse = self
            .get_json(endpoint, &[("baseurl", site)])
            .await?;

        body.number_of_alerts
            .parse()
            .map_err(|_| HarnessError::ScannerApi {
                endpoint: endpoint.to_string(),
                reason: format!(
                    "non-numeric alert count: {:?}",
                    body.number_of_alerts
                ),
            })
    }

    /// Two-step fetch: count the alerts for `site`, then request exactly
    /// that many starting at offset 0. Both calls are scoped to the same
    /// `site`, so the count always matches the listing.
    pub async fn fetch_all_alerts(&self, site: &str) -> Result<Vec<Alert>> {
        let count = self.number_of_alerts(site).await?;
        debug!("ZAP reports {} alerts for site {:?}", count, site);

        let body: AlertsResponse = self
            .get_json(
                "/JSON/core/view/alerts/",
                &[
                    ("baseurl", site),
                    ("start", "0"),
                    ("count", &count.to_string()),
                ],
            )
            .await?;

        info!("Fetched {} alerts from ZAP", body.alerts.len());
        Ok(body.alerts)
    }

    /// Asks the scanner to shut itself down.
    pub async fn shutdown(&self, api_key: &str) -> Result<()> {
        let endpoint = "/JSON/core/action/shutdown/";
        let _: serde_json::Value = self.get_json(endpoint, &[("apikey", api_key)]).await?;

        info!("ZAP shutdown command sent");
        Ok(())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| HarnessError::ScannerApi {
                endpoint: endpoint.to_string(),
                reason: format!("transport failure: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarnessError::ScannerApi {
                endpoint: endpoint.to_string(),
                reason: format!("HTTP {}", status),
            });
        }

        response.json().await.map_err(|e| HarnessError::ScannerApi {
            endpoint: endpoint.to_string(),
            reason: format!("malformed response body: {}", e),
        })
    }
}

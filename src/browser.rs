// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser session routed through the ZAP intercepting proxy.
//!
//! Uses headless Chrome/Chromium with every protocol proxied into the
//! scanner, so passive analysis sees all traffic the session generates.

use anyhow::{Context, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::wait;

/// ZAP serves its API UI on this pseudo-host when reached through the proxy
const ZAP_API_UI_URL: &str = "http://zap/";
const ZAP_API_UI_TITLE: &str = "ZAP API UI";

/// A headless browser whose traffic all crosses the intercepting proxy.
pub struct ProxiedBrowser {
    // Held so the browser process outlives the tab
    _browser: Browser,
    tab: Arc<Tab>,
}

impl ProxiedBrowser {
    /// Launches headless Chromium with `--proxy-server=<proxy>`.
    pub fn launch(proxy: &str) -> Result<Self> {
        info!("Launching proxied browser via {}", proxy);

        let browser = Browser::new(
            LaunchOptions::default_builder()
                .headless(true)
                .proxy_server(Some(proxy))
                .idle_browser_timeout(Duration::from_secs(300))
                .build()
                .map_err(|e| anyhow::anyhow!("Browser launch options error: {}", e))?,
        )
        .context("Failed to launch Chrome/Chromium")?;

        let tab = browser.new_tab().context("Failed to create new tab")?;

        Ok(Self {
            _browser: browser,
            tab,
        })
    }

    pub fn goto(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);
        self.tab
            .navigate_to(url)
            .with_context(|| format!("Failed to navigate to {}", url))?;
        self.tab
            .wait_until_navigated()
            .context("Navigation timeout")?;
        Ok(())
    }

    pub fn title(&self) -> Result<String> {
        self.tab.get_title().context("Failed to read page title")
    }

    /// Types `text` into the element matching `selector`.
    pub fn type_into(&self, selector: &str, text: &str) -> Result<()> {
        debug!("Typing into {}", selector);
        self.tab
            .find_element(selector)
            .with_context(|| format!("Element not found: {}", selector))?
            .type_into(text)
            .with_context(|| format!("Failed to type into {}", selector))?;
        Ok(())
    }

    /// Clicks the element matching `selector`.
    pub fn click(&self, selector: &str) -> Result<()> {
        debug!("Clicking {}", selector);
        self.tab
            .find_element(selector)
            .with_context(|| format!("Element not found: {}", selector))?
            .click()
            .with_context(|| format!("Failed to click {}", selector))?;
        Ok(())
    }

    /// Submits the form matching `selector`, the way a driver-level form
    /// submit works (no submit button required).
    pub fn submit_form(&self, selector: &str) -> Result<()> {
        debug!("Submitting form {}", selector);
        self.tab
            .find_element(selector)
            .with_context(|| format!("Form not found: {}", selector))?
            .call_js_fn("function() { this.submit(); }", vec![], false)
            .with_context(|| format!("Failed to submit form {}", selector))?;
        Ok(())
    }

    /// Polls the current page title until it equals `expected`
    /// (case-insensitive, as browser chrome normalizes titles).
    pub fn wait_for_title(&self, expected: &str, timeout: Duration) -> crate::errors::Result<()> {
        wait::wait_until(timeout, || {
            self.tab
                .get_title()
                .map(|t| t.eq_ignore_ascii_case(expected))
                .unwrap_or(false)
        })
    }

    /// Waits for the scanner to come up behind the proxy by reloading its
    /// API UI page until the expected title appears.
    pub fn wait_until_zap_ready(&self, timeout: Duration) -> crate::errors::Result<()> {
        wait::wait_until(timeout, || {
            let navigated = self
                .tab
                .navigate_to(ZAP_API_UI_URL)
                .and_then(|tab| tab.wait_until_navigated())
                .is_ok();
            navigated
                && self
                    .tab
                    .get_title()
                    .map(|t| t.eq_ignore_ascii_case(ZAP_API_UI_TITLE))
                    .unwrap_or(false)
        })
    }
}

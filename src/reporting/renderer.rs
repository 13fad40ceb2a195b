// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Report rendering: binds the ordered alerts and run metadata into the
//! packaged handlebars template.

use handlebars::Handlebars;
use serde::Serialize;

use crate::errors::{HarnessError, Result};
use crate::types::{Alert, ReportRun};

const TEMPLATE_NAME: &str = "alert-report";
const TEMPLATE_SOURCE: &str = include_str!("templates/alert_report.hbs");

/// Template context. Every variable the template references exists here;
/// strict-mode rendering turns any drift into a hard `Render` error.
#[derive(Serialize)]
struct ReportContext<'a> {
    target_website: &'a str,
    zap_run_date: &'a str,
    number_of_alerts: usize,
    number_of_high_alerts: usize,
    number_of_medium_alerts: usize,
    number_of_low_alerts: usize,
    number_of_informational_alerts: usize,
    alerts: &'a [&'a Alert],
}

/// Renders the HTML report for one run.
///
/// `ordered_alerts` must already be in High, Medium, Low, Informational
/// order. Scanner-supplied strings are HTML-escaped by the engine at merge
/// time; alert text is externally sourced and may contain injected markup.
pub fn render(ordered_alerts: &[&Alert], run: &ReportRun) -> Result<String> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(TEMPLATE_NAME, TEMPLATE_SOURCE)
        .map_err(|e| HarnessError::Template(e.to_string()))?;

    let context = ReportContext {
        target_website: &run.site,
        zap_run_date: &run.run_date,
        number_of_alerts: run.counts.total(),
        number_of_high_alerts: run.counts.high,
        number_of_medium_alerts: run.counts.medium,
        number_of_low_alerts: run.counts.low,
        number_of_informational_alerts: run.counts.informational,
        alerts: ordered_alerts,
    };

    registry
        .render(TEMPLATE_NAME, &context)
        .map_err(|e| HarnessError::Render(e.to_string()))
}

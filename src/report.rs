//! Rendering of scan reports for terminals and machines.

use anyhow::{Context, Result};

use crate::config::CheckerConfig;
use crate::models::ScanReport;

/// Render the human-readable summary followed by samples of each finding list.
pub fn render_text(report: &ScanReport, config: &CheckerConfig) -> String {
    let files = &report.files;
    let mut out = format!(
        "HTML files: {} | CSS files: {} | JS files: {}\n",
        files.html, files.css, files.js
    );
    out.push_str(&format!(
        "Leading-slash href/src findings: {}\n",
        report.leading_slash.len()
    ));
    out.push_str(&format!("Missing asset refs: {}\n", report.missing.len()));

    if !report.leading_slash.is_empty() {
        out.push_str(&format!(
            "\nLEADING_SLASH (first {}):\n",
            config.leading_slash_sample
        ));
        for finding in report.leading_slash.iter().take(config.leading_slash_sample) {
            out.push_str(&format!(" - {} :: {}\n", finding.owner, finding.snippet));
        }
    }

    if !report.missing.is_empty() {
        out.push_str(&format!("\nMISSING_ASSETS (first {}):\n", config.asset_sample));
        for finding in report.missing.iter().take(config.asset_sample) {
            out.push_str(&format!(
                " - {} in {}: {} ({})\n",
                finding.kind, finding.owner, finding.reference, finding.reason
            ));
        }
    }

    out
}

/// Serialise the complete report, including every finding, as pretty-printed JSON.
pub fn render_json(report: &ScanReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialise scan report")
}

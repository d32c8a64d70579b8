//! Checker configuration controlling how findings are reported.

use serde::Deserialize;

/// Number of leading-slash findings printed in the text report by default.
pub const DEFAULT_LEADING_SLASH_SAMPLE: usize = 20;
/// Number of asset findings printed in the text report by default.
pub const DEFAULT_ASSET_SAMPLE: usize = 50;

/// Options for a checker run.
///
/// The sample limits only shorten the text report; counts, JSON output and the exit status
/// always reflect every finding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Maximum leading-slash findings listed in the text report.
    pub leading_slash_sample: usize,
    /// Maximum asset findings listed in the text report.
    pub asset_sample: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            leading_slash_sample: DEFAULT_LEADING_SLASH_SAMPLE,
            asset_sample: DEFAULT_ASSET_SAMPLE,
        }
    }
}

impl CheckerConfig {
    /// Override the leading-slash sample limit.
    pub fn with_leading_slash_sample(mut self, limit: usize) -> Self {
        self.leading_slash_sample = limit;
        self
    }

    /// Override the asset finding sample limit.
    pub fn with_asset_sample(mut self, limit: usize) -> Self {
        self.asset_sample = limit;
        self
    }
}

//! Checker orchestrator that scans a site root and accumulates findings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::asset_paths::{
  classify_reference, display_relative, normalize_reference, should_ignore_asset_reference,
};
use crate::config::CheckerConfig;
use crate::extract::{extract_references, html::find_leading_slash_attributes};
use crate::models::{AssetFinding, LeadingSlashFinding, ScanReport, SourceKind};
use crate::scanning::{SourceInventory, read_source_text};

/// Scans a site root for broken asset references and leading-slash attributes.
#[derive(Debug, Clone)]
pub struct AssetChecker {
  root: PathBuf,
  config: CheckerConfig,
}

impl AssetChecker {
  /// Create a checker for `root`, which is canonicalised up front.
  pub fn new(root: impl AsRef<Path>, config: CheckerConfig) -> Result<Self> {
    let root = root.as_ref();
    let root = fs::canonicalize(root)
      .with_context(|| format!("failed to resolve site root {}", root.display()))?;
    Ok(Self { root, config })
  }

  /// Canonical root this checker scans.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Options this checker was created with.
  pub fn config(&self) -> &CheckerConfig {
    &self.config
  }

  /// Scan every source file under the root and return the findings in first-seen order.
  pub fn run(&self) -> Result<ScanReport> {
    let inventory = SourceInventory::collect(&self.root)?;
    let mut report = ScanReport {
      root: self.root.clone(),
      files: inventory.counts(),
      ..ScanReport::default()
    };

    for kind in SourceKind::ALL {
      for path in inventory.files(kind) {
        self.check_file(kind, path, &mut report)?;
      }
    }

    info!(
      html = report.files.html,
      css = report.files.css,
      js = report.files.js,
      leading_slash = report.leading_slash.len(),
      missing = report.missing.len(),
      "asset check finished"
    );

    Ok(report)
  }

  /// Check a single source file, appending its findings to `report`.
  pub fn check_file(&self, kind: SourceKind, path: &Path, report: &mut ScanReport) -> Result<()> {
    let text = read_source_text(path)?;
    let owner = display_relative(&self.root, path);
    let base_dir = path.parent().unwrap_or(self.root.as_path());
    debug!(%owner, ?kind, "scanning source file");

    if kind == SourceKind::Html {
      for snippet in find_leading_slash_attributes(&text) {
        debug!(%owner, snippet, "leading-slash attribute");
        report.leading_slash.push(LeadingSlashFinding {
          owner: owner.clone(),
          snippet: snippet.to_string(),
        });
      }
    }

    for reference in extract_references(kind, &text) {
      let normalized = normalize_reference(&reference.raw);
      if should_ignore_asset_reference(normalized) {
        continue;
      }

      if let Some(reason) = classify_reference(&self.root, base_dir, normalized) {
        debug!(%owner, reference = normalized, %reason, "broken asset reference");
        report.missing.push(AssetFinding {
          kind: reference.kind,
          owner: owner.clone(),
          reference: normalized.to_string(),
          reason,
        });
      }
    }

    Ok(())
  }
}

//! Directory scanning utilities for discovering site source files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

use crate::models::{FileCounts, SourceKind};

/// Source files discovered under a root, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInventory {
    /// HTML documents in walk order.
    pub html: Vec<PathBuf>,
    /// Stylesheets in walk order.
    pub css: Vec<PathBuf>,
    /// Scripts in walk order.
    pub js: Vec<PathBuf>,
}

impl SourceInventory {
    /// Walk `root` recursively collecting every HTML, CSS and JS file.
    ///
    /// Entries are visited in file-name order so repeated runs see files in the same
    /// sequence. Symlinked directories are not descended into; symlinks to files count as
    /// files.
    pub fn collect(root: &Path) -> Result<Self> {
        let mut inventory = Self::default();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("failed to walk directory {}", root.display()))?;
            let Some(kind) = source_kind_for(entry.path()) else {
                continue;
            };

            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            debug!(path = %entry.path().display(), ?kind, "discovered source file");
            inventory.files_mut(kind).push(entry.into_path());
        }

        Ok(inventory)
    }

    /// Files of a single kind.
    pub fn files(&self, kind: SourceKind) -> &[PathBuf] {
        match kind {
            SourceKind::Html => &self.html,
            SourceKind::Css => &self.css,
            SourceKind::Js => &self.js,
        }
    }

    fn files_mut(&mut self, kind: SourceKind) -> &mut Vec<PathBuf> {
        match kind {
            SourceKind::Html => &mut self.html,
            SourceKind::Css => &mut self.css,
            SourceKind::Js => &mut self.js,
        }
    }

    /// Number of files discovered per kind.
    pub fn counts(&self) -> FileCounts {
        FileCounts {
            html: self.html.len(),
            css: self.css.len(),
            js: self.js.len(),
        }
    }
}

/// Determine the source kind from a path's extension, matched case-sensitively.
pub fn source_kind_for(path: &Path) -> Option<SourceKind> {
    let extension = path.extension()?.to_str()?;
    SourceKind::ALL
        .into_iter()
        .find(|kind| kind.extension() == extension)
}

/// Read a source file, replacing byte sequences that are not valid UTF-8.
///
/// Only OS-level failures (missing permissions, vanished files) are reported as errors.
pub fn read_source_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

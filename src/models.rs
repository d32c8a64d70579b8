//! Data structures produced while scanning a site for asset references.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Category of source file the checker knows how to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
  /// `*.html` documents.
  Html,
  /// `*.css` stylesheets.
  Css,
  /// `*.js` scripts.
  Js,
}

impl SourceKind {
  /// All scanned kinds in processing order.
  pub const ALL: [SourceKind; 3] = [SourceKind::Html, SourceKind::Css, SourceKind::Js];

  /// File extension (without the dot) identifying this kind.
  pub fn extension(self) -> &'static str {
    match self {
      SourceKind::Html => "html",
      SourceKind::Css => "css",
      SourceKind::Js => "js",
    }
  }
}

/// Extraction rule that produced a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceKind {
  /// `src` attribute of an `<img>` tag.
  HtmlImgSrc,
  /// URL entry of a `srcset` attribute.
  HtmlSrcset,
  /// Contents of a CSS `url(...)` construct.
  CssUrl,
  /// Quoted image path literal inside JavaScript.
  JsImgStr,
}

impl ReferenceKind {
  /// Label used in reports.
  pub fn as_str(self) -> &'static str {
    match self {
      ReferenceKind::HtmlImgSrc => "HTML_IMG_SRC",
      ReferenceKind::HtmlSrcset => "HTML_SRCSET",
      ReferenceKind::CssUrl => "CSS_URL",
      ReferenceKind::JsImgStr => "JS_IMG_STR",
    }
  }
}

impl fmt::Display for ReferenceKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Raw reference text pulled out of a source file, before normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
  /// Rule that matched the reference.
  pub kind: ReferenceKind,
  /// Text exactly as captured, possibly still quoted or padded.
  pub raw: String,
}

impl Reference {
  /// Construct a reference from any string-like value.
  pub fn new(kind: ReferenceKind, raw: impl Into<String>) -> Self {
    Self {
      kind,
      raw: raw.into(),
    }
  }
}

/// Why a reference failed the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingReason {
  /// The reference resolves inside the root but nothing exists there.
  Missing,
  /// The reference resolves to a location outside the root.
  OutsideRoot,
}

impl FindingReason {
  /// Label used in reports.
  pub fn as_str(self) -> &'static str {
    match self {
      FindingReason::Missing => "MISSING",
      FindingReason::OutsideRoot => "OUTSIDE_ROOT",
    }
  }
}

impl fmt::Display for FindingReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A broken asset reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssetFinding {
  /// Rule that produced the reference.
  pub kind: ReferenceKind,
  /// Owning file relative to the root, `/`-separated.
  pub owner: String,
  /// Normalised reference text.
  pub reference: String,
  /// Classification of the failure.
  pub reason: FindingReason,
}

/// An `href`/`src` attribute whose value starts with a single slash.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LeadingSlashFinding {
  /// Owning file relative to the root, `/`-separated.
  pub owner: String,
  /// The matched attribute text, verbatim.
  pub snippet: String,
}

/// Number of source files scanned per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileCounts {
  /// HTML documents scanned.
  pub html: usize,
  /// Stylesheets scanned.
  pub css: usize,
  /// Scripts scanned.
  pub js: usize,
}

/// Complete outcome of a single checker run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanReport {
  /// Canonical root the scan was performed against.
  pub root: PathBuf,
  /// Files scanned per kind.
  pub files: FileCounts,
  /// Leading-slash attributes in first-seen order.
  pub leading_slash: Vec<LeadingSlashFinding>,
  /// Broken asset references in first-seen order.
  pub missing: Vec<AssetFinding>,
}

impl ScanReport {
  /// `true` when neither finding list has entries.
  pub fn is_clean(&self) -> bool {
    self.leading_slash.is_empty() && self.missing.is_empty()
  }
}

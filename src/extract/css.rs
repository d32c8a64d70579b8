//! Rule for `url(...)` constructs in stylesheets.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Reference, ReferenceKind};

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)url\(([^)]+)\)").expect("invalid css url regex"))
}

/// Collect the raw contents of every `url(...)` construct.
///
/// Quotes are left in place; they are removed during normalisation.
pub fn extract_url_references(text: &str) -> Vec<Reference> {
    url_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|value| Reference::new(ReferenceKind::CssUrl, value.as_str()))
        .collect()
}

//! Pattern-based extraction of asset references from source files.
//!
//! Extraction is best effort: each rule is a regular expression over the raw text, so
//! malformed or partial markup simply produces no match instead of an error.

pub mod css;
pub mod html;
pub mod js;

use crate::models::{Reference, SourceKind};

/// Extract every asset reference the rules for `kind` can find in `text`.
///
/// HTML yields all `<img src>` values followed by all `srcset` entries.
pub fn extract_references(kind: SourceKind, text: &str) -> Vec<Reference> {
    match kind {
        SourceKind::Html => {
            let mut references = html::extract_img_sources(text);
            references.extend(html::extract_srcset_references(text));
            references
        }
        SourceKind::Css => css::extract_url_references(text),
        SourceKind::Js => js::extract_image_literals(text),
    }
}

//! Rules for `<img>` sources, `srcset` candidates and leading-slash attributes.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Reference, ReferenceKind};

fn img_src_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)<img\b[^>]*\bsrc=['"]([^'">]+)['"]"#).expect("invalid img src regex")
    })
}

fn srcset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)\bsrcset=['"]([^'"]+)['"]"#).expect("invalid srcset regex")
    })
}

fn leading_slash_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)\b(?:href|src)=['"]/[^/][^'"]*['"]"#)
            .expect("invalid leading slash regex")
    })
}

/// Collect the `src` value of every `<img>` tag.
pub fn extract_img_sources(text: &str) -> Vec<Reference> {
    img_src_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|value| Reference::new(ReferenceKind::HtmlImgSrc, value.as_str()))
        .collect()
}

/// Collect the URL of every candidate in every `srcset` attribute.
///
/// `srcset="a.jpg 1x, b.jpg 2x"` yields `a.jpg` and `b.jpg`; descriptors are dropped and
/// blank candidates are skipped. The URL ends at the first space character only, so a
/// tab-separated descriptor stays attached to the URL.
pub fn extract_srcset_references(text: &str) -> Vec<Reference> {
    let mut references = Vec::new();
    for caps in srcset_pattern().captures_iter(text) {
        let Some(value) = caps.get(1) else {
            continue;
        };
        for candidate in value.as_str().split(',') {
            let candidate = candidate.trim();
            if candidate.is_empty() {
                continue;
            }
            let url = candidate.split(' ').next().unwrap_or(candidate);
            references.push(Reference::new(ReferenceKind::HtmlSrcset, url));
        }
    }
    references
}

/// Find `href=`/`src=` attributes whose quoted value starts with a single `/`.
///
/// The whole matched attribute text is returned verbatim. Protocol-relative values (`//`)
/// are not matched.
pub fn find_leading_slash_attributes(text: &str) -> Vec<&str> {
    leading_slash_pattern()
        .find_iter(text)
        .map(|found| found.as_str())
        .collect()
}

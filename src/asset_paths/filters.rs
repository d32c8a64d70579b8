/// Prefixes marking references that point somewhere other than the local filesystem.
const IGNORED_PREFIXES: &[&str] = &[
    "http://",
    "https://",
    "data:",
    "mailto:",
    "tel:",
    "#",
    // protocol-relative
    "//",
];

/// Determine whether a normalised reference should be skipped by the checker.
///
/// Empty references and external targets (remote URLs, data URIs, mail and phone links,
/// in-page fragments and protocol-relative URLs) cannot be verified against the source tree.
/// Prefix matching is case-sensitive.
pub fn should_ignore_asset_reference(value: &str) -> bool {
    value.is_empty()
        || IGNORED_PREFIXES
            .iter()
            .any(|prefix| value.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::should_ignore_asset_reference;

    #[test]
    fn ignores_http_urls() {
        assert!(should_ignore_asset_reference("https://example.com/a.png"));
        assert!(should_ignore_asset_reference("http://example.com"));
    }

    #[test]
    fn ignores_data_uris_and_contact_links() {
        assert!(should_ignore_asset_reference("data:image/png;base64,abc"));
        assert!(should_ignore_asset_reference("mailto:user@example.com"));
        assert!(should_ignore_asset_reference("tel:+15550100"));
    }

    #[test]
    fn ignores_fragments_and_protocol_relative_urls() {
        assert!(should_ignore_asset_reference("#section"));
        assert!(should_ignore_asset_reference("//cdn.example.com/a.png"));
    }

    #[test]
    fn ignores_empty_references() {
        assert!(should_ignore_asset_reference(""));
    }

    #[test]
    fn keeps_relative_and_leading_slash_paths() {
        assert!(!should_ignore_asset_reference("images/photo.png"));
        assert!(!should_ignore_asset_reference("../photo.png"));
        assert!(!should_ignore_asset_reference("/images/photo.png"));
    }
}

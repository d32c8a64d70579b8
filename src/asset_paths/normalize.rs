/// Clean a raw reference so it can be filtered and resolved.
///
/// Surrounding whitespace and quote characters are stripped first, then the fragment
/// (`#...`) and finally the query (`?...`) are cut off the remaining text.
pub fn normalize_reference(raw: &str) -> &str {
    let value = raw.trim().trim_matches(|c: char| c == '"' || c == '\'');
    let value = value.split_once('#').map_or(value, |(head, _)| head);
    value.split_once('?').map_or(value, |(head, _)| head)
}

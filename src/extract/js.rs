//! Rule for quoted image paths in scripts.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Reference, ReferenceKind};

fn image_literal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Both quote styles are spelled out so the closing quote always matches the opening one.
        Regex::new(
            r#"(?i)"([^'"]+\.(?:png|jpe?g|gif|svg|webp))"|'([^'"]+\.(?:png|jpe?g|gif|svg|webp))'"#,
        )
        .expect("invalid js image literal regex")
    })
}

/// Collect quoted string literals that name an image file.
pub fn extract_image_literals(text: &str) -> Vec<Reference> {
    image_literal_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|value| Reference::new(ReferenceKind::JsImgStr, value.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::extract_image_literals;

    fn raw(text: &str) -> Vec<String> {
        extract_image_literals(text)
            .into_iter()
            .map(|reference| reference.raw)
            .collect()
    }

    #[test]
    fn extracts_image_literals_in_both_quote_styles() {
        let js = r#"const a = "img/a.PNG"; const b = 'img/b.jpeg'; const c = "c.webp";"#;
        assert_eq!(raw(js), vec!["img/a.PNG", "img/b.jpeg", "c.webp"]);
    }

    #[test]
    fn requires_matching_quotes() {
        assert!(raw(r#"load("img/a.png');"#).is_empty());
    }

    #[test]
    fn ignores_other_extensions_and_template_literals() {
        assert!(raw(r#"import x from "./mod.js"; const t = `img/${n}.png`;"#).is_empty());
    }
}

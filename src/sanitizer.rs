//! Markup Sanitizer
//!
//! Strips a raw HTML document down to an allow-listed tag/attribute subset
//! that is safe to embed in a text prompt, while keeping the interactive
//! elements a model needs to infer selectors from.
//!
//! This is a security boundary, not a formatting convenience: page content
//! is untrusted, and a hidden script payload must never reach the prompt.
//! Sanitization is total: malformed HTML degrades gracefully instead of
//! failing.

use ammonia::Builder;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Interactive-control tags added on top of the baseline safe-tag set so
/// element selectors remain inferable from the sanitized markup.
const INTERACTIVE_TAGS: &[&str] = &["button", "form", "img", "input", "select", "textarea"];

/// URL schemes allowed to survive in attribute values. Everything else
/// (javascript:, file:, ...) is removed with the attribute.
const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "data"];

fn cleaner() -> &'static Builder<'static> {
    static CLEANER: OnceLock<Builder<'static>> = OnceLock::new();
    CLEANER.get_or_init(|| {
        let mut builder = Builder::default();
        builder.add_tags(INTERACTIVE_TAGS.iter().copied());
        builder.url_schemes(ALLOWED_URL_SCHEMES.iter().copied().collect::<HashSet<_>>());
        builder
    })
}

/// Reduce raw markup to the allow-listed subset.
///
/// Disallowed tags, attributes, and URL schemes are removed or neutralized,
/// never merely flagged. Script and style bodies are dropped entirely.
pub fn sanitize(html: &str) -> String {
    cleaner().clean(html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_script_tags_removed() {
        let html = r#"<div>hello<script>alert("pwned")</script></div>"#;
        let clean = sanitize(html);
        assert!(!clean.contains("<script"));
        assert!(!clean.contains("alert"));
        assert!(clean.contains("hello"));
    }

    #[test]
    fn test_style_body_removed() {
        let html = "<style>body { display: none }</style><p>visible</p>";
        let clean = sanitize(html);
        assert!(!clean.contains("display"));
        assert!(clean.contains("visible"));
    }

    #[test]
    fn test_event_handler_attributes_removed() {
        let html = r#"<a href="https://example.com" onclick="steal()">link</a>"#;
        let clean = sanitize(html);
        assert!(!clean.contains("onclick"));
        assert!(!clean.contains("steal"));
        assert!(clean.contains("https://example.com"));
    }

    #[test]
    fn test_javascript_scheme_removed() {
        let html = r#"<a href="javascript:alert(1)">click</a>"#;
        let clean = sanitize(html);
        assert!(!clean.contains("javascript:"));
    }

    #[test]
    fn test_file_scheme_removed() {
        let html = r#"<img src="file:///etc/passwd">"#;
        let clean = sanitize(html);
        assert!(!clean.contains("file:"));
    }

    #[test]
    fn test_data_scheme_survives() {
        let html = r#"<img src="data:image/png;base64,iVBORw0KGgo=">"#;
        let clean = sanitize(html);
        assert!(clean.contains("data:image/png"));
    }

    #[test]
    fn test_interactive_tags_survive() {
        let html = r#"
            <form action="https://example.com/search">
                <input id="kw" type="text">
                <select><option>a</option></select>
                <textarea>notes</textarea>
                <button>Go</button>
            </form>
        "#;
        let clean = sanitize(html);
        for tag in ["<form", "<input", "<select", "<textarea", "<button"] {
            assert!(clean.contains(tag), "expected {} to survive: {}", tag, clean);
        }
    }

    #[test]
    fn test_malformed_html_degrades_gracefully() {
        let html = "<div><input <script>oops</div></p><<<";
        let clean = sanitize(html);
        assert!(!clean.contains("<script"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_sanitize_never_panics(html in ".*") {
            let _ = sanitize(&html);
        }

        #[test]
        fn prop_no_script_tag_survives(html in ".*") {
            let clean = sanitize(&html).to_lowercase();
            prop_assert!(!clean.contains("<script"));
        }

        #[test]
        fn prop_no_javascript_scheme_survives(
            payload in "[a-z0-9]{0,16}",
        ) {
            let html = format!(r#"<a href="javascript:{}">x</a>"#, payload);
            let clean = sanitize(&html).to_lowercase();
            prop_assert!(!clean.contains("javascript:"));
        }
    }
}

//! Plain-text cleanup of provider HTML instructions

use std::sync::LazyLock;

use regex::Regex;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"<[^>]+>").expect("Failed to compile HTML tag pattern")
});

/// Turn an `html_instructions` value into natural-language text
///
/// Tags are removed, entities decoded, and whitespace runs collapsed to a
/// single space with no leading or trailing whitespace.
#[must_use]
pub fn clean_instruction(input: &str) -> String {
    let stripped = HTML_TAG.replace_all(input, "");
    let decoded = html_escape::decode_html_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

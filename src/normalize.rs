use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)[0-9]{2}\b").expect("year regex is valid"));

/// The visible text of an element, with every run of whitespace collapsed to a
/// single space and nothing at either end.
///
/// Text nodes are never glued together, so `<b>Gra</b>ph` becomes `Gra ph`.
pub fn element_text(el: &ElementRef) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The first standalone year between 1900 and 2099 in `text`, or an empty
/// string.
pub fn extract_year(text: &str) -> String {
    YEAR_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

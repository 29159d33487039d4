//! Small helpers over `scraper` shared by the page-scraping providers.

use scraper::{ElementRef, Selector};

use crate::content::FetchError;

/// Text content of an element and its descendants, cleaned with [`clean_text`].
pub(super) fn text_of(el: ElementRef<'_>) -> String {
    clean_text(&el.text().collect::<String>())
}

/// Collapses whitespace runs to single spaces and drops control characters,
/// so remote text always fits on one terminal line.
pub(super) fn clean_text(raw: &str) -> String {
    raw.split(|c: char| c.is_whitespace() || c.is_control())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(super) fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Parse(format!("bad selector {css}: {e}")))
}

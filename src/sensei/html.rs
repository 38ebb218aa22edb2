// HTML extraction helpers.
// Text and attribute lookups relative to an element, via CSS selectors.

use scraper::{ElementRef, Selector};

/// Concatenated text of every element under `scope` matching `selector`,
/// trimmed of surrounding whitespace. Empty when nothing matches.
pub fn child_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    let text: String = scope
        .select(selector)
        .flat_map(|el| el.text())
        .collect();
    text.trim().to_string()
}

/// Attribute of the first element under `scope` matching `selector`.
pub fn child_attr(scope: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|v| v.trim().to_string())
}

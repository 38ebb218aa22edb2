// Grammar listing page parser.
// Turns each row of a level's grammar table into a ListingRow.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use super::html::{child_attr, child_text};
use super::types::ListingRow;

struct ListingSelectors {
    row: Selector,
    num: Selector,
    grammar: Selector,
    reading: Selector,
    meaning: Selector,
    link: Selector,
}

static SELECTORS: LazyLock<ListingSelectors> = LazyLock::new(|| ListingSelectors {
    row: Selector::parse("tbody tr.jl-row").unwrap(),
    num: Selector::parse("td.jl-td-num").unwrap(),
    grammar: Selector::parse("td.jl-td-gj a.jl-link").unwrap(),
    reading: Selector::parse("td.jl-td-gr a.jl-link").unwrap(),
    meaning: Selector::parse("td.jl-td-gm").unwrap(),
    link: Selector::parse("a.jl-link").unwrap(),
});

/// Parse every grammar row on a listing page.
///
/// `page_url` is the address the page was fetched from; relative detail
/// links are resolved against it. Rows without a usable link are skipped.
pub fn parse_listing(html: &str, page_url: &Url) -> Vec<ListingRow> {
    let doc = Html::parse_document(html);
    let sel = &*SELECTORS;
    let mut rows = Vec::new();

    for row in doc.select(&sel.row) {
        let id = child_text(row, &sel.num);

        let Some(href) = child_attr(row, &sel.link, "href").filter(|h| !h.is_empty()) else {
            warn!(row = %id, page = %page_url, "Listing row has no detail link, skipping");
            continue;
        };
        let url = match page_url.join(&href) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!(row = %id, href = %href, error = %e, "Unparseable detail link, skipping");
                continue;
            }
        };

        rows.push(ListingRow {
            id,
            grammar: child_text(row, &sel.grammar),
            reading: child_text(row, &sel.reading),
            meaning: child_text(row, &sel.meaning),
            url,
        });
    }

    rows
}

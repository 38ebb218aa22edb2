// Grammar detail page parser.
// Extracts the header image and the first example sentences of a grammar point.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::html::{child_attr, child_text};
use super::types::{Example, MAX_EXAMPLES, NoteDetail};

struct DetailSelectors {
    main: Selector,
    header_image: Selector,
    example: Selector,
    sentence: Selector,
}

static SELECTORS: LazyLock<DetailSelectors> = LazyLock::new(|| DetailSelectors {
    main: Selector::parse("#main-content").unwrap(),
    header_image: Selector::parse("#header-image").unwrap(),
    example: Selector::parse("div.example-cont").unwrap(),
    sentence: Selector::parse(".example-main p.jp").unwrap(),
});

/// Parse a detail page. Anything outside `#main-content` is ignored.
pub fn parse_detail(html: &str) -> NoteDetail {
    let doc = Html::parse_document(html);
    let sel = &*SELECTORS;

    let Some(main) = doc.select(&sel.main).next() else {
        debug!("Detail page has no #main-content");
        return NoteDetail::default();
    };

    let image = child_attr(main, &sel.header_image, "src").unwrap_or_default();
    let examples = main
        .select(&sel.example)
        .filter_map(parse_example)
        .take(MAX_EXAMPLES)
        .collect();

    NoteDetail { image, examples }
}

/// Parse one `div.example-cont`. Elements without an id are not examples.
fn parse_example(el: ElementRef<'_>) -> Option<Example> {
    let id = el.value().id().filter(|id| !id.is_empty())?.to_string();

    let reading = scoped_text(el, &format!(".collapse#{}_ja .alert-success", id));
    let meaning = scoped_text(el, &format!(".collapse#{}_en .alert-primary", id));

    Some(Example {
        sentence: child_text(el, &SELECTORS.sentence),
        reading,
        meaning,
        id,
    })
}

/// Text for a selector built from page data; an unparseable selector yields "".
fn scoped_text(el: ElementRef<'_>, css: &str) -> String {
    match Selector::parse(css) {
        Ok(selector) => child_text(el, &selector),
        Err(e) => {
            debug!(selector = css, error = %e, "Skipping unparseable example selector");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_block(id: &str, n: u32) -> String {
        format!(
            r#"<div class="example-cont" id="{id}">
                 <div class="example-main"><p class="jp">文{n}</p></div>
                 <div class="collapse" id="{id}_ja"><div class="alert alert-success"> ぶん{n} </div></div>
                 <div class="collapse" id="{id}_en"><div class="alert alert-primary">Sentence {n}</div></div>
               </div>"#
        )
    }

    fn detail_page(body: &str) -> String {
        format!(
            r#"<html><body>
                 <img id="header-image" src="/outside.png">
                 <div id="main-content">
                   <img id="header-image" src="https://jlptsensei.com/wp-content/uploads/wake.png">
                   {body}
                 </div>
               </body></html>"#
        )
    }

    #[test]
    fn test_parse_detail_image_and_examples() {
        let body = format!("{}{}", example_block("ex_1", 1), example_block("ex_2", 2));
        let detail = parse_detail(&detail_page(&body));

        assert_eq!(
            detail.image,
            "https://jlptsensei.com/wp-content/uploads/wake.png"
        );
        assert_eq!(detail.examples.len(), 2);
        assert_eq!(
            detail.examples[0],
            Example {
                id: "ex_1".to_string(),
                sentence: "文1".to_string(),
                reading: "ぶん1".to_string(),
                meaning: "Sentence 1".to_string(),
            }
        );
        assert_eq!(detail.examples[1].meaning, "Sentence 2");
    }

    #[test]
    fn test_at_most_three_examples() {
        let body: String = (1..=5).map(|n| example_block(&format!("ex_{n}"), n)).collect();
        let detail = parse_detail(&detail_page(&body));

        let ids: Vec<&str> = detail.examples.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["ex_1", "ex_2", "ex_3"]);
    }

    #[test]
    fn test_examples_without_id_do_not_count() {
        let body = format!(
            r#"<div class="example-cont"><div class="example-main"><p class="jp">skip</p></div></div>
               <div class="example-cont" id=""><p>skip</p></div>
               {}{}{}{}"#,
            example_block("a", 1),
            example_block("b", 2),
            example_block("c", 3),
            example_block("d", 4),
        );
        let detail = parse_detail(&detail_page(&body));

        let ids: Vec<&str> = detail.examples.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_translation_blocks() {
        let body = r#"<div class="example-cont" id="lonely">
                        <div class="example-main"><p class="jp">一人</p></div>
                      </div>"#;
        let detail = parse_detail(&detail_page(body));

        assert_eq!(detail.examples.len(), 1);
        assert_eq!(detail.examples[0].sentence, "一人");
        assert_eq!(detail.examples[0].reading, "");
        assert_eq!(detail.examples[0].meaning, "");
    }

    #[test]
    fn test_id_that_cannot_form_a_selector() {
        let body = r#"<div class="example-cont" id="1bad">
                        <div class="example-main"><p class="jp">数字</p></div>
                      </div>"#;
        let detail = parse_detail(&detail_page(body));

        assert_eq!(detail.examples.len(), 1);
        assert_eq!(detail.examples[0].id, "1bad");
        assert_eq!(detail.examples[0].sentence, "数字");
        assert_eq!(detail.examples[0].reading, "");
    }

    #[test]
    fn test_no_main_content() {
        let detail = parse_detail("<html><body><img id=\"header-image\" src=\"x\"></body></html>");
        assert_eq!(detail, NoteDetail::default());
    }
}

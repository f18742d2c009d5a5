use scraper::{ElementRef, Selector};

use crate::error::{ScrapeError, ScrapeResult};

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>()
}

/// Text of `paragraph` minus any text owned by a `<p>` nested inside it.
///
/// Quirks-mode pages let a `<table>` sit inside an open paragraph, so a cell's
/// own paragraph ends up nested in the outer one.
pub fn own_paragraph_text(paragraph: ElementRef) -> String {
    paragraph
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let owner = node
                .ancestors()
                .find(|ancestor| ancestor.value().as_element().is_some_and(|e| e.name() == "p"))?;
            (owner.id() == paragraph.id()).then_some(&**text)
        })
        .collect::<String>()
}

pub fn parse_selector(selectors: &str) -> ScrapeResult<Selector> {
    Selector::parse(selectors).map_err(|e| ScrapeError::Selector(format!("{selectors}: {e}")))
}

use log::warn;
use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::{
    error::ScrapeResult,
    markup::MarkupRules,
    requests::Fetch,
    text_manipulators::{own_paragraph_text, parse_selector},
};

pub const SECTION_DELIMITER: &str = "\n\n[SECTION]\n\n";

/// What ended up in one output slot of a fetch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArticleOutcome {
    Fetched { text: String },
    Failed { reason: String },
}

impl ArticleOutcome {
    pub fn text(&self) -> Option<&str> {
        match self {
            ArticleOutcome::Fetched { text } => Some(text),
            ArticleOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ArticleOutcome::Failed { .. })
    }
}

pub struct ArticleNormalizer {
    markup: MarkupRules,
    paragraph_selector: Selector,
    named_anchor_selector: Selector,
    footnote_name: Regex,
}

impl ArticleNormalizer {
    pub fn new() -> ScrapeResult<Self> {
        Ok(Self {
            markup: MarkupRules::new()?,
            paragraph_selector: parse_selector("p")?,
            named_anchor_selector: parse_selector("a[name]")?,
            footnote_name: Regex::new(r"fn\d")?,
        })
    }

    /// Reduces a raw minutes page to its paragraphs joined by [`SECTION_DELIMITER`].
    ///
    /// Missing structure degrades to fewer (or zero) paragraphs rather than an error.
    pub fn normalize(&self, html: &str) -> String {
        let repaired = self.markup.repair_paragraphs(html);
        let truncated = self.markup.truncate_at_boundary(&repaired);
        let mut document = Html::parse_document(&truncated);

        let footnotes: Vec<_> = document
            .select(&self.named_anchor_selector)
            .filter(|anchor| {
                anchor
                    .value()
                    .attr("name")
                    .is_some_and(|name| self.footnote_name.is_match(name))
            })
            .map(|anchor| anchor.id())
            .collect();
        for id in footnotes {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }

        // html5ever turns a stray `</p>` into a childless paragraph; those are not content.
        document
            .select(&self.paragraph_selector)
            .filter(|paragraph| paragraph.has_children())
            .map(|paragraph| own_paragraph_text(paragraph).trim().to_string())
            .collect::<Vec<_>>()
            .join(SECTION_DELIMITER)
    }

    pub async fn fetch_article<F: Fetch>(&self, fetcher: &F, url: &str) -> ArticleOutcome {
        match fetcher.fetch_url_body(url).await {
            Ok(html) => ArticleOutcome::Fetched {
                text: self.normalize(&html),
            },
            Err(e) => {
                warn!("failed to fetch {url}: {e}");
                ArticleOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

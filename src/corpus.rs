use chrono::{Datelike, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    Year,
    discovery::{DocumentCollection, DocumentReference, discover_links},
    error::ScrapeResult,
    normalizer::ArticleOutcome,
    pool::fetch_articles,
    requests::Fetch,
    scraping_context::ScrapingContext,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    #[serde(flatten)]
    pub reference: DocumentReference,
    pub article: ArticleOutcome,
}

/// Discovered references paired with their normalized articles, in meeting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub content_type: String,
    pub from_year: Year,
    pub entries: Vec<CorpusEntry>,
    pub release_dates: Vec<NaiveDate>,
}

impl Corpus {
    /// Pairs `outcomes[i]` with `collection.references[i]`, then orders by
    /// meeting date. Entries sharing a date keep discovery order.
    pub fn assemble(
        content_type: &str,
        from_year: Year,
        collection: DocumentCollection,
        outcomes: Vec<ArticleOutcome>,
    ) -> Self {
        if outcomes.len() != collection.references.len() {
            warn!(
                "{} articles for {} references; unmatched references are marked failed",
                outcomes.len(),
                collection.references.len()
            );
        }
        let mut outcomes = outcomes.into_iter();
        let mut entries: Vec<CorpusEntry> = collection
            .references
            .into_iter()
            .map(|reference| CorpusEntry {
                article: outcomes.next().unwrap_or_else(|| ArticleOutcome::Failed {
                    reason: format!("no article produced for {}", reference.link),
                }),
                reference,
            })
            .collect();
        entries.sort_by_key(|entry| entry.reference.meeting_date);

        Self {
            content_type: content_type.to_string(),
            from_year,
            entries,
            release_dates: collection.release_dates,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &CorpusEntry> {
        self.entries.iter().filter(|entry| entry.article.is_failed())
    }

    /// Year of the latest meeting, or `from_year` for an empty corpus.
    pub fn last_year(&self) -> Year {
        self.entries
            .last()
            .map_or(self.from_year, |entry| entry.reference.meeting_date.year())
    }
}

/// Discovers every minutes document since `from_year` and fetches them all.
pub async fn build_corpus<F: Fetch>(ctx: &ScrapingContext<F>, from_year: Year) -> ScrapeResult<Corpus> {
    let collection = discover_links(ctx, from_year).await?;
    let outcomes = fetch_articles(ctx, &collection.references).await;
    Ok(Corpus::assemble(
        &ctx.scraping_config.content_type,
        from_year,
        collection,
        outcomes,
    ))
}

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use log::{debug, info};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::{
    Year,
    dates::{correct_meeting_date, parse_release_date},
    error::ScrapeResult,
    link_patterns::PageKind,
    requests::Fetch,
    scraping_context::ScrapingContext,
    speakers::speaker_from_date,
    text_manipulators::{extract_text, parse_selector},
};

/// First year covered by the calendar page; archive pages stop just before it.
pub const MODERN_CUTOFF_YEAR: Year = 2017;
/// Links are only harvested from archive pages when the run starts at or before this year.
pub const ARCHIVE_THRESHOLD_YEAR: Year = 2015;
pub const MINUTES_TITLE: &str = "FOMC Meeting Minutes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReference {
    pub link: String,
    pub title: String,
    pub speaker: String,
    pub meeting_date: NaiveDate,
    pub release_date: Option<NaiveDate>,
}

impl DocumentReference {
    fn minutes(link: &str, meeting_date: NaiveDate, release_date: Option<NaiveDate>) -> Self {
        Self {
            link: link.to_string(),
            title: MINUTES_TITLE.to_string(),
            speaker: speaker_from_date(meeting_date).to_string(),
            meeting_date,
            release_date,
        }
    }
}

/// Result of one discovery run.
///
/// `release_dates` is harvested independently of `references` and is not
/// positionally aligned with it; the two may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCollection {
    pub references: Vec<DocumentReference>,
    pub release_dates: Vec<NaiveDate>,
}

impl DocumentCollection {
    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

#[derive(Debug, Default)]
struct DiscoveryAccumulator {
    references: Vec<DocumentReference>,
    seen_links: HashSet<String>,
    release_dates: Vec<NaiveDate>,
}

impl DiscoveryAccumulator {
    /// Returns false when the link was already discovered earlier in the run.
    fn push_reference(&mut self, reference: DocumentReference) -> bool {
        if !self.seen_links.insert(reference.link.clone()) {
            debug!("skipping duplicate link {}", reference.link);
            return false;
        }
        self.references.push(reference);
        true
    }

    fn finish(self) -> DocumentCollection {
        DocumentCollection {
            references: self.references,
            release_dates: self.release_dates,
        }
    }
}

pub struct LinkDiscovery<'a, F> {
    ctx: &'a ScrapingContext<F>,
    anchor_selector: Selector,
    minutes_block_selector: Selector,
}

impl<'a, F: Fetch> LinkDiscovery<'a, F> {
    pub fn new(ctx: &'a ScrapingContext<F>) -> ScrapeResult<Self> {
        Ok(Self {
            ctx,
            anchor_selector: parse_selector("a[href]")?,
            minutes_block_selector: parse_selector(r#"div[class*="fomc-meeting__minutes"]"#)?,
        })
    }

    /// Builds the ordered document index: calendar-page links first, then
    /// archive years in ascending order.
    pub async fn discover(&self, from_year: Year) -> ScrapeResult<DocumentCollection> {
        let config = &self.ctx.scraping_config;
        let from_year = from_year.min(MODERN_CUTOFF_YEAR);
        let mut acc = DiscoveryAccumulator::default();

        if config.verbose {
            println!("Getting links for {}...", config.content_type);
        }
        let calendar = self.ctx.fetcher.fetch_url_body(&config.calendar_url).await?;
        self.harvest_calendar(&calendar, &mut acc)?;
        let current_page_links = acc.references.len();

        let mut archive_pages = Vec::new();
        for year in from_year..MODERN_CUTOFF_YEAR {
            let page = self
                .ctx
                .fetcher
                .fetch_url_body(&config.historical_url(year))
                .await?;
            self.harvest_release_dates(&page, &mut acc)?;
            archive_pages.push((year, page));
        }
        if config.verbose {
            println!("{current_page_links} links found in the current page.");
        }

        if from_year <= ARCHIVE_THRESHOLD_YEAR {
            info!("Getting links from archive pages...");
            for (year, page) in &archive_pages {
                let found = self.harvest_archive_links(page, &mut acc)?;
                if config.verbose {
                    println!("YEAR: {year} - {found} links found.");
                }
            }
        }

        info!(
            "There are total {} links for {}",
            acc.references.len(),
            config.content_type
        );
        Ok(acc.finish())
    }

    fn harvest_calendar(&self, html: &str, acc: &mut DiscoveryAccumulator) -> ScrapeResult<()> {
        let patterns = &self.ctx.link_patterns;
        let document = Html::parse_document(html);

        // A minutes block holding one annotation keys its release date to its own links.
        let mut keyed_release_dates = HashMap::new();
        for block in document.select(&self.minutes_block_selector) {
            let dates = patterns
                .release_date_triples(&extract_text(block))
                .iter()
                .map(|triple| parse_release_date(triple))
                .collect::<ScrapeResult<Vec<_>>>()?;
            if let [release_date] = dates.as_slice() {
                for anchor in block.select(&self.anchor_selector) {
                    if let Some(href) = anchor.value().attr("href") {
                        keyed_release_dates.insert(href.to_string(), *release_date);
                    }
                }
            }
            acc.release_dates.extend(dates);
        }

        for href in self.matching_links(&document, PageKind::Calendar) {
            let meeting_date = self.ctx.link_date_extractor.date_from_link(href)?;
            let release_date = keyed_release_dates.get(href).copied();
            acc.push_reference(DocumentReference::minutes(href, meeting_date, release_date));
        }
        Ok(())
    }

    fn harvest_release_dates(&self, html: &str, acc: &mut DiscoveryAccumulator) -> ScrapeResult<()> {
        for triple in self.ctx.link_patterns.release_date_triples(html) {
            acc.release_dates.push(parse_release_date(&triple)?);
        }
        Ok(())
    }

    /// Returns how many matching links the page carried, duplicates included.
    fn harvest_archive_links(&self, html: &str, acc: &mut DiscoveryAccumulator) -> ScrapeResult<usize> {
        let document = Html::parse_document(html);
        let links = self.matching_links(&document, PageKind::Historical);
        for href in &links {
            let embedded = self.ctx.link_date_extractor.date_from_link(href)?;
            let meeting_date = correct_meeting_date(embedded);
            acc.push_reference(DocumentReference::minutes(href, meeting_date, None));
        }
        Ok(links.len())
    }

    fn matching_links<'d>(&self, document: &'d Html, kind: PageKind) -> Vec<&'d str> {
        document
            .select(&self.anchor_selector)
            .filter_map(|anchor| anchor.value().attr("href"))
            .filter(|href| self.ctx.link_patterns.matches(kind, href))
            .collect()
    }
}

pub async fn discover_links<F: Fetch>(
    ctx: &ScrapingContext<F>,
    from_year: Year,
) -> ScrapeResult<DocumentCollection> {
    LinkDiscovery::new(ctx)?.discover(from_year).await
}

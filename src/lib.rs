mod config;
mod corpus;
mod dates;
mod discovery;
mod error;
mod link_patterns;
mod markup;
mod normalizer;
mod pool;
mod ratelimit;
mod requests;
mod scraping_context;
mod speakers;
mod store;
mod text_manipulators;

pub type Year = i32;

pub use config::{ScrapingConfig, ScrapingEnv};
pub use corpus::{Corpus, CorpusEntry, build_corpus};
pub use dates::{LinkDateExtractor, correct_meeting_date, parse_release_date};
pub use discovery::{
    ARCHIVE_THRESHOLD_YEAR, DocumentCollection, DocumentReference, LinkDiscovery,
    MINUTES_TITLE, MODERN_CUTOFF_YEAR, discover_links,
};
pub use error::{ScrapeError, ScrapeResult};
pub use link_patterns::{LinkPatterns, PageKind};
pub use markup::MarkupRules;
pub use normalizer::{ArticleNormalizer, ArticleOutcome, SECTION_DELIMITER};
pub use pool::fetch_articles;
pub use requests::{Fetch, RequestClient};
pub use scraping_context::ScrapingContext;
pub use speakers::{UNKNOWN_SPEAKER, speaker_from_date};
pub use store::{CorpusStore, TEXT_FILE_PREFIX};

use std::{sync::Arc, time::Duration};

use crate::{
    config::ScrapingConfig,
    dates::LinkDateExtractor,
    error::ScrapeResult,
    link_patterns::LinkPatterns,
    normalizer::ArticleNormalizer,
    requests::{Fetch, RequestClient},
};

/// Everything a run needs: configuration, compiled patterns and the fetcher.
pub struct ScrapingContext<F = RequestClient> {
    pub scraping_config: ScrapingConfig,
    pub link_patterns: LinkPatterns,
    pub link_date_extractor: LinkDateExtractor,
    pub normalizer: Arc<ArticleNormalizer>,
    pub fetcher: Arc<F>,
}

impl ScrapingContext<RequestClient> {
    pub fn new(scraping_config: ScrapingConfig) -> ScrapeResult<Self> {
        let timeout = Duration::from_secs(scraping_config.request_timeout_secs);
        let request_client = RequestClient::new(timeout)?;
        Self::with_fetcher(scraping_config, request_client)
    }
}

impl<F: Fetch> ScrapingContext<F> {
    pub fn with_fetcher(scraping_config: ScrapingConfig, fetcher: F) -> ScrapeResult<Self> {
        let link_patterns = LinkPatterns::new()?;
        let link_date_extractor = LinkDateExtractor::new()?;
        let normalizer = Arc::new(ArticleNormalizer::new()?);
        Ok(ScrapingContext {
            scraping_config,
            link_patterns,
            link_date_extractor,
            normalizer,
            fetcher: Arc::new(fetcher),
        })
    }
}

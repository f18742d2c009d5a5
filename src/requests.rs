use std::future::Future;
use std::time::Duration;

use log::debug;
use reqwest::{Client, ClientBuilder, Response};

use crate::error::{ScrapeError, ScrapeResult};
use crate::ratelimit::RateLimiter;

/// Source of page bodies. Discovery and the fetch pool only see this trait.
pub trait Fetch: Send + Sync + 'static {
    fn fetch_url_body(&self, url: &str) -> impl Future<Output = ScrapeResult<String>> + Send;
}

pub struct RequestClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl RequestClient {
    pub fn new(timeout: Duration) -> ScrapeResult<Self> {
        let client = ClientBuilder::new().timeout(timeout).build()?;
        let rate_limiter = RateLimiter::new();
        Ok(Self {
            client,
            rate_limiter,
        })
    }

    pub async fn fetch_url_response(&self, url: &str) -> ScrapeResult<Response> {
        // Wait (non-blocking) until we're allowed to make a request according
        // to our self-imposed rate-limiting policy.
        self.rate_limiter.wait_until_ready().await;

        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

impl Fetch for RequestClient {
    async fn fetch_url_body(&self, url: &str) -> ScrapeResult<String> {
        let response = self.fetch_url_response(url).await?;
        let body = response.text().await?;
        Ok(body)
    }
}

#![allow(dead_code)]

use std::{collections::HashMap, time::Duration};

use fomc_minutes::{Fetch, ScrapeError, ScrapeResult, ScrapingConfig, ScrapingContext};

pub const BASE_URL: &str = "http://fomc.test";

/// In-memory site: url -> (body, artificial latency).
#[derive(Default)]
pub struct StaticSite {
    pages: HashMap<String, (String, Duration)>,
}

impl StaticSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, path: &str, body: &str) -> Self {
        self.pages
            .insert(format!("{BASE_URL}{path}"), (body.to_string(), Duration::ZERO));
        self
    }

    pub fn slow_page(mut self, path: &str, body: &str, delay: Duration) -> Self {
        self.pages.insert(format!("{BASE_URL}{path}"), (body.to_string(), delay));
        self
    }
}

impl Fetch for StaticSite {
    async fn fetch_url_body(&self, url: &str) -> ScrapeResult<String> {
        match self.pages.get(url) {
            Some((body, delay)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                Ok(body.clone())
            }
            None => Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

pub fn context(site: StaticSite, max_threads: usize) -> ScrapingContext<StaticSite> {
    let mut config = ScrapingConfig::for_base_url(BASE_URL);
    config.max_threads = max_threads;
    ScrapingContext::with_fetcher(config, site).unwrap()
}

pub fn historical_path(year: i32) -> String {
    format!("/monetarypolicy/fomchistorical{year}.htm")
}

pub const CALENDAR_PATH: &str = "/monetarypolicy/fomccalendars.htm";

/// A calendar page in the current site layout.
pub fn calendar_page() -> String {
    r#"<html><body>
    <div class="panel">
      <div class="row fomc-meeting">
        <div class="fomc-meeting__month">January/February</div>
        <div class="col-xs-12 col-md-4 col-lg-2 fomc-meeting__minutes">
          Minutes: <a href="/monetarypolicy/files/fomcminutes20170201.pdf">PDF</a> |
          <a href="/monetarypolicy/fomcminutes20170201.htm">HTML</a>
          <br/>(Released February 22, 2017)
        </div>
      </div>
      <div class="row fomc-meeting">
        <div class="col-xs-12 col-md-4 col-lg-2 fomc-meeting__minutes">
          Minutes: <a href="/monetarypolicy/fomcminutes20170315.htm">HTML</a>
          <br/>(Released Apr 5, 2017)
        </div>
      </div>
      <div class="row fomc-meeting">
        <div class="col-xs-12 col-md-4 col-lg-2 fomc-meeting__minutes">
          Minutes: <a href="/monetarypolicy/fomcminutes20170503.htm">HTML</a>
        </div>
      </div>
      <p>Press conference (Released March 1, 2017) outside any minutes block</p>
      <a href="/monetarypolicy/fomcpresconf20170315.htm">Press Conference</a>
    </div>
    </body></html>"#
        .to_string()
}

pub fn historical_page(year: i32, links: &[&str], releases: &[&str]) -> String {
    let mut html = format!("<html><body><h3>{year} FOMC Meetings</h3>");
    for link in links {
        html.push_str(&format!("<p><a href=\"{link}\">Minutes</a></p>"));
    }
    for release in releases {
        html.push_str(&format!("<p>Minutes (Released {release})</p>"));
    }
    html.push_str("<a href=\"/monetarypolicy/fomchistorical.htm\">Back</a></body></html>");
    html
}

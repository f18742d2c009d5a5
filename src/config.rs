use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

use crate::Year;

const DEFAULT_BASE_URL: &str = "https://www.federalreserve.gov";
const CALENDAR_PATH: &str = "/monetarypolicy/fomccalendars.htm";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_content_type() -> String {
    "minutes".to_string()
}

fn default_verbose() -> bool {
    true
}

fn default_max_threads() -> usize {
    10
}

fn default_base_dir() -> PathBuf {
    PathBuf::from("../data/FOMC/")
}

fn default_from_year() -> Year {
    1990
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// The `FOMC_*` env vars that drive a scraping run.
#[derive(Debug, Deserialize)]
pub struct ScrapingEnv {
    #[serde(default = "default_base_url")]
    base_url: String,
    calendar_url: Option<String>,
    #[serde(default = "default_content_type")]
    content_type: String,
    #[serde(default = "default_verbose")]
    verbose: bool,
    #[serde(default = "default_max_threads")]
    max_threads: usize,
    #[serde(default = "default_base_dir")]
    base_dir: PathBuf,
    #[serde(default = "default_from_year")]
    from_year: Year,
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,
}

impl LoadFromEnv for ScrapingEnv {
    const ENV_PREFIX: &'static str = "FOMC_";
}

#[derive(Debug, Clone)]
pub struct ScrapingConfig {
    pub base_url: String,
    pub calendar_url: String,
    pub content_type: String,
    pub verbose: bool,
    pub max_threads: usize,
    pub base_dir: PathBuf,
    pub from_year: Year,
    pub request_timeout_secs: u64,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::from(ScrapingEnv::load_from_env()?))
    }

    /// Defaults pointed at `base_url`, used by tests and local mirrors.
    pub fn for_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            calendar_url: format!("{base_url}{CALENDAR_PATH}"),
            base_url,
            content_type: default_content_type(),
            verbose: false,
            max_threads: default_max_threads(),
            base_dir: default_base_dir(),
            from_year: default_from_year(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    pub fn historical_url(&self, year: Year) -> String {
        format!("{}/monetarypolicy/fomchistorical{}.htm", self.base_url, year)
    }

    pub fn document_url(&self, link: &str) -> String {
        format!("{}{}", self.base_url, link)
    }
}

impl From<ScrapingEnv> for ScrapingConfig {
    fn from(env: ScrapingEnv) -> Self {
        let base_url = env.base_url.trim_end_matches('/').to_string();
        let calendar_url = env
            .calendar_url
            .unwrap_or_else(|| format!("{base_url}{CALENDAR_PATH}"));
        Self {
            base_url,
            calendar_url,
            content_type: env.content_type,
            verbose: env.verbose,
            max_threads: env.max_threads.max(1),
            base_dir: env.base_dir,
            from_year: env.from_year,
            request_timeout_secs: env.request_timeout_secs,
        }
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    /// Stripped from each env var name before it is matched to a field.
    const ENV_PREFIX: &'static str;

    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config = envy::prefixed(Self::ENV_PREFIX)
            .from_env::<Self>()
            .context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_fills_in_calendar_url_and_clamps_threads() {
        let env = envy::prefixed(ScrapingEnv::ENV_PREFIX)
            .from_iter::<_, ScrapingEnv>(vec![
                ("FOMC_BASE_URL".to_string(), "http://mirror.test/".to_string()),
                ("FOMC_MAX_THREADS".to_string(), "0".to_string()),
                ("FOMC_VERBOSE".to_string(), "false".to_string()),
                ("BASE_DIR".to_string(), "/ignored/without/prefix".to_string()),
            ])
            .unwrap();
        let config = ScrapingConfig::from(env);
        assert_eq!(config.base_url, "http://mirror.test");
        assert_eq!(config.calendar_url, "http://mirror.test/monetarypolicy/fomccalendars.htm");
        assert_eq!(config.max_threads, 1);
        assert!(!config.verbose);
        assert_eq!(config.content_type, "minutes");
        assert_eq!(config.from_year, 1990);
        assert_eq!(config.base_dir, PathBuf::from("../data/FOMC/"));
    }

    #[test]
    fn urls_are_built_from_base() {
        let config = ScrapingConfig::for_base_url("http://mirror.test");
        assert_eq!(
            config.historical_url(2009),
            "http://mirror.test/monetarypolicy/fomchistorical2009.htm"
        );
        assert_eq!(
            config.document_url("/fomc/minutes/19960130.htm"),
            "http://mirror.test/fomc/minutes/19960130.htm"
        );
    }
}

use dotenv::dotenv;
use fomc_minutes::{CorpusStore, ScrapingConfig, ScrapingContext, build_corpus};

extern crate env_logger;
extern crate log;

use log::LevelFilter;

use log::{error, info, warn};

async fn run() -> anyhow::Result<()> {
    let scraping_config = ScrapingConfig::new()?;
    let from_year = scraping_config.from_year;
    let store = CorpusStore::new(scraping_config.base_dir.clone());
    let ctx = ScrapingContext::new(scraping_config)?;

    let corpus = build_corpus(&ctx, from_year).await?;
    info!(
        "Collected {} {} documents from {} onward",
        corpus.entries.len(),
        corpus.content_type,
        from_year
    );

    let failures: Vec<_> = corpus.failures().collect();
    if !failures.is_empty() {
        warn!("{} documents could not be fetched:", failures.len());
        for entry in &failures {
            warn!("  {} ({})", entry.reference.link, entry.reference.meeting_date);
        }
    }

    store.save_json(&corpus)?;
    store.save_texts(&corpus)?;
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run().await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

use std::{
    io::Write,
    sync::{
        Arc, OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use futures::future::join_all;
use log::{error, info};

use crate::{
    discovery::DocumentReference,
    normalizer::ArticleOutcome,
    requests::Fetch,
    scraping_context::ScrapingContext,
};

/// Fetches and normalizes every reference with at most `max_threads`
/// concurrent workers. `result[i]` always belongs to `references[i]`.
pub async fn fetch_articles<F: Fetch>(
    ctx: &ScrapingContext<F>,
    references: &[DocumentReference],
) -> Vec<ArticleOutcome> {
    let total = references.len();
    if total == 0 {
        return Vec::new();
    }
    let config = &ctx.scraping_config;
    let workers = config.max_threads.clamp(1, total);

    let urls: Arc<Vec<String>> = Arc::new(
        references
            .iter()
            .map(|reference| config.document_url(&reference.link))
            .collect(),
    );
    // One pre-allocated slot per reference; each is set exactly once.
    let slots: Arc<Vec<OnceLock<ArticleOutcome>>> =
        Arc::new((0..total).map(|_| OnceLock::new()).collect());
    let counter = Arc::new(AtomicUsize::new(0));
    let normalizer = Arc::clone(&ctx.normalizer);
    let verbose = config.verbose;

    let handles = (0..workers)
        .map(|_| {
            let fetcher = Arc::clone(&ctx.fetcher);
            let normalizer = Arc::clone(&normalizer);
            let urls = Arc::clone(&urls);
            let slots = Arc::clone(&slots);
            let counter = Arc::clone(&counter);
            tokio::spawn(async move {
                loop {
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    if i >= urls.len() {
                        break;
                    }
                    if verbose {
                        print!(".");
                        let _ = std::io::stdout().flush();
                    }
                    let outcome = normalizer.fetch_article(fetcher.as_ref(), &urls[i]).await;
                    let _ = slots[i].set(outcome);
                }
            })
        })
        .collect::<Vec<_>>();

    // Barrier: no slot is read before every worker has finished.
    for joined in join_all(handles).await {
        if let Err(e) = joined {
            error!("fetch worker aborted: {e}");
        }
    }
    if verbose {
        println!();
    }

    let outcomes: Vec<ArticleOutcome> = slots
        .iter()
        .zip(urls.iter())
        .map(|(slot, url)| {
            slot.get().cloned().unwrap_or_else(|| ArticleOutcome::Failed {
                reason: format!("no worker completed {url}"),
            })
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.is_failed()).count();
    info!("Fetched {} documents ({} failed)", total - failed, failed);
    outcomes
}

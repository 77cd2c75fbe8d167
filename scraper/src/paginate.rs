//! Sequential retrieval of every page of a search.

use jobindex_common::{normalize, JobRecord};
use tracing::{debug, info};

use crate::error::Result;
use crate::fetch::PageSource;
use crate::query::set_query_param;

/// Fetches page 1 of `base_url`, then pages 2..=`total_pages`, and returns
/// all listings in page order.
///
/// Any failed page aborts the run; nothing fetched before it is returned.
pub fn fetch_all<S: PageSource + ?Sized>(source: &S, base_url: &str) -> Result<Vec<JobRecord>> {
    let first_url = set_query_param(base_url, "page", "1")?;
    info!("📡 Fetching page 1 from {}", first_url);

    let first = source.fetch(&first_url)?;
    let total_pages = first.total_pages();
    let mut jobs = normalize(&first);
    info!(total_pages, found = jobs.len(), "✅ Fetched page 1");

    for page in 2..=total_pages {
        let page_url = set_query_param(base_url, "page", &page.to_string())?;
        debug!(page, url = %page_url, "rewrote page parameter");

        let payload = source.fetch(&page_url)?;
        let page_jobs = normalize(&payload);
        info!(page, total_pages, found = page_jobs.len(), "✅ Fetched page");
        jobs.extend(page_jobs);
    }

    info!("📊 Total jobs found: {}", jobs.len());
    Ok(jobs)
}

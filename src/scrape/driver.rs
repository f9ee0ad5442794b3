//! Drives the year-index → year-page → paper-detail pipeline.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::ScrapeConfig;
use crate::models::PaperRecord;
use crate::scrape::{
    scrape_paper_details, scrape_year_index, scrape_year_page, Fetch, ScrapeError,
};

/// Sequential harvester over the configured year range.
///
/// Makes one outstanding request at a time and pauses for the courtesy
/// delay after finishing each year's detail pages.
#[derive(Debug)]
pub struct Harvester {
    fetch: Arc<dyn Fetch>,
    config: ScrapeConfig,
}

impl Harvester {
    pub fn new(fetch: Arc<dyn Fetch>, config: ScrapeConfig) -> Self {
        Self { fetch, config }
    }

    /// Run the full pipeline and return the accumulated records.
    ///
    /// Aborts only when year discovery itself fails; a single year's
    /// failure is logged and skipped, and detail-page failures surface
    /// as sentinel fields in the merged records.
    pub async fn run(&self) -> Result<Vec<PaperRecord>, ScrapeError> {
        let years = scrape_year_index(self.fetch.as_ref(), &self.config.base_url).await?;

        let mut all_papers = Vec::new();
        for entry in years {
            if !self.config.includes_year(entry.year) {
                continue;
            }
            info!("Scraping {}", entry.year_link);

            let papers =
                match scrape_year_page(self.fetch.as_ref(), &entry.year_link, entry.year).await {
                    Ok(papers) => papers,
                    Err(e) => {
                        warn!("Skipping year {}: {}", entry.year, e);
                        continue;
                    }
                };
            if papers.is_empty() {
                warn!("No papers found for {}", entry.year);
                continue;
            }

            for paper in &papers {
                let detail = scrape_paper_details(self.fetch.as_ref(), &paper.link).await;
                all_papers.push(PaperRecord::merge(paper, detail, entry.year));
            }

            // Be nice to the server between year harvests.
            tokio::time::sleep(Duration::from_secs(self.config.courtesy_delay_secs)).await;
        }

        Ok(all_papers)
    }
}

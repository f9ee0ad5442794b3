//! The three-stage scrape pipeline: year discovery, per-year paper
//! listings, and per-paper detail pages, composed by [`Harvester`].
//!
//! Failure handling narrows with each stage: a year-index failure aborts
//! the run, a year-page failure skips that year, and a detail-page
//! failure degrades to sentinel fields without ever propagating.

mod driver;
mod fetch;
pub mod mock;
mod paper_detail;
mod year_index;
mod year_page;

pub use driver::Harvester;
pub use fetch::{Fetch, HttpFetcher};
pub use mock::MockFetcher;
pub use paper_detail::scrape_paper_details;
pub use year_index::scrape_year_index;
pub use year_page::scrape_year_page;

use url::Url;

/// Errors that can occur while scraping or exporting.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Network or transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Malformed URL or document
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Network(err.to_string())
    }
}

impl From<url::ParseError> for ScrapeError {
    fn from(err: url::ParseError) -> Self {
        ScrapeError::Parse(err.to_string())
    }
}

/// Resolve an href against the site origin, passing absolute URLs through.
pub(crate) fn resolve_link(base: &Url, href: &str) -> Option<String> {
    if href.starts_with("http") {
        return Some(href.to_string());
    }
    base.join(href).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_link_prefixes_site_root() {
        let base = Url::parse("https://papers.nips.cc/").unwrap();
        assert_eq!(
            resolve_link(&base, "/paper_files/paper/2024").as_deref(),
            Some("https://papers.nips.cc/paper_files/paper/2024")
        );
    }

    #[test]
    fn resolve_link_passes_absolute_urls_through() {
        let base = Url::parse("https://papers.nips.cc/").unwrap();
        assert_eq!(
            resolve_link(&base, "https://example.com/p/1").as_deref(),
            Some("https://example.com/p/1")
        );
    }
}

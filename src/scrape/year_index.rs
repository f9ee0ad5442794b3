//! Year discovery on the proceedings landing page.

use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use crate::models::YearEntry;
use crate::scrape::{resolve_link, Fetch, ScrapeError};

/// Path fragment identifying per-year proceedings links.
const YEAR_PATH_MARKER: &str = "/paper_files/paper/";

/// Ordered year patterns; the first one that matches wins.
const YEAR_PATTERNS: [&str; 3] = [r"\((\d{4})\)", r"(\d{4})$", r"(\d{4})"];

/// Scrape the landing page for (year, year-page URL) pairs.
///
/// Fails fast when the page itself cannot be fetched; individual links
/// that yield no usable year are logged and skipped.
pub async fn scrape_year_index(
    fetch: &dyn Fetch,
    base_url: &str,
) -> Result<Vec<YearEntry>, ScrapeError> {
    let body = fetch.fetch(base_url).await?;
    let base = Url::parse(base_url)
        .map_err(|e| ScrapeError::Parse(format!("Invalid base URL {}: {}", base_url, e)))?;
    Ok(parse_year_index(&body, &base))
}

pub(crate) fn parse_year_index(body: &str, base: &Url) -> Vec<YearEntry> {
    let document = Html::parse_document(body);
    let mut years = Vec::new();

    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return years;
    };

    for link in document.select(&anchor_selector) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !href.contains(YEAR_PATH_MARKER) {
            continue;
        }

        let text = link.text().collect::<String>();
        let year_text = text.trim();

        let Some(digits) = extract_year(year_text) else {
            warn!("Could not extract year from: {}", year_text);
            continue;
        };
        let year = match digits.parse::<u16>() {
            Ok(year) => year,
            Err(_) => {
                warn!("Invalid year format: {}", year_text);
                continue;
            }
        };

        let Some(year_link) = resolve_link(base, href) else {
            warn!("Unresolvable year link: {}", href);
            continue;
        };

        years.push(YearEntry { year, year_link });
    }

    years
}

/// Extract a four-digit year from a link's visible text.
///
/// Tries a parenthesized year, then a trailing year, then any four-digit
/// run, with early exit on the first match.
fn extract_year(text: &str) -> Option<String> {
    for pattern in YEAR_PATTERNS {
        let Ok(re) = regex::Regex::new(pattern) else {
            continue;
        };
        if let Some(caps) = re.captures(text) {
            return caps.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}

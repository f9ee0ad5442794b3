//! Paper listings on a single year's proceedings page.

use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use crate::models::{PaperSummary, NOT_AVAILABLE};
use crate::scrape::{resolve_link, Fetch, ScrapeError};

/// Scrape one year's proceedings page for paper summaries.
///
/// Fails on network/status errors; a malformed list item (no embedded
/// link) is skipped without failing the page.
pub async fn scrape_year_page(
    fetch: &dyn Fetch,
    url: &str,
    year: u16,
) -> Result<Vec<PaperSummary>, ScrapeError> {
    let body = fetch.fetch(url).await?;
    let base =
        Url::parse(url).map_err(|e| ScrapeError::Parse(format!("Invalid URL {}: {}", url, e)))?;
    Ok(parse_year_page(&body, &base, year))
}

pub(crate) fn parse_year_page(body: &str, base: &Url, year: u16) -> Vec<PaperSummary> {
    let document = Html::parse_document(body);
    let mut papers = Vec::new();

    let Ok(item_selector) = Selector::parse("li.conference") else {
        return papers;
    };
    let Ok(anchor_selector) = Selector::parse("a") else {
        return papers;
    };
    let Ok(italic_selector) = Selector::parse("i") else {
        return papers;
    };

    for item in document.select(&item_selector) {
        // No embedded link means a malformed entry; skip it.
        let Some(title_link) = item.select(&anchor_selector).next() else {
            continue;
        };
        let title = title_link.text().collect::<String>().trim().to_string();
        let Some(href) = title_link.value().attr("href") else {
            continue;
        };
        let Some(link) = resolve_link(base, href) else {
            warn!("Unresolvable paper link: {}", href);
            continue;
        };

        let authors = item
            .select(&italic_selector)
            .next()
            .map(|i| i.text().collect::<String>().trim().replace('"', ""))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        papers.push(PaperSummary {
            title,
            link,
            authors,
            year,
        });
    }

    papers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://papers.nips.cc/").unwrap()
    }

    #[test]
    fn listing_item_yields_summary() {
        let body = r#"
            <ul>
              <li class="conference">
                <a href="/paper/1">Paper A</a>
                <i>Alice, Bob</i>
              </li>
            </ul>
        "#;

        let papers = parse_year_page(body, &base(), 2024);
        assert_eq!(
            papers,
            vec![PaperSummary {
                title: "Paper A".to_string(),
                link: "https://papers.nips.cc/paper/1".to_string(),
                authors: "Alice, Bob".to_string(),
                year: 2024,
            }]
        );
    }

    #[test]
    fn missing_italic_falls_back_to_sentinel() {
        let body = r#"<li class="conference"><a href="/paper/2">Paper B</a></li>"#;

        let papers = parse_year_page(body, &base(), 2023);
        assert_eq!(papers[0].authors, NOT_AVAILABLE);
    }

    #[test]
    fn authors_are_trimmed_and_unquoted() {
        let body = r#"
            <li class="conference">
              <a href="/paper/3">Paper C</a>
              <i>  "Carol Dane, Erin Frank"  </i>
            </li>
        "#;

        let papers = parse_year_page(body, &base(), 2022);
        assert_eq!(papers[0].authors, "Carol Dane, Erin Frank");
    }

    #[test]
    fn item_without_link_is_skipped() {
        let body = r#"
            <ul>
              <li class="conference"><i>Orphaned authors</i></li>
              <li class="conference"><a href="/paper/4">Paper D</a></li>
            </ul>
        "#;

        let papers = parse_year_page(body, &base(), 2021);
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].title, "Paper D");
    }

    #[test]
    fn non_conference_items_are_ignored() {
        let body = r#"
            <li class="workshop"><a href="/paper/5">Workshop paper</a></li>
            <li class="conference"><a href="/paper/6">Paper E</a></li>
        "#;

        let papers = parse_year_page(body, &base(), 2020);
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].title, "Paper E");
    }
}

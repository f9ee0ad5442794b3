//! Refined metadata from a paper's detail page.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::models::PaperDetail;
use crate::scrape::Fetch;

/// Scrape one paper's detail page.
///
/// Never fails outward: fetch errors and missing page structure both
/// degrade to "N/A" fields, with `link` kept as the input URL, so the
/// driver loop never has to special-case a missing detail.
pub async fn scrape_paper_details(fetch: &dyn Fetch, url: &str) -> PaperDetail {
    match fetch.fetch(url).await {
        Ok(body) => parse_paper_details(&body, url),
        Err(e) => {
            warn!("Error fetching {}: {}", url, e);
            PaperDetail::unavailable(url)
        }
    }
}

pub(crate) fn parse_paper_details(body: &str, url: &str) -> PaperDetail {
    let document = Html::parse_document(body);
    let mut detail = PaperDetail::unavailable(url);

    let Ok(heading_selector) = Selector::parse("h4") else {
        return detail;
    };
    let Ok(paragraph_selector) = Selector::parse("p") else {
        return detail;
    };
    let Ok(italic_selector) = Selector::parse("i") else {
        return detail;
    };

    if let Some(heading) = document.select(&heading_selector).next() {
        detail.title = heading.text().collect::<String>().trim().to_string();
    }

    // Author names sit in an <i> under the <p> labelled "Authors". The
    // label check looks only at the paragraph's own text nodes, so the
    // italic child does not defeat the comparison.
    if let Some(authors) = document
        .select(&paragraph_selector)
        .find(|p| own_text(p).trim() == "Authors")
        .and_then(|p| p.select(&italic_selector).next())
    {
        detail.authors = authors.text().collect::<String>().trim().to_string();
    }

    // The abstract is the first <p> sibling after the "Abstract" heading.
    if let Some(paragraph) = document
        .select(&heading_selector)
        .find(|h| h.text().collect::<String>().trim() == "Abstract")
        .and_then(|h| {
            h.next_siblings()
                .filter_map(ElementRef::wrap)
                .find(|sibling| sibling.value().name() == "p")
        })
    {
        detail.r#abstract = paragraph.text().collect::<String>().trim().to_string();
    }

    detail
}

/// Text directly inside an element, excluding nested children.
fn own_text(element: &ElementRef) -> String {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
        .collect()
}

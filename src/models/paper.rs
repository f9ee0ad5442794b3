//! Record types produced by the scrape pipeline.

use serde::{Deserialize, Serialize};

/// Explicit "value not found" marker.
///
/// Downstream consumers see a literal "N/A" string rather than an empty
/// cell, so merged records never carry absent fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// A year discovered on the proceedings landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEntry {
    /// Four-digit proceedings year
    pub year: u16,

    /// Absolute URL of that year's proceedings page
    pub year_link: String,
}

/// One paper entry as listed on a year's proceedings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperSummary {
    /// Paper title, as shown in the listing
    pub title: String,

    /// Absolute URL of the paper's detail page
    pub link: String,

    /// Comma-joined author names, or "N/A" when the listing carries none
    pub authors: String,

    /// Year of the proceedings page the entry was found on
    pub year: u16,
}

/// Refined metadata scraped from a paper's detail page.
///
/// Every field degrades to "N/A" on failure, so the driver never needs
/// null handling when merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperDetail {
    pub title: String,
    pub authors: String,
    pub link: String,
    pub r#abstract: String,
}

impl PaperDetail {
    /// All-sentinel detail for a page that could not be fetched or parsed.
    pub fn unavailable(link: impl Into<String>) -> Self {
        Self {
            title: NOT_AVAILABLE.to_string(),
            authors: NOT_AVAILABLE.to_string(),
            link: link.into(),
            r#abstract: NOT_AVAILABLE.to_string(),
        }
    }
}

/// The merged unit written to the output table.
///
/// Always carries all five fields; "N/A" marks a value that could not be
/// scraped, never an absent column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub title: String,
    pub link: String,
    pub authors: String,
    pub year: u16,
    pub r#abstract: String,
}

impl PaperRecord {
    /// Merge a listing summary with its detail-page fields.
    ///
    /// Detail fields win on every shared key; `year` is re-asserted from
    /// the driver's loop variable to guard against detail-page drift.
    pub fn merge(_summary: &PaperSummary, detail: PaperDetail, year: u16) -> Self {
        Self {
            title: detail.title,
            link: detail.link,
            authors: detail.authors,
            year,
            r#abstract: detail.r#abstract,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_detail_fields() {
        let summary = PaperSummary {
            title: "Listing Title".to_string(),
            link: "https://papers.nips.cc/paper/1".to_string(),
            authors: "Listing Author".to_string(),
            year: 2024,
        };
        let detail = PaperDetail {
            title: "Detail Title".to_string(),
            authors: "Alice, Bob".to_string(),
            link: "https://papers.nips.cc/paper/1".to_string(),
            r#abstract: "An abstract.".to_string(),
        };

        let record = PaperRecord::merge(&summary, detail, 2024);
        assert_eq!(record.title, "Detail Title");
        assert_eq!(record.authors, "Alice, Bob");
        assert_eq!(record.r#abstract, "An abstract.");
        assert_eq!(record.year, 2024);
    }

    #[test]
    fn merge_reasserts_year_from_caller() {
        let summary = PaperSummary {
            title: "T".to_string(),
            link: "https://papers.nips.cc/paper/1".to_string(),
            authors: NOT_AVAILABLE.to_string(),
            year: 1999,
        };
        let detail = PaperDetail::unavailable("https://papers.nips.cc/paper/1");

        let record = PaperRecord::merge(&summary, detail, 2023);
        assert_eq!(record.year, 2023);
        assert_eq!(record.title, NOT_AVAILABLE);
    }

    #[test]
    fn unavailable_detail_keeps_input_link() {
        let detail = PaperDetail::unavailable("https://papers.nips.cc/paper/404");
        assert_eq!(detail.link, "https://papers.nips.cc/paper/404");
        assert_eq!(detail.title, NOT_AVAILABLE);
        assert_eq!(detail.authors, NOT_AVAILABLE);
        assert_eq!(detail.r#abstract, NOT_AVAILABLE);
    }
}

//! # NeurIPS Harvest
//!
//! Collects metadata (title, authors, abstract, link, year) for papers
//! published in the NeurIPS proceedings across a configurable range of
//! years and writes the aggregated results to a CSV file.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core record types (YearEntry, PaperSummary, PaperRecord)
//! - [`scrape`]: The three-stage pipeline (year index → year page → paper detail) and its driver
//! - [`export`]: CSV output sink
//! - [`utils`]: HTTP client
//! - [`config`]: Configuration management

pub mod config;
pub mod export;
pub mod models;
pub mod scrape;
pub mod utils;

// Re-export commonly used types
pub use models::PaperRecord;
pub use scrape::{Harvester, ScrapeError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

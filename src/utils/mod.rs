//! Utility modules supporting the scrape pipeline.

mod http;

pub use http::HttpClient;

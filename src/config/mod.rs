//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Scrape run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Proceedings landing page
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// First year to include
    #[serde(default = "default_start_year")]
    pub start_year: u16,

    /// Last year to include (inclusive)
    #[serde(default = "default_end_year")]
    pub end_year: u16,

    /// Directory the output CSV is written into
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Pause between successive year harvests, in seconds
    #[serde(default = "default_courtesy_delay")]
    pub courtesy_delay_secs: u64,

    /// Per-request timeout, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            start_year: default_start_year(),
            end_year: default_end_year(),
            data_dir: default_data_dir(),
            courtesy_delay_secs: default_courtesy_delay(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ScrapeConfig {
    /// Whether a discovered year falls inside the requested range.
    pub fn includes_year(&self, year: u16) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }
}

fn default_base_url() -> String {
    "https://papers.nips.cc/".to_string()
}

fn default_start_year() -> u16 {
    2019
}

fn default_end_year() -> u16 {
    2025
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("NeurIPSData")
}

fn default_courtesy_delay() -> u64 {
    1
}

fn default_timeout() -> u64 {
    30
}

/// Load configuration from a TOML file, with environment overrides.
pub fn load_config(path: &PathBuf) -> Result<ScrapeConfig, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("NEURIPS_HARVEST"))
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_matches_reference_run() {
        let config = ScrapeConfig::default();
        assert_eq!(config.start_year, 2019);
        assert_eq!(config.end_year, 2025);
        assert_eq!(config.base_url, "https://papers.nips.cc/");
    }

    #[test]
    fn year_range_is_inclusive_on_both_ends() {
        let config = ScrapeConfig {
            start_year: 2020,
            end_year: 2022,
            ..ScrapeConfig::default()
        };
        assert!(config.includes_year(2020));
        assert!(config.includes_year(2022));
        assert!(!config.includes_year(2019));
        assert!(!config.includes_year(2023));
    }
}

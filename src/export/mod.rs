//! Tabular export of harvested records.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::models::PaperRecord;
use crate::scrape::ScrapeError;

/// Destination for harvested records.
///
/// Abstracting the sink keeps the scrape pipeline independent of where
/// the table ends up; the binary injects a concrete sink at startup.
pub trait OutputSink {
    /// Write all records and return the path they landed at.
    fn write_records(&self, records: &[PaperRecord]) -> Result<PathBuf, ScrapeError>;
}

/// CSV file sink under a data directory.
///
/// One header row (`title,link,authors,year,abstract`), then one UTF-8
/// row per record in accumulation order.
#[derive(Debug, Clone)]
pub struct CsvSink {
    data_dir: PathBuf,
    file_name: String,
}

impl CsvSink {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            file_name: "neurips_all_years.csv".to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Path the next write will land at.
    pub fn path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

impl OutputSink for CsvSink {
    fn write_records(&self, records: &[PaperRecord]) -> Result<PathBuf, ScrapeError> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.path();

        let mut writer = csv::WriterBuilder::new().has_headers(true).from_path(&path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        info!("Saved {} records to {}", records.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NOT_AVAILABLE;

    fn sample_records() -> Vec<PaperRecord> {
        vec![
            PaperRecord {
                title: "Paper A".to_string(),
                link: "https://papers.nips.cc/paper/1".to_string(),
                authors: "Alice, Bob".to_string(),
                year: 2024,
                r#abstract: "We study things, carefully.".to_string(),
            },
            PaperRecord {
                title: NOT_AVAILABLE.to_string(),
                link: "https://papers.nips.cc/paper/2".to_string(),
                authors: NOT_AVAILABLE.to_string(),
                year: 2023,
                r#abstract: NOT_AVAILABLE.to_string(),
            },
        ]
    }

    #[test]
    fn csv_round_trip_preserves_fields() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path());
        let records = sample_records();

        let path = sink.write_records(&records).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let decoded: Vec<PaperRecord> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();

        // Sentinel "N/A" must survive as a literal string, not an empty cell.
        assert_eq!(decoded, records);
    }

    #[test]
    fn header_row_carries_expected_columns() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path()).with_file_name("out.csv");

        let path = sink.write_records(&sample_records()).unwrap();

        let contents = fs::read_to_string(path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(header, "title,link,authors,year,abstract");
    }

    #[test]
    fn creates_missing_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("nested");
        let sink = CsvSink::new(&nested);

        let path = sink.write_records(&sample_records()).unwrap();
        assert!(path.exists());
    }
}

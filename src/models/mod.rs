//! Core data models for harvested proceedings metadata.

mod paper;

pub use paper::{PaperDetail, PaperRecord, PaperSummary, YearEntry, NOT_AVAILABLE};

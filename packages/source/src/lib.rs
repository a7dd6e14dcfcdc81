#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Storm data loading and normalization logic.
//!
//! Reads raw storm event records, converts scale-coded damage figures into
//! dollars ([`damage`]) and maps free-text event types onto the canonical
//! taxonomy ([`type_mapping`]). Normalization never fails: unknown scale
//! codes count as zero dollars and unknown event types pass through as
//! their own category.

pub mod damage;
pub mod progress;
pub mod storm_data;
pub mod type_mapping;

use storm_damage_event_models::{NormalizedRecord, RawRecord};

/// Errors that can occur while loading storm data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error (file open/read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading failed. The `csv` error message already names itself.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// The header row lacks a column the report needs.
    #[error("Missing required column '{column}' in storm data header")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },
}

/// Normalizes one raw record: canonical event type and total damage in
/// dollars. Casualty counts are copied unchanged.
#[must_use]
pub fn normalize_record(record: &RawRecord) -> NormalizedRecord {
    NormalizedRecord {
        event_type: type_mapping::canonicalize(&record.event_type),
        fatalities: record.fatalities,
        injuries: record.injuries,
        total_damage: damage::total_damage(record),
    }
}

/// Normalizes every record, preserving count and order.
#[must_use]
pub fn normalize_all(records: &[RawRecord]) -> Vec<NormalizedRecord> {
    let normalized: Vec<NormalizedRecord> = records.iter().map(normalize_record).collect();

    let unclassified = normalized
        .iter()
        .filter(|r| r.event_type.category().is_none())
        .count();
    log::info!(
        "Normalized {} records ({unclassified} with no matching category)",
        normalized.len()
    );

    normalized
}

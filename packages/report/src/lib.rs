#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Rendering of the storm damage report artifacts.
//!
//! Writes a casualty bar chart (SVG), a damage table (HTML) and,
//! optionally, every category summary as JSON into an output directory.
//! Only the top rows are drawn; the table footer still totals every
//! category.

pub mod chart;
pub mod format;
pub mod table;

use std::path::{Path, PathBuf};

use storm_damage_analytics::{rank_by_casualties, top_n, totals_of};
use storm_damage_analytics_models::CategorySummary;

/// File name of the casualty chart.
pub const OUTPUT_CHART: &str = "casualties.svg";

/// File name of the damage table.
pub const OUTPUT_TABLE: &str = "damage_table.html";

/// File name of the JSON summary dump.
pub const OUTPUT_JSON: &str = "summaries.json";

/// Default number of categories shown in the chart and table.
pub const DEFAULT_TOP: usize = 20;

/// Errors that can occur while writing report artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// I/O error (directory creation, file write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for a report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Directory the artifacts are written to. Created if missing.
    pub output_dir: PathBuf,
    /// Number of categories to show.
    pub top: usize,
    /// Whether to also write every summary as JSON.
    pub write_json: bool,
}

impl ReportOptions {
    /// Options writing into `output_dir` with default settings.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            top: DEFAULT_TOP,
            write_json: false,
        }
    }
}

/// Paths of the files a report run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifacts {
    pub chart: PathBuf,
    pub table: PathBuf,
    pub json: Option<PathBuf>,
}

/// Writes the chart, table and optional JSON for `summaries`, which must
/// already be in report order.
///
/// # Errors
///
/// Returns [`ReportError`] if the output directory cannot be created or a
/// file cannot be written.
pub fn write_report(
    summaries: &[CategorySummary],
    options: &ReportOptions,
) -> Result<ReportArtifacts, ReportError> {
    std::fs::create_dir_all(&options.output_dir)?;

    let top = top_n(summaries, options.top);

    let chart = options.output_dir.join(OUTPUT_CHART);
    let svg = chart::render_casualty_chart(
        &rank_by_casualties(top),
        &format!("Fatalities and injuries, top {} event types by damage", top.len()),
    );
    write_file(&chart, &svg)?;

    let table = options.output_dir.join(OUTPUT_TABLE);
    let html = table::render_damage_table(
        top,
        &totals_of(summaries),
        &format!("Top {} storm event types by economic damage", top.len()),
    );
    write_file(&table, &html)?;

    let json = if options.write_json {
        let path = options.output_dir.join(OUTPUT_JSON);
        write_file(&path, &serde_json::to_string_pretty(summaries)?)?;
        Some(path)
    } else {
        None
    };

    Ok(ReportArtifacts { chart, table, json })
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    std::fs::write(path, contents)?;
    log::info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

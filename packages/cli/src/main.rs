#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the storm damage report.
//!
//! Runs the whole analysis once: load the storm data file, normalize
//! event types and damage figures, aggregate by category, then write the
//! chart and table artifacts and print the top categories.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use storm_damage_analytics::{aggregate, top_n, totals, totals_of};
use storm_damage_analytics_models::{CategorySummary, SummaryTotals};
use storm_damage_cli_utils::IndicatifProgress;
use storm_damage_report::format::{format_currency, format_thousands};
use storm_damage_report::{DEFAULT_TOP, ReportOptions, write_report};
use storm_damage_source::normalize_all;
use storm_damage_source::progress::null_progress;
use storm_damage_source::storm_data::{LoadOptions, load_storm_data};

#[derive(Parser)]
#[command(name = "storm_damage", about = "Storm event damage report generator")]
struct Cli {
    /// Storm data file (`.csv` or `.csv.gz`)
    input: PathBuf,
    /// Directory to write the chart and table into
    #[arg(long, default_value = "report")]
    output_dir: PathBuf,
    /// Number of event categories to chart and tabulate
    #[arg(long, default_value_t = DEFAULT_TOP)]
    top: usize,
    /// Maximum number of rows to read (for quick trial runs)
    #[arg(long)]
    limit: Option<u64>,
    /// Also write every category summary to `summaries.json`
    #[arg(long)]
    json: bool,
    /// Disable the progress spinner
    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = storm_damage_cli_utils::init_logger();
    let cli = Cli::parse();
    let start = Instant::now();

    let progress = if cli.no_progress {
        null_progress()
    } else {
        IndicatifProgress::records_spinner(&multi, "Reading storm data")
    };

    let raw = load_storm_data(&cli.input, &LoadOptions { limit: cli.limit }, &progress)?;
    let normalized = normalize_all(&raw);
    let summaries = aggregate(&normalized);

    let record_totals = totals(&normalized);
    let summary_totals = totals_of(&summaries);
    if summary_totals.conserves(&record_totals) {
        log::debug!("Aggregation totals match record totals: {summary_totals:?}");
    } else {
        log::warn!(
            "Aggregation totals {summary_totals:?} differ from record totals {record_totals:?}"
        );
    }

    let artifacts = write_report(
        &summaries,
        &ReportOptions {
            output_dir: cli.output_dir,
            top: cli.top,
            write_json: cli.json,
        },
    )?;

    print_summary(top_n(&summaries, cli.top), &summary_totals);
    println!();
    println!("Chart: {}", artifacts.chart.display());
    println!("Table: {}", artifacts.table.display());
    if let Some(json) = &artifacts.json {
        println!("JSON:  {}", json.display());
    }

    log::info!(
        "Report complete: {} events in {} categories in {:.1}s",
        record_totals.observation_count,
        summaries.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_summary(summaries: &[CategorySummary], totals: &SummaryTotals) {
    println!(
        "{:>3}  {:<24} {:>12} {:>10} {:>10} {:>20}",
        "#", "EVENT TYPE", "EVENTS", "DEATHS", "INJURIES", "DAMAGE"
    );
    println!("{}", "-".repeat(84));
    for (rank, summary) in summaries.iter().enumerate() {
        println!(
            "{:>3}  {:<24} {:>12} {:>10} {:>10} {:>20}",
            rank + 1,
            summary.category,
            format_thousands(summary.observation_count),
            format_thousands(summary.fatalities),
            format_thousands(summary.injuries),
            format_currency(summary.total_damage),
        );
    }
    println!("{}", "-".repeat(84));
    println!(
        "{:>3}  {:<24} {:>12} {:>10} {:>10} {:>20}",
        "",
        "ALL",
        format_thousands(totals.observation_count),
        format_thousands(totals.fatalities),
        format_thousands(totals.injuries),
        format_currency(totals.total_damage),
    );
}

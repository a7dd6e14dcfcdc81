//! NOAA storm data file reader.
//!
//! Reads the storm events CSV (optionally gzip-compressed) and extracts the
//! seven columns the damage report needs. Other columns, including the
//! multi-line `REMARKS` field, are ignored. Rows are read as raw bytes, so
//! non-UTF-8 text in any cell never aborts the load.
//!
//! Numeric cells are parsed leniently: empty or unparseable values become
//! zero instead of failing the whole load.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use storm_damage_event_models::RawRecord;

use crate::SourceError;
use crate::progress::ProgressCallback;

/// Header names of the columns the report reads.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "EVTYPE",
    "FATALITIES",
    "INJURIES",
    "PROPDMG",
    "PROPDMGEXP",
    "CROPDMG",
    "CROPDMGEXP",
];

/// Rows between progress updates.
const PROGRESS_BATCH: u64 = 10_000;

/// Options for reading a storm data file.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Maximum number of rows to read.
    pub limit: Option<u64>,
}

/// Column positions of [`REQUIRED_COLUMNS`] within the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    event_type: usize,
    fatalities: usize,
    injuries: usize,
    property_damage: usize,
    property_scale: usize,
    crop_damage: usize,
    crop_scale: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::ByteRecord) -> Result<Self, SourceError> {
        let position = |column: &str| {
            headers
                .iter()
                .position(|h| h == column.as_bytes())
                .ok_or_else(|| SourceError::MissingColumn {
                    column: column.to_owned(),
                })
        };

        Ok(Self {
            event_type: position("EVTYPE")?,
            fatalities: position("FATALITIES")?,
            injuries: position("INJURIES")?,
            property_damage: position("PROPDMG")?,
            property_scale: position("PROPDMGEXP")?,
            crop_damage: position("CROPDMG")?,
            crop_scale: position("CROPDMGEXP")?,
        })
    }

    /// Builds a record from one row. Cells are decoded lossily so stray
    /// Latin-1 bytes never fail the load; short rows read as empty cells.
    fn record(&self, row: &csv::ByteRecord) -> RawRecord {
        let cell = |index: usize| String::from_utf8_lossy(row.get(index).unwrap_or_default());

        RawRecord {
            event_type: cell(self.event_type).into_owned(),
            fatalities: parse_count(&cell(self.fatalities)),
            injuries: parse_count(&cell(self.injuries)),
            property_damage: parse_amount(&cell(self.property_damage)),
            property_scale: cell(self.property_scale).trim().to_owned(),
            crop_damage: parse_amount(&cell(self.crop_damage)),
            crop_scale: cell(self.crop_scale).trim().to_owned(),
        }
    }
}

/// Parses a casualty count. Accepts decimal text (`"3.00"`); anything
/// negative, non-finite or unparseable is zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_count(cell: &str) -> u64 {
    let value = parse_amount(cell);
    value.round() as u64
}

/// Parses a damage magnitude. Anything negative, non-finite or
/// unparseable is zero.
#[must_use]
pub fn parse_amount(cell: &str) -> f64 {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0)
}

/// Returns `true` if the path names a gzip-compressed file.
fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Loads storm data records from a `.csv` or `.csv.gz` file.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be opened, the CSV is
/// malformed, or a required column is missing from the header.
pub fn load_storm_data(
    path: &Path,
    options: &LoadOptions,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<Vec<RawRecord>, SourceError> {
    log::info!("Reading storm data from {}", path.display());

    let file = File::open(path)?;
    let reader: Box<dyn Read> = if is_gzipped(path) {
        log::debug!("Decompressing {} as gzip", path.display());
        Box::new(flate2::read::MultiGzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    read_storm_data(reader, options, progress)
}

/// Reads storm data records from any CSV byte stream.
///
/// # Errors
///
/// Returns [`SourceError`] if the CSV is malformed or a required column is
/// missing from the header.
pub fn read_storm_data<R: Read>(
    reader: R,
    options: &LoadOptions,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<Vec<RawRecord>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(reader.byte_headers()?)?;

    progress.set_message("Reading storm data".to_owned());

    let mut records: Vec<RawRecord> = Vec::new();
    let mut row = csv::ByteRecord::new();

    loop {
        if let Some(limit) = options.limit
            && (records.len() as u64) >= limit
        {
            log::info!("Reached limit of {limit} records, stopping read");
            break;
        }

        if !reader.read_byte_record(&mut row)? {
            break;
        }
        records.push(columns.record(&row));

        if (records.len() as u64).is_multiple_of(PROGRESS_BATCH) {
            progress.inc(PROGRESS_BATCH);
        }
    }

    let total = records.len() as u64;
    progress.inc(total % PROGRESS_BATCH);
    progress.finish(format!("Read {total} storm events"));
    log::info!("Read {total} storm events");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::*;
    use crate::progress::null_progress;

    const SAMPLE: &str = "\
STATE__,BGN_DATE,EVTYPE,FATALITIES,INJURIES,PROPDMG,PROPDMGEXP,CROPDMG,CROPDMGEXP,REMARKS
1.00,4/18/1950 0:00:00,TORNADO,0.00,15.00,25.00,K,0.00,,
1.00,6/1/1995 0:00:00,Tstm Wind,1.00,2.00,5.5,m,3,K,\"Trees down
across the county\"
1.00,6/2/1995 0:00:00,HAIL,,n/a,12,?,0,
";

    fn read(input: &str, options: &LoadOptions) -> Result<Vec<RawRecord>, SourceError> {
        read_storm_data(input.as_bytes(), options, &null_progress())
    }

    #[test]
    fn reads_required_columns() {
        let records = read(SAMPLE, &LoadOptions::default()).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].event_type, "TORNADO");
        assert_eq!(records[0].injuries, 15);
        assert!((records[0].property_damage - 25.0).abs() < f64::EPSILON);
        assert_eq!(records[0].property_scale, "K");
        assert_eq!(records[0].crop_scale, "");

        assert_eq!(records[1].event_type, "Tstm Wind");
        assert_eq!(records[1].fatalities, 1);
        assert_eq!(records[1].property_scale, "m");
        assert!((records[1].crop_damage - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn absorbs_bad_numeric_cells() {
        let records = read(SAMPLE, &LoadOptions::default()).unwrap();
        assert_eq!(records[2].fatalities, 0);
        assert_eq!(records[2].injuries, 0);
        assert_eq!(records[2].property_scale, "?");
    }

    #[test]
    fn honors_limit() {
        let records = read(SAMPLE, &LoadOptions { limit: Some(2) }).unwrap();
        assert_eq!(records.len(), 2);

        let records = read(SAMPLE, &LoadOptions { limit: Some(0) }).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = read("EVTYPE,FATALITIES\nHAIL,0\n", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, SourceError::MissingColumn { ref column } if column == "INJURIES"));
    }

    #[test]
    fn tolerates_latin1_bytes() {
        let mut input = SAMPLE.as_bytes().to_vec();
        input.extend_from_slice(
            b"1.00,7/4/1996 0:00:00,FLOOD,0,0,1,K,0,,Water at the caf\xE9 door\n",
        );
        input.extend_from_slice(b"1.00,7/5/1996 0:00:00,HEAT \xC9T\xC9,2,0,0,,0,,\n");

        let records =
            read_storm_data(input.as_slice(), &LoadOptions::default(), &null_progress()).unwrap();
        assert_eq!(records.len(), 5);

        assert_eq!(records[3].event_type, "FLOOD");
        assert!((records[3].property_damage - 1.0).abs() < f64::EPSILON);
        assert_eq!(records[3].property_scale, "K");

        assert_eq!(records[4].event_type, "HEAT \u{FFFD}T\u{FFFD}");
        assert_eq!(records[4].fatalities, 2);
    }

    #[test]
    fn short_rows_read_as_empty_cells() {
        let header = REQUIRED_COLUMNS.join(",");
        let records = read(&format!("{header}\nHAIL,1\n"), &LoadOptions::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].event_type, "HAIL");
        assert_eq!(records[0].fatalities, 1);
        assert_eq!(records[0].injuries, 0);
        assert_eq!(records[0].crop_scale, "");
    }

    #[test]
    fn header_only_file_is_empty() {
        let header = REQUIRED_COLUMNS.join(",");
        let records = read(&format!("{header}\n"), &LoadOptions::default()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn parses_counts_leniently() {
        assert_eq!(parse_count(" 3.00 "), 3);
        assert_eq!(parse_count("-4"), 0);
        assert_eq!(parse_count("NaN"), 0);
        assert_eq!(parse_count(""), 0);
        assert!(parse_amount("inf").abs() < f64::EPSILON);
    }

    #[test]
    fn loads_plain_and_gzipped_files() {
        let dir = tempfile::tempdir().unwrap();

        let plain = dir.path().join("storm.csv");
        std::fs::write(&plain, SAMPLE).unwrap();

        let gzipped = dir.path().join("storm.csv.gz");
        let mut encoder = GzEncoder::new(File::create(&gzipped).unwrap(), Compression::fast());
        encoder.write_all(SAMPLE.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let options = LoadOptions::default();
        let from_plain = load_storm_data(&plain, &options, &null_progress()).unwrap();
        let from_gz = load_storm_data(&gzipped, &options, &null_progress()).unwrap();
        assert_eq!(from_plain, from_gz);
        assert_eq!(from_gz.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_storm_data(
            &dir.path().join("nope.csv"),
            &LoadOptions::default(),
            &null_progress(),
        )
        .unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}

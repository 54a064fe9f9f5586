//! CSV loading and cleaning for the catalog file.
//!
//! Cleaning rules:
//! - a cell is missing only when it is empty; whitespace is a value
//! - `director`, `cast`, `country`: missing values replaced by sentinels
//! - `date_added`, `rating`, `duration`: rows missing any of them are dropped
//! - `date_added` is trimmed then parsed; blank or unparseable dates drop the row
//! - `year_added` / `month_added` derived once here

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use super::record::{ContentType, Dataset, Record, NO_CAST, NO_DIRECTOR, UNKNOWN_COUNTRY};
use crate::error::{Error, MalformedRow, Result};

/// Accepted `date_added` layouts, tried in order
pub const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y", "%d-%b-%y"];

/// A row as it appears in the catalog file. Every column is optional at this stage.
#[derive(Debug, Deserialize, Default)]
struct RawRecord {
    #[serde(default, rename = "type")]
    content_type: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    director: Option<String>,
    #[serde(default)]
    cast: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    date_added: Option<String>,
    #[serde(default)]
    rating: Option<String>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    listed_in: Option<String>,
}

/// Per-load accounting of dropped and defaulted rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub dropped_undecodable: usize,
    pub dropped_missing_date: usize,
    pub dropped_unparseable_date: usize,
    pub dropped_missing_rating: usize,
    pub dropped_missing_duration: usize,
    pub defaulted_director: usize,
    pub defaulted_cast: usize,
    pub defaulted_country: usize,
}

impl CleaningReport {
    pub fn rows_dropped(&self) -> usize {
        self.dropped_undecodable
            + self.dropped_missing_date
            + self.dropped_unparseable_date
            + self.dropped_missing_rating
            + self.dropped_missing_duration
    }

    fn record_drop(&mut self, reason: &MalformedRow) {
        match reason {
            MalformedRow::Undecodable(_) => self.dropped_undecodable += 1,
            MalformedRow::MissingDate => self.dropped_missing_date += 1,
            MalformedRow::UnparseableDate(_) => self.dropped_unparseable_date += 1,
            MalformedRow::MissingRating => self.dropped_missing_rating += 1,
            MalformedRow::MissingDuration => self.dropped_missing_duration += 1,
        }
    }
}

/// Load and clean the catalog file at `path`.
///
/// Fails with [`Error::DataSourceNotFound`] when the file does not exist.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    info!("Loading catalog: {}", path.display());

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::DataSourceNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;

    let dataset = read_dataset(file)?;
    let report = dataset.report();
    info!(
        "Loaded {} titles ({} rows read, {} dropped)",
        report.rows_kept,
        report.rows_read,
        report.rows_dropped()
    );
    if report.rows_dropped() > 0 {
        info!(
            "Dropped rows: {} undecodable, {} missing date, {} unparseable date, {} missing rating, {} missing duration",
            report.dropped_undecodable,
            report.dropped_missing_date,
            report.dropped_unparseable_date,
            report.dropped_missing_rating,
            report.dropped_missing_duration
        );
    }
    Ok(dataset)
}

/// Read and clean catalog CSV from any reader
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    // A header that cannot be read means the file is unusable
    rdr.headers()?;

    let mut report = CleaningReport::default();
    let mut records = Vec::new();

    for (index, result) in rdr.deserialize::<RawRecord>().enumerate() {
        report.rows_read += 1;
        // Header is line 1
        let line = index + 2;

        let outcome = match result {
            Ok(raw) => clean_row(raw, &mut report),
            Err(e) => Err(MalformedRow::Undecodable(e.to_string())),
        };

        match outcome {
            Ok(record) => records.push(record),
            Err(reason) => {
                if matches!(reason, MalformedRow::Undecodable(_)) {
                    warn!("Skipping malformed row at line {}: {}", line, reason);
                } else {
                    debug!("Dropping row at line {}: {}", line, reason);
                }
                report.record_drop(&reason);
            }
        }
    }

    report.rows_kept = records.len();
    Ok(Dataset::new(records, report))
}

/// Parse a `date_added` cell. Surrounding whitespace is ignored.
pub fn parse_date_added(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Absent and empty cells are missing; whitespace-only cells are kept as-is
fn present(cell: Option<String>) -> Option<String> {
    cell.filter(|v| !v.is_empty())
}

fn defaulted(cell: Option<String>, sentinel: &str, counter: &mut usize) -> String {
    present(cell).unwrap_or_else(|| {
        *counter += 1;
        sentinel.to_string()
    })
}

fn clean_row(
    raw: RawRecord,
    report: &mut CleaningReport,
) -> std::result::Result<Record, MalformedRow> {
    let date_raw = raw
        .date_added
        .filter(|v| !v.trim().is_empty())
        .ok_or(MalformedRow::MissingDate)?;
    let rating = present(raw.rating).ok_or(MalformedRow::MissingRating)?;
    let duration = present(raw.duration).ok_or(MalformedRow::MissingDuration)?;
    let date_added = parse_date_added(&date_raw)
        .ok_or_else(|| MalformedRow::UnparseableDate(date_raw.trim().to_string()))?;

    // Defaults only counted for rows that survive
    let director = defaulted(raw.director, NO_DIRECTOR, &mut report.defaulted_director);
    let cast = defaulted(raw.cast, NO_CAST, &mut report.defaulted_cast);
    let country = defaulted(raw.country, UNKNOWN_COUNTRY, &mut report.defaulted_country);

    let (year_added, month_added) = Record::calendar_fields(date_added);

    Ok(Record {
        content_type: ContentType::from_raw(raw.content_type.as_deref().unwrap_or_default()),
        title: raw.title.unwrap_or_default(),
        director,
        cast,
        country,
        date_added,
        rating,
        duration,
        listed_in: present(raw.listed_in),
        year_added,
        month_added,
    })
}

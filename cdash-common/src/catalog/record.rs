//! Catalog record model

use chrono::{Datelike, Month, NaiveDate};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

use super::loader::CleaningReport;

/// Sentinel for a missing director
pub const NO_DIRECTOR: &str = "No Director";
/// Sentinel for a missing cast list
pub const NO_CAST: &str = "No Cast";
/// Sentinel for a missing country
pub const UNKNOWN_COUNTRY: &str = "Unknown Country";

/// Canonical month ordering used for every month-keyed display
pub const CALENDAR_MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Kind of catalog title
///
/// Ordered lexically on the display name, so "Movie" < "Short" < "TV Show".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    Movie,
    TvShow,
    /// Any value the catalog carries that is neither of the known kinds
    Other(String),
}

impl ContentType {
    /// Display / wire name ("Movie", "TV Show", or the raw value)
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
            ContentType::Other(raw) => raw,
        }
    }

    /// Map a raw `type` cell to a content type. Matching is exact after trimming.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "Movie" => ContentType::Movie,
            "TV Show" => ContentType::TvShow,
            other => ContentType::Other(other.to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            ContentType::Movie => 0,
            ContentType::TvShow => 1,
            ContentType::Other(_) => 2,
        }
    }
}

impl Ord for ContentType {
    fn cmp(&self, other: &Self) -> Ordering {
        // Variant breaks the tie for an `Other` spelled like a known kind
        self.as_str()
            .cmp(other.as_str())
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl PartialOrd for ContentType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One cleaned catalog row
///
/// `director`, `cast` and `country` are never empty (sentinel-defaulted);
/// `date_added`, `rating` and `duration` are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub content_type: ContentType,
    pub title: String,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: NaiveDate,
    pub rating: String,
    pub duration: String,
    pub listed_in: Option<String>,
    /// Calendar year of `date_added`
    pub year_added: i32,
    /// Calendar month of `date_added`
    pub month_added: Month,
}

impl Record {
    /// Derive the calendar fields from `date_added`
    pub(crate) fn calendar_fields(date: NaiveDate) -> (i32, Month) {
        (date.year(), CALENDAR_MONTHS[date.month0() as usize])
    }

    /// Full English month name of `date_added` ("January".."December")
    pub fn month_name(&self) -> &'static str {
        self.month_added.name()
    }
}

/// Cleaned, immutable catalog
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    report: CleaningReport,
}

impl Dataset {
    pub fn new(records: Vec<Record>, report: CleaningReport) -> Self {
        Self { records, report }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// What happened to the rows while cleaning
    pub fn report(&self) -> &CleaningReport {
        &self.report
    }

    /// Number of records of the given kind
    pub fn count_of(&self, kind: &ContentType) -> usize {
        self.records.iter().filter(|r| &r.content_type == kind).count()
    }
}

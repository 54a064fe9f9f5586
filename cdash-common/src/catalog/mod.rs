//! Catalog dataset: record model, CSV loading/cleaning and the process-wide cache

mod cache;
mod loader;
mod record;

pub use cache::DatasetCache;
pub use loader::{load_dataset, parse_date_added, read_dataset, CleaningReport, DATE_FORMATS};
pub use record::{
    ContentType, Dataset, Record, CALENDAR_MONTHS, NO_CAST, NO_DIRECTOR, UNKNOWN_COUNTRY,
};

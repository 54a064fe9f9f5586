//! # Catalog Dashboard Common Library
//!
//! Shared code for the catalog dashboard including:
//! - Catalog record model and CSV loading/cleaning
//! - Process-lifetime dataset cache
//! - Content type filter
//! - Aggregators feeding each visualization
//! - Bootstrap configuration loading

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;

pub use catalog::{ContentType, Dataset, DatasetCache, Record};
pub use error::{Error, MalformedRow, Result};
pub use filter::{filter, Subset, TypeSelection};

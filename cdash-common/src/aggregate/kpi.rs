//! Headline numbers

use serde::Serialize;

use crate::catalog::{ContentType, Dataset};
use crate::filter::Subset;

/// The three KPI tiles.
///
/// `total_titles` follows the active filter. `total_movies` and
/// `total_tv_shows` are always taken from the full dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KpiSummary {
    pub total_titles: usize,
    pub total_movies: usize,
    pub total_tv_shows: usize,
}

impl KpiSummary {
    pub fn compute(subset: &Subset<'_>, full: &Dataset) -> Self {
        Self {
            total_titles: subset.len(),
            total_movies: full.count_of(&ContentType::Movie),
            total_tv_shows: full.count_of(&ContentType::TvShow),
        }
    }
}

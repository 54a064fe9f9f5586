//! Aggregators: pure grouping/counting passes, one per visualization
//!
//! Each aggregator takes any iterator of record references, so the same
//! function serves the full dataset and a filtered [`Subset`](crate::Subset).
//! All counts are exact integer tallies.

mod counts;
mod density;
mod kpi;
mod trend;

pub use counts::{
    genre_tokens, rating_counts, top_countries, top_genres, top_n, value_counts, CategoryCount,
    GENRE_SEPARATOR, TOP_N,
};
pub use density::{release_density, DensityMatrix};
pub use kpi::KpiSummary;
pub use trend::{yearly_trend, TrendPoint};

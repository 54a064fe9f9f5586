//! HTTP handlers for cdash-ui

pub mod buildinfo;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod insights;

pub use buildinfo::get_build_info;
pub use dashboard::dashboard_page;
pub use error::ApiError;
pub use health::health_routes;
pub use insights::{
    get_countries, get_dataset_info, get_density, get_genres, get_kpis, get_ratings, get_trend,
};

use cdash_common::TypeSelection;
use serde::Deserialize;

/// `?type=` query parameter shared by the page and the JSON endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    /// "All", "Movie" or "TV Show"; absent means "All"
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

impl SelectionQuery {
    /// Validate the raw parameter. Unknown values never reach the filter.
    pub fn selection(&self) -> Result<TypeSelection, ApiError> {
        match self.content_type.as_deref() {
            None => Ok(TypeSelection::All),
            Some(raw) => raw.parse().map_err(ApiError::InvalidSelection),
        }
    }
}

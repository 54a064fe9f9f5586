//! JSON endpoints exposing each aggregation
//!
//! Only `/api/kpis` accepts `?type=All|Movie|TV Show`, and only its
//! `total_titles` follows it. Every chart endpoint covers the whole catalog.

use axum::{
    extract::{Query, State},
    Json,
};
use cdash_common::aggregate::{
    rating_counts, release_density, top_countries, top_genres, yearly_trend, CategoryCount,
    DensityMatrix, KpiSummary, TrendPoint, TOP_N,
};
use cdash_common::catalog::CleaningReport;
use cdash_common::{filter, TypeSelection};
use serde::Serialize;

use super::{ApiError, SelectionQuery};
use crate::AppState;

/// Categorical chart payload
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub items: Vec<CategoryCount>,
}

/// KPI payload
#[derive(Debug, Serialize)]
pub struct KpiResponse {
    pub selection: TypeSelection,
    #[serde(flatten)]
    pub kpis: KpiSummary,
}

/// Catalog source and cleaning summary
#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    pub path: String,
    pub titles: usize,
    pub cleaning: CleaningReport,
}

/// GET /api/kpis
pub async fn get_kpis(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<KpiResponse>, ApiError> {
    let selection = query.selection()?;
    let dataset = state.dataset().await?;
    let subset = filter(&dataset, selection);
    Ok(Json(KpiResponse {
        selection,
        kpis: KpiSummary::compute(&subset, &dataset),
    }))
}

/// GET /api/trend
pub async fn get_trend(State(state): State<AppState>) -> Result<Json<Vec<TrendPoint>>, ApiError> {
    let dataset = state.dataset().await?;
    Ok(Json(yearly_trend(dataset.records())))
}

/// GET /api/density
pub async fn get_density(State(state): State<AppState>) -> Result<Json<DensityMatrix>, ApiError> {
    let dataset = state.dataset().await?;
    Ok(Json(release_density(dataset.records())))
}

/// GET /api/genres
pub async fn get_genres(
    State(state): State<AppState>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let dataset = state.dataset().await?;
    Ok(Json(CategoryResponse {
        items: top_genres(dataset.records(), TOP_N),
    }))
}

/// GET /api/countries
pub async fn get_countries(
    State(state): State<AppState>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let dataset = state.dataset().await?;
    Ok(Json(CategoryResponse {
        items: top_countries(dataset.records(), TOP_N),
    }))
}

/// GET /api/ratings
pub async fn get_ratings(
    State(state): State<AppState>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let dataset = state.dataset().await?;
    Ok(Json(CategoryResponse {
        items: rating_counts(dataset.records()),
    }))
}

/// GET /api/dataset
pub async fn get_dataset_info(
    State(state): State<AppState>,
) -> Result<Json<DatasetInfo>, ApiError> {
    let dataset = state.dataset().await?;
    Ok(Json(DatasetInfo {
        path: state.cache.path().display().to_string(),
        titles: dataset.len(),
        cleaning: dataset.report().clone(),
    }))
}

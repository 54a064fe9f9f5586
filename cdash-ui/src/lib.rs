//! cdash-ui library - catalog dashboard web service
//!
//! One server-rendered page plus JSON endpoints for each aggregation.
//! The catalog is loaded once and shared read-only by every request.

use axum::Router;
use cdash_common::{Dataset, DatasetCache};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod render;
pub mod view;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Process-lifetime catalog cache
    pub cache: Arc<DatasetCache>,
}

impl AppState {
    /// Create new application state
    pub fn new(cache: DatasetCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Cached catalog. A first load reads and cleans the CSV on the
    /// blocking pool so the worker thread stays free.
    pub async fn dataset(&self) -> Result<Arc<Dataset>, api::ApiError> {
        if let Some(dataset) = self.cache.get() {
            return Ok(dataset);
        }
        let cache = Arc::clone(&self.cache);
        let dataset = tokio::task::spawn_blocking(move || cache.get_or_load()).await??;
        Ok(dataset)
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let api = Router::new()
        .route("/api/kpis", get(api::get_kpis))
        .route("/api/trend", get(api::get_trend))
        .route("/api/density", get(api::get_density))
        .route("/api/genres", get(api::get_genres))
        .route("/api/countries", get(api::get_countries))
        .route("/api/ratings", get(api::get_ratings))
        .route("/api/dataset", get(api::get_dataset_info))
        .route("/api/buildinfo", get(api::get_build_info));

    let pages = Router::new()
        .route("/", get(api::dashboard_page))
        .merge(api::health_routes());

    Router::new()
        .merge(api)
        .merge(pages)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "type,title,date_added,rating,duration\nMovie,A,\"May 1, 2020\",PG,90 min\n";

    #[tokio::test]
    async fn test_dataset_loads_off_worker_thread_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netflix_titles.csv");
        std::fs::write(&path, CSV).unwrap();

        let state = AppState::new(DatasetCache::new(&path));
        assert!(!state.cache.is_loaded());

        let first = state.dataset().await.unwrap();
        assert!(state.cache.is_loaded());
        assert_eq!(first.len(), 1);

        let second = state.dataset().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_dataset_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(DatasetCache::new(dir.path().join("netflix_titles.csv")));

        let err = state.dataset().await.unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::SERVICE_UNAVAILABLE);
        assert!(!state.cache.is_loaded());
    }
}

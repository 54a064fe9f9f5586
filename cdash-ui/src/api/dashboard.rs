//! Dashboard page handler

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, warn};

use super::{ApiError, SelectionQuery};
use crate::render;
use crate::view::DashboardView;
use crate::AppState;

/// GET /?type=All|Movie|TV Show
///
/// One full filter → aggregate → render pass. When the catalog cannot be
/// loaded, only the error page is rendered.
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Response {
    match build_view(&state, &query).await {
        Ok(view) => Html(render::dashboard_page(&view)).into_response(),
        Err(e) => {
            warn!("Dashboard not rendered: {}", e);
            (e.status(), Html(render::error_page(&e.user_message()))).into_response()
        }
    }
}

async fn build_view(state: &AppState, query: &SelectionQuery) -> Result<DashboardView, ApiError> {
    let selection = query.selection()?;
    let dataset = state.dataset().await?;
    debug!("Rendering dashboard for selection '{}'", selection);
    Ok(DashboardView::build(&dataset, selection))
}

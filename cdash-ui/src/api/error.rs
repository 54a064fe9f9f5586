//! Handler errors and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cdash_common::filter::UnknownSelection;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Catalog could not be loaded; rendering must stop
    #[error(transparent)]
    DataSource(#[from] cdash_common::Error),

    /// `type` parameter outside All / Movie / TV Show
    #[error(transparent)]
    InvalidSelection(UnknownSelection),

    /// The blocking load task panicked or was cancelled
    #[error("catalog load task failed: {0}")]
    LoadTask(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::DataSource(cdash_common::Error::DataSourceNotFound { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::DataSource(_) | ApiError::LoadTask(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidSelection(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message shown to the end user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::DataSource(e) => match e.missing_file_name() {
                Some(name) => format!(
                    "Error: '{}' file not found. Place the file where the dashboard expects it and reload.",
                    name
                ),
                None => format!("Error: the catalog could not be loaded ({})", e),
            },
            ApiError::InvalidSelection(e) => format!("Error: {}", e),
            ApiError::LoadTask(_) => "Error: the catalog could not be loaded".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.user_message(),
        }));

        (self.status(), body).into_response()
    }
}

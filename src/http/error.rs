//! Mapping of request failures to HTTP responses.
//!
//! Upstream and template failures are 500s. Their error text goes to the
//! client as-is.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::render::RenderError;
use crate::upstream::UpstreamError;

/// Everything a page handler can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("missing query parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("artist '{0}' not found")]
    ArtistNotFound(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upstream(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::ArtistNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            let resource = match &self {
                AppError::Upstream(e) => e.resource().map(|r| r.as_str()),
                _ => None,
            };
            tracing::error!(status = %status, resource = ?resource, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Request rejected");
        }
        (status, self.to_string()).into_response()
    }
}

use crate::foundation::error::StillcastError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// JSON diagnostic body returned for failed conversions.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorBody {
    /// The request phase that failed.
    pub phase: String,
    /// Human-readable description of the failure.
    pub message: String,
}

/// Error wrapper that renders a [`StillcastError`] as an HTTP response.
///
/// Client-correctable failures (bad parameters, unreadable image) map to
/// 422; server-side failures (ingest, encode, read-back) map to 500. No
/// partial video body is ever produced.
#[derive(Debug)]
pub struct ApiError(pub StillcastError);

impl From<StillcastError> for ApiError {
    fn from(err: StillcastError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            StillcastError::Parameter(_) | StillcastError::Decode(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            StillcastError::Ingest(_)
            | StillcastError::Encode(_)
            | StillcastError::ReadBack(_)
            | StillcastError::Cleanup(_)
            | StillcastError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(phase = self.0.phase(), error = %self.0, "convert request failed");

        (
            status,
            Json(ErrorBody {
                phase: self.0.phase().to_string(),
                message: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

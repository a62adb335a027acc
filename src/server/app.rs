use crate::server::convert;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Default multipart body cap: 32 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Build the service router.
///
/// `max_upload_bytes` caps the accepted request body (the upload plus the
/// small form fields).
pub fn router(max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/convert", post(convert::convert))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

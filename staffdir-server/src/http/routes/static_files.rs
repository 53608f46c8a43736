//! Static file serving for uploaded photos
//!
//! Serves the upload directory under /uploads, so the `foto` path stored
//! in a row doubles as its URL. A filename with no file behind it is a
//! plain 404 from ServeDir.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;

use crate::http::server::AppState;

/// Create router serving the upload directory at /uploads.
pub fn router(upload_dir: &Path) -> Router<Arc<AppState>> {
    tracing::info!(path = %upload_dir.display(), "Serving uploaded photos from /uploads");

    Router::new().nest_service("/uploads", ServeDir::new(upload_dir))
}

//! Static frontend serving with SPA fallback
//!
//! Serves the prebuilt frontend next to the API routes. Paths that do not
//! map to a file fall back to the entry page so client-side routing survives
//! a reload; dotfile segments never reach the filesystem.

use axum::{
    Router,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use duocast_config::StaticAssetsConfig;
use http::StatusCode;
use tower_http::services::{ServeDir, ServeFile};

/// Build the static asset router from configuration
pub fn router(config: &StaticAssetsConfig) -> Router {
    let entry = ServeFile::new(config.directory.join(&config.fallback));
    let serve = ServeDir::new(&config.directory).not_found_service(entry);

    Router::new()
        .fallback_service(serve)
        .layer(axum::middleware::from_fn(deny_dotfiles))
}

/// Reject any path containing a dotfile segment
async fn deny_dotfiles(request: Request, next: Next) -> Response {
    let has_dot_segment = request
        .uri()
        .path()
        .split('/')
        .any(|segment| segment.starts_with('.'));

    if has_dot_segment {
        return StatusCode::NOT_FOUND.into_response();
    }

    next.run(request).await
}

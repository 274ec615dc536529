use axum::response::IntoResponse;
use http::StatusCode;

/// Liveness probe handler; replies with a bare "ok"
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

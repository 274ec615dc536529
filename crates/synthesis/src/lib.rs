#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Dialogue-to-audio synthesis endpoint
//!
//! Wires the dialogue parser to the cloud long-audio synthesis API: parse
//! the script, build one request around a fresh storage destination, submit,
//! and wait for the operation inside a fixed bound.

mod client;
mod destination;
mod error;
mod http_client;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

pub use error::{Result, SynthesisError};
pub use server::{Server, SynthesisServerBuilder};
pub use types::{SynthesizeRequest, SynthesizeResponse};
use request::ExtractPayload;

/// Build the synthesis server from configuration
pub fn build_server(config: &duocast_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        SynthesisServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize synthesis server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for dialogue synthesis
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/v1/dialogue/synthesize", post(synthesize))
}

/// Handle dialogue synthesis requests
async fn synthesize(
    State(server): State<Arc<Server>>,
    ExtractPayload(request): ExtractPayload<SynthesizeRequest>,
) -> Result<Json<SynthesizeResponse>> {
    tracing::debug!(text_len = request.text.len(), "dialogue synthesis handler called");

    let destination = server.synthesize(&request.text).await?;

    Ok(Json(SynthesizeResponse::complete(destination)))
}

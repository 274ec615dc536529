use serde::{Deserialize, Serialize};

/// Dialogue synthesis request from the frontend
#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    /// Raw multi-line dialogue script. A missing field is treated the same
    /// as an empty one and rejected before anything is submitted.
    #[serde(default)]
    pub text: String,
}

/// Success envelope returned to the caller
#[derive(Debug, Serialize)]
pub struct SynthesizeResponse {
    pub message: &'static str,
    /// Storage destination the external service wrote the audio to
    pub output_gcs_uri: String,
}

impl SynthesizeResponse {
    pub const fn complete(output_gcs_uri: String) -> Self {
        Self {
            message: "Synthesis complete",
            output_gcs_uri,
        }
    }
}

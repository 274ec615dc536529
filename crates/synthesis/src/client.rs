//! Minimal client for the cloud long-audio synthesis API
//!
//! Covers exactly the two calls this service needs: submitting one
//! `synthesizeLongAudio` request and polling the long-running operation it
//! returns. The service itself writes the audio to storage; we only carry
//! the destination URI.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SynthesisError},
    http_client::http_client,
};

const DEFAULT_API_URL: &str = "https://texttospeech.googleapis.com/v1beta1";

/// One turn of the external service's multi-speaker markup
#[derive(Debug, Serialize)]
pub struct Turn {
    pub speaker: &'static str,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct MultiSpeakerMarkup {
    pub turns: Vec<Turn>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisInput {
    pub multi_speaker_markup: MultiSpeakerMarkup,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelection {
    pub language_code: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    pub audio_encoding: String,
}

/// Immutable request descriptor for one long-audio synthesis
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongAudioRequest {
    pub input: SynthesisInput,
    pub voice: VoiceSelection,
    pub audio_config: AudioConfig,
    pub output_gcs_uri: String,
}

/// Long-running operation handle returned by submission and polling
#[derive(Debug, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<OperationStatus>,
}

#[derive(Debug, Deserialize)]
pub struct OperationStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug)]
pub struct LongAudioClient {
    client: reqwest::Client,
    base_url: String,
    token: SecretString,
    project_id: String,
    location: String,
}

impl LongAudioClient {
    pub fn new(project_id: String, location: String, token: SecretString, base_url: Option<String>) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token,
            project_id,
            location,
        }
    }

    /// Submit one synthesis request, returning the operation handle
    pub async fn submit(&self, request: &LongAudioRequest) -> Result<Operation> {
        let url = format!(
            "{}/projects/{}/locations/{}:synthesizeLongAudio",
            self.base_url, self.project_id, self.location
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.token.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("synthesis submission failed: {e}");
                SynthesisError::ConnectionError(format!("Failed to submit synthesis request: {e}"))
            })?;

        self.read_operation(response).await
    }

    /// Fetch the current state of a long-running operation
    pub async fn operation(&self, name: &str) -> Result<Operation> {
        let url = format!("{}/{name}", self.base_url);

        let response = self.client.get(&url).bearer_auth(self.token.expose_secret()).send().await.map_err(|e| {
            tracing::error!("operation poll failed: {e}");
            SynthesisError::ConnectionError(format!("Failed to poll synthesis operation: {e}"))
        })?;

        self.read_operation(response).await
    }

    async fn read_operation(&self, response: reqwest::Response) -> Result<Operation> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("synthesis API error ({status}): {message}");

            return Err(SynthesisError::ServiceError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| SynthesisError::ConnectionError(format!("Failed to decode operation response: {e}")))
    }
}

use std::path::PathBuf;

use serde::Deserialize;

/// Long-audio synthesis configuration
///
/// Read once at startup and treated as read-only afterwards.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Cloud project that owns the synthesis quota
    pub project_id: String,
    /// Storage bucket that receives synthesized audio
    pub bucket: String,
    /// File holding the bearer token presented to the synthesis API.
    /// Startup fails if this file is absent.
    pub credentials_file: PathBuf,
    /// Cloud location hosting the long-audio endpoint
    #[serde(default = "default_location")]
    pub location: String,
    /// Multi-speaker voice name
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_language_code")]
    pub language_code: String,
    /// Output encoding accepted by the long-audio endpoint
    #[serde(default = "default_audio_encoding")]
    pub audio_encoding: String,
    /// Object name prefix inside the bucket
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
    /// Upper bound on one synthesis operation, in seconds
    #[serde(default = "default_operation_timeout")]
    pub operation_timeout_seconds: u64,
    /// Delay between operation polls, in seconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    /// Base URL override, used by tests
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_location() -> String {
    "us-central1".to_string()
}

fn default_voice() -> String {
    "en-US-Studio-MultiSpeaker".to_string()
}

fn default_language_code() -> String {
    "en-US".to_string()
}

fn default_audio_encoding() -> String {
    "LINEAR16".to_string()
}

fn default_output_prefix() -> String {
    "dialogue".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_operation_timeout() -> u64 {
    600
}

#[allow(clippy::missing_const_for_fn)]
fn default_poll_interval() -> u64 {
    5
}

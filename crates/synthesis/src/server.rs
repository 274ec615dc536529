use std::time::Duration;

use dialogue::DialogueTurn;
use secrecy::SecretString;

use crate::{
    client::{
        AudioConfig, LongAudioClient, LongAudioRequest, MultiSpeakerMarkup, Operation, SynthesisInput, Turn,
        VoiceSelection,
    },
    destination,
    error::{Result, SynthesisError},
};

/// Synthesis server: owns the outbound client and the fixed voice settings
///
/// Shared read-only between handler invocations; each request runs its own
/// parse-build-submit-wait flow with no in-flight state crossing calls.
#[derive(Debug)]
pub struct Server {
    client: LongAudioClient,
    bucket: String,
    output_prefix: String,
    voice: String,
    language_code: String,
    audio_encoding: String,
    operation_timeout: Duration,
    poll_interval: Duration,
}

impl Server {
    /// Run one dialogue script through the long-audio pipeline
    ///
    /// Parses the script, builds one immutable request around a fresh
    /// destination, submits it, and waits for the operation to finish within
    /// the configured bound. Failures are surfaced with their original
    /// message; nothing is retried.
    pub async fn synthesize(&self, text: &str) -> Result<String> {
        // Only a truly absent body takes the client-input path; anything
        // else, whitespace included, is the parser's call
        if text.is_empty() {
            return Err(SynthesisError::EmptyInput);
        }

        let turns = dialogue::parse_dialogue(text)?;
        let request = self.build_request(turns);
        let destination = request.output_gcs_uri.clone();

        tracing::info!(
            turns = request.input.multi_speaker_markup.turns.len(),
            destination = %destination,
            "submitting long-audio synthesis"
        );

        let operation = self.client.submit(&request).await?;
        self.await_operation(operation).await?;

        tracing::info!(destination = %destination, "synthesis complete");
        Ok(destination)
    }

    fn build_request(&self, turns: Vec<DialogueTurn>) -> LongAudioRequest {
        let turns = turns
            .into_iter()
            .map(|turn| Turn {
                speaker: turn.speaker,
                text: turn.text,
            })
            .collect();

        LongAudioRequest {
            input: SynthesisInput {
                multi_speaker_markup: MultiSpeakerMarkup { turns },
            },
            voice: VoiceSelection {
                language_code: self.language_code.clone(),
                name: self.voice.clone(),
            },
            audio_config: AudioConfig {
                audio_encoding: self.audio_encoding.clone(),
            },
            output_gcs_uri: destination::output_uri(&self.bucket, &self.output_prefix),
        }
    }

    /// Wait for the operation to finish, bounded by the fixed timeout
    async fn await_operation(&self, operation: Operation) -> Result<()> {
        let bound = self.operation_timeout;

        tokio::time::timeout(bound, self.poll_until_done(operation))
            .await
            .map_err(|_| {
                tracing::error!(timeout_s = bound.as_secs(), "synthesis operation timed out");
                SynthesisError::Timeout(bound.as_secs())
            })?
    }

    async fn poll_until_done(&self, mut operation: Operation) -> Result<()> {
        loop {
            if let Some(status) = operation.error.take() {
                tracing::error!(code = status.code, "synthesis operation failed: {}", status.message);
                return Err(SynthesisError::OperationFailed(status.message));
            }

            if operation.done {
                return Ok(());
            }

            tokio::time::sleep(self.poll_interval).await;
            operation = self.client.operation(&operation.name).await?;
        }
    }
}

/// Builder for constructing the synthesis server from configuration
pub struct SynthesisServerBuilder<'a> {
    config: &'a duocast_config::Config,
}

impl<'a> SynthesisServerBuilder<'a> {
    pub const fn new(config: &'a duocast_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<Server> {
        let synthesis = &self.config.synthesis;

        // Validation already checked existence; reading can still fail on
        // permissions, which is just as fatal
        let token = std::fs::read_to_string(&synthesis.credentials_file).map_err(|e| {
            SynthesisError::Config(format!(
                "failed to read credentials file {}: {e}",
                synthesis.credentials_file.display()
            ))
        })?;
        let token = SecretString::from(token.trim().to_string());

        let client = LongAudioClient::new(
            synthesis.project_id.clone(),
            synthesis.location.clone(),
            token,
            synthesis.base_url.clone(),
        );

        tracing::debug!(
            voice = %synthesis.voice,
            bucket = %synthesis.bucket,
            "synthesis server initialized"
        );

        Ok(Server {
            client,
            bucket: synthesis.bucket.clone(),
            output_prefix: synthesis.output_prefix.clone(),
            voice: synthesis.voice.clone(),
            language_code: synthesis.language_code.clone(),
            audio_encoding: synthesis.audio_encoding.clone(),
            operation_timeout: Duration::from_secs(synthesis.operation_timeout_seconds),
            poll_interval: Duration::from_secs(synthesis.poll_interval_seconds),
        })
    }
}

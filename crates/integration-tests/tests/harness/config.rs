//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::PathBuf;

use duocast_config::{Config, HealthConfig, ServerConfig, StaticAssetsConfig, SynthesisConfig};
use tempfile::TempDir;

/// Builder for constructing test configurations
///
/// Owns a temp directory with a credentials fixture; keep the returned
/// guard alive for the duration of the test.
pub struct ConfigBuilder {
    config: Config,
    dir: TempDir,
}

impl ConfigBuilder {
    /// Create a builder pointed at a mock synthesis backend
    pub fn new(base_url: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let credentials_file = dir.path().join("credentials.token");
        std::fs::write(&credentials_file, "test-token\n").expect("credentials fixture");

        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    static_assets: None,
                },
                synthesis: SynthesisConfig {
                    project_id: "test-project".to_string(),
                    bucket: "test-bucket".to_string(),
                    credentials_file,
                    location: "us-central1".to_string(),
                    voice: "en-US-Studio-MultiSpeaker".to_string(),
                    language_code: "en-US".to_string(),
                    audio_encoding: "LINEAR16".to_string(),
                    output_prefix: "dialogue".to_string(),
                    operation_timeout_seconds: 600,
                    // Tests poll immediately unless a test says otherwise
                    poll_interval_seconds: 0,
                    base_url: Some(base_url.to_string()),
                },
            },
            dir,
        }
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Bound the synthesis operation wait
    pub fn with_operation_timeout(mut self, seconds: u64) -> Self {
        self.config.synthesis.operation_timeout_seconds = seconds;
        self
    }

    /// Set the delay between operation polls
    pub fn with_poll_interval(mut self, seconds: u64) -> Self {
        self.config.synthesis.poll_interval_seconds = seconds;
        self
    }

    /// Serve static files from a directory created by the test
    pub fn with_static_assets(mut self, directory: PathBuf) -> Self {
        self.config.server.static_assets = Some(StaticAssetsConfig {
            directory,
            fallback: "index.html".to_string(),
        });
        self
    }

    /// Build the final config together with its fixture directory guard
    pub fn build(self) -> (Config, TempDir) {
        (self.config, self.dir)
    }
}

use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration can actually start the service
    ///
    /// # Errors
    ///
    /// Returns an error if required synthesis settings are missing or the
    /// credentials artifact is absent
    pub fn validate(&self) -> anyhow::Result<()> {
        let synthesis = &self.synthesis;

        if synthesis.project_id.trim().is_empty() {
            anyhow::bail!("synthesis.project_id must not be empty");
        }

        if synthesis.bucket.trim().is_empty() {
            anyhow::bail!("synthesis.bucket must not be empty");
        }

        // Fail fast: a missing credentials artifact must prevent startup,
        // not surface on the first request
        if !synthesis.credentials_file.is_file() {
            anyhow::bail!(
                "synthesis.credentials_file not found: {}",
                synthesis.credentials_file.display()
            );
        }

        if synthesis.operation_timeout_seconds == 0 {
            anyhow::bail!("synthesis.operation_timeout_seconds must be greater than 0");
        }

        Ok(())
    }
}

use std::path::PathBuf;

use serde::Deserialize;

/// Static frontend serving configuration
///
/// The frontend is a prebuilt single-page app; unknown paths fall back to
/// the entry page so client-side routing keeps working after a reload.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticAssetsConfig {
    /// Directory holding the prebuilt frontend
    pub directory: PathBuf,
    /// Entry page served for client-side routed paths
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_fallback() -> String {
    "index.html".to_string()
}

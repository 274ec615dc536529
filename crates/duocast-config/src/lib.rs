#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
mod loader;
pub mod server;
pub mod static_assets;
pub mod synthesis;

use serde::Deserialize;

pub use health::*;
pub use server::*;
pub use static_assets::*;
pub use synthesis::*;

/// Top-level duocast configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Long-audio synthesis configuration
    pub synthesis: SynthesisConfig,
}

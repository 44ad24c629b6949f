#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
mod loader;
pub mod server;
pub mod storage;
pub mod synthesis;

use serde::Deserialize;

pub use health::*;
pub use server::*;
pub use storage::*;
pub use synthesis::*;

/// Top-level Cadenza configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream synthesis API configuration
    #[serde(default)]
    pub synthesis: SynthesisConfig,
    /// Artifact storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

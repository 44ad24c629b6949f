use std::path::PathBuf;

use serde::Deserialize;

/// Artifact storage configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct StorageConfig {
    /// Directory synthesized audio files are written to
    ///
    /// Created on startup if absent.
    pub output_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
        }
    }
}

//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use cadenza_config::{Config, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder listening on a random local port
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point synthesis at a mock upstream
    pub fn with_synthesis_base_url(mut self, base_url: &str) -> Self {
        self.config.synthesis.base_url = base_url.to_owned();
        self
    }

    /// Store artifacts under the given directory
    pub fn with_output_dir(mut self, dir: &Path) -> Self {
        self.config.storage.output_dir = dir.to_path_buf();
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}

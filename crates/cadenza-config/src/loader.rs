use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `${env:VAR}` placeholders, then
    /// deserializes and validates the result. A missing file yields the
    /// built-in defaults, so a bare checkout runs without any config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::env::expand_env(&raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the synthesis base URL is malformed, the
    /// synthesis timeout is zero, or the output directory is empty
    pub fn validate(&self) -> anyhow::Result<()> {
        url::Url::parse(&self.synthesis.base_url)
            .map_err(|e| anyhow::anyhow!("synthesis.base_url is not a valid URL: {e}"))?;

        if self.synthesis.timeout_seconds == 0 {
            anyhow::bail!("synthesis.timeout_seconds must be greater than 0");
        }

        if self.storage.output_dir.as_os_str().is_empty() {
            anyhow::bail!("storage.output_dir must not be empty");
        }

        Ok(())
    }
}

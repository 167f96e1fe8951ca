use std::path::Path;

use anyhow::Result;

use super::types::ScannerConfig;

impl ScannerConfig {
    /// Defaults, then the TOML file (if any), then environment overrides.
    ///
    /// `explicit_path` wins over the path named by
    /// [`super::CONFIG_PATH_ENV`]; a named file that cannot be read is an
    /// error.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_file_config(explicit_path)?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }
}

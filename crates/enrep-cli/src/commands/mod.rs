//! CLI subcommands.

pub mod batch;
pub mod clean;
pub mod output;
pub mod summary;

use std::path::Path;

use enrep_core::EnrepConfig;

/// Load the pipeline config from `--config`, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<EnrepConfig> {
    match config_path {
        Some(path) => Ok(EnrepConfig::from_file(Path::new(path))?),
        None => Ok(EnrepConfig::default()),
    }
}

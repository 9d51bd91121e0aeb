//! Configuration loading.

use std::path::Path;

use anyhow::{Context, Result};

use coleta_core::config::AppConfig;

/// Load the application configuration.
///
/// Precedence, lowest to highest: built-in defaults, the optional TOML
/// file, `COLETA_*` environment variables (nested keys use `__`, e.g.
/// `COLETA_API__BASE_URL`).
pub fn load_config(file: Option<&Path>) -> Result<AppConfig> {
    let mut builder = config::Config::builder()
        .add_source(config::Config::try_from(&AppConfig::default())?);

    if let Some(file) = file {
        builder = builder.add_source(config::File::from(file).required(false));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix("COLETA")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("failed to assemble configuration")?;

    settings
        .try_deserialize()
        .context("failed to deserialize configuration")
}

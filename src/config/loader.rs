// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::model::LayoutConfig;
use crate::config::validate::validate_config;

/// Load a layout config from a given path and return the raw `LayoutConfig`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (non-zero scale values, etc.). Use [`load_and_validate`] for
/// that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<LayoutConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading layout config at {:?}", path))?;

    let config: LayoutConfig = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML layout config from {:?}", path))?;

    Ok(config)
}

/// Load a layout config from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks that pixel/day scale values are usable (see
///   [`validate_config`](crate::config::validate::validate_config)).
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<LayoutConfig> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

//! Configuration file support for hello-files.
//!
//! Provides YAML-based configuration through `hello-files.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::file_demo::domain::MAX_READ_LIMIT;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "hello-files.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub first_file: Option<String>,
    pub second_file: Option<String>,
    pub first_payload: Option<String>,
    pub second_payload: Option<String>,
    pub max_read: Option<usize>,
    pub truncate: Option<bool>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured report format, if any. Validated at load time.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| f.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (field, value) in [
        ("first_file", &config.first_file),
        ("second_file", &config.second_file),
    ] {
        if let Some(name) = value {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: {} must not be empty.\n\n\
                     💡 Hint: Give a file name such as \"file1.txt\", or remove the field to use the default.",
                    field
                );
            }
        }
    }

    for (field, value) in [
        ("first_payload", &config.first_payload),
        ("second_payload", &config.second_payload),
    ] {
        if value.as_deref() == Some("") {
            bail!("Invalid config: {} must not be empty.", field);
        }
    }

    if let Some(max_read) = config.max_read {
        if !(1..=MAX_READ_LIMIT).contains(&max_read) {
            bail!(
                "Invalid config: max_read must be between 1 and {}, got {}.",
                MAX_READ_LIMIT,
                max_read
            );
        }
    }

    config
        .output_format()
        .context("Invalid config: unsupported format")?;

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

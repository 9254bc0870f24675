//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::domain::AppError;

use super::Configuration;

/// Load the shell configuration from the file passed via `--conf`.
pub fn load_config(path: &Path) -> Result<Configuration, AppError> {
    if !path.is_file() {
        return Err(AppError::ConfigNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<Configuration, AppError> {
    let table: toml::Table = toml::from_str(content)?;
    Ok(Configuration::from_toml(&table))
}

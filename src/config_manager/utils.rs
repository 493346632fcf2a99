use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// Load a `.env` file into the process environment: `path` if given, otherwise
/// the first `.env` found from the working directory upward. Variables already
/// set in the environment win. Returns the file that was loaded.
pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(path) => dotenvy::from_path(path).ok().map(|_| path.to_path_buf()),
        None => dotenvy::dotenv().ok(),
    }
}

/// Replace `${VAR_NAME}` with the value of the environment variable.
/// Unset variables are left in place.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

/// Read a YAML or JSON configuration file, chosen by extension, with environment
/// variable substitution applied before parsing.
pub fn read_config_file(config_path: &str) -> Result<Value> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let mut content = fs::read_to_string(config_path)?;
    // Strip BOM
    if content.starts_with('\u{feff}') {
        content.drain(..'\u{feff}'.len_utf8());
    }
    let content = substitute_env_vars(&content)?;
    parse_config_text(config_path, &content)
}

pub fn parse_config_text(config_path: &str, content: &str) -> Result<Value> {
    let path_lower = config_path.to_lowercase();
    let value = if path_lower.ends_with(".json") {
        serde_json::from_str(content)?
    } else {
        serde_yaml::from_str(content)?
    };
    debug!("Parsed configuration from {}", config_path);
    Ok(value)
}

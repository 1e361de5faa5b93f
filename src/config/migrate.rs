//! Config file upgrades: detect keys missing from an older `connectify.conf`
//! and add them with their default values.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

const FREQUENCY_HELP: &str = "# default_frequency options:\n\
                              #   Twice a Month → every 15 days\n\
                              #   Monthly       → every 30 days\n\
                              #   Quarterly     → every 90 days\n\
                              #   Semiannually  → every 180 days\n\
                              #   Twice a Year  → every 180 days\n";

fn defaults_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(format!("Failed to serialize defaults: {}", e)))?;

    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("Default config is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::Config(format!("{}: {}", path.display(), e))),
    }
}

/// Keys present in the default configuration but absent from `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = defaults_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add missing keys with default values. Returns the added keys.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = defaults_mapping()?;
    let mut added = Vec::new();

    for (k, v) in defaults {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if added.is_empty() {
        info("Configuration is up to date.");
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(current))
        .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

    // Document the accepted frequency labels right after the key
    let mut content = String::new();
    for line in serialized.lines() {
        content.push_str(line);
        content.push('\n');
        if line.starts_with("default_frequency:") && added.iter().any(|k| k == "default_frequency")
        {
            content.push_str(FREQUENCY_HELP);
        }
    }

    fs::write(path, content)?;

    success(format!(
        "Config migration applied — added: {}",
        added.join(", ")
    ));
    Ok(added)
}

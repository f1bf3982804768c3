//! Keep an existing config file in step with the current `Config` fields.

use super::Config;
use crate::errors::AppResult;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every config file is expected to carry (`user` is optional).
pub const REQUIRED_KEYS: [&str; 5] = [
    "database",
    "shop_name",
    "slot_interval_minutes",
    "booking_horizon_days",
    "currency_symbol",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&content)?;
    Ok(match value {
        Value::Mapping(m) => m,
        _ => Mapping::new(),
    })
}

/// Keys missing from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Add missing keys with their default value, keeping every existing entry.
/// Returns the keys that were added.
pub fn fill_missing(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => Mapping::new(),
    };

    let mut added = Vec::new();
    for k in REQUIRED_KEYS {
        let key = Value::String(k.to_string());
        if !map.contains_key(&key)
            && let Some(v) = defaults.get(&key)
        {
            map.insert(key, v.clone());
            added.push(k);
        }
    }

    if !added.is_empty() {
        fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;
        tracing::info!(?added, path = %path.display(), "config file migrated");
    }
    Ok(added)
}

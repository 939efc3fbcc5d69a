//! Reading override files and writing the resolved bundle

use anyhow::{anyhow, Context, Result};
use crate::settings::Settings;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Load a JSON object of option overrides
pub fn load_overrides(path: &Path) -> Result<Map<String, Value>> {
    log::info!("Loading overrides from {}", path.display());

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read overrides file {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("overrides file {} is not valid JSON", path.display()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!(
            "overrides file {} must hold a JSON object, found {}",
            path.display(),
            json_kind(&other)
        )),
    }
}

/// The bundle as the engine driver reads it, including the derived `cluster_dir`
pub fn settings_to_json(settings: &Settings) -> Result<Value> {
    let mut value = serde_json::to_value(settings)?;
    if let Value::Object(ref mut map) = value {
        map.insert(
            "cluster_dir".to_string(),
            Value::String(settings.cluster_dir().to_string_lossy().into_owned()),
        );
    }
    Ok(value)
}

/// Write the bundle as pretty JSON, creating parent directories as needed
pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    log::info!("Saving settings to {}", path.display());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let json = settings_to_json(settings)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

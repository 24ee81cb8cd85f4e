use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::model::{self, CoordinateRecord};

use super::{ManifestError, Result};

pub fn load_record(path: impl AsRef<Path>) -> Result<CoordinateRecord> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let value: Value = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str(&raw)?
    } else {
        serde_json::from_str(&raw)?
    };
    record_from_value(&value)
}

pub fn record_from_value(value: &Value) -> Result<CoordinateRecord> {
    let fields = value.as_object().ok_or_else(|| {
        ManifestError::Parse(format!(
            "tile coordinate block must be an object, found {}",
            model::json_type_name(value)
        ))
    })?;
    Ok(model::validate(fields)?)
}

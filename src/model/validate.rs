use serde_json::{Map, Value};

use super::record::{AxisRange, ZCoordinate};
use super::{Axis, CoordError, CoordinateRecord, Result};

const EXPECTED_PAIR: &str = "a 2-element numeric array";
const EXPECTED_Z: &str = "a 2-element numeric array or a number";
const EXPECTED_NUMBER: &str = "a number";

pub fn validate(raw: &Map<String, Value>) -> Result<CoordinateRecord> {
    reject_unknown_fields(raw)?;
    let xc = required_range(raw, Axis::X)?;
    let yc = required_range(raw, Axis::Y)?;
    let zc = match raw.get(Axis::Z.key()) {
        Some(value) => z_coordinate(value)?,
        None => ZCoordinate::Absent,
    };
    Ok(CoordinateRecord::new(xc, yc, zc))
}

/// Stricter than the wire contract: additionally requires min <= max on
/// every range.
pub fn validate_strict(raw: &Map<String, Value>) -> Result<CoordinateRecord> {
    let record = validate(raw)?;
    record.validate_ordering()?;
    Ok(record)
}

pub fn violations(raw: &Map<String, Value>) -> Vec<CoordError> {
    let mut found = Vec::new();
    for key in raw.keys() {
        if Axis::from_key(key).is_none() {
            found.push(CoordError::UnknownField(key.clone()));
        }
    }
    for axis in [Axis::X, Axis::Y] {
        if let Err(error) = required_range(raw, axis) {
            found.push(error);
        }
    }
    if let Some(value) = raw.get(Axis::Z.key()) {
        if let Err(error) = z_coordinate(value) {
            found.push(error);
        }
    }
    found
}

fn reject_unknown_fields(raw: &Map<String, Value>) -> Result<()> {
    for key in raw.keys() {
        if Axis::from_key(key).is_none() {
            return Err(CoordError::UnknownField(key.clone()));
        }
    }
    Ok(())
}

fn required_range(raw: &Map<String, Value>, axis: Axis) -> Result<AxisRange> {
    let value = raw
        .get(axis.key())
        .ok_or(CoordError::MissingRequiredField(axis))?;
    range_from_value(axis, value, EXPECTED_PAIR)
}

fn range_from_value(axis: Axis, value: &Value, expected: &'static str) -> Result<AxisRange> {
    let items = value.as_array().ok_or_else(|| CoordError::WrongType {
        axis,
        expected,
        found: json_type_name(value).to_string(),
    })?;
    if items.len() != 2 {
        return Err(CoordError::WrongArity {
            axis,
            found: items.len(),
        });
    }
    let min = numeric_element(axis, items, 0)?;
    let max = numeric_element(axis, items, 1)?;
    Ok(AxisRange::new(min, max))
}

fn numeric_element(axis: Axis, items: &[Value], index: usize) -> Result<f64> {
    items[index].as_f64().ok_or_else(|| CoordError::WrongType {
        axis,
        expected: EXPECTED_NUMBER,
        found: format!("{} at index {index}", json_type_name(&items[index])),
    })
}

fn z_coordinate(value: &Value) -> Result<ZCoordinate> {
    if let Some(plane) = value.as_f64() {
        return Ok(ZCoordinate::Scalar(plane));
    }
    if value.is_array() {
        return range_from_value(Axis::Z, value, EXPECTED_Z).map(ZCoordinate::Range);
    }
    Err(CoordError::WrongType {
        axis: Axis::Z,
        expected: EXPECTED_Z,
        found: json_type_name(value).to_string(),
    })
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

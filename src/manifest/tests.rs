use std::fs;

use serde_json::json;
use tempfile::tempdir;

use crate::model::{Axis, AxisRange, CoordError, ZCoordinate};

use super::{ManifestError, load_record, record_from_value};

#[test]
fn loads_json_coordinate_block() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tile.json");
    fs::write(&path, r#"{"xc": [0, 10.5], "yc": [5, 15], "zc": [0, 1]}"#).expect("write");
    let record = load_record(&path).expect("record");
    assert_eq!(record.x().max(), 10.5);
    assert_eq!(record.z(), ZCoordinate::Range(AxisRange::new(0.0, 1.0)));
}

#[test]
fn loads_yaml_coordinate_block() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tile.yaml");
    fs::write(&path, "xc: [0.5, 1.5]\nyc: [2.0, 3.0]\nzc: 4.25\n").expect("write");
    let record = load_record(&path).expect("record");
    assert_eq!(record.x().min(), 0.5);
    assert_eq!(record.y().span(), 1.0);
    assert_eq!(record.z(), ZCoordinate::Scalar(4.25));
}

#[test]
fn files_without_yaml_extension_parse_as_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tile.coords");
    fs::write(&path, r#"{"xc": [0, 1], "yc": [0, 1]}"#).expect("write");
    let record = load_record(&path).expect("record");
    assert_eq!(record.z(), ZCoordinate::Absent);
}

#[test]
fn malformed_json_maps_to_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tile.json");
    fs::write(&path, "{not json").expect("write");
    let error = load_record(&path).expect_err("malformed");
    assert!(matches!(error, ManifestError::SerdeJson(_)));
}

#[test]
fn malformed_yaml_maps_to_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tile.yml");
    fs::write(&path, "xc: [0, 1").expect("write");
    let error = load_record(&path).expect_err("malformed");
    assert!(matches!(error, ManifestError::SerdeYaml(_)));
}

#[test]
fn non_object_document_is_a_parse_failure() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tile.json");
    fs::write(&path, "[1, 2]").expect("write");
    let error = load_record(&path).expect_err("non-object");
    match error {
        ManifestError::Parse(message) => assert!(message.contains("array")),
        other => panic!("expected Parse, got {other}"),
    }
}

#[test]
fn coordinate_defects_surface_as_coordinate_errors() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tile.json");
    fs::write(&path, r#"{"xc": [0, 1]}"#).expect("write");
    let error = load_record(&path).expect_err("missing yc");
    match error {
        ManifestError::Coordinate(inner) => {
            assert_eq!(inner, CoordError::MissingRequiredField(Axis::Y));
        }
        other => panic!("expected Coordinate, got {other}"),
    }
}

#[test]
fn missing_file_is_an_io_failure() {
    let dir = tempdir().expect("tempdir");
    let error = load_record(dir.path().join("absent.json")).expect_err("missing file");
    assert!(matches!(error, ManifestError::Io(_)));
}

#[test]
fn record_from_value_accepts_parsed_entries() {
    let entry = json!({"xc": [1, 2], "yc": [3, 4], "zc": -0.5});
    let record = record_from_value(&entry).expect("record");
    assert_eq!(record.z(), ZCoordinate::Scalar(-0.5));

    let error = record_from_value(&json!(42)).expect_err("non-object");
    assert!(matches!(error, ManifestError::Parse(_)));
}

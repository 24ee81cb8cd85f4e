use std::sync::OnceLock;

use serde_json::Value;

const SCHEMA_JSON: &str = include_str!("../../schemas/coordinates.schema.json");

/// The draft-07 wire contract for one tile's coordinate block. `validate`
/// accepts exactly the instance set this document accepts.
pub fn coordinates_schema() -> &'static Value {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        serde_json::from_str(SCHEMA_JSON).expect("embedded coordinates schema is valid JSON")
    })
}

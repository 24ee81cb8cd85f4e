mod axis;
mod error;
mod record;
mod schema;
mod validate;


pub use axis::Axis;
pub use error::{CoordError, Result};
pub use record::{AxisRange, CoordinateRecord, ZCoordinate};
pub use schema::coordinates_schema;
pub use validate::{validate, validate_strict, violations};

pub(crate) use validate::json_type_name;

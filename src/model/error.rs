use thiserror::Error;

use super::Axis;

pub type Result<T> = std::result::Result<T, CoordError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("missing required coordinate field `{0}`")]
    MissingRequiredField(Axis),

    #[error("unknown coordinate field `{0}`")]
    UnknownField(String),

    #[error("coordinate field `{axis}` must contain exactly 2 values, found {found}")]
    WrongArity { axis: Axis, found: usize },

    #[error("coordinate field `{axis}` has invalid type: expected {expected}, found {found}")]
    WrongType {
        axis: Axis,
        expected: &'static str,
        found: String,
    },

    #[error("coordinate field `{axis}` range is inverted: min {min} exceeds max {max}")]
    InvertedRange { axis: Axis, min: f64, max: f64 },
}

use crate::model::CoordError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ManifestError>;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest entry parse failure: {0}")]
    Parse(String),

    #[error("manifest I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("manifest JSON failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("manifest YAML failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("tile coordinate validation failed: {0}")]
    Coordinate(#[from] CoordError),
}

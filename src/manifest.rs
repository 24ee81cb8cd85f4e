mod error;
mod io;

#[cfg(test)]
mod tests;

pub use error::{ManifestError, Result};
pub use io::{load_record, record_from_value};

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn key(self) -> &'static str {
        match self {
            Axis::X => "xc",
            Axis::Y => "yc",
            Axis::Z => "zc",
        }
    }

    pub fn from_key(key: &str) -> Option<Axis> {
        match key {
            "xc" => Some(Axis::X),
            "yc" => Some(Axis::Y),
            "zc" => Some(Axis::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::{Axis, CoordError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl Serialize for AxisRange {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.min)?;
        seq.serialize_element(&self.max)?;
        seq.end()
    }
}

/// A scalar z marks capture at a single plane; it is not interchangeable
/// with a zero-width range and the two serialize differently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZCoordinate {
    Absent,
    Range(AxisRange),
    Scalar(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateRecord {
    xc: AxisRange,
    yc: AxisRange,
    zc: ZCoordinate,
}

impl CoordinateRecord {
    pub fn new(xc: AxisRange, yc: AxisRange, zc: ZCoordinate) -> Self {
        Self { xc, yc, zc }
    }

    pub fn x(&self) -> AxisRange {
        self.xc
    }

    pub fn y(&self) -> AxisRange {
        self.yc
    }

    pub fn z(&self) -> ZCoordinate {
        self.zc
    }

    pub fn validate_ordering(&self) -> Result<()> {
        ordered(Axis::X, self.xc)?;
        ordered(Axis::Y, self.yc)?;
        if let ZCoordinate::Range(range) = self.zc {
            ordered(Axis::Z, range)?;
        }
        Ok(())
    }
}

fn ordered(axis: Axis, range: AxisRange) -> Result<()> {
    if range.min <= range.max {
        Ok(())
    } else {
        Err(CoordError::InvertedRange {
            axis,
            min: range.min,
            max: range.max,
        })
    }
}

impl Serialize for CoordinateRecord {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = match self.zc {
            ZCoordinate::Absent => 2,
            _ => 3,
        };
        let mut map = serializer.serialize_map(Some(fields))?;
        map.serialize_entry(Axis::X.key(), &self.xc)?;
        map.serialize_entry(Axis::Y.key(), &self.yc)?;
        match self.zc {
            ZCoordinate::Absent => {}
            ZCoordinate::Range(range) => map.serialize_entry(Axis::Z.key(), &range)?,
            ZCoordinate::Scalar(plane) => map.serialize_entry(Axis::Z.key(), &plane)?,
        }
        map.end()
    }
}

//! Shape definitions and area formulas.
//!
//! A [`Shape`] is built from the fields of one input line by [`Shape::build`],
//! which checks the tag and field count before handing the dimension fields to
//! serde. [`Shape::area`] is a plain match over the closed set of variants.

use std::f64::consts::PI;

use csv::StringRecord;
use serde::Deserialize;

use crate::error::ShapeError;

/// Supported shape tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Cuboid,
    Triangle,
}

impl ShapeKind {
    /// Looks up a tag, ignoring case. The tag is expected to be trimmed already.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "rectangle" => Some(Self::Rectangle),
            "circle" => Some(Self::Circle),
            "cuboid" => Some(Self::Cuboid),
            "triangle" => Some(Self::Triangle),
            _ => None,
        }
    }

    /// Dimension names, in input order.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            Self::Rectangle => &["length", "width"],
            Self::Circle => &["radius"],
            Self::Cuboid => &["length", "width", "height"],
            Self::Triangle => &["base", "height"],
        }
    }

    /// Required number of fields on a line, tag included.
    pub fn arity(self) -> usize {
        self.params().len() + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rectangle {
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Cuboid {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

/// One parsed shape record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Cuboid(Cuboid),
    Triangle(Triangle),
}

impl Shape {
    /// Builds a shape from a split line. `fields[0]` is the tag.
    ///
    /// Returns [`ShapeError::UnknownShape`] for an unsupported tag,
    /// [`ShapeError::Arity`] when the field count is wrong and
    /// [`ShapeError::InvalidNumber`] when a dimension is not a number.
    pub fn build(fields: &StringRecord) -> Result<Self, ShapeError> {
        let tag = fields.get(0).unwrap_or_default().trim();
        let kind =
            ShapeKind::from_tag(tag).ok_or_else(|| ShapeError::UnknownShape(tag.to_string()))?;

        if fields.len() != kind.arity() {
            return Err(ShapeError::Arity(kind));
        }

        let mut dims: StringRecord = fields.iter().skip(1).collect();
        dims.trim();

        let invalid = |err: csv::Error| {
            let index = match err.kind() {
                csv::ErrorKind::Deserialize { err, .. } => err.field().unwrap_or(0) as usize,
                _ => 0,
            };
            ShapeError::InvalidNumber {
                tag: tag.to_string(),
                param: kind.params()[index.min(kind.params().len() - 1)],
                raw: fields.get(index + 1).unwrap_or_default().to_string(),
            }
        };

        let shape = match kind {
            ShapeKind::Rectangle => Self::Rectangle(dims.deserialize(None).map_err(invalid)?),
            ShapeKind::Circle => Self::Circle(dims.deserialize(None).map_err(invalid)?),
            ShapeKind::Cuboid => Self::Cuboid(dims.deserialize(None).map_err(invalid)?),
            ShapeKind::Triangle => Self::Triangle(dims.deserialize(None).map_err(invalid)?),
        };
        Ok(shape)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Cuboid(_) => ShapeKind::Cuboid,
            Self::Triangle(_) => ShapeKind::Triangle,
        }
    }

    /// Area of the shape. For a cuboid this is the surface area of all six faces.
    pub fn area(&self) -> f64 {
        match *self {
            Self::Rectangle(Rectangle { length, width }) => length * width,
            Self::Circle(Circle { radius }) => PI * radius.powi(2),
            Self::Cuboid(Cuboid {
                length,
                width,
                height,
            }) => 2.0 * (length * width + width * height + length * height),
            Self::Triangle(Triangle { base, height }) => 0.5 * base * height,
        }
    }
}

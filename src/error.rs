//! Error types for the converter.
//!
//! [`ShapeError`] covers everything that can go wrong with a single input line.
//! Its `Display` text is exactly what gets written to the output in place of
//! an area, so the messages here are part of the output format.
//!
//! [`Error`] covers failures that abort the whole run.

use std::path::PathBuf;

use thiserror::Error;

use crate::shape::ShapeKind;

/// A problem with one input line. Recovered by writing the message and moving on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// Fewer than two comma-separated fields.
    #[error("Invalid line format in input file")]
    MalformedLine,

    /// Known tag, wrong number of fields.
    #[error("{}", arity_message(.0))]
    Arity(ShapeKind),

    /// Tag outside the supported set, as it appeared in the input.
    #[error("Invalid shape type: {0}")]
    UnknownShape(String),

    /// A dimension field that does not parse as a number.
    #[error("Invalid {param} for {tag}: '{raw}'")]
    InvalidNumber {
        tag: String,
        param: &'static str,
        raw: String,
    },
}

fn arity_message(kind: &ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "Rectangle requires length and width",
        ShapeKind::Circle => "Circle requires radius",
        ShapeKind::Cuboid => "Cuboid requires length, width, and height",
        ShapeKind::Triangle => "Triangle requires base and height",
    }
}

/// Failures that stop the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

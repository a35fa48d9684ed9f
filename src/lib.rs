//! A batch converter from shape descriptions to areas.
//!
//! This crate reads comma-separated lines such as `rectangle,4,5` or
//! `circle,2`, computes the area of each shape (the surface area for a
//! cuboid) and writes one result line per input line. Lines that cannot be
//! turned into a shape produce an error message in place of the result, so
//! the output always has as many lines as the input.
//!
//! # Example
//!
//! ```no_run
//! fn main() -> Result<(), shape_areas::Error> {
//!     shape_areas::run(&shape_areas::Config::default())?;
//!     Ok(())
//! }
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};

mod config;
mod converter;
mod decimal;
mod error;
mod parser;
mod shape;
#[macro_use]
pub mod tracing;

pub use config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use converter::{Converter, LineOutcome, Summary};
pub use decimal::TwoPlaces;
pub use error::{Error, ShapeError};
pub use parser::{InputLines, LineParser};
pub use shape::{Circle, Cuboid, Rectangle, Shape, ShapeKind, Triangle};

/// Convert the configured input file into the configured output file.
///
/// The input is opened before the output is created, so a missing input
/// leaves no output file behind. An existing output file is overwritten.
///
/// # Returns
/// * `Ok(Summary)` once every line has been written
/// * `Err(Error::InputNotFound)` if the input file does not exist
/// * `Err` for any other I/O failure
pub fn run(config: &Config) -> Result<Summary, Error> {
    let input = match File::open(&config.input_path) {
        Ok(file) => BufReader::new(file),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::InputNotFound(config.input_path.clone()));
        }
        Err(e) => return Err(e.into()),
    };
    let output = BufWriter::new(File::create(&config.output_path)?);

    convert(input, output)
}

/// Convert from any buffered reader into any writer.
pub fn convert<R: BufRead, W: Write>(reader: R, writer: W) -> Result<Summary, Error> {
    Converter::new().convert(reader, writer)
}

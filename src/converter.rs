//! The line-by-line conversion loop.
//!
//! [`Converter`] turns each input line into exactly one [`LineOutcome`] and
//! writes its `Display` form as one output line, keeping input order.

use std::fmt;
use std::io::{BufRead, Write};

use crate::decimal::TwoPlaces;
use crate::error::{Error, ShapeError};
use crate::parser::LineParser;
use crate::shape::Shape;
use crate::{info, warn};

/// Result of processing a single input line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Computed area, with the tag exactly as it appeared (trimmed, original case).
    Area { tag: String, area: f64 },
    Rejected(ShapeError),
}

impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Area { tag, area } => write!(f, "Area of {}: {}", tag, TwoPlaces(*area)),
            Self::Rejected(err) => write!(f, "{}", err),
        }
    }
}

/// Counts for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub areas: usize,
    pub rejected: usize,
}

/// Shape area converter.
#[derive(Default)]
pub struct Converter {
    parser: LineParser,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            parser: LineParser::new(),
        }
    }

    /// Processes one line (without its terminator).
    pub fn process_line(&self, line: &str) -> LineOutcome {
        let fields = self.parser.split(line);
        if fields.len() < 2 {
            return LineOutcome::Rejected(ShapeError::MalformedLine);
        }

        match Shape::build(&fields) {
            Ok(shape) => LineOutcome::Area {
                tag: fields[0].trim().to_string(),
                area: shape.area(),
            },
            Err(err) => LineOutcome::Rejected(err),
        }
    }

    /// Reads every line from `reader` and writes one result line per input
    /// line to `writer`.
    ///
    /// Only I/O failures abort; the writer is flushed before returning `Ok`.
    pub fn convert<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> Result<Summary, Error> {
        let mut summary = Summary::default();

        for (index, line) in self.parser.lines(reader).enumerate() {
            let outcome = self.process_line(&line?);
            writeln!(writer, "{}", outcome)?;

            summary.lines += 1;
            match &outcome {
                LineOutcome::Area { .. } => summary.areas += 1,
                LineOutcome::Rejected(err) => {
                    summary.rejected += 1;
                    warn!("line {}: {}", index + 1, err);
                }
            }
        }

        writer.flush()?;
        info!(
            "Processed {} lines: {} areas, {} rejected",
            summary.lines, summary.areas, summary.rejected
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    fn convert_str(input: &str) -> (String, Summary) {
        let mut output = Vec::new();
        let summary = Converter::new()
            .convert(input.as_bytes(), &mut output)
            .unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    fn line(input: &str) -> LineOutcome {
        Converter::new().process_line(input)
    }

    // ========== LineOutcome Display Tests ==========

    #[test]
    fn test_display_area_two_decimals() {
        let outcome = LineOutcome::Area {
            tag: "circle".into(),
            area: std::f64::consts::PI * 4.0,
        };
        assert_eq!(outcome.to_string(), "Area of circle: 12.57");
    }

    #[test]
    fn test_display_rejected_is_message_verbatim() {
        let outcome = LineOutcome::Rejected(ShapeError::Arity(ShapeKind::Circle));
        assert_eq!(outcome.to_string(), "Circle requires radius");
    }

    // ========== process_line Tests ==========

    #[test]
    fn test_process_line_echoes_tag_case() {
        assert_eq!(line("RECTANGLE,2,3").to_string(), "Area of RECTANGLE: 6.00");
        assert_eq!(line("rectangle,2,3").to_string(), "Area of rectangle: 6.00");
        assert_eq!(line(" Triangle ,6,4").to_string(), "Area of Triangle: 12.00");
    }

    #[test]
    fn test_process_line_single_field_is_malformed() {
        assert_eq!(line("circle"), LineOutcome::Rejected(ShapeError::MalformedLine));
        assert_eq!(line(""), LineOutcome::Rejected(ShapeError::MalformedLine));
        assert_eq!(line("circle,"), LineOutcome::Rejected(ShapeError::MalformedLine));
    }

    #[test]
    fn test_process_line_unknown_shape() {
        assert_eq!(line("hexagon,1").to_string(), "Invalid shape type: hexagon");
    }

    #[test]
    fn test_process_line_arity() {
        assert_eq!(line("circle,1,2").to_string(), "Circle requires radius");
        assert_eq!(
            line("cuboid,1,2").to_string(),
            "Cuboid requires length, width, and height"
        );
    }

    #[test]
    fn test_process_line_bad_number() {
        assert_eq!(
            line("rectangle,4,abc").to_string(),
            "Invalid width for rectangle: 'abc'"
        );
    }

    #[test]
    fn test_process_line_rounds_ties_up() {
        assert_eq!(line("triangle,0.5,0.5").to_string(), "Area of triangle: 0.13");
        assert_eq!(line("rectangle,0.5,0.25").to_string(), "Area of rectangle: 0.13");
        assert_eq!(line("triangle,1,0.25").to_string(), "Area of triangle: 0.13");
        assert_eq!(line("rectangle,1.005,1").to_string(), "Area of rectangle: 1.01");
    }

    #[test]
    fn test_process_line_negative_dimension() {
        assert_eq!(line("rectangle,-4,5").to_string(), "Area of rectangle: -20.00");
    }

    // ========== convert Tests ==========

    #[test]
    fn test_convert_reference_example() {
        let (output, summary) =
            convert_str("rectangle,4,5\ncircle,2\ncuboid,1,2,3\ntriangle,6,4\nfoo,1");

        assert_eq!(
            output,
            "Area of rectangle: 20.00\n\
             Area of circle: 12.57\n\
             Area of cuboid: 22.00\n\
             Area of triangle: 12.00\n\
             Invalid shape type: foo\n"
        );
        assert_eq!(
            summary,
            Summary {
                lines: 5,
                areas: 4,
                rejected: 1
            }
        );
    }

    #[test]
    fn test_convert_one_output_line_per_input_line() {
        let input = "circle,1\n\ncircle\nbogus,1,2\ncircle,x\r\ntriangle,2,2\r\n";
        let (output, summary) = convert_str(input);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            [
                "Area of circle: 3.14",
                "Invalid line format in input file",
                "Invalid line format in input file",
                "Invalid shape type: bogus",
                "Invalid radius for circle: 'x'",
                "Area of triangle: 2.00",
            ]
        );
        assert_eq!(summary.lines, 6);
        assert_eq!(summary.rejected, 4);
    }

    #[test]
    fn test_convert_lone_carriage_return_separates_records() {
        let (output, summary) = convert_str("circle,2\rrectangle,1,2\n");

        assert_eq!(output, "Area of circle: 12.57\nArea of rectangle: 2.00\n");
        assert_eq!(summary.lines, 2);
    }

    #[test]
    fn test_convert_empty_input() {
        let (output, summary) = convert_str("");
        assert_eq!(output, "");
        assert_eq!(summary, Summary::default());
    }
}

//! Run configuration.

use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "input.csv";
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Where to read shapes from and where to write results.
///
/// The binary always uses [`Config::default`]; other paths exist for tests
/// and library callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

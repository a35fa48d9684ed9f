//! CLI entry point for the shape area converter.
//!
//! Usage: `cargo run` with `input.csv` in the working directory; results are
//! written to `output.txt`.

use std::process;

use shape_areas::Config;

fn main() {
    if let Err(e) = shape_areas::run(&Config::default()) {
        shape_areas::error!("{}", e);
        process::exit(1);
    }
}

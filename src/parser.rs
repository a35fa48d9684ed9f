//! Splits raw input into lines and lines into comma-separated fields.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use csv::StringRecord;

/// Iterator over input lines.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. Terminators are not part of
/// the yielded lines.
pub struct InputLines<R> {
    reader: R,
    buf: String,
    pending: VecDeque<String>,
}

impl<R: BufRead> InputLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Iterator for InputLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }

        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => return Some(Err(e)),
        }

        // One chunk runs up to and including `\n`; any `\r` before that
        // ends a line of its own.
        let chunk = self.buf.strip_suffix('\n').unwrap_or(&self.buf);
        let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
        self.pending.extend(chunk.split('\r').map(str::to_string));
        self.pending.pop_front().map(Ok)
    }
}

/// Splits lines on commas.
///
/// There is no quoting, so every comma is a separator. Trailing empty fields
/// are dropped, which means `circle,` has a single field and a blank line has
/// none.
#[derive(Debug, Default)]
pub struct LineParser;

impl LineParser {
    pub fn new() -> Self {
        Self
    }

    /// Reads lines from `reader`.
    pub fn lines<R: BufRead>(&self, reader: R) -> InputLines<R> {
        InputLines::new(reader)
    }

    /// Splits one line (without its terminator) into fields.
    pub fn split(&self, line: &str) -> StringRecord {
        let mut record: StringRecord = line.split(',').collect();
        let kept = (0..record.len())
            .rev()
            .find(|&i| !record[i].is_empty())
            .map_or(0, |last| last + 1);
        record.truncate(kept);
        record
    }
}

//! Console input provider backed by stdin

use std::io::{self, BufRead};

use rps_core::InputProvider;

/// Reads one line per call from a buffered reader (stdin in the binary)
pub struct ConsoleInput<R> {
    reader: R,
}

impl ConsoleInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputProvider for ConsoleInput<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

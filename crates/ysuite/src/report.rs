//! Line-oriented progress and summary output.

use std::io::{self, Write};

use crate::dump::{dump_documents, dump_value};
use crate::error::{Error, Result};
use crate::loader::LoadError;
use crate::runner::Expected;
use crate::value::Value;

/// Pass/fail counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
    /// Fixtures whose expected output could not be derived. Not part of the
    /// printed summary.
    pub skipped: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }
}

pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Progress prefix; the outcome is appended on the same line.
    pub fn start(&mut self, index: usize, id: &str) -> Result<()> {
        write!(self.out, "{:4} │ {}... ", index, id).map_err(Error::Report)?;
        self.out.flush().map_err(Error::Report)
    }

    pub fn passed(&mut self) -> Result<()> {
        writeln!(self.out, "Passed").map_err(Error::Report)
    }

    pub fn mismatch(
        &mut self,
        input_path: &str,
        expected_path: &str,
        expected: &Expected,
        got: &[Value],
    ) -> Result<()> {
        self.write_mismatch(input_path, expected_path, expected, got)
            .map_err(Error::Report)
    }

    fn write_mismatch(
        &mut self,
        input_path: &str,
        expected_path: &str,
        expected: &Expected,
        got: &[Value],
    ) -> io::Result<()> {
        writeln!(self.out, "Failed")?;
        writeln!(self.out, "Expected: {}", expected_path)?;
        let expected = match expected {
            Expected::Document(v) => dump_value(v),
            Expected::Stream(docs) => dump_documents(docs),
        };
        self.out.write_all(expected.as_bytes())?;
        writeln!(self.out, "Got: {}", input_path)?;
        self.out.write_all(dump_documents(got).as_bytes())
    }

    pub fn yaml_error(&mut self, path: &str, err: &LoadError) -> Result<()> {
        writeln!(self.out, "Failed to parse YAML: {}", err)
            .and_then(|()| writeln!(self.out, "In file: {}", path))
            .map_err(Error::Report)
    }

    pub fn json_error(&mut self, path: &str, err: &Error) -> Result<()> {
        writeln!(self.out, "Failed to parse JSON: {}", err)
            .and_then(|()| writeln!(self.out, "In file: {}", path))
            .map_err(Error::Report)
    }

    pub fn read_error(&mut self, err: &Error) -> Result<()> {
        writeln!(self.out, "Failed to read fixture: {}", err).map_err(Error::Report)
    }

    pub fn summary(&mut self, tally: &Tally) -> Result<()> {
        writeln!(self.out, "Passed: {}", tally.passed)
            .and_then(|()| writeln!(self.out, "Failed: {}", tally.failed))
            .and_then(|()| self.out.flush())
            .map_err(Error::Report)
    }
}

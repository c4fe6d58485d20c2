//! Per-fixture evaluation and the run loop.
//!
//! Each fixture moves through: load input → derive expected → compare.
//! A load failure fails the fixture. A fixture whose expected output cannot
//! be derived is skipped and left out of the tally. Nothing stops the run
//! except a failure to write the report itself.

use std::io::Write;

use crate::compare::{documents_equal, values_equal};
use crate::error::{Error, Result};
use crate::fixture::{Fixture, FixtureCase, Layout};
use crate::json::{self, JsonOutcome};
use crate::loader::{LoadError, Loader};
use crate::options::{FlatCompare, RunConfig};
use crate::report::{Reporter, Tally};
use crate::split::split_documents;
use crate::value::Value;

/// Expected output derived from a fixture.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    /// A single JSON document (flat layout)
    Document(Value),
    /// Every document of a JSON stream (nested layout)
    Stream(Vec<Value>),
}

#[derive(Debug)]
pub enum Verdict {
    Passed,
    Mismatch { expected: Expected, got: Vec<Value> },
    YamlError(LoadError),
    JsonError(Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

impl Verdict {
    pub fn outcome(&self) -> Outcome {
        match self {
            Verdict::Passed => Outcome::Passed,
            Verdict::Mismatch { .. } | Verdict::YamlError(_) => Outcome::Failed,
            Verdict::JsonError(_) => Outcome::Skipped,
        }
    }
}

/// Run one fixture through the loader and compare against its expected output.
pub fn evaluate<L: Loader>(
    loader: &L,
    layout: Layout,
    case: &FixtureCase,
    config: &RunConfig,
) -> Verdict {
    let got = match loader.load(&case.yaml_source) {
        Ok(docs) => docs,
        Err(err) => return Verdict::YamlError(err),
    };

    let expected = match derive_expected(layout, &case.expected_source) {
        Ok(expected) => expected,
        Err(err) => return Verdict::JsonError(err),
    };

    let equal = match (&expected, config.flat_compare) {
        (Expected::Document(doc), FlatCompare::FirstDocument) => {
            got.first().is_some_and(|first| values_equal(first, doc))
        }
        (Expected::Document(doc), FlatCompare::FullStream) => {
            documents_equal(&got, core::slice::from_ref(doc))
        }
        (Expected::Stream(docs), _) => documents_equal(&got, docs),
    };

    if equal {
        Verdict::Passed
    } else {
        Verdict::Mismatch { expected, got }
    }
}

fn derive_expected(layout: Layout, text: &str) -> Result<Expected> {
    match layout {
        Layout::Nested => split_documents(text).map(Expected::Stream),
        Layout::Flat => match json::parse(text) {
            JsonOutcome::Complete(value) => Ok(Expected::Document(value)),
            JsonOutcome::TrailingData { offset, .. } => Err(Error::Json {
                offset,
                message: String::from("extra data after JSON document"),
            }),
            JsonOutcome::Malformed { message, offset } => Err(Error::Json { offset, message }),
        },
    }
}

pub struct Runner<L, W> {
    loader: L,
    reporter: Reporter<W>,
    config: RunConfig,
    tally: Tally,
}

impl<L: Loader, W: Write> Runner<L, W> {
    pub fn new(loader: L, out: W, config: RunConfig) -> Self {
        Self {
            loader,
            reporter: Reporter::new(out),
            config,
            tally: Tally::default(),
        }
    }

    /// Process every fixture in order, then print the summary.
    pub fn run(&mut self, fixtures: &[Fixture]) -> Result<Tally> {
        self.tally = Tally::default();
        for (i, fixture) in fixtures.iter().enumerate() {
            self.run_fixture(i + 1, fixture)?;
        }
        self.reporter.summary(&self.tally)?;
        tracing::info!(
            loader = self.loader.name(),
            passed = self.tally.passed,
            failed = self.tally.failed,
            skipped = self.tally.skipped,
            "run complete"
        );
        Ok(self.tally)
    }

    pub fn run_fixture(&mut self, index: usize, fixture: &Fixture) -> Result<Outcome> {
        self.reporter.start(index, &fixture.id)?;

        let case = match fixture.read() {
            Ok(case) => case,
            Err(err) => {
                tracing::warn!(fixture = %fixture.id, error = %err, "fixture unreadable; skipped");
                self.reporter.read_error(&err)?;
                self.tally.skipped += 1;
                return Ok(Outcome::Skipped);
            }
        };

        let verdict = evaluate(&self.loader, fixture.layout, &case, &self.config);
        let input_path = fixture.display_path.as_str();
        let expected_path = fixture.expected_display_path.as_str();
        match &verdict {
            Verdict::Passed => self.reporter.passed()?,
            Verdict::Mismatch { expected, got } => {
                self.reporter
                    .mismatch(input_path, expected_path, expected, got)?
            }
            Verdict::YamlError(err) => self.reporter.yaml_error(input_path, err)?,
            Verdict::JsonError(err) => {
                tracing::warn!(fixture = %fixture.id, error = %err, "expected output does not decode; skipped");
                self.reporter.json_error(expected_path, err)?;
            }
        }

        let outcome = verdict.outcome();
        match outcome {
            Outcome::Passed => self.tally.passed += 1,
            Outcome::Failed => self.tally.failed += 1,
            Outcome::Skipped => self.tally.skipped += 1,
        }
        tracing::debug!(fixture = %fixture.id, ?outcome, "fixture done");
        Ok(outcome)
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn into_writer(self) -> W {
        self.reporter.into_inner()
    }
}

#![doc = include_str!("../README.md")]

pub mod compare;
pub mod dump;
pub mod error;
pub mod fixture;
pub mod json;
pub mod loader;
pub mod number;
pub mod options;
pub mod report;
pub mod runner;
pub mod split;
pub mod value;

pub use crate::compare::{documents_equal, values_equal};
pub use crate::error::{Error, Result};
pub use crate::fixture::{Fixture, FixtureCase, Layout, locate};
pub use crate::loader::{JsonStreamLoader, LoadError, Loader, YamlLoader};
pub use crate::options::{FlatCompare, LayoutSelection, LocatorConfig, RunConfig};
pub use crate::report::Tally;
pub use crate::runner::{Outcome, Runner, Verdict};
pub use crate::split::split_documents;
pub use crate::value::{Number, Value};

use std::io::Write;
use std::path::Path;

/// Locate every fixture under `root` and run it through `loader`, writing
/// the report to `out`.
pub fn run_suite<L: Loader, W: Write>(
    root: &Path,
    loader: L,
    out: W,
    locator: &LocatorConfig,
    config: RunConfig,
) -> Result<Tally> {
    let fixtures = locate(root, locator)?;
    let mut runner = Runner::new(loader, out, config);
    runner.run(&fixtures)
}

/// Install a stderr tracing subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ysuite=warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

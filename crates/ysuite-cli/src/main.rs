use std::io::stdout;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutArg {
    All,
    Flat,
    Nested,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LoaderArg {
    Yaml,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "ysuite",
    about = "Run YAML parser conformance suites against JSON fixtures",
    version
)]
struct Args {
    /// Directory holding json-test-suite/ and yaml-test-suite/
    #[arg(long, default_value = "tests/suites")]
    root: PathBuf,

    /// Which suite layouts to run
    #[arg(long, value_enum, default_value_t = LayoutArg::All)]
    layout: LayoutArg,

    /// Parser under test
    #[arg(long, value_enum, default_value_t = LoaderArg::Yaml)]
    loader: LoaderArg,

    /// Ignore `===` title files and label nested fixtures by path
    #[arg(long, default_value_t = false)]
    no_titles: bool,

    /// Compare every loaded document in flat fixtures, not just the first
    #[arg(long, default_value_t = false)]
    full_stream: bool,

    /// Exit with status 1 when any fixture fails
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> Result<ExitCode> {
    ysuite::init_tracing();
    let args = Args::parse();

    let locator = ysuite::LocatorConfig {
        layouts: match args.layout {
            LayoutArg::All => ysuite::LayoutSelection::All,
            LayoutArg::Flat => ysuite::LayoutSelection::Flat,
            LayoutArg::Nested => ysuite::LayoutSelection::Nested,
        },
        supports_titles: !args.no_titles,
    };
    let config = ysuite::RunConfig {
        flat_compare: if args.full_stream {
            ysuite::FlatCompare::FullStream
        } else {
            ysuite::FlatCompare::FirstDocument
        },
    };

    let out = stdout().lock();
    let tally = match args.loader {
        LoaderArg::Yaml => ysuite::run_suite(&args.root, ysuite::YamlLoader, out, &locator, config),
        LoaderArg::Json => {
            ysuite::run_suite(&args.root, ysuite::JsonStreamLoader, out, &locator, config)
        }
    }
    .with_context(|| format!("running suites under {}", args.root.display()))?;

    if args.strict && tally.failed > 0 {
        tracing::debug!(failed = tally.failed, "strict mode: failing exit status");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

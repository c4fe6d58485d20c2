//! Fixture discovery for the two supported suite layouts.
//!
//! Flat: `y_*.json` files in one directory; each file is both the input and
//! the expected output.
//!
//! Nested: directories one or two levels below the suite root that hold an
//! `in.yaml` / `in.json` pair, optionally titled by a `===` file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::options::LocatorConfig;

/// Flat suite location relative to the suite root.
pub const FLAT_SUITE_DIR: &str = "json-test-suite/test_parsing";
/// Nested suite location relative to the suite root.
pub const NESTED_SUITE_DIR: &str = "yaml-test-suite";

const FLAT_PREFIX: &str = "y_";
const INPUT_FILE: &str = "in.yaml";
const EXPECTED_FILE: &str = "in.json";
const TITLE_FILE: &str = "===";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Flat,
    Nested,
}

/// A located fixture. Sources are read on demand by [`Fixture::read`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub id: String,
    pub layout: Layout,
    pub input: PathBuf,
    pub expected: PathBuf,
    /// Forward-slash path of the input file relative to the suite root.
    pub display_path: String,
    /// Forward-slash path of the expected-output file, same base.
    pub expected_display_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCase {
    pub id: String,
    pub yaml_source: String,
    pub expected_source: String,
}

impl Fixture {
    pub fn read(&self) -> Result<FixtureCase> {
        let yaml_source = read_text(&self.input)?;
        let expected_source = if self.expected == self.input {
            yaml_source.clone()
        } else {
            read_text(&self.expected)?
        };
        Ok(FixtureCase {
            id: self.id.clone(),
            yaml_source,
            expected_source,
        })
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Enumerate every fixture under `root`, flat suite first.
///
/// A suite directory that does not exist contributes nothing.
pub fn locate(root: &Path, config: &LocatorConfig) -> Result<Vec<Fixture>> {
    let mut fixtures = Vec::new();

    if config.layouts.includes_flat() {
        let dir = root.join(FLAT_SUITE_DIR);
        if dir.is_dir() {
            let found = locate_flat(&dir)?;
            tracing::info!(suite = %dir.display(), fixtures = found.len(), "flat suite");
            fixtures.extend(found);
        } else {
            tracing::warn!(suite = %dir.display(), "flat suite not found");
        }
    }

    if config.layouts.includes_nested() {
        let dir = root.join(NESTED_SUITE_DIR);
        if dir.is_dir() {
            let found = locate_nested(&dir, config.supports_titles)?;
            tracing::info!(suite = %dir.display(), fixtures = found.len(), "nested suite");
            fixtures.extend(found);
        } else {
            tracing::warn!(suite = %dir.display(), "nested suite not found");
        }
    }

    Ok(fixtures)
}

/// Regular files named `y_*.json` directly inside `dir`, sorted by name.
pub fn locate_flat(dir: &Path) -> Result<Vec<Fixture>> {
    let suite_root = dir.parent().and_then(Path::parent).unwrap_or(dir);
    let mut fixtures = Vec::new();

    for path in sorted_entries(dir)? {
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with(FLAT_PREFIX) || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name)
            .to_string();
        let display_path = relative_posix(suite_root, &path);
        fixtures.push(Fixture {
            id,
            layout: Layout::Flat,
            expected_display_path: display_path.clone(),
            display_path,
            input: path.clone(),
            expected: path,
        });
    }

    Ok(fixtures)
}

/// Fixture directories one and two levels below `dir`.
///
/// All first-level fixtures come before any second-level fixture. Nothing
/// deeper than two levels is visited.
pub fn locate_nested(dir: &Path, supports_titles: bool) -> Result<Vec<Fixture>> {
    let first_level: Vec<PathBuf> = sorted_entries(dir)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect();

    let mut second_level = Vec::new();
    for parent in &first_level {
        second_level.extend(sorted_entries(parent)?.into_iter().filter(|p| p.is_dir()));
    }

    let mut fixtures = Vec::new();
    for candidate in first_level.iter().chain(second_level.iter()) {
        let input = candidate.join(INPUT_FILE);
        let expected = candidate.join(EXPECTED_FILE);
        if !(input.is_file() && expected.is_file()) {
            tracing::trace!(dir = %candidate.display(), "not a fixture directory");
            continue;
        }
        let relative = relative_posix(dir, candidate);
        let id = if supports_titles {
            read_title(candidate).unwrap_or_else(|| relative.clone())
        } else {
            relative.clone()
        };
        fixtures.push(Fixture {
            id,
            layout: Layout::Nested,
            display_path: format!("{}/{}", relative, INPUT_FILE),
            expected_display_path: format!("{}/{}", relative, EXPECTED_FILE),
            input,
            expected,
        });
    }

    Ok(fixtures)
}

/// First non-blank-trimmed line of the `===` file. An unreadable title
/// file falls back to the path id instead of failing discovery.
fn read_title(dir: &Path) -> Option<String> {
    let path = dir.join(TITLE_FILE);
    if !path.is_file() {
        return None;
    }
    let text = match read_text(&path) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "title file unreadable; using path as id");
            return None;
        }
    };
    let title = text.lines().next().map(str::trim).unwrap_or("");
    (!title.is_empty()).then(|| title.to_string())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}

fn relative_posix(base: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

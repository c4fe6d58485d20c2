use std::fs;
use std::path::Path;

use tempfile::TempDir;
use ysuite::fixture::locate_nested;
use ysuite::runner::{Expected, evaluate};
use ysuite::{
    FixtureCase, FlatCompare, JsonStreamLoader, Layout, LoadError, Loader, LocatorConfig, Outcome,
    RunConfig, Runner, Tally, Value, Verdict, YamlLoader, locate,
};

fn case(yaml: &str, json: &str) -> FixtureCase {
    FixtureCase {
        id: "case".into(),
        yaml_source: yaml.into(),
        expected_source: json.into(),
    }
}

fn write(path: &Path, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}

/// Loader that always returns the same documents.
struct Fixed(Vec<Value>);

impl Loader for Fixed {
    fn name(&self) -> &str {
        "fixed"
    }

    fn load(&self, _text: &str) -> Result<Vec<Value>, LoadError> {
        Ok(self.0.clone())
    }
}

#[test]
fn scalar_document_passes() {
    let verdict = evaluate(&YamlLoader, Layout::Nested, &case("1\n", "1"), &RunConfig::default());
    assert!(matches!(verdict, Verdict::Passed));
}

#[test]
fn document_stream_passes() {
    let verdict = evaluate(
        &YamlLoader,
        Layout::Nested,
        &case("---\na\n---\nb\n", "\"a\"\"b\""),
        &RunConfig::default(),
    );
    assert!(matches!(verdict, Verdict::Passed));
}

#[test]
fn malformed_expected_is_skipped() {
    let verdict = evaluate(&YamlLoader, Layout::Nested, &case("a: 1\n", "{"), &RunConfig::default());
    assert!(matches!(verdict, Verdict::JsonError(_)));
    assert_eq!(verdict.outcome(), Outcome::Skipped);
}

#[test]
fn malformed_yaml_fails() {
    let verdict = evaluate(
        &YamlLoader,
        Layout::Nested,
        &case("key: \"unterminated\n", "{\"key\": \"unterminated\"}"),
        &RunConfig::default(),
    );
    assert!(matches!(verdict, Verdict::YamlError(_)));
    assert_eq!(verdict.outcome(), Outcome::Failed);
}

#[test]
fn differing_values_fail_with_both_sides() {
    let verdict = evaluate(&YamlLoader, Layout::Nested, &case("a: 1\n", "{\"a\": 2}"), &RunConfig::default());
    match verdict {
        Verdict::Mismatch { expected: Expected::Stream(expected), got } => {
            assert_eq!(expected.len(), 1);
            assert_eq!(got.len(), 1);
        }
        other => panic!("expected mismatch, got {:?}", other),
    }
}

#[test]
fn nested_layout_compares_whole_stream() {
    let verdict = evaluate(&YamlLoader, Layout::Nested, &case("---\na\n---\nb\n", "\"a\""), &RunConfig::default());
    assert_eq!(verdict.outcome(), Outcome::Failed);
}

#[test]
fn flat_layout_compares_first_document_by_default() {
    let loader = Fixed(vec![Value::Bool(true), Value::Null]);
    let first = evaluate(&loader, Layout::Flat, &case("", "true"), &RunConfig::default());
    assert!(matches!(first, Verdict::Passed));

    let full = RunConfig {
        flat_compare: FlatCompare::FullStream,
    };
    let verdict = evaluate(&loader, Layout::Flat, &case("", "true"), &full);
    assert_eq!(verdict.outcome(), Outcome::Failed);
}

#[test]
fn flat_layout_with_no_documents_fails() {
    let verdict = evaluate(&Fixed(vec![]), Layout::Flat, &case("", "null"), &RunConfig::default());
    assert_eq!(verdict.outcome(), Outcome::Failed);
}

#[test]
fn flat_layout_rejects_extra_json_data() {
    let verdict = evaluate(&Fixed(vec![Value::Null]), Layout::Flat, &case("", "null null"), &RunConfig::default());
    assert_eq!(verdict.outcome(), Outcome::Skipped);
}

#[test]
fn run_reports_each_fixture_and_summary() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let suite = dir.path().join("yaml-test-suite");
    write(&suite.join("A/in.yaml"), "1\n")?;
    write(&suite.join("A/in.json"), "1")?;
    write(&suite.join("B/in.yaml"), "[1, 2]\n")?;
    write(&suite.join("B/in.json"), "[2, 1]")?;
    write(&suite.join("C/in.yaml"), "x\n")?;
    write(&suite.join("C/in.json"), "{")?;
    write(&suite.join("D/in.yaml"), "'open\n")?;
    write(&suite.join("D/in.json"), "\"open\"")?;
    write(&suite.join("D/==="), "Unterminated quote\n")?;

    let fixtures = locate_nested(&suite, true)?;
    let mut runner = Runner::new(YamlLoader, Vec::new(), RunConfig::default());
    let tally = runner.run(&fixtures)?;
    assert_eq!(
        tally,
        Tally {
            passed: 1,
            failed: 2,
            skipped: 1
        }
    );

    let out = String::from_utf8(runner.into_writer())?;
    assert!(out.contains("   1 │ A... Passed\n"));
    assert!(out.contains("   2 │ B... Failed\nExpected: B/in.json\n"));
    assert!(out.contains("Got: B/in.yaml\n[\n  [\n    1,\n    2\n  ]\n]\n"));
    assert!(out.contains("   3 │ C... Failed to parse JSON: "));
    assert!(out.contains("In file: C/in.json\n"));
    assert!(out.contains("In file: D/in.yaml\n"));
    assert!(out.contains("   4 │ Unterminated quote... Failed to parse YAML: "));
    assert!(out.ends_with("Passed: 1\nFailed: 2\n"));
    Ok(())
}

#[test]
fn unreadable_fixture_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let suite = dir.path().join("yaml-test-suite");
    write(&suite.join("A/in.yaml"), "1\n")?;
    write(&suite.join("A/in.json"), "1")?;
    let fixtures = locate_nested(&suite, false)?;
    fs::remove_file(suite.join("A/in.json"))?;

    let mut runner = Runner::new(YamlLoader, Vec::new(), RunConfig::default());
    let tally = runner.run(&fixtures)?;
    assert_eq!(tally.skipped, 1);
    assert_eq!(tally.passed + tally.failed, 0);
    Ok(())
}

#[test]
fn json_loader_validates_fixture_data() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    write(&dir.path().join("json-test-suite/test_parsing/y_obj.json"), "{\"a\": [1, 2]}")?;
    write(&dir.path().join("yaml-test-suite/S/in.yaml"), "1 2")?;
    write(&dir.path().join("yaml-test-suite/S/in.json"), "1 2")?;

    let fixtures = locate(dir.path(), &LocatorConfig::default())?;
    let mut runner = Runner::new(JsonStreamLoader, Vec::new(), RunConfig::default());
    let tally = runner.run(&fixtures)?;
    assert_eq!(tally.passed, 2);
    assert_eq!(tally.failed, 0);
    Ok(())
}

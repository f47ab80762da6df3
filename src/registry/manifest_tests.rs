use std::path::Path;

use crate::filesystem::mock_fs::MockFileSystem;

use super::*;

const KEY: &str = "jobs.test.strategy.matrix.test";

const WORKFLOW: &str = r"
name: test-detectors
on: [push]
jobs:
  test:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        test:
          - avoid-panic
          - reentrancy
    steps:
      - uses: actions/checkout@v4
";

#[test]
fn reads_matrix_list_in_order() {
    let fs = MockFileSystem::new().with_file("/ci.yml", WORKFLOW);
    let matrix = load_matrix(&fs, Path::new("/ci.yml"), KEY).unwrap();
    assert_eq!(matrix, vec!["avoid-panic", "reentrancy"]);
}

#[test]
fn missing_key_is_fatal() {
    let fs = MockFileSystem::new().with_file("/ci.yml", WORKFLOW);
    let err = load_matrix(&fs, Path::new("/ci.yml"), "jobs.build.strategy").unwrap_err();
    assert!(matches!(err, AuditError::ManifestKey { ref key, .. } if key == "jobs.build.strategy"));
}

#[test]
fn non_list_value_is_fatal() {
    let fs = MockFileSystem::new().with_file("/ci.yml", WORKFLOW);
    let err = load_matrix(&fs, Path::new("/ci.yml"), "jobs.test.runs-on").unwrap_err();
    assert!(matches!(err, AuditError::ManifestKey { .. }));
}

#[test]
fn non_string_items_are_fatal() {
    let fs = MockFileSystem::new().with_file("/ci.yml", "matrix:\n  - 1\n  - 2\n");
    let err = load_matrix(&fs, Path::new("/ci.yml"), "matrix").unwrap_err();
    assert!(matches!(err, AuditError::ManifestKey { .. }));
}

#[test]
fn invalid_yaml_is_a_parse_error() {
    let fs = MockFileSystem::new().with_file("/ci.yml", "jobs: [unclosed\n");
    let err = load_matrix(&fs, Path::new("/ci.yml"), KEY).unwrap_err();
    assert_eq!(err.error_type(), "Manifest");
    assert!(matches!(err, AuditError::ManifestParse { .. }));
}

#[test]
fn unreadable_file_is_a_read_error() {
    let fs = MockFileSystem::new();
    let err = load_matrix(&fs, Path::new("/nope.yml"), KEY).unwrap_err();
    assert!(matches!(err, AuditError::FileRead { .. }));
}

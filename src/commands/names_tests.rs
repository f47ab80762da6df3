use std::fs;

use clap::Parser;
use tempfile::TempDir;

use crate::cli::Commands;
use crate::error::AuditError;
use crate::{EXIT_FINDINGS, EXIT_SUCCESS};

use super::*;

fn run(detectors: &std::path::Path) -> crate::Result<i32> {
    run_with(&[
        "--no-config".to_string(),
        "-q".to_string(),
        "names".to_string(),
        "--detectors".to_string(),
        detectors.display().to_string(),
    ])
}

fn run_with(args: &[String]) -> crate::Result<i32> {
    let argv: Vec<String> = std::iter::once("detector-audit".to_string())
        .chain(args.iter().cloned())
        .collect();
    let cli = Cli::parse_from(argv.clone());
    let Commands::Names(args) = Cli::parse_from(argv).command else {
        panic!("Expected Names command");
    };
    run_names_impl(&args, &cli)
}

#[test]
fn hyphenated_names_pass() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("unsafe-unwrap");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Cargo.toml"), "[package]\nname = \"unsafe-unwrap\"\n").unwrap();

    assert_eq!(run(tmp.path()).unwrap(), EXIT_SUCCESS);
}

#[test]
fn underscore_name_fails() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("unsafe_unwrap");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Cargo.toml"), "[package]\nname = \"unsafe_unwrap\"\n").unwrap();

    assert_eq!(run(tmp.path()).unwrap(), EXIT_FINDINGS);
}

#[test]
fn missing_detector_root_is_an_error() {
    let tmp = TempDir::new().unwrap();
    assert!(run(&tmp.path().join("nope")).is_err());
}

#[cfg(unix)]
#[test]
fn symlinked_descriptor_is_scanned() {
    let tmp = TempDir::new().unwrap();
    let foo = tmp.path().join("foo");
    let bar = tmp.path().join("bar");
    fs::create_dir_all(&foo).unwrap();
    fs::create_dir_all(&bar).unwrap();
    fs::write(foo.join("Cargo.toml"), "[package]\nname = \"foo\"\n").unwrap();
    std::os::unix::fs::symlink(foo.join("Cargo.toml"), bar.join("Cargo.toml")).unwrap();

    assert_eq!(run(tmp.path()).unwrap(), EXIT_FINDINGS);
}

#[test]
fn invalid_config_file_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("detector-audit.toml");
    fs::write(&config_path, "[layout]\ndescriptor = \"\"\n").unwrap();

    let err = run_with(&[
        "-q".to_string(),
        "names".to_string(),
        "--detectors".to_string(),
        tmp.path().display().to_string(),
        "-c".to_string(),
        config_path.display().to_string(),
    ])
    .unwrap_err();

    assert!(matches!(err, AuditError::Config(_)));
}

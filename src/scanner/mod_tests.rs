use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::filesystem::mock_fs::MockFileSystem;
use crate::report::FindingKind;

use super::*;

fn leaf(name: &str) -> String {
    format!("[package]\nname = \"{name}\"\nversion = \"0.1.0\"\n")
}

#[test]
fn descriptor_paths_are_lazy_sorted_and_skip_reserved() {
    let fs = MockFileSystem::new()
        .with_file("/d/Cargo.toml", "[workspace]\n")
        .with_file("/d/b/Cargo.toml", &leaf("b"))
        .with_file("/d/a/Cargo.toml", &leaf("a"))
        .with_file("/d/a/src/lib.rs", "")
        .with_file("/d/a/target/package/Cargo.toml", &leaf("a"))
        .with_file("/d/.cargo/Cargo.toml", "");
    let layout = LayoutConfig::default();
    let scanner = DescriptorScanner::new(&fs, &layout);

    let mut paths = scanner.descriptor_paths(Path::new("/d"));
    assert_eq!(paths.next().unwrap().unwrap(), PathBuf::from("/d/Cargo.toml"));
    let rest: Vec<PathBuf> = paths.map(Result::unwrap).collect();
    assert_eq!(
        rest,
        vec![
            PathBuf::from("/d/a/Cargo.toml"),
            PathBuf::from("/d/b/Cargo.toml")
        ]
    );
}

#[test]
fn scan_parses_leaves_and_aggregators() {
    let fs = MockFileSystem::new()
        .with_file("/d/Cargo.toml", "[workspace]\nmembers = [\"*\"]\n")
        .with_file("/d/reentrancy/Cargo.toml", &leaf("reentrancy"));
    let layout = LayoutConfig::default();

    let outcome = DescriptorScanner::new(&fs, &layout).scan(Path::new("/d"));

    assert!(outcome.findings.is_empty());
    assert_eq!(outcome.descriptors.len(), 2);
    assert!(outcome.descriptors[0].is_workspace_aggregator);
    assert_eq!(
        outcome.descriptors[1].declared_name.as_deref(),
        Some("reentrancy")
    );
}

#[test]
fn malformed_descriptor_is_reported_and_siblings_still_scanned() {
    let fs = MockFileSystem::new()
        .with_file("/d/a/Cargo.toml", "[dependencies]\nfoo = \"1\"\n")
        .with_file("/d/b/Cargo.toml", &leaf("b"));
    let layout = LayoutConfig::default();

    let outcome = DescriptorScanner::new(&fs, &layout).scan(Path::new("/d"));

    assert_eq!(outcome.findings.len(), 1);
    assert_eq!(outcome.findings[0].kind, FindingKind::MalformedDescriptor);
    assert_eq!(outcome.findings[0].path, PathBuf::from("/d/a/Cargo.toml"));
    assert_eq!(outcome.descriptors.len(), 1);
}

#[test]
fn unreadable_descriptor_becomes_io_finding() {
    let fs = MockFileSystem::new()
        .with_file("/d/a/Cargo.toml", &leaf("a"))
        .with_unreadable("/d/a/Cargo.toml");
    let layout = LayoutConfig::default();

    let outcome = DescriptorScanner::new(&fs, &layout).scan(Path::new("/d"));

    assert_eq!(outcome.findings.len(), 1);
    assert_eq!(outcome.findings[0].kind, FindingKind::IoError);
    assert!(outcome.descriptors.is_empty());
}

#[test]
fn unreadable_subtree_does_not_abort_scan() {
    let fs = MockFileSystem::new()
        .with_file("/d/a/Cargo.toml", &leaf("a"))
        .with_file("/d/b/Cargo.toml", &leaf("b"))
        .with_unreadable("/d/a");
    let layout = LayoutConfig::default();

    let outcome = DescriptorScanner::new(&fs, &layout).scan(Path::new("/d"));

    assert_eq!(outcome.findings.len(), 1);
    assert_eq!(outcome.findings[0].kind, FindingKind::IoError);
    assert_eq!(outcome.findings[0].path, PathBuf::from("/d/a"));
    assert!(outcome.findings[0].message.contains("/d/a"));
    assert_eq!(outcome.descriptors.len(), 1);
}

#[test]
fn custom_descriptor_name_is_honoured() {
    let fs = MockFileSystem::new()
        .with_file("/d/a/Cargo.toml", &leaf("a"))
        .with_file("/d/a/package.toml", &leaf("a"));
    let layout = LayoutConfig {
        descriptor: "package.toml".to_string(),
        ..LayoutConfig::default()
    };

    let outcome = DescriptorScanner::new(&fs, &layout).scan(Path::new("/d"));
    assert_eq!(outcome.descriptors.len(), 1);
    assert_eq!(
        outcome.descriptors[0].path,
        PathBuf::from("/d/a/package.toml")
    );
}

#[test]
fn into_packages_uses_containing_folder() {
    let fs = MockFileSystem::new().with_file("/d/unsafe-unwrap/Cargo.toml", &leaf("unsafe_unwrap"));
    let layout = LayoutConfig::default();

    let (packages, findings) = DescriptorScanner::new(&fs, &layout)
        .scan(Path::new("/d"))
        .into_packages();

    assert!(findings.is_empty());
    assert_eq!(packages[0].folder_name, "unsafe-unwrap");
    assert_eq!(packages[0].declared_name(), Some("unsafe_unwrap"));
}

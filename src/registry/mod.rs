//! Reconciliation of the detector tree against the fixture tree and the CI
//! test matrix.

mod manifest;

pub use manifest::load_matrix;

use std::collections::BTreeSet;
use std::io;
use std::path::Path;

use crate::config::LayoutConfig;
use crate::filesystem::FileSystem;
use crate::report::{Finding, FindingKind};

/// Names of the immediate non-reserved sub-directories of `root`, sorted.
///
/// # Errors
/// Returns an error if `root` cannot be listed.
pub fn list_top_level_dirs<F: FileSystem>(
    fs: &F,
    root: &Path,
    layout: &LayoutConfig,
) -> io::Result<BTreeSet<String>> {
    Ok(fs
        .read_dir(root)?
        .into_iter()
        .filter(|e| e.is_dir() && !layout.is_reserved(&e.name))
        .map(|e| e.name)
        .collect())
}

/// `MissingTestCase` for every detector without a test case, then
/// `MissingDetector` for every test case without a detector, each by name.
#[must_use]
pub fn cross_reference(
    detectors: &BTreeSet<String>,
    test_cases: &BTreeSet<String>,
    detectors_root: &Path,
    test_cases_root: &Path,
) -> Vec<Finding> {
    let missing_test_cases = detectors.difference(test_cases).map(|name| {
        Finding::new(
            FindingKind::MissingTestCase,
            format!(
                "Test case missing for detector {name} in {}",
                test_cases_root.display()
            ),
            detectors_root.join(name),
        )
    });
    let missing_detectors = test_cases.difference(detectors).map(|name| {
        Finding::new(
            FindingKind::MissingDetector,
            format!(
                "Detector folder missing for {name} in {}",
                detectors_root.display()
            ),
            test_cases_root.join(name),
        )
    });
    missing_test_cases.chain(missing_detectors).collect()
}

/// Compare the CI matrix, in manifest order, with the sorted detector names.
#[must_use]
pub fn compare_ci_manifest(
    manifest: &[String],
    detectors: &BTreeSet<String>,
    manifest_path: &Path,
) -> Option<Finding> {
    if manifest.iter().eq(detectors.iter()) {
        return None;
    }
    let detectors: Vec<String> = detectors.iter().cloned().collect();
    let message = format!(
        "Detectors to test in {} are not the same as the detectors folder. To test: [{}]. In the folder: [{}].",
        manifest_path.display(),
        manifest.join(", "),
        detectors.join(", ")
    );
    Some(Finding::new(
        FindingKind::CiManifestMismatch {
            manifest: manifest.to_vec(),
            detectors,
        },
        message,
        manifest_path,
    ))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::path::Path;

use crate::config::LayoutConfig;
use crate::filesystem::FileSystem;
use crate::report::{Finding, FindingKind};
use crate::scanner::DescriptorScanner;

/// Check that `dir` is a minimal package: a readable descriptor (or the skip
/// sentinel in its place) and the library entry point.
pub fn check_package<F: FileSystem>(fs: &F, layout: &LayoutConfig, dir: &Path) -> Vec<Finding> {
    inspect(fs, layout, dir, true)
}

/// Like [`check_package`], but an existing descriptor is not parsed. Used for
/// trees whose descriptors the scanner already reports on.
pub fn check_package_files<F: FileSystem>(
    fs: &F,
    layout: &LayoutConfig,
    dir: &Path,
) -> Vec<Finding> {
    inspect(fs, layout, dir, false)
}

fn inspect<F: FileSystem>(fs: &F, layout: &LayoutConfig, dir: &Path, parse: bool) -> Vec<Finding> {
    let mut findings = Vec::new();

    let descriptor = dir.join(&layout.descriptor);
    if fs.is_file(&descriptor) {
        if parse
            && let Err(finding) = DescriptorScanner::new(fs, layout).read_descriptor(&descriptor)
        {
            findings.push(finding);
        }
    } else if !fs.is_file(&dir.join(&layout.skip_sentinel)) {
        findings.push(Finding::new(
            FindingKind::MissingDescriptor,
            format!("Missing {} in {}.", layout.descriptor, dir.display()),
            dir,
        ));
    }

    if !fs.is_file(&dir.join(&layout.entry_point)) {
        findings.push(Finding::new(
            FindingKind::MissingEntryPoint,
            format!(
                "Missing {} in {}.",
                layout.entry_point.display(),
                dir.display()
            ),
            dir,
        ));
    }

    findings
}

#[cfg(test)]
#[path = "package_tests.rs"]
mod tests;

//! Descriptor discovery: lazily walk a subtree, parse every descriptor found.

use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::descriptor::PackageDescriptor;
use crate::filesystem::{FileSystem, WalkError};
use crate::report::{Finding, FindingKind};

/// A package found under the detector root, paired with the folder holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorPackage {
    pub folder_name: String,
    pub descriptor: PackageDescriptor,
}

impl DetectorPackage {
    #[must_use]
    pub fn from_descriptor(descriptor: PackageDescriptor) -> Self {
        Self {
            folder_name: descriptor.folder_name(),
            descriptor,
        }
    }

    #[must_use]
    pub fn declared_name(&self) -> Option<&str> {
        self.descriptor.declared_name.as_deref()
    }
}

/// Descriptors parsed from one subtree, plus the findings for files that
/// could not be read or classified.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub descriptors: Vec<PackageDescriptor>,
    pub findings: Vec<Finding>,
}

impl ScanOutcome {
    #[must_use]
    pub fn into_packages(self) -> (Vec<DetectorPackage>, Vec<Finding>) {
        let packages = self
            .descriptors
            .into_iter()
            .map(DetectorPackage::from_descriptor)
            .collect();
        (packages, self.findings)
    }
}

pub struct DescriptorScanner<'a, F: FileSystem> {
    fs: &'a F,
    layout: &'a LayoutConfig,
}

impl<'a, F: FileSystem> DescriptorScanner<'a, F> {
    #[must_use]
    pub const fn new(fs: &'a F, layout: &'a LayoutConfig) -> Self {
        Self { fs, layout }
    }

    /// Lazily yield every descriptor path below `root`, in name order.
    /// Reserved directories are never entered.
    pub fn descriptor_paths(&self, root: &Path) -> impl Iterator<Item = Result<PathBuf, WalkError>> + 'a {
        let fs: &'a F = self.fs;
        let layout: &'a LayoutConfig = self.layout;
        let descriptor = layout.descriptor.as_str();
        fs.walk_files(root, &layout.reserved_dirs)
            .filter(move |entry| match entry {
                Ok(path) => path.file_name().is_some_and(|n| n == descriptor),
                Err(_) => true,
            })
    }

    /// Read and classify one descriptor.
    ///
    /// # Errors
    /// Returns an `IoError` finding when the file cannot be read and a
    /// `MalformedDescriptor` finding when it declares neither a name nor a
    /// workspace.
    pub fn read_descriptor(&self, path: &Path) -> Result<PackageDescriptor, Finding> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| Finding::io(path, &e))?;
        PackageDescriptor::parse(path, &content).ok_or_else(|| {
            Finding::new(
                FindingKind::MalformedDescriptor,
                format!(
                    "Failed to parse package name from {}: no `name = \"...\"` line and no [workspace] section",
                    path.display()
                ),
                path,
            )
        })
    }

    /// Scan the whole subtree. A bad file never stops the scan of its siblings.
    #[must_use]
    pub fn scan(&self, root: &Path) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();
        for entry in self.descriptor_paths(root) {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    outcome.findings.push(Finding::io(&e.path, &e.source));
                    continue;
                }
            };
            match self.read_descriptor(&path) {
                Ok(descriptor) => outcome.descriptors.push(descriptor),
                Err(finding) => outcome.findings.push(finding),
            }
        }
        outcome
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

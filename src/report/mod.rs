//! Findings and the append-only collector every validator reports into.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// What kind of consistency violation a [`Finding`] describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    /// Descriptor has neither a `name` line nor a workspace header.
    MalformedDescriptor,
    UnderscoreInName,
    /// Several descriptors declare the same name.
    DuplicateName {
        name: String,
        paths: Vec<PathBuf>,
    },
    NameFolderMismatch,
    UnexpectedFile,
    /// Example directory name does not follow `<detector>-<number>`.
    NamingConvention {
        expected_pattern: String,
    },
    DuplicateExampleNumber,
    /// Required sub-project is absent, possibly with a near-miss rename hint.
    MissingSubdirectory {
        role: String,
        suggestion: Option<String>,
    },
    MissingDescriptor,
    MissingEntryPoint,
    /// Test-case directory holds no example directories.
    NoExamples,
    MissingTestCase,
    MissingDetector,
    /// CI test matrix differs from the detector listing.
    CiManifestMismatch {
        manifest: Vec<String>,
        detectors: Vec<String>,
    },
    IoError,
}

impl FindingKind {
    /// Stable label of the kind, independent of any payload.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MalformedDescriptor => "malformed-descriptor",
            Self::UnderscoreInName => "underscore-in-name",
            Self::DuplicateName { .. } => "duplicate-name",
            Self::NameFolderMismatch => "name-folder-mismatch",
            Self::UnexpectedFile => "unexpected-file",
            Self::NamingConvention { .. } => "naming-convention",
            Self::DuplicateExampleNumber => "duplicate-example-number",
            Self::MissingSubdirectory { .. } => "missing-subdirectory",
            Self::MissingDescriptor => "missing-descriptor",
            Self::MissingEntryPoint => "missing-entry-point",
            Self::NoExamples => "no-examples",
            Self::MissingTestCase => "missing-test-case",
            Self::MissingDetector => "missing-detector",
            Self::CiManifestMismatch { .. } => "ci-manifest-mismatch",
            Self::IoError => "io-error",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One reported violation: kind, human-readable message, offending path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    pub message: String,
    pub path: PathBuf,
}

impl Finding {
    #[must_use]
    pub fn new(kind: FindingKind, message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: path.into(),
        }
    }

    /// Wrap an I/O failure on `path` so the audit can carry on.
    #[must_use]
    pub fn io(path: &Path, err: &io::Error) -> Self {
        Self::new(
            FindingKind::IoError,
            format!("Could not read {}: {err}", path.display()),
            path,
        )
    }
}

/// Append-only, ordered collection of findings.
///
/// Order is discovery order, grouped by the component that produced them.
/// Findings are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    findings: Vec<Finding>,
}

impl AuditReport {
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        !self.findings.is_empty()
    }

    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

}

impl Extend<Finding> for AuditReport {
    fn extend<T: IntoIterator<Item = Finding>>(&mut self, iter: T) {
        self.findings.extend(iter);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

//! Runs every validator over the two trees and gathers the findings.
//!
//! Components report in a fixed order: descriptor scan, naming rules,
//! detector packages, fixtures, cross-reference, CI matrix. Within a
//! component, findings keep that component's own order, so two runs over an
//! unchanged tree produce identical reports.

use std::collections::BTreeSet;
use std::path::Path;

use rayon::prelude::*;

use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::filesystem::FileSystem;
use crate::fixtures::{
    FixtureValidator, Similarity, TestCaseReport, TokenSortRatio, check_package_files,
};
use crate::naming;
use crate::registry::{self, compare_ci_manifest, cross_reference, list_top_level_dirs};
use crate::report::AuditReport;
use crate::scanner::DescriptorScanner;

/// Counters for the summary line. `None` means that part of the audit did
/// not run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditStats {
    pub descriptors: Option<usize>,
    pub detectors: Option<usize>,
    pub test_cases: Option<usize>,
    pub examples: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct AuditOutcome {
    pub report: AuditReport,
    pub stats: AuditStats,
}

pub struct Auditor<'a, F: FileSystem, S: Similarity + ?Sized = TokenSortRatio> {
    fs: &'a F,
    config: &'a AuditConfig,
    similarity: &'a S,
}

impl<'a, F: FileSystem, S: Similarity + ?Sized> Auditor<'a, F, S> {
    #[must_use]
    pub const fn new(fs: &'a F, config: &'a AuditConfig, similarity: &'a S) -> Self {
        Self {
            fs,
            config,
            similarity,
        }
    }

    /// Full audit without progress reporting.
    ///
    /// # Errors
    /// See [`Self::run_with_progress`].
    pub fn run(&self) -> Result<AuditOutcome> {
        self.run_with_progress(|_| {})
    }

    /// Full audit. `on_test_case` is called (possibly from worker threads)
    /// as each test case starts validating.
    ///
    /// # Errors
    /// Returns `RootNotFound` when either root is not a directory, `FileRead`
    /// when a root cannot be listed, and any error from loading the CI
    /// manifest. Everything else is reported as a finding.
    pub fn run_with_progress<P>(&self, on_test_case: P) -> Result<AuditOutcome>
    where
        P: Fn(&str) + Sync,
    {
        let paths = &self.config.paths;
        let layout = &self.config.layout;

        // 1. Fatal checks first, so a failing run never prints a partial report
        self.require_dir("Detector", &paths.detectors)?;
        self.require_dir("Test-case", &paths.test_cases)?;
        let ci_matrix = self.load_ci_matrix()?;
        let detectors = self.list_dirs(&paths.detectors)?;
        let test_cases = self.list_dirs(&paths.test_cases)?;

        let mut outcome = AuditOutcome::default();
        outcome.stats.detectors = Some(detectors.len());
        outcome.stats.test_cases = Some(test_cases.len());

        // 2. Descriptors and naming rules
        self.scan_and_name(&mut outcome);

        // 3. Every detector folder is itself a package
        if self.config.fixtures.check_detector_packages {
            for name in &detectors {
                let dir = paths.detectors.join(name);
                outcome.report.extend(check_package_files(self.fs, layout, &dir));
            }
        }

        // 4. Fixtures, one test case per task, merged back in name order
        let validator = FixtureValidator::new(
            self.fs,
            layout,
            self.similarity,
            self.config.fixtures.similarity_threshold,
        )?;
        let names: Vec<&str> = test_cases.iter().map(String::as_str).collect();
        let reports: Vec<TestCaseReport> = names
            .par_iter()
            .map(|&name| {
                on_test_case(name);
                validator.validate_test_case(&paths.test_cases.join(name), name)
            })
            .collect();
        let mut examples = 0;
        for test_case in reports {
            examples += test_case.test_case.examples.len();
            outcome.report.extend(test_case.findings);
        }
        outcome.stats.examples = Some(examples);

        // 5. Both trees agree
        outcome.report.extend(cross_reference(
            &detectors,
            &test_cases,
            &paths.detectors,
            &paths.test_cases,
        ));

        // 6. CI matrix agrees with the detector listing
        if let Some((manifest_path, matrix)) = ci_matrix
            && let Some(finding) = compare_ci_manifest(&matrix, &detectors, manifest_path)
        {
            outcome.report.push(finding);
        }

        Ok(outcome)
    }

    /// Descriptor scan and naming rules over the detector root only.
    ///
    /// # Errors
    /// Returns `RootNotFound` when the detector root is not a directory.
    pub fn run_names(&self) -> Result<AuditOutcome> {
        self.require_dir("Detector", &self.config.paths.detectors)?;
        let mut outcome = AuditOutcome::default();
        self.scan_and_name(&mut outcome);
        Ok(outcome)
    }

    /// CI matrix comparison only.
    ///
    /// # Errors
    /// Returns `Config` when no manifest is configured, `RootNotFound` when
    /// the detector root is missing, and any manifest loading error.
    pub fn run_ci(&self) -> Result<AuditOutcome> {
        let detectors_root = &self.config.paths.detectors;
        self.require_dir("Detector", detectors_root)?;
        let Some((manifest_path, matrix)) = self.load_ci_matrix()? else {
            return Err(AuditError::Config(
                "no CI manifest configured (pass --ci-manifest or set [ci].manifest)".to_string(),
            ));
        };
        let detectors = self.list_dirs(detectors_root)?;

        let mut outcome = AuditOutcome::default();
        outcome.stats.detectors = Some(detectors.len());
        outcome
            .report
            .extend(compare_ci_manifest(&matrix, &detectors, manifest_path));
        Ok(outcome)
    }

    fn scan_and_name(&self, outcome: &mut AuditOutcome) {
        let scanner = DescriptorScanner::new(self.fs, &self.config.layout);
        let (packages, findings) = scanner.scan(&self.config.paths.detectors).into_packages();
        outcome.stats.descriptors = Some(packages.len());
        outcome.report.extend(findings);
        outcome.report.extend(naming::validate(&packages));
    }

    fn require_dir(&self, role: &'static str, path: &Path) -> Result<()> {
        if self.fs.is_dir(path) {
            Ok(())
        } else {
            Err(AuditError::RootNotFound {
                role,
                path: path.to_path_buf(),
            })
        }
    }

    fn list_dirs(&self, root: &Path) -> Result<BTreeSet<String>> {
        list_top_level_dirs(self.fs, root, &self.config.layout).map_err(|source| {
            AuditError::FileRead {
                path: root.to_path_buf(),
                source,
            }
        })
    }

    fn load_ci_matrix(&self) -> Result<Option<(&'a Path, Vec<String>)>> {
        let config: &'a AuditConfig = self.config;
        let ci = &config.ci;
        let Some(manifest) = ci.manifest.as_deref() else {
            return Ok(None);
        };
        let matrix = registry::load_matrix(self.fs, manifest, &ci.matrix_key)?;
        Ok(Some((manifest, matrix)))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

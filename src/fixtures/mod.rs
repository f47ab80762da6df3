//! Structure checks for the fixture tree: one test case per detector, each
//! holding numbered examples with a vulnerable and a remediated sub-project.

mod example;
mod package;
mod similarity;

pub use example::{Example, ExampleNamePattern, TestCase, suffix_key, suffix_number};
pub use package::{check_package, check_package_files};
pub use similarity::{Similarity, TokenSortRatio, best_match};

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::filesystem::FileSystem;
use crate::report::{Finding, FindingKind};

/// Parsed test case together with every finding raised while walking it.
#[derive(Debug, Clone, Default)]
pub struct TestCaseReport {
    pub test_case: TestCase,
    pub findings: Vec<Finding>,
}

pub struct FixtureValidator<'a, F: FileSystem, S: Similarity + ?Sized = TokenSortRatio> {
    fs: &'a F,
    layout: &'a LayoutConfig,
    similarity: &'a S,
    threshold: u8,
    pattern: ExampleNamePattern,
}

impl<'a, F: FileSystem, S: Similarity + ?Sized> FixtureValidator<'a, F, S> {
    /// # Errors
    /// Returns `InvalidPattern` if the example name pattern fails to compile.
    pub fn new(
        fs: &'a F,
        layout: &'a LayoutConfig,
        similarity: &'a S,
        threshold: u8,
    ) -> Result<Self> {
        Ok(Self {
            fs,
            layout,
            similarity,
            threshold,
            pattern: ExampleNamePattern::new()?,
        })
    }

    /// Validate one test-case directory. Examples are visited in name order.
    #[must_use]
    pub fn validate_test_case(&self, dir: &Path, detector_name: &str) -> TestCaseReport {
        let mut report = TestCaseReport {
            test_case: TestCase {
                detector_name: detector_name.to_string(),
                examples: Vec::new(),
            },
            findings: Vec::new(),
        };

        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                report.findings.push(Finding::io(dir, &e));
                return report;
            }
        };

        for entry in entries.iter().filter(|e| e.is_file()) {
            if !self.layout.is_allowed_file(&entry.name) {
                report.findings.push(unexpected_file(&dir.join(&entry.name)));
            }
        }

        let example_names: Vec<&str> = entries
            .iter()
            .filter(|e| e.is_dir() && !self.layout.is_reserved(&e.name))
            .map(|e| e.name.as_str())
            .collect();
        if example_names.is_empty() {
            report.findings.push(Finding::new(
                FindingKind::NoExamples,
                format!("No examples found in {}.", dir.display()),
                dir,
            ));
            return report;
        }

        let mut seen_numbers: HashSet<String> = HashSet::new();
        for name in example_names {
            let duplicate_number = suffix_key(name).is_some_and(|key| !seen_numbers.insert(key));
            let example = self.validate_example(
                &dir.join(name),
                name,
                detector_name,
                duplicate_number,
                &mut report.findings,
            );
            report.test_case.examples.extend(example);
        }

        report
    }

    fn validate_example(
        &self,
        dir: &Path,
        name: &str,
        detector_name: &str,
        duplicate_number: bool,
        findings: &mut Vec<Finding>,
    ) -> Option<Example> {
        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                findings.push(Finding::io(dir, &e));
                return None;
            }
        };

        let mut extra_files = Vec::new();
        let mut subdirectories = Vec::new();
        for entry in entries {
            if entry.is_dir() {
                if !self.layout.is_reserved(&entry.name) {
                    subdirectories.push(entry.name);
                }
            } else if !self.layout.is_allowed_file(&entry.name) {
                findings.push(unexpected_file(&dir.join(&entry.name)));
                extra_files.push(entry.name);
            }
        }

        if !self.pattern.matches(name, detector_name) {
            let expected_pattern = ExampleNamePattern::expected_for(detector_name);
            findings.push(Finding::new(
                FindingKind::NamingConvention { expected_pattern },
                format!(
                    "Naming issue for '{name}' in {detector_name}: Expected format is {detector_name}-[number]."
                ),
                dir,
            ));
        }

        if duplicate_number {
            findings.push(Finding::new(
                FindingKind::DuplicateExampleNumber,
                format!("Duplicate example number found in {detector_name}: {name}"),
                dir,
            ));
        }

        let subprojects: BTreeSet<String> = self
            .layout
            .roles
            .iter()
            .filter(|role| subdirectories.contains(role))
            .cloned()
            .collect();

        for role in &self.layout.roles {
            if subprojects.contains(role) {
                continue;
            }
            findings.push(self.missing_role(dir, role, &subdirectories));
        }

        for role in &subprojects {
            findings.extend(check_package(self.fs, self.layout, &dir.join(role)));
        }

        Some(Example {
            name: name.to_string(),
            detector_name: detector_name.to_string(),
            suffix_number: suffix_number(name),
            subprojects,
            subdirectories,
            extra_files,
        })
    }

    fn missing_role(&self, dir: &Path, role: &str, subdirectories: &[String]) -> Finding {
        // Directories already filling a role are never offered as a rename.
        let candidates = subdirectories
            .iter()
            .filter(|d| !self.layout.roles.contains(d))
            .map(String::as_str);
        let suggestion = best_match(self.similarity, role, candidates, self.threshold)
            .map(|(candidate, _)| candidate.to_string());

        let message = match &suggestion {
            Some(found) => format!(
                "Directory '{role}' not found in {}. A similar directory exists: '{found}', please rename it to '{role}'.",
                dir.display()
            ),
            None => format!("Directory '{role}' not found in {}.", dir.display()),
        };
        Finding::new(
            FindingKind::MissingSubdirectory {
                role: role.to_string(),
                suggestion,
            },
            message,
            dir,
        )
    }
}

fn unexpected_file(path: &Path) -> Finding {
    Finding::new(
        FindingKind::UnexpectedFile,
        format!("Unexpected file found: {}", path.display()),
        path,
    )
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

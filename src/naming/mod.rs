//! Lexical rules over declared detector names.
//!
//! Output is grouped by rule (underscores, duplicates, folder mismatches)
//! and, within each rule, ordered by a caller-supplied key.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::report::{Finding, FindingKind};
use crate::scanner::DetectorPackage;

/// Validate with the default ordering: declared name, then descriptor path.
#[must_use]
pub fn validate(packages: &[DetectorPackage]) -> Vec<Finding> {
    validate_sorted_by(packages, |p| {
        (
            p.declared_name().unwrap_or_default().to_string(),
            p.descriptor.path.clone(),
        )
    })
}

/// Validate, reporting in the order given by `sort_key`.
#[must_use]
pub fn validate_sorted_by<K, F>(packages: &[DetectorPackage], mut sort_key: F) -> Vec<Finding>
where
    K: Ord,
    F: FnMut(&DetectorPackage) -> K,
{
    let mut named: Vec<&DetectorPackage> = packages
        .iter()
        .filter(|p| !p.descriptor.is_workspace_aggregator && p.declared_name().is_some())
        .collect();
    named.sort_by_cached_key(|p| sort_key(*p));

    let mut findings = underscore_findings(&named);
    findings.extend(duplicate_findings(&named));
    findings.extend(folder_mismatch_findings(&named));
    findings
}

fn underscore_findings(named: &[&DetectorPackage]) -> Vec<Finding> {
    named
        .iter()
        .filter_map(|p| {
            let name = p.declared_name()?;
            name.contains('_').then(|| {
                Finding::new(
                    FindingKind::UnderscoreInName,
                    format!(
                        "Detector name `{name}` uses underscores instead of hyphens: {}",
                        p.descriptor.path.display()
                    ),
                    &p.descriptor.path,
                )
            })
        })
        .collect()
}

fn duplicate_findings(named: &[&DetectorPackage]) -> Vec<Finding> {
    let mut groups: IndexMap<&str, Vec<PathBuf>> = IndexMap::new();
    for package in named {
        if let Some(name) = package.declared_name() {
            groups
                .entry(name)
                .or_default()
                .push(package.descriptor.path.clone());
        }
    }

    groups
        .into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .map(|(name, paths)| {
            let listed = paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let first = paths[0].clone();
            Finding::new(
                FindingKind::DuplicateName {
                    name: name.to_string(),
                    paths,
                },
                format!("Found detectors with the same name `{name}`: {listed}"),
                first,
            )
        })
        .collect()
}

fn folder_mismatch_findings(named: &[&DetectorPackage]) -> Vec<Finding> {
    named
        .iter()
        .filter_map(|p| {
            let name = p.declared_name()?;
            (name != p.folder_name).then(|| {
                Finding::new(
                    FindingKind::NameFolderMismatch,
                    format!(
                        "Detector package name `{name}` does not match its folder `{}`: {}",
                        p.folder_name,
                        p.descriptor.path.display()
                    ),
                    &p.descriptor.path,
                )
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

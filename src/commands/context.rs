//! Plumbing shared by the commands: config loading, CLI overrides, report
//! printing and fatal error handling.

use std::path::{Path, PathBuf};

use crate::audit::AuditOutcome;
use crate::cli::{Cli, ManifestArgs, TreeArgs};
use crate::config::{AuditConfig, ConfigLoader, FileConfigLoader};
use crate::error::{AuditError, Result};
use crate::output::{TextFormatter, print_audit_error};
use crate::{EXIT_CONFIG_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};

/// Load the configuration. Relative paths inside an explicitly given file are
/// resolved against that file's directory.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<AuditConfig> {
    if no_config {
        return Ok(AuditConfig::default());
    }

    let loader = FileConfigLoader::new();
    let Some(path) = config_path else {
        return loader.load();
    };
    let mut config = loader.load_from_path(path)?;
    if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        rebase_paths(&mut config, base);
    }
    Ok(config)
}

pub(crate) fn rebase_paths(config: &mut AuditConfig, base: &Path) {
    let rebase = |path: &mut PathBuf| {
        if path.is_relative() {
            *path = base.join(&*path);
        }
    };
    rebase(&mut config.paths.detectors);
    rebase(&mut config.paths.test_cases);
    if let Some(manifest) = config.ci.manifest.as_mut() {
        rebase(manifest);
    }
}

pub(crate) fn apply_tree_overrides(config: &mut AuditConfig, tree: &TreeArgs) {
    if let Some(detectors) = &tree.detectors {
        config.paths.detectors.clone_from(detectors);
    }
    if let Some(test_cases) = &tree.test_cases {
        config.paths.test_cases.clone_from(test_cases);
    }
}

pub(crate) fn apply_manifest_overrides(config: &mut AuditConfig, manifest: &ManifestArgs) {
    if let Some(path) = &manifest.ci_manifest {
        config.ci.manifest = Some(path.clone());
    }
    if let Some(key) = &manifest.matrix_key {
        config.ci.matrix_key.clone_from(key);
    }
}

/// `-vv` diagnostics: where the audit is looking.
pub(crate) fn log_roots(config: &AuditConfig, cli: &Cli) {
    if cli.quiet || cli.verbose < 2 {
        return;
    }
    eprintln!("Detector root: {}", display_root(&config.paths.detectors));
    eprintln!("Test-case root: {}", display_root(&config.paths.test_cases));
    if let Some(manifest) = &config.ci.manifest {
        eprintln!("CI manifest: {} [{}]", display_root(manifest), config.ci.matrix_key);
    }
}

fn display_root(path: &Path) -> String {
    dunce::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Print the report on stdout and map it to an exit code.
pub(crate) fn print_report(outcome: &AuditOutcome, cli: &Cli) -> i32 {
    let formatter =
        TextFormatter::with_verbose(cli.color.into(), cli.verbose).with_quiet(cli.quiet);
    print!("{}", formatter.format(outcome));
    exit_code(outcome)
}

#[must_use]
pub(crate) const fn exit_code(outcome: &AuditOutcome) -> i32 {
    if outcome.report.has_failures() {
        EXIT_FINDINGS
    } else {
        EXIT_SUCCESS
    }
}

/// Report a fatal error on stderr. No partial report is printed.
pub(crate) fn report_fatal(error: &AuditError, cli: &Cli) -> i32 {
    print_audit_error(error, cli.color.into());
    EXIT_CONFIG_ERROR
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

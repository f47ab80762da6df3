use crate::audit::Auditor;
use crate::cli::{CheckArgs, Cli};
use crate::config::{AuditConfig, validate_config};
use crate::error::Result;
use crate::filesystem::RealFileSystem;
use crate::fixtures::TokenSortRatio;
use crate::output::ScanProgress;
use crate::registry::list_top_level_dirs;

use super::context::{
    apply_manifest_overrides, apply_tree_overrides, load_config, log_roots, print_report,
    report_fatal,
};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => report_fatal(&e, cli),
    }
}

/// Full audit over both trees.
///
/// # Errors
/// Returns an error when the configuration cannot be loaded, a root is
/// missing or unreadable, or the CI manifest cannot be used.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration, then let the command line win
    let mut config = load_config(args.tree.config.as_deref(), cli.no_config)?;
    apply_check_overrides(&mut config, args);
    validate_config(&config)?;
    log_roots(&config, cli);

    // 2. Validate, one progress tick per test case
    let fs = RealFileSystem;
    let total = list_top_level_dirs(&fs, &config.paths.test_cases, &config.layout)
        .map_or(0, |dirs| dirs.len());
    let progress = ScanProgress::new(total as u64, cli.quiet);
    let announce = !cli.quiet && cli.verbose >= 1;

    let outcome = Auditor::new(&fs, &config, &TokenSortRatio).run_with_progress(|test_case| {
        if announce {
            eprintln!("Validating {test_case}...");
        }
        progress.inc();
    });
    progress.finish();
    let outcome = outcome?;

    if !cli.quiet && cli.verbose >= 2 {
        eprintln!(
            "Scanned {} descriptors, {} examples",
            outcome.stats.descriptors.unwrap_or_default(),
            outcome.stats.examples.unwrap_or_default()
        );
    }

    // 3. Report
    Ok(print_report(&outcome, cli))
}

pub(crate) fn apply_check_overrides(config: &mut AuditConfig, args: &CheckArgs) {
    apply_tree_overrides(config, &args.tree);
    apply_manifest_overrides(config, &args.manifest);
    if let Some(threshold) = args.similarity_threshold {
        config.fixtures.similarity_threshold = threshold;
    }
    if args.no_detector_packages {
        config.fixtures.check_detector_packages = false;
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

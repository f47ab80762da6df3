use crate::audit::Auditor;
use crate::cli::{CiArgs, Cli};
use crate::config::validate_config;
use crate::error::Result;
use crate::filesystem::RealFileSystem;
use crate::fixtures::TokenSortRatio;

use super::context::{
    apply_manifest_overrides, apply_tree_overrides, load_config, log_roots, print_report,
    report_fatal,
};

#[must_use]
pub fn run_ci(args: &CiArgs, cli: &Cli) -> i32 {
    match run_ci_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => report_fatal(&e, cli),
    }
}

/// Compare the CI test matrix with the detector folders.
///
/// # Errors
/// Returns an error when no manifest is configured or it cannot be read,
/// parsed, or does not hold a list at the matrix key.
pub fn run_ci_impl(args: &CiArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.tree.config.as_deref(), cli.no_config)?;
    apply_tree_overrides(&mut config, &args.tree);
    apply_manifest_overrides(&mut config, &args.manifest);
    validate_config(&config)?;
    log_roots(&config, cli);

    let outcome = Auditor::new(&RealFileSystem, &config, &TokenSortRatio).run_ci()?;
    Ok(print_report(&outcome, cli))
}

#[cfg(test)]
#[path = "ci_tests.rs"]
mod tests;

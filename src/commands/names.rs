use crate::audit::Auditor;
use crate::cli::{Cli, NamesArgs};
use crate::config::validate_config;
use crate::error::Result;
use crate::filesystem::RealFileSystem;
use crate::fixtures::TokenSortRatio;

use super::context::{apply_tree_overrides, load_config, log_roots, print_report, report_fatal};

#[must_use]
pub fn run_names(args: &NamesArgs, cli: &Cli) -> i32 {
    match run_names_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => report_fatal(&e, cli),
    }
}

/// Descriptor scan and naming rules over the detector root.
///
/// # Errors
/// Returns an error when the configuration cannot be loaded or the detector
/// root is missing.
pub fn run_names_impl(args: &NamesArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.tree.config.as_deref(), cli.no_config)?;
    apply_tree_overrides(&mut config, &args.tree);
    validate_config(&config)?;
    log_roots(&config, cli);

    let outcome = Auditor::new(&RealFileSystem, &config, &TokenSortRatio).run_names()?;
    if !cli.quiet && cli.verbose >= 1 {
        eprintln!(
            "Scanned {} descriptors",
            outcome.stats.descriptors.unwrap_or_default()
        );
    }
    Ok(print_report(&outcome, cli))
}

#[cfg(test)]
#[path = "names_tests.rs"]
mod tests;

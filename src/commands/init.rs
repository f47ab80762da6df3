use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::config::DEFAULT_CONFIG_TEMPLATE;
use crate::error::{AuditError, Result};
use crate::EXIT_SUCCESS;

use super::context::report_fatal;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_fatal(&e, cli),
    }
}

/// Write the default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(AuditError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, DEFAULT_CONFIG_TEMPLATE)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "detector-audit")]
#[command(author, version, about = "Check that detector packages and their test fixtures agree")]
#[command(long_about = "Audits a detector monorepo: package names, fixture layout, \
    and the pairing between detectors, test cases and the CI test matrix.\n\n\
    Exit codes:\n  \
    0 - Everything is consistent\n  \
    1 - Validation errors found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every check over the detector and test-case trees
    Check(CheckArgs),

    /// Check declared package names under the detector root only
    Names(NamesArgs),

    /// Compare the CI test matrix with the detector folders
    Ci(CiArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

/// Location of the trees and of the configuration file.
#[derive(Args, Debug, Default)]
pub struct TreeArgs {
    /// Detector root (overrides config)
    #[arg(long)]
    pub detectors: Option<PathBuf>,

    /// Test-case root (overrides config)
    #[arg(long)]
    pub test_cases: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct ManifestArgs {
    /// CI workflow declaring the detector test matrix (overrides config)
    #[arg(long)]
    pub ci_manifest: Option<PathBuf>,

    /// Dotted key of the matrix list inside the workflow
    #[arg(long)]
    pub matrix_key: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Minimum similarity (0-100) for suggesting a rename (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub similarity_threshold: Option<u8>,

    /// Do not require detector folders to be packages themselves
    #[arg(long)]
    pub no_detector_packages: bool,
}

#[derive(Parser, Debug)]
pub struct NamesArgs {
    #[command(flatten)]
    pub tree: TreeArgs,
}

#[derive(Parser, Debug)]
pub struct CiArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    #[command(flatten)]
    pub manifest: ManifestArgs,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".detector-audit.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

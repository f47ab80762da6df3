pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod filesystem;
pub mod fixtures;
pub mod naming;
pub mod output;
pub mod registry;
pub mod report;
pub mod scanner;

pub use error::{AuditError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

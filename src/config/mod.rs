mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{AuditConfig, CiConfig, FixturesConfig, LayoutConfig, PathsConfig};
pub use validation::validate_config;

/// Template written by `detector-audit init`. Every value is the built-in default.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# detector-audit configuration file

[paths]
# Root holding one directory per detector package
detectors = "detectors"
# Root holding one directory of numbered examples per detector
test_cases = "test-cases"

[layout]
descriptor = "Cargo.toml"
lockfile = "Cargo.lock"
# Placed instead of the descriptor for fixtures that cannot be built
skip_sentinel = "Cargo.toml.skip"
entry_point = "src/lib.rs"
# Never traversed, never compared
reserved_dirs = ["target", ".git", ".cargo"]
# Sub-projects every example must contain
roles = ["vulnerable-example", "remediated-example"]

[fixtures]
# Minimum similarity (0-100) for "a similar directory exists" hints
similarity_threshold = 80
check_detector_packages = true

[ci]
# Workflow whose test matrix must list every detector
# manifest = ".github/workflows/test-detectors.yml"
matrix_key = "jobs.test.strategy.matrix.test"
"#;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

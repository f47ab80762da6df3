use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level `.detector-audit.toml` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub fixtures: FixturesConfig,

    #[serde(default)]
    pub ci: CiConfig,
}

/// Location of the two trees being reconciled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathsConfig {
    /// Root holding one directory per detector package.
    #[serde(default = "default_detectors_dir")]
    pub detectors: PathBuf,

    /// Root holding one directory of examples per detector.
    #[serde(default = "default_test_cases_dir")]
    pub test_cases: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            detectors: default_detectors_dir(),
            test_cases: default_test_cases_dir(),
        }
    }
}

/// File and directory naming shared by every validator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Package descriptor file name.
    #[serde(default = "default_descriptor")]
    pub descriptor: String,

    /// Lockfile name, tolerated next to a descriptor.
    #[serde(default = "default_lockfile")]
    pub lockfile: String,

    /// Marker that stands in for a descriptor on packages that cannot be built.
    #[serde(default = "default_skip_sentinel")]
    pub skip_sentinel: String,

    /// Library entry point, relative to the package directory.
    #[serde(default = "default_entry_point")]
    pub entry_point: PathBuf,

    /// Directory names never traversed nor compared (build cache, vcs, toolchain cache).
    #[serde(default = "default_reserved_dirs")]
    pub reserved_dirs: Vec<String>,

    /// Sub-projects every example must contain.
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            descriptor: default_descriptor(),
            lockfile: default_lockfile(),
            skip_sentinel: default_skip_sentinel(),
            entry_point: default_entry_point(),
            reserved_dirs: default_reserved_dirs(),
            roles: default_roles(),
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn is_reserved(&self, dir_name: &str) -> bool {
        self.reserved_dirs.iter().any(|d| d == dir_name)
    }

    /// Files allowed inside test-case and example directories.
    #[must_use]
    pub fn is_allowed_file(&self, file_name: &str) -> bool {
        file_name == self.descriptor || file_name == self.lockfile || file_name == self.skip_sentinel
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixturesConfig {
    /// Minimum score (0-100) for a present directory to be suggested as a rename.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: u8,

    /// Also require each detector folder to be a minimal package.
    #[serde(default = "default_true")]
    pub check_detector_packages: bool,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            check_detector_packages: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CiConfig {
    /// Workflow file declaring the detector test matrix. Unset disables the check.
    #[serde(default)]
    pub manifest: Option<PathBuf>,

    /// Dotted key path of the matrix list inside the manifest.
    #[serde(default = "default_matrix_key")]
    pub matrix_key: String,
}

impl Default for CiConfig {
    fn default() -> Self {
        Self {
            manifest: None,
            matrix_key: default_matrix_key(),
        }
    }
}

fn default_detectors_dir() -> PathBuf {
    PathBuf::from("detectors")
}

fn default_test_cases_dir() -> PathBuf {
    PathBuf::from("test-cases")
}

fn default_descriptor() -> String {
    "Cargo.toml".to_string()
}

fn default_lockfile() -> String {
    "Cargo.lock".to_string()
}

fn default_skip_sentinel() -> String {
    "Cargo.toml.skip".to_string()
}

fn default_entry_point() -> PathBuf {
    PathBuf::from("src").join("lib.rs")
}

fn default_reserved_dirs() -> Vec<String> {
    vec!["target".to_string(), ".git".to_string(), ".cargo".to_string()]
}

fn default_roles() -> Vec<String> {
    vec![
        "vulnerable-example".to_string(),
        "remediated-example".to_string(),
    ]
}

const fn default_similarity_threshold() -> u8 {
    80
}

const fn default_true() -> bool {
    true
}

fn default_matrix_key() -> String {
    "jobs.test.strategy.matrix.test".to_string()
}

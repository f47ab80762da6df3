#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the detector-audit binary.
#[macro_export]
macro_rules! detector_audit {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("detector-audit"))
    };
}

pub const CI_WORKFLOW: &str = "\
name: test-detectors
on: [push]
jobs:
  test:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        test:
          - reentrancy
          - unsafe-unwrap
";

/// A monorepo laid out in a temp directory: `detectors/` and `test-cases/`.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// A fixture where every detector has one complete example.
    pub fn consistent(detectors: &[&str]) -> Self {
        let fixture = Self::new();
        fixture.create_dir("detectors");
        fixture.create_dir("test-cases");
        for name in detectors {
            fixture.create_detector(name);
            fixture.create_example(name, &format!("{name}-1"));
        }
        fixture
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".detector-audit.toml", content);
    }

    /// A minimal package: descriptor declaring `name` plus the entry point.
    pub fn create_package(&self, relative_dir: &str, name: &str) {
        self.create_file(
            &format!("{relative_dir}/Cargo.toml"),
            &format!("[package]\nname = \"{name}\"\nversion = \"0.1.0\"\nedition = \"2021\"\n"),
        );
        self.create_file(&format!("{relative_dir}/src/lib.rs"), "");
    }

    pub fn create_detector(&self, name: &str) {
        self.create_package(&format!("detectors/{name}"), name);
    }

    /// An example with both sub-projects.
    pub fn create_example(&self, detector: &str, example: &str) {
        let base = format!("test-cases/{detector}/{example}");
        self.create_package(&format!("{base}/vulnerable-example"), example);
        self.create_package(&format!("{base}/remediated-example"), example);
    }
}

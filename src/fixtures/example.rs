use std::collections::BTreeSet;

use regex::Regex;

use crate::error::{AuditError, Result};

const EXAMPLE_NAME_PATTERN: &str = r"^(?P<detector>.+)-(?P<number>[0-9]+)$";

/// One numbered fixture directory under a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub name: String,
    pub detector_name: String,
    pub suffix_number: Option<u64>,
    /// Required roles that are present.
    pub subprojects: BTreeSet<String>,
    /// Every sub-directory present, roles included, in name order.
    pub subdirectories: Vec<String>,
    /// Files directly inside the example that are not allow-listed.
    pub extra_files: Vec<String>,
}

/// All examples of one detector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCase {
    pub detector_name: String,
    pub examples: Vec<Example>,
}

/// Matcher for `<detector>-<number>` example names.
#[derive(Debug, Clone)]
pub struct ExampleNamePattern {
    regex: Regex,
}

impl ExampleNamePattern {
    /// # Errors
    /// Returns `InvalidPattern` if the built-in pattern fails to compile.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(EXAMPLE_NAME_PATTERN).map_err(|source| {
            AuditError::InvalidPattern {
                pattern: EXAMPLE_NAME_PATTERN.to_string(),
                source,
            }
        })?;
        Ok(Self { regex })
    }

    /// True when `name` is exactly `<detector_name>-<digits>`.
    #[must_use]
    pub fn matches(&self, name: &str, detector_name: &str) -> bool {
        self.regex
            .captures(name)
            .and_then(|caps| caps.name("detector"))
            .is_some_and(|m| m.as_str() == detector_name)
    }

    /// Human-readable form of the pattern expected for `detector_name`.
    #[must_use]
    pub fn expected_for(detector_name: &str) -> String {
        format!("^{}-[0-9]+$", regex::escape(detector_name))
    }
}

/// Canonical form of the trailing `-<digits>` token: leading zeros dropped,
/// so `x-1` and `x-01` share the key `"1"`. `None` if the token is not numeric.
#[must_use]
pub fn suffix_key(name: &str) -> Option<String> {
    let token = name.rsplit('-').next()?;
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = token.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
}

/// Numeric value of the trailing token, when it fits in a `u64`.
#[must_use]
pub fn suffix_number(name: &str) -> Option<u64> {
    suffix_key(name)?.parse().ok()
}

#[cfg(test)]
#[path = "example_tests.rs"]
mod tests;

use std::collections::HashSet;

use crate::error::{AuditError, Result};

use super::model::AuditConfig;

/// Semantic checks that TOML deserialization cannot express.
///
/// # Errors
/// Returns `AuditError::Config` describing the first invalid value.
pub fn validate_config(config: &AuditConfig) -> Result<()> {
    let layout = &config.layout;

    if config.fixtures.similarity_threshold > 100 {
        return Err(AuditError::Config(format!(
            "fixtures.similarity_threshold must be between 0 and 100, got {}",
            config.fixtures.similarity_threshold
        )));
    }

    for (key, value) in [
        ("layout.descriptor", &layout.descriptor),
        ("layout.lockfile", &layout.lockfile),
        ("layout.skip_sentinel", &layout.skip_sentinel),
        ("ci.matrix_key", &config.ci.matrix_key),
    ] {
        if value.trim().is_empty() {
            return Err(AuditError::Config(format!("{key} must not be empty")));
        }
    }

    if layout.roles.is_empty() {
        return Err(AuditError::Config(
            "layout.roles must name at least one sub-project".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for role in &layout.roles {
        if !seen.insert(role.as_str()) {
            return Err(AuditError::Config(format!(
                "layout.roles contains '{role}' more than once"
            )));
        }
        if layout.is_reserved(role) {
            return Err(AuditError::Config(format!(
                "layout.roles entry '{role}' is also a reserved directory"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{role} root not found: {path}")]
    RootNotFound {
        /// Which root was requested (`Detector` or `Test-case`).
        role: &'static str,
        path: PathBuf,
    },

    #[error("Invalid naming pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to parse CI manifest: {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("CI manifest {path} has no string list at '{key}'")]
    ManifestKey { path: PathBuf, key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AuditError {
    /// Short category label used as the heading of fatal error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::RootNotFound { .. } => "RootNotFound",
            Self::InvalidPattern { .. } => "Pattern",
            Self::ManifestParse { .. } | Self::ManifestKey { .. } => "Manifest",
            Self::Io(_) => "IO",
        }
    }

    /// The message part of the error, without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } | Self::ManifestParse { path, .. } => {
                path.display().to_string()
            }
            Self::RootNotFound { role, path } => {
                format!("{role} root does not exist or is not a directory: {}", path.display())
            }
            Self::InvalidPattern { pattern, .. } => pattern.clone(),
            Self::ManifestKey { path, key } => {
                format!("no string list at '{key}' in {}", path.display())
            }
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::ManifestParse { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::RootNotFound { .. } => {
                Some("Pass --detectors/--test-cases or set [paths] in .detector-audit.toml")
            }
            Self::ManifestKey { .. } => Some("Check --matrix-key against the workflow layout"),
            Self::TomlParse(_) | Self::Config(_) => {
                Some("Run `detector-audit init` to generate a valid configuration")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

//! Package descriptor model and the rule that classifies a descriptor as a
//! named leaf package or a workspace aggregator.

mod tokenizer;

pub use tokenizer::{Token, tokenize};

use std::path::{Path, PathBuf};

/// How a descriptor's content was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorKind {
    /// A `name = "..."` line came before any `[workspace]` header.
    Named(String),
    /// A `[workspace]` header came before any `name = "..."` line.
    Aggregator,
}

/// Classify descriptor content.
///
/// The first token that is either a `[workspace]` header or a `name`
/// assignment decides: whichever appears first wins, so a leaf package that
/// declares its name before an embedded `[workspace]` table stays a leaf,
/// and an aggregator's incidental `name` further down is ignored.
/// Returns `None` when neither appears.
#[must_use]
pub fn classify(content: &str) -> Option<DescriptorKind> {
    tokenize(content).find_map(|token| {
        if token.is_workspace_header() {
            Some(DescriptorKind::Aggregator)
        } else {
            token.name_value().map(DescriptorKind::Named)
        }
    })
}

/// One parsed descriptor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub path: PathBuf,
    pub declared_name: Option<String>,
    pub is_workspace_aggregator: bool,
}

impl PackageDescriptor {
    /// Parse the content read from `path`. `None` means the descriptor is malformed.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Option<Self> {
        let path = path.into();
        match classify(content)? {
            DescriptorKind::Named(name) => Some(Self {
                path,
                declared_name: Some(name),
                is_workspace_aggregator: false,
            }),
            DescriptorKind::Aggregator => Some(Self {
                path,
                declared_name: None,
                is_workspace_aggregator: true,
            }),
        }
    }

    /// Directory that holds the descriptor.
    #[must_use]
    pub fn package_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Name of the directory that holds the descriptor.
    #[must_use]
    pub fn folder_name(&self) -> String {
        self.package_dir()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

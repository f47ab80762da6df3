//! Filesystem abstraction for testability.
//!
//! Every component that touches the disk goes through [`FileSystem`], so the
//! whole audit can run against an in-memory tree in unit tests.

#[cfg(test)]
pub mod mock_fs;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Kind of a directory entry, symlinks resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// One immediate child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Dir)
    }

    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }
}

/// A directory or file below the walk root that could not be read.
#[derive(Debug, Error)]
#[error("cannot walk {}: {source}", path.display())]
pub struct WalkError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Lazy sequence of file paths produced by [`FileSystem::walk_files`].
pub type FileWalk<'a> = Box<dyn Iterator<Item = Result<PathBuf, WalkError>> + 'a>;

/// Trait for filesystem operations (for testability).
pub trait FileSystem: Send + Sync {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the immediate children of a directory, sorted by name.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Recursively yield every file below `root` in name order, never
    /// descending into directories whose name is in `skip_dirs`.
    /// Symlinks to files are yielded; symlinked directories are not entered.
    fn walk_files<'a>(&'a self, root: &Path, skip_dirs: &'a [String]) -> FileWalk<'a>;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let entry_path = entry.path();
            let kind = if entry_path.is_dir() {
                EntryKind::Dir
            } else if entry_path.is_file() {
                EntryKind::File
            } else {
                // Dangling symlinks and special files.
                continue;
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn walk_files<'a>(&'a self, root: &Path, skip_dirs: &'a [String]) -> FileWalk<'a> {
        let root_path = root.to_path_buf();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| {
                e.depth() == 0
                    || !e.file_type().is_dir()
                    || !skip_dirs
                        .iter()
                        .any(|skip| e.file_name().to_string_lossy() == skip.as_str())
            })
            .filter_map(move |entry| match entry {
                Ok(e) if e.file_type().is_file() => Some(Ok(e.into_path())),
                Ok(e) if e.path_is_symlink() && e.path().is_file() => Some(Ok(e.into_path())),
                Ok(_) => None,
                Err(e) => {
                    let path = e.path().map_or_else(|| root_path.clone(), Path::to_path_buf);
                    Some(Err(WalkError {
                        path,
                        source: io::Error::from(e),
                    }))
                }
            });
        Box::new(walker)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

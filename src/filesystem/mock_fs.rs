use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::{DirEntry, EntryKind, FileSystem, FileWalk, WalkError};

#[derive(Debug, Clone)]
enum Node {
    File(String),
    Dir,
}

/// In-memory tree. Adding a file creates all of its ancestor directories.
pub struct MockFileSystem {
    nodes: BTreeMap<PathBuf, Node>,
    unreadable: BTreeSet<PathBuf>,
    current_dir: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            unreadable: BTreeSet::new(),
            current_dir: PathBuf::from("/project"),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = normalize_path(&path.into());
        self.add_ancestors(&path);
        self.nodes.insert(path, Node::File(content.to_string()));
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = normalize_path(&path.into());
        self.add_ancestors(&path);
        self.nodes.insert(path, Node::Dir);
        self
    }

    /// Reads of this path (file contents or directory listing) fail with
    /// `PermissionDenied`.
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(normalize_path(&path.into()));
        self
    }

    pub fn with_current_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_dir = path.into();
        self
    }

    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Dir);
        }
    }

    fn check_readable(&self, path: &Path) -> io::Result<()> {
        if self.unreadable.contains(path) {
            Err(Error::new(ErrorKind::PermissionDenied, "permission denied"))
        } else {
            Ok(())
        }
    }

    fn walk_into(&self, dir: &Path, skip_dirs: &[String], out: &mut Vec<Result<PathBuf, WalkError>>) {
        let entries = match self.read_dir(dir) {
            Ok(entries) => entries,
            Err(source) => {
                out.push(Err(WalkError {
                    path: dir.to_path_buf(),
                    source,
                }));
                return;
            }
        };
        for entry in entries {
            let child = dir.join(&entry.name);
            match entry.kind {
                EntryKind::File => out.push(Ok(child)),
                EntryKind::Dir if skip_dirs.contains(&entry.name) => {}
                EntryKind::Dir => self.walk_into(&child, skip_dirs, out),
            }
        }
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let normalized = normalize_path(path);
        self.check_readable(&normalized)?;
        match self.nodes.get(&normalized) {
            Some(Node::File(content)) => Ok(content.clone()),
            Some(Node::Dir) => Err(Error::new(ErrorKind::IsADirectory, "is a directory")),
            None => Err(Error::new(ErrorKind::NotFound, "file not found")),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.nodes.contains_key(&normalize_path(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.nodes.get(&normalize_path(path)), Some(Node::File(_)))
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.nodes.get(&normalize_path(path)), Some(Node::Dir))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let normalized = normalize_path(path);
        self.check_readable(&normalized)?;
        if !self.is_dir(&normalized) {
            return Err(Error::new(ErrorKind::NotFound, "directory not found"));
        }
        let mut entries: Vec<DirEntry> = self
            .nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(normalized.as_path()))
            .filter_map(|(p, node)| {
                let name = p.file_name()?.to_string_lossy().into_owned();
                let kind = match node {
                    Node::File(_) => EntryKind::File,
                    Node::Dir => EntryKind::Dir,
                };
                Some(DirEntry { name, kind })
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn walk_files<'a>(&'a self, root: &Path, skip_dirs: &'a [String]) -> FileWalk<'a> {
        let root = normalize_path(root);
        let mut out = Vec::new();
        if self.is_file(&root) {
            out.push(Ok(root));
        } else {
            self.walk_into(&root, skip_dirs, &mut out);
        }
        Box::new(out.into_iter())
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }
}

pub fn normalize_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let mut components = Vec::new();
    for part in path_str.split('/') {
        match part {
            ".." => {
                components.pop();
            }
            "." | "" => {}
            _ => components.push(part),
        }
    }
    let normalized = if path_str.starts_with('/') {
        format!("/{}", components.join("/"))
    } else {
        components.join("/")
    };
    PathBuf::from(normalized)
}

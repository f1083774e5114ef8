//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use svcgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SvcgenResult,
};

/// In-memory filesystem.
///
/// Clones share the same state, so a test can hand one clone to the
/// service and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content as UTF-8 (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read()
            .files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// List all files in path order.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read().files.keys().cloned().collect()
    }

    /// Every directory created so far, including implied ancestors.
    pub fn list_dirs(&self) -> Vec<PathBuf> {
        self.read().directories.iter().cloned().collect()
    }

    /// Make writes beneath `path` fail with a permission error.
    pub fn deny_writes_under(&self, path: impl Into<PathBuf>) {
        self.write().read_only.insert(path.into());
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MemoryFilesystemInner {
    fn is_read_only(&self, path: &Path) -> bool {
        self.read_only.iter().any(|ro| path.starts_with(ro))
    }
}

fn denied() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "permission denied")
}

impl Filesystem for MemoryFilesystem {
    fn dir_exists(&self, path: &Path) -> bool {
        self.read().directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        let mut inner = self.write();

        if inner.is_read_only(path) {
            return Err(ApplicationError::DirCreateFailed {
                path: path.to_path_buf(),
                source: denied(),
            }
            .into());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> SvcgenResult<()> {
        let mut inner = self.write();

        let parent_missing = path
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty() && !inner.directories.contains(p));
        if parent_missing {
            return Err(ApplicationError::FileCreateFailed {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "parent directory does not exist"),
            }
            .into());
        }

        if inner.is_read_only(path) {
            return Err(ApplicationError::FileCreateFailed {
                path: path.to_path_buf(),
                source: denied(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }
}

//! Local filesystem adapter using std::fs.

use std::fs::{DirBuilder, File};
use std::io::Write;
use std::path::Path;

use svcgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SvcgenResult,
};
use tracing::debug;

/// Permission bits for directories created on unix (before umask).
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }

        builder.create(path).map_err(|source| {
            ApplicationError::DirCreateFailed {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    /// Create or truncate `path`, then write `content` in full.
    ///
    /// The handle is closed when it goes out of scope, on success and on
    /// failure alike.
    fn write_file(&self, path: &Path, content: &[u8]) -> SvcgenResult<()> {
        let mut file = File::create(path).map_err(|source| ApplicationError::FileCreateFailed {
            path: path.to_path_buf(),
            source,
        })?;

        file.write_all(content)
            .map_err(|source| ApplicationError::FileWriteFailed {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), bytes = content.len(), "file written");
        Ok(())
    }
}

//! Filesystem collaborator for the `/files/*` routes.
//!
//! All file access goes through [`FileStore`], which owns the configured
//! base directory and refuses to touch anything outside it. The engine never
//! builds filesystem paths on its own.

use std::io;
use std::path::{Component, Path, PathBuf};

use tokio::fs;

/// Errors a file store operation can produce.
#[derive(Debug)]
pub enum FsError {
    /// The requested name does not exist under the root.
    NotFound,
    /// The name would resolve outside the base directory (parent-dir or
    /// absolute components) and was rejected before any filesystem call.
    PathEscapesRoot,
    /// Any other I/O failure (permissions, missing parent directory, ...).
    Io(io::Error),
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound => write!(f, "file not found"),
            FsError::PathEscapesRoot => write!(f, "path escapes base directory"),
            FsError::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for FsError {}

/// Read/write access rooted at a base directory.
///
/// Cheap to clone; every connection task gets its own handle.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured base directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `name` onto the root after checking containment.
    ///
    /// `name` is the raw path suffix from the request. Subdirectories are
    /// allowed, but any parent-directory component or absolute prefix means
    /// the resolved path could leave the root, so those are rejected without
    /// consulting the filesystem.
    fn resolve(&self, name: &str) -> Result<PathBuf, FsError> {
        let relative = Path::new(name);

        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => return Err(FsError::PathEscapesRoot),
            }
        }

        Ok(self.root.join(relative))
    }

    /// Reads the full contents of `name` under the root.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, FsError> {
        let path = self.resolve(name)?;

        fs::read(&path).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FsError::NotFound,
            _ => FsError::Io(e),
        })
    }

    /// Writes `contents` to `name` under the root, replacing any existing
    /// file. Last write wins when two connections target the same name.
    pub async fn write(&self, name: &str, contents: &[u8]) -> Result<(), FsError> {
        let path = self.resolve(name)?;

        fs::write(&path, contents).await.map_err(FsError::Io)
    }
}

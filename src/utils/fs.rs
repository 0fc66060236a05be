//! File system utility functions
//!
//! Thin wrappers over `std::fs` with tracing so every side effect of a run
//! shows up in debug logs.

use std::fs::{self, File, Metadata};
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug, Default)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Read the whole file into memory
    #[instrument(skip(self))]
    pub fn read_file<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<Vec<u8>> {
        let path = path.as_ref();
        let content = fs::read(path)?;
        debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }

    /// Metadata of a path, following symlinks
    pub fn stat<P: AsRef<Path>>(&self, path: P) -> io::Result<Metadata> {
        fs::metadata(path)
    }

    /// Create directories recursively
    #[instrument(skip(self))]
    pub fn create_dir_all<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        debug!("Creating directory: {}", path.display());
        fs::create_dir_all(path)
    }

    /// Create or truncate a file for writing
    #[instrument(skip(self))]
    pub fn create_file<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<File> {
        let path = path.as_ref();
        debug!("Creating file: {}", path.display());
        File::create(path)
    }

    /// Remove a file if it exists
    #[instrument(skip(self))]
    pub fn remove_file_if_exists<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
    ) -> io::Result<bool> {
        let path = path.as_ref();

        match fs::remove_file(path) {
            Ok(()) => {
                debug!("Removed file: {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("File does not exist: {}", path.display());
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

//! Package builder capability
//!
//! The assembler only needs to create a package from metadata, register
//! files on it and serialize it. Keeping that behind two small traits lets
//! the pipeline run against the real RPM writer or a test double.

use crate::{core::metadata::PackageMetadata, error::Result};
use std::io::Write;
use std::path::PathBuf;

/// A file registered with a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFile {
    /// Path inside the package
    pub name: String,
    /// Where the contents were read from
    pub source: PathBuf,
    pub body: Vec<u8>,
    pub mode: u32,
    pub owner: String,
    pub group: String,
}

/// Creates package handles from metadata
pub trait PackageBackend {
    type Handle: PackageHandle;

    /// Fails with `PackageCreation` when the metadata is rejected
    fn new_package(&self, metadata: &PackageMetadata) -> Result<Self::Handle>;
}

/// A package being assembled
pub trait PackageHandle {
    /// Register a file. Files arrive in argument order; the written
    /// package may store them in its own order (RPM sorts by path).
    /// Registering a destination again replaces the earlier file.
    fn add_file(&mut self, file: PackageFile);

    /// Serialize the package into `out`
    fn write_to<W: Write>(self, out: &mut W) -> Result<()>;
}

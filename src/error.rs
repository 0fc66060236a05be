//! Error types for the assembler
//!
//! Every stage of the pipeline has its own variant so a failure always says
//! which input and which step went wrong.

use crate::core::{filespec::ModeError, relation::RelationParseError};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the assembler
#[derive(Error, Debug)]
pub enum AssemblerError {
    /// A file specification token did not have 2 to 5 fields
    #[error("invalid input file: {spec}")]
    InvalidFormat { spec: String },

    /// The mode field of a file specification is not an octal permission mode
    #[error("invalid input file mode: {spec}")]
    InvalidMode {
        spec: String,
        #[source]
        source: ModeError,
    },

    /// A provides/requires/conflicts expression could not be parsed
    #[error("failed to parse {category} relation: {raw}")]
    InvalidRelation {
        category: &'static str,
        raw: String,
        #[source]
        source: RelationParseError,
    },

    /// The package builder rejected the metadata
    #[error("failed to create package: {message}")]
    PackageCreation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A source file could not be read
    #[error("failed to read input file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created
    #[error("failed to create output directory: {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output hint could not be inspected
    #[error("failed to stat output file: {path}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be opened for writing
    #[error("failed to create output file: {path}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The package could not be serialized
    #[error("failed to write package: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AssemblerError {
    /// Create a new malformed file specification error
    pub fn invalid_format(spec: impl Into<String>) -> Self {
        Self::InvalidFormat { spec: spec.into() }
    }

    /// Create a new invalid mode error
    pub fn invalid_mode(spec: impl Into<String>, source: ModeError) -> Self {
        Self::InvalidMode {
            spec: spec.into(),
            source,
        }
    }

    /// Create a new invalid relation error
    pub fn invalid_relation(
        category: &'static str,
        raw: impl Into<String>,
        source: RelationParseError,
    ) -> Self {
        Self::InvalidRelation {
            category,
            raw: raw.into(),
            source,
        }
    }

    /// Create a new package creation error
    pub fn package_creation(message: impl Into<String>) -> Self {
        Self::PackageCreation {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new file read error
    pub fn file_read<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a new directory creation error
    pub fn directory_creation<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    /// Create a new stat error
    pub fn stat<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Stat {
            path: path.into(),
            source,
        }
    }

    /// Create a new output creation error
    pub fn output_create<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::OutputCreate {
            path: path.into(),
            source,
        }
    }

    /// Create a new serialization error wrapping an underlying failure
    pub fn serialization<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AssemblerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_mode_keeps_source() {
        let source = u32::from_str_radix("9", 8).unwrap_err();
        let err = AssemblerError::invalid_mode("a:b:9", ModeError::from(source));
        assert_eq!(err.to_string(), "invalid input file mode: a:b:9");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_file_read_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AssemblerError::file_read("/srv/missing.bin", io);
        assert!(err.to_string().contains("/srv/missing.bin"));
    }
}

//! Core functionality for package assembly
//!
//! Contains file specification and relation parsing, metadata assembly,
//! output path resolution and the pipeline tying them together.

pub mod assembler;
pub mod filespec;
pub mod metadata;
pub mod output;
pub mod package;
pub mod relation;
pub mod rpm;

pub use assembler::Assembler;
pub use filespec::FileSpec;
pub use metadata::PackageMetadata;
pub use output::OutputDecision;
pub use package::{PackageBackend, PackageFile, PackageHandle};
pub use relation::{Comparator, RegexRelationParser, Relation, RelationParser};
pub use self::rpm::{RpmBackend, RpmPackage};

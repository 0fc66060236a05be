//! RPM package backend
//!
//! Builds the package with the `rpm` crate. Files are collected in order and
//! the package is only built when it is written. The rpm writer reads file
//! contents from each file's source path and stores files sorted by path.

use crate::{
    core::{
        filespec::MAX_MODE,
        metadata::PackageMetadata,
        package::{PackageBackend, PackageFile, PackageHandle},
        relation::{Comparator, Relation},
    },
    error::{AssemblerError, Result},
};
use regex::Regex;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// OS recorded by the rpm writer
const RPM_OS: &str = "linux";

/// Package backend producing RPM files
#[derive(Debug)]
pub struct RpmBackend {
    re_name: Regex,
}

impl RpmBackend {
    /// Create a new RPM backend
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_name: Regex::new(r"^[A-Za-z0-9._+-]+$")
                .map_err(|e| AssemblerError::config(format!("Failed to compile regex: {e}")))?,
        })
    }

    fn validate(&self, metadata: &PackageMetadata) -> Result<()> {
        if !self.re_name.is_match(&metadata.name) {
            return Err(AssemblerError::package_creation(format!(
                "invalid package name '{}'",
                metadata.name
            )));
        }
        for (field, value) in [("version", &metadata.version), ("release", &metadata.release)] {
            if value.is_empty() || value.contains('-') || value.contains(char::is_whitespace) {
                return Err(AssemblerError::package_creation(format!(
                    "invalid {field} '{value}': must be non-empty without '-' or whitespace"
                )));
            }
        }
        if metadata.arch.is_empty() || metadata.arch.contains(char::is_whitespace) {
            return Err(AssemblerError::package_creation(format!(
                "invalid architecture '{}'",
                metadata.arch
            )));
        }
        Ok(())
    }
}

impl PackageBackend for RpmBackend {
    type Handle = RpmPackage;

    fn new_package(&self, metadata: &PackageMetadata) -> Result<RpmPackage> {
        self.validate(metadata)?;

        if !metadata.os.is_empty() && metadata.os != RPM_OS {
            warn!(
                "OS '{}' is ignored, RPM packages are always written for '{}'",
                metadata.os, RPM_OS
            );
        }

        Ok(RpmPackage {
            metadata: metadata.clone(),
            files: Vec::new(),
        })
    }
}

/// An RPM package being assembled
#[derive(Debug)]
pub struct RpmPackage {
    metadata: PackageMetadata,
    files: Vec<PackageFile>,
}

impl RpmPackage {
    fn builder(self) -> Result<::rpm::PackageBuilder> {
        let meta = self.metadata;
        let mut builder = ::rpm::PackageBuilder::new(
            &meta.name,
            &meta.version,
            &meta.licence,
            &meta.arch,
            &meta.summary,
        )
        .release(meta.release.as_str())
        .epoch(meta.epoch)
        .description(meta.description.as_str());

        if !meta.vendor.is_empty() {
            builder = builder.vendor(meta.vendor.as_str());
        }
        if !meta.url.is_empty() {
            builder = builder.url(meta.url.as_str());
        }
        if !meta.packager.is_empty() {
            builder = builder.packager(meta.packager.as_str());
        }
        if !meta.group.is_empty() {
            builder = builder.group(meta.group.as_str());
        }

        for relation in &meta.provides {
            builder = builder.provides(dependency(relation));
        }
        for relation in &meta.requires {
            builder = builder.requires(dependency(relation));
        }
        for relation in &meta.conflicts {
            builder = builder.conflicts(dependency(relation));
        }

        for file in self.files {
            debug!("Adding {} ({:o}) to package", file.name, file.mode);
            let permissions = u16::try_from(file.mode)
                .ok()
                .filter(|mode| u32::from(*mode) <= MAX_MODE)
                .ok_or_else(|| {
                    AssemblerError::serialization(
                        format!("invalid mode {:o} for {}", file.mode, file.name),
                        std::io::Error::from(std::io::ErrorKind::InvalidInput),
                    )
                })?;
            let options = ::rpm::FileOptions::new(file.name.as_str())
                .mode(::rpm::FileMode::Regular { permissions })
                .user(file.owner.as_str())
                .group(file.group.as_str());
            builder = builder.with_file(&file.source, options).map_err(|e| {
                AssemblerError::serialization(format!("failed to add {}", file.name), e)
            })?;
        }

        Ok(builder)
    }
}

impl PackageHandle for RpmPackage {
    fn add_file(&mut self, file: PackageFile) {
        match self.files.iter_mut().find(|f| f.name == file.name) {
            Some(existing) => {
                warn!(
                    "{} is registered twice, keeping {}",
                    file.name,
                    file.source.display()
                );
                *existing = file;
            }
            None => self.files.push(file),
        }
    }

    #[instrument(skip_all, fields(package = %self.metadata.file_name()))]
    fn write_to<W: Write>(self, out: &mut W) -> Result<()> {
        let file_count = self.files.len();
        let package = self
            .builder()?
            .build()
            .map_err(|e| AssemblerError::serialization("failed to build package", e))?;
        package
            .write(out)
            .map_err(|e| AssemblerError::serialization("failed to write package", e))?;

        info!("Wrote package with {} file(s)", file_count);
        Ok(())
    }
}

fn dependency(relation: &Relation) -> ::rpm::Dependency {
    let name = relation.name.as_str();
    let version = relation.version.as_str();
    match relation.comparator {
        Comparator::Any => ::rpm::Dependency::any(name),
        Comparator::Less => ::rpm::Dependency::less(name, version),
        Comparator::LessEq => ::rpm::Dependency::less_eq(name, version),
        Comparator::Equal => ::rpm::Dependency::eq(name, version),
        Comparator::GreaterEq => ::rpm::Dependency::greater_eq(name, version),
        Comparator::Greater => ::rpm::Dependency::greater(name, version),
    }
}

//! Package assembly pipeline
//!
//! relations -> metadata -> files -> output path -> write. The first error
//! ends the run.

use crate::{
    config::Config,
    core::{
        filespec::FileSpec,
        metadata::PackageMetadata,
        output::OutputDecision,
        package::{PackageBackend, PackageFile, PackageHandle},
        relation::RelationParser,
    },
    error::{AssemblerError, Result},
    utils::fs::FileSystemUtils,
};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Drives one package build from configuration to written artifact
#[derive(Debug)]
pub struct Assembler<P, B> {
    parser: P,
    backend: B,
    fs_utils: FileSystemUtils,
}

impl<P, B> Assembler<P, B>
where
    P: RelationParser,
    B: PackageBackend,
{
    /// Create a new assembler with the given relation parser and backend
    pub fn new(parser: P, backend: B) -> Self {
        Self {
            parser,
            backend,
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Assemble the package and return the path it was written to
    #[instrument(skip_all, fields(name = %config.package.name))]
    pub fn assemble(&self, config: &Config) -> Result<PathBuf> {
        let metadata = PackageMetadata::from_options(&config.package, &self.parser)?;
        let mut package = metadata.create_package(&self.backend)?;

        for spec in &config.files {
            let file = self.load_file(spec)?;
            debug!("Registering {} ({} bytes)", file.name, file.body.len());
            package.add_file(file);
        }
        info!("Registered {} file(s)", config.files.len());

        let output = OutputDecision::resolve(&self.fs_utils, &config.output, &metadata.file_name())?;
        output.prepare(&self.fs_utils)?;

        self.write(package, &output.path)?;
        info!("Package written to {}", output.path.display());
        Ok(output.path)
    }

    fn load_file(&self, spec: &str) -> Result<PackageFile> {
        let spec = FileSpec::parse(spec)?;
        let body = self
            .fs_utils
            .read_file(&spec.source)
            .map_err(|e| AssemblerError::file_read(&spec.source, e))?;

        Ok(PackageFile {
            name: spec.destination,
            source: spec.source,
            body,
            mode: spec.mode,
            owner: spec.owner,
            group: spec.group,
        })
    }

    fn write(&self, package: B::Handle, path: &Path) -> Result<()> {
        let file = self
            .fs_utils
            .create_file(path)
            .map_err(|e| AssemblerError::output_create(path, e))?;
        let mut out = BufWriter::new(file);

        let written = package.write_to(&mut out).and_then(|()| {
            out.flush()
                .map_err(|e| AssemblerError::serialization("failed to flush package", e))
        });
        drop(out);

        if written.is_err() {
            match self.fs_utils.remove_file_if_exists(path) {
                Ok(_) => debug!("Removed partial output {}", path.display()),
                Err(e) => warn!("Could not remove partial output {}: {}", path.display(), e),
            }
        }
        written
    }
}

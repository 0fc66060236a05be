//! Command implementation for the CLI

use crate::{
    config::Config,
    core::{Assembler, RegexRelationParser, RpmBackend},
    error::AssemblerError,
};
use anyhow::Context;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Assemble the package described by the configuration
#[instrument(skip(config))]
pub fn execute(config: &Config) -> anyhow::Result<PathBuf> {
    info!(
        "Assembling {} {}-{} ({}) from {} file(s)",
        config.package.name,
        config.package.version,
        config.package.release,
        config.package.arch,
        config.files.len()
    );

    let parser = RegexRelationParser::new().context("Failed to set up relation parser")?;
    let backend = RpmBackend::new().context("Failed to set up RPM backend")?;

    let output = Assembler::new(parser, backend)
        .assemble(config)
        .map_err(|e| with_stage_context(e, &config.package.name))?;

    info!("Package assembled successfully: {}", output.display());
    Ok(output)
}

/// Serialization failures are reported as they are; everything else names
/// the package being assembled.
fn with_stage_context(err: AssemblerError, name: &str) -> anyhow::Error {
    match err {
        AssemblerError::Serialization { .. } => err.into(),
        err => anyhow::Error::new(err).context(format!("Failed to assemble package {name}")),
    }
}

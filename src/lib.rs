//! # RPM Assembler
//!
//! Assembles RPM packages from already built artifacts. Files are given as
//! `<path>:<destination>[:<mode>[:<owner>[:<group>]]]` specifications and the
//! package metadata comes from command line options or their
//! `RPM_ASSEMBLER_*` environment variables.
//!
//! ## Example
//!
//! ```no_run
//! use rpm_assembler::config::{Config, PackageOptions};
//! use rpm_assembler::core::{Assembler, RegexRelationParser, RpmBackend};
//!
//! let config = Config {
//!     package: PackageOptions {
//!         name: "hello".to_string(),
//!         version: "1.0.0".to_string(),
//!         requires: vec!["glibc >= 2.28".to_string()],
//!         ..PackageOptions::default()
//!     },
//!     output: "dist/".to_string(),
//!     files: vec!["target/release/hello:/usr/bin/hello:755".to_string()],
//!     ..Config::default()
//! };
//!
//! let assembler = Assembler::new(RegexRelationParser::new()?, RpmBackend::new()?);
//! let path = assembler.assemble(&config)?;
//! println!("wrote {}", path.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

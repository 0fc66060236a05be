//! Configuration management for the assembler
//!
//! Collects the option values of one invocation into an immutable structure
//! that the pipeline receives explicitly.

use crate::{cli::Args, error::AssemblerError};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Package-level options
    pub package: PackageOptions,
    /// Output hint: empty, a directory or a file path
    pub output: String,
    /// Input file specifications, in registration order
    pub files: Vec<String>,
}

/// Package-level option values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageOptions {
    pub name: String,
    pub summary: String,
    pub description: String,
    pub version: String,
    pub release: String,
    pub arch: String,
    pub os: String,
    pub vendor: String,
    pub url: String,
    pub packager: String,
    pub group: String,
    pub licence: String,
    pub epoch: u32,
    /// Raw relation strings, parsed later
    pub provides: Vec<String>,
    pub requires: Vec<String>,
    pub conflicts: Vec<String>,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            summary: String::new(),
            description: String::new(),
            version: "0.0.0".to_string(),
            release: "0".to_string(),
            arch: "noarch".to_string(),
            os: String::new(),
            vendor: String::new(),
            url: String::new(),
            packager: String::new(),
            group: String::new(),
            licence: String::new(),
            epoch: 0,
            provides: Vec::new(),
            requires: Vec::new(),
            conflicts: Vec::new(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, AssemblerError> {
        let config = Self {
            debug: args.debug,
            package: PackageOptions {
                name: args.name.clone(),
                summary: args.summary.clone(),
                description: args.description.clone(),
                version: args.pkg_version.clone(),
                release: args.release.clone(),
                arch: args.arch.clone(),
                os: args.os.clone(),
                vendor: args.vendor.clone(),
                url: args.url.clone(),
                packager: args.packager.clone(),
                group: args.group.clone(),
                licence: args.licence.clone(),
                epoch: args.epoch,
                provides: args.provides.clone(),
                requires: args.requires.clone(),
                conflicts: args.conflicts.clone(),
            },
            output: args.output.clone(),
            files: args.files.clone(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AssemblerError> {
        let required = [
            ("name", &self.package.name),
            ("version", &self.package.version),
            ("release", &self.package.release),
            ("arch", &self.package.arch),
        ];
        for (flag, value) in required {
            if value.trim().is_empty() {
                return Err(AssemblerError::config(format!(
                    "--{flag} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from([
            "rpm-assembler",
            "--name",
            "hello",
            "--licence",
            "MIT",
            "--output",
            "dist/",
            "a:/b",
        ])
        .unwrap();
        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.package.name, "hello");
        assert_eq!(config.package.licence, "MIT");
        assert_eq!(config.package.version, "0.0.0");
        assert_eq!(config.output, "dist/");
        assert_eq!(config.files, ["a:/b"]);
    }

    #[test]
    fn test_rejects_empty_required_values() {
        for flag in ["--name", "--version", "--release", "--arch"] {
            let mut argv = vec!["rpm-assembler", flag, ""];
            if flag != "--name" {
                argv.extend(["--name", "hello"]);
            }
            let args = Args::try_parse_from(argv).unwrap();
            let err = Config::from_args(&args).unwrap_err();
            assert!(err.to_string().contains(&flag[2..]), "{flag}");
        }
    }
}

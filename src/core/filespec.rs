//! Input file specification parsing
//!
//! A file specification has the form
//! `<path>:<destination>[:<mode>[:<owner>[:<group>]]]`.

use crate::error::{AssemblerError, Result};
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Permission bits used when a specification does not give a mode
pub const DEFAULT_MODE: u32 = 0o644;

/// Owner and group used when a specification does not give them
pub const DEFAULT_OWNER: &str = "root";

/// Highest mode accepted: permission, setuid, setgid and sticky bits
pub const MAX_MODE: u32 = 0o7777;

/// Reasons a mode field is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    #[error("mode must start with an octal digit")]
    NotDigit,
    #[error(transparent)]
    Parse(#[from] ParseIntError),
    #[error("mode {0:o} carries file type bits, only permission bits are allowed")]
    FileType(u32),
}

/// Parse an unsigned octal permission mode
fn parse_mode(raw: &str) -> std::result::Result<u32, ModeError> {
    if !raw.bytes().next().is_some_and(|b| b.is_ascii_digit()) {
        return Err(ModeError::NotDigit);
    }
    let mode = u32::from_str_radix(raw, 8)?;
    if mode > MAX_MODE {
        return Err(ModeError::FileType(mode));
    }
    Ok(mode)
}

/// Placement of one file inside the package
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileSpec {
    /// Where to read the file contents from
    pub source: PathBuf,
    /// Path of the file inside the package
    pub destination: String,
    /// Permission bits
    pub mode: u32,
    /// Owning user
    pub owner: String,
    /// Owning group
    pub group: String,
}

impl FileSpec {
    /// Parse a single `path:destination[:mode[:owner[:group]]]` token
    pub fn parse(spec: &str) -> Result<Self> {
        let fields: Vec<&str> = spec.split(':').collect();
        if fields.len() < 2 || fields.len() > 5 {
            return Err(AssemblerError::invalid_format(spec));
        }

        let mode = match fields.get(2) {
            Some(raw) => parse_mode(raw).map_err(|e| AssemblerError::invalid_mode(spec, e))?,
            None => DEFAULT_MODE,
        };
        let owner = fields.get(3).copied().unwrap_or(DEFAULT_OWNER);
        let group = fields.get(4).copied().unwrap_or(DEFAULT_OWNER);

        Ok(Self {
            source: PathBuf::from(fields[0]),
            destination: fields[1].to_string(),
            mode,
            owner: owner.to_string(),
            group: group.to_string(),
        })
    }
}

impl FromStr for FileSpec {
    type Err = AssemblerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

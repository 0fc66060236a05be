//! Output path resolution
//!
//! Turns the `--output` hint into the path the package is written to. The
//! hint may be empty, an existing directory, an existing file, or a path that
//! does not exist yet.

use crate::{
    error::{AssemblerError, Result},
    utils::fs::FileSystemUtils,
};
use std::io;
use std::path::{Path, PathBuf, is_separator};
use tracing::{debug, instrument};

/// Where the package goes and which directory must exist first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDecision {
    /// Final path of the package file
    pub path: PathBuf,
    /// Directory to create (with parents) before writing
    pub create_dir: Option<PathBuf>,
}

impl OutputDecision {
    fn write_to(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_dir: None,
        }
    }

    /// Decide the output path for `hint` and the canonical file name
    ///
    /// Rules, in order:
    /// - existing directory: the package goes inside it
    /// - missing path containing a separator: a trailing separator or a
    ///   directory part of `.` means "create this directory and put the
    ///   package inside", anything else is a literal file path whose parent
    ///   gets created
    /// - empty hint: canonical name in the current directory
    /// - stat errors other than "not found" are fatal
    /// - anything else is used as the file path unchanged
    #[instrument(skip(fs))]
    pub fn resolve(fs: &FileSystemUtils, hint: &str, file_name: &str) -> Result<Self> {
        let stat = fs.stat(hint);
        let decision = match stat {
            Ok(meta) if meta.is_dir() => Self::write_to(Path::new(hint).join(file_name)),
            Err(ref e) if e.kind() == io::ErrorKind::NotFound && hint.contains(is_separator) => {
                if has_directory_intent(hint) {
                    Self {
                        path: Path::new(hint).join(file_name),
                        create_dir: Some(PathBuf::from(hint)),
                    }
                } else {
                    Self {
                        path: PathBuf::from(hint),
                        create_dir: Path::new(hint).parent().map(Path::to_path_buf),
                    }
                }
            }
            _ if hint.is_empty() => Self::write_to(file_name),
            Err(e) if e.kind() != io::ErrorKind::NotFound => {
                return Err(AssemblerError::stat(hint, e));
            }
            // Existing file, or a bare file name in the current directory
            _ => Self::write_to(hint),
        };

        debug!(
            "Output resolved to {} (create dir: {:?})",
            decision.path.display(),
            decision.create_dir
        );
        Ok(decision)
    }

    /// Create the output directory if the decision needs one
    pub fn prepare(&self, fs: &FileSystemUtils) -> Result<()> {
        if let Some(dir) = &self.create_dir {
            fs.create_dir_all(dir)
                .map_err(|e| AssemblerError::directory_creation(dir, e))?;
        }
        Ok(())
    }
}

/// Whether a missing path names a directory rather than a file
fn has_directory_intent(hint: &str) -> bool {
    if hint.ends_with(is_separator) {
        return true;
    }
    match Path::new(hint).parent() {
        None => true,
        Some(dir) => dir.as_os_str().is_empty() || dir == Path::new("."),
    }
}

//! Utility modules for common functionality

pub mod fs;

pub use fs::FileSystemUtils;

//! Command-line argument parsing and validation

use clap::Parser;

/// Assemble RPM packages from artifacts
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
#[command(name = "rpm-assembler")]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Enable debug output
    #[arg(long, env = "RPM_ASSEMBLER_DEBUG")]
    pub debug: bool,

    /// Name of the package
    #[arg(long, env = "RPM_ASSEMBLER_NAME")]
    pub name: String,

    /// Summary of the package
    #[arg(long, env = "RPM_ASSEMBLER_SUMMARY", default_value = "")]
    pub summary: String,

    /// Description of the package
    #[arg(long, env = "RPM_ASSEMBLER_DESCRIPTION", default_value = "")]
    pub description: String,

    /// Version of the package
    #[arg(
        long = "version",
        value_name = "VERSION",
        env = "RPM_ASSEMBLER_VERSION",
        default_value = "0.0.0"
    )]
    pub pkg_version: String,

    /// Release of the package
    #[arg(long, env = "RPM_ASSEMBLER_RELEASE", default_value = "0")]
    pub release: String,

    /// Architecture of the package. This is usually one of: noarch, x86_64,
    /// aarch64, armv7hl, i686, ppc64, ppc64le, s390x
    #[arg(long, env = "RPM_ASSEMBLER_ARCH", default_value = "noarch")]
    pub arch: String,

    /// Operating system of the package
    #[arg(long, env = "RPM_ASSEMBLER_OS", default_value = "")]
    pub os: String,

    /// Vendor of the package
    #[arg(long, env = "RPM_ASSEMBLER_VENDOR", default_value = "")]
    pub vendor: String,

    /// URL of the package
    #[arg(long, env = "RPM_ASSEMBLER_URL", default_value = "")]
    pub url: String,

    /// Packager of the package
    #[arg(long, env = "RPM_ASSEMBLER_PACKAGER", default_value = "")]
    pub packager: String,

    /// Group of the package
    #[arg(long, env = "RPM_ASSEMBLER_GROUP", default_value = "")]
    pub group: String,

    /// Licence of the package
    #[arg(long, env = "RPM_ASSEMBLER_LICENCE", default_value = "")]
    pub licence: String,

    /// Epoch of the package
    #[arg(long, env = "RPM_ASSEMBLER_EPOCH", default_value_t = 0)]
    pub epoch: u32,

    /// Capabilities the package provides (repeatable)
    #[arg(long, env = "RPM_ASSEMBLER_PROVIDES", value_delimiter = ',')]
    pub provides: Vec<String>,

    /// Packages the package requires (repeatable)
    #[arg(long, env = "RPM_ASSEMBLER_REQUIRES", value_delimiter = ',')]
    pub requires: Vec<String>,

    /// Packages the package conflicts with (repeatable)
    #[arg(long, env = "RPM_ASSEMBLER_CONFLICTS", value_delimiter = ',')]
    pub conflicts: Vec<String>,

    /// Output file or directory. If not specified, the package is written to
    /// the current working directory
    #[arg(long, env = "RPM_ASSEMBLER_OUTPUT", default_value = "")]
    pub output: String,

    /// Input files, specified as: <path>:<destination>[:<mode>[:<owner>[:<group>]]]
    #[arg(value_name = "INPUT FILES")]
    pub files: Vec<String>,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

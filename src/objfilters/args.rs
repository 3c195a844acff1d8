use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "objfilters", bin_name = "objfilters", version = get_version())]
#[command(
    about = "Manage the object filters of a remote connection configuration",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding connection.json (defaults to the platform config dir)
    #[arg(short = 'd', long, global = true)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List object filters
    #[command(alias = "ls")]
    List,

    /// Create a new filter
    #[command(alias = "n")]
    New,

    /// Edit an existing filter
    #[command(alias = "e")]
    Edit {
        /// Name of the filter
        name: String,
    },

    /// Duplicate a filter and edit the copy
    #[command(alias = "cp")]
    Copy {
        /// Name of the filter to copy
        name: String,
    },

    /// Delete a filter
    #[command(alias = "rm")]
    Delete {
        /// Name of the filter
        name: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

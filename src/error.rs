//! Domain-specific error types for the installer.
//!
//! Fatal setup conditions get typed errors via [`thiserror`]; command
//! handlers at the CLI boundary convert them to [`anyhow::Error`] with the
//! standard `?` operator. Per-entry problems (a missing template file, a
//! failed `git pull`) are deliberately *not* errors — they are reported as
//! warnings and never abort the run.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal setup errors that abort the run with a non-zero exit code.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The command repository root could not be located.
    #[error(
        "cannot determine the command repository root. Use --root or set the DBCOMMANDS_ROOT environment variable"
    )]
    RootNotFound,

    /// Neither `HOME` nor `USERPROFILE` is set, so the destination directory
    /// cannot be derived.
    #[error("cannot determine the home directory: neither HOME nor USERPROFILE is set")]
    HomeNotSet,

    /// The destination directory could not be created.
    #[error("cannot create destination directory {path}: {source}")]
    DestinationCreate {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

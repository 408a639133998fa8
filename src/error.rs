//! # Error Handling
//!
//! This module defines the error type shared by the `seda` library. It uses
//! `thiserror` to describe every way a clone-and-open run can fail, with
//! messages meant to be shown to the user as-is.
//!
//! ## Key Components
//!
//! - **`Error`**: one variant per failing stage of the workflow (clone, path
//!   resolution, editor launch).
//! - **`Result<T>`**: a type alias for `std::result::Result<T, Error>`.
//!
//! None of these errors is recoverable. The first one raised ends the run and
//! later stages are never attempted.

use thiserror::Error;

/// Main error type for seda operations
#[derive(Error, Debug)]
pub enum Error {
    /// `git clone` could not be started or exited unsuccessfully.
    ///
    /// A partially cloned `target` directory may be left behind.
    #[error("Error cloning repository {url} into {target}: {message}")]
    Clone {
        url: String,
        target: String,
        message: String,
    },

    /// The absolute path of the cloned directory could not be computed,
    /// usually because the working directory is gone.
    #[error("Error getting absolute path of {path}: {message}")]
    Path { path: String, message: String },

    /// The editor could not be started or exited unsuccessfully.
    #[error("Error opening {path} in {editor}: {message}")]
    EditorLaunch {
        editor: String,
        path: String,
        message: String,
    },
}

/// Result type alias for seda operations
pub type Result<T> = std::result::Result<T, Error>;

//! # Seda Library
//!
//! This library provides the functionality behind the `seda code` command:
//! clone a Git repository and open the result in an editor. It is used by the
//! `seda` command-line tool, but every step can also be driven directly.
//!
//! ## Quick Example
//!
//! ```
//! use seda::workflow::CloneRequest;
//!
//! let request = CloneRequest::new("https://example.com/org/sample.git", None);
//! assert_eq!(request.target, "sample");
//!
//! let request = CloneRequest::new(
//!     "https://example.com/org/sample.git",
//!     Some("myproj".to_string()),
//! );
//! assert_eq!(request.target, "myproj");
//! ```
//!
//! ## Core Concepts
//!
//! - **Process runner (`runner`)**: the `CommandRunner` trait that every
//!   external program goes through, with a real implementation that inherits
//!   the terminal's standard streams.
//! - **Git (`git`)**: target directory naming and `git clone`.
//! - **Editor (`editor`)**: choosing between `code` and the
//!   `VSCODE_ALTERNATIVE` override, and opening a path.
//! - **Workflow (`workflow`)**: clone, resolve the absolute path, open, in
//!   that order, stopping at the first error.
//!
//! Nothing in the library reads the process environment for the editor. The
//! caller passes the override in, which keeps the workflow testable with a
//! mock runner.

pub mod defaults;
pub mod editor;
pub mod error;
pub mod git;
pub mod output;
pub mod path;
pub mod runner;
pub mod workflow;

//! Clone-and-open workflow
//!
//! This module runs the whole job for the `code` command:
//! 1. Clone the repository into the target directory
//! 2. Resolve the target directory to an absolute path
//! 3. Open that path in the editor
//!
//! The steps run strictly in order and the first failure stops the run. The
//! process runner and the editor override are passed in, so nothing here
//! reads the environment or spawns processes on its own.

use std::path::{Path, PathBuf};

use crate::editor::Editor;
use crate::error::Result;
use crate::git;
use crate::path::absolute_path;
use crate::runner::CommandRunner;

/// A repository to clone and the directory to clone it into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRequest {
    /// Passed to `git clone` verbatim.
    pub url: String,
    /// Local directory name, relative to the working directory.
    pub target: String,
}

impl CloneRequest {
    /// Build a request, deriving the target from the URL when `new_name` is
    /// not given. An explicit name is used verbatim, without validation.
    pub fn new(url: impl Into<String>, new_name: Option<String>) -> Self {
        let url = url.into();
        let target = new_name.unwrap_or_else(|| git::repo_name_from_url(&url).to_string());
        Self { url, target }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opened {
    /// Absolute path of the cloned repository.
    pub path: PathBuf,
    /// Editor the path was opened in.
    pub editor: Editor,
}

/// Clone the repository, then open it in the editor.
///
/// `editor_override` replaces the default `code` command when it is set and
/// non-empty.
pub fn clone_and_open(
    request: &CloneRequest,
    runner: &dyn CommandRunner,
    editor_override: Option<&str>,
) -> Result<Opened> {
    // Clone
    git::clone_repository(runner, &request.url, &request.target)?;

    // Resolve
    let path = absolute_path(Path::new(&request.target))?;

    // Open
    let editor = Editor::select(editor_override);
    editor.open(runner, &path)?;

    Ok(Opened { path, editor })
}

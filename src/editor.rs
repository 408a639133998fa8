//! # Editor Selection and Launch
//!
//! Opens a directory in the user's editor. The editor is `code` unless an
//! override is supplied (normally from `VSCODE_ALTERNATIVE`). There is no
//! fallback chain: the chosen command is tried exactly once.

use std::ffi::OsString;
use std::path::Path;

use log::info;

use crate::defaults::{editor_override, DEFAULT_EDITOR, DEFAULT_EDITOR_NAME};
use crate::error::{Error, Result};
use crate::runner::{failure_message, CommandRunner};

/// The editor a directory will be opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    /// Name shown to the user.
    pub name: String,
    /// Executable looked up on `PATH`.
    pub command: String,
}

impl Editor {
    /// Pick the editor: the override if it is set and non-empty, otherwise
    /// Visual Studio Code.
    pub fn select(override_command: Option<&str>) -> Self {
        match editor_override(override_command) {
            Some(command) => Self {
                name: command.to_string(),
                command: command.to_string(),
            },
            None => Self::default(),
        }
    }

    /// Whether this is the built-in default rather than an override.
    #[cfg(test)]
    pub fn is_default(&self) -> bool {
        self.command == DEFAULT_EDITOR
    }

    /// Run `<command> <path>` and wait for it to return.
    ///
    /// Editors that detach (like `code`) return immediately; terminal editors
    /// block until the user quits them.
    pub fn open(&self, runner: &dyn CommandRunner, path: &Path) -> Result<()> {
        info!("Opening {} in {}", path.display(), self.name);

        let args: Vec<OsString> = vec![path.as_os_str().to_os_string()];
        let outcome = runner.run(&self.command, &args);

        match failure_message(&self.command, &outcome) {
            None => Ok(()),
            Some(message) => Err(Error::EditorLaunch {
                editor: self.name.clone(),
                path: path.display().to_string(),
                message,
            }),
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            name: DEFAULT_EDITOR_NAME.to_string(),
            command: DEFAULT_EDITOR.to_string(),
        }
    }
}

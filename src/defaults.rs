//! Default values for seda.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

/// Editor command used when no override is given.
pub const DEFAULT_EDITOR: &str = "code";

/// Human-readable name of the default editor.
pub const DEFAULT_EDITOR_NAME: &str = "Visual Studio Code";

/// Environment variable naming an editor to use instead of `code`.
///
/// Read by the CLI through clap's `env` support and passed down as the
/// `--editor` value.
pub const EDITOR_ENV_VAR: &str = "VSCODE_ALTERNATIVE";

/// Returns the editor override, treating an empty value as unset.
pub fn editor_override(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

use std::ffi::OsString;

use log::info;

use crate::error::{Error, Result};
use crate::runner::{failure_message, CommandRunner};

/// Program used for cloning. It is resolved through `PATH`.
pub const GIT_PROGRAM: &str = "git";

/// Suffix removed from the last URL segment when deriving a directory name.
const GIT_SUFFIX: &str = ".git";

/// Derive the local directory name for a repository URL.
///
/// Takes the text after the last `/` and strips one literal trailing `.git`.
/// Nothing else is normalised: a trailing slash gives an empty name and SSH
/// shorthand without a `/` keeps its `host:` prefix.
pub fn repo_name_from_url(url: &str) -> &str {
    let last_segment = url.rsplit('/').next().unwrap_or(url);
    last_segment.strip_suffix(GIT_SUFFIX).unwrap_or(last_segment)
}

/// Clone `url` into `target` with the system git command.
///
/// The child's output goes straight to the terminal, so progress and
/// authentication prompts behave as if git had been run by hand. A failed
/// clone may leave a partial `target` directory, which is not removed.
pub fn clone_repository(runner: &dyn CommandRunner, url: &str, target: &str) -> Result<()> {
    info!("Cloning {} into {}", url, target);

    let args: Vec<OsString> = vec!["clone".into(), url.into(), target.into()];
    let outcome = runner.run(GIT_PROGRAM, &args);

    match failure_message(GIT_PROGRAM, &outcome) {
        None => Ok(()),
        Some(message) => Err(Error::Clone {
            url: url.to_string(),
            target: target.to_string(),
            message,
        }),
    }
}

//! # Code Command Implementation
//!
//! This module implements the `code` subcommand: clone a repository and open
//! the new directory in an editor.
//!
//! ```bash
//! seda code https://github.com/org/sample.git          # clones into ./sample
//! seda code https://github.com/org/sample.git myproj   # clones into ./myproj
//! VSCODE_ALTERNATIVE=cursor seda code https://github.com/org/sample.git
//! ```
//!
//! `git` and the editor write directly to the terminal. If the clone fails the
//! editor is never started, and a partially cloned directory is left in place.

use anyhow::Result;
use clap::Args;

use seda::output::OutputConfig;
use seda::runner::{CommandRunner, DefaultCommandRunner};
use seda::workflow::{self, CloneRequest};

/// Clone a repository and open it in your editor
#[derive(Args, Debug)]
pub struct CodeArgs {
    /// URL of the repository to clone, passed to `git clone` as-is.
    #[arg(value_name = "REPOSITORY_URL")]
    pub repository_url: String,

    /// Directory to clone into.
    ///
    /// Defaults to the last segment of the URL without a trailing `.git`.
    #[arg(value_name = "NEW_NAME")]
    pub new_name: Option<String>,

    /// Editor command used to open the cloned directory.
    ///
    /// Defaults to `code`. An empty value also means `code`.
    #[arg(long, value_name = "CMD", env = "VSCODE_ALTERNATIVE")]
    pub editor: Option<String>,
}

/// Execute the `code` command.
pub fn execute(args: CodeArgs, output: &OutputConfig) -> Result<()> {
    run_with(args, &DefaultCommandRunner, output)
}

fn run_with(args: CodeArgs, runner: &dyn CommandRunner, output: &OutputConfig) -> Result<()> {
    let request = CloneRequest::new(args.repository_url, args.new_name);
    let opened = workflow::clone_and_open(&request, runner, args.editor.as_deref())?;

    println!(
        "{}",
        output.success(&format!(
            "Opened {} in {}",
            opened.path.display(),
            opened.editor.name
        ))
    );
    Ok(())
}

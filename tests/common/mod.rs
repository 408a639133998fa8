//! Shared test utilities for E2E tests.
//!
//! The fixture builds a temporary sandbox with three directories:
//! - `bin/` holds fake `git` and editor scripts that are put first on `PATH`
//! - `logs/` receives one `<program>.args` file per fake invocation
//! - `work/` is the working directory the binary runs in
//!
//! The fake scripts are POSIX shell, so tests using them are unix-only.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! #[serial]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_fake_git().with_fake_editor("code");
//!     fixture.command().args(["code", "https://example.com/org/sample.git"]).assert().success();
//!     assert_eq!(fixture.invocation("git").unwrap()[2], "sample");
//! }
//! ```

use assert_fs::prelude::*;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;
    #[allow(unused_imports)]
    pub use serial_test::serial;

    #[allow(unused_imports)]
    pub use super::scripts;
    pub use super::TestFixture;
}

/// Fake program bodies used by the fixture.
#[allow(dead_code)]
pub mod scripts {
    /// Records its arguments, echoes on both streams like git does, and
    /// creates the target directory unless `FAKE_GIT_EXIT` asks it to fail.
    pub const FAKE_GIT: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$SEDA_TEST_LOGS/git.args"
echo "fake git stdout"
echo "Cloning into '$3'..." >&2
if [ -n "$FAKE_GIT_EXIT" ]; then
    exit "$FAKE_GIT_EXIT"
fi
mkdir -p "$3"
"#;

    /// Records its arguments under the script's own name and exits with
    /// `FAKE_EDITOR_EXIT` (default 0).
    pub const FAKE_EDITOR: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$SEDA_TEST_LOGS/$(basename "$0").args"
exit "${FAKE_EDITOR_EXIT:-0}"
"#;
}

/// A sandbox with fake tools on `PATH` and an empty working directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new fixture with empty `bin/`, `logs/` and `work/` directories.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        for dir in ["bin", "logs", "work"] {
            temp_dir
                .child(dir)
                .create_dir_all()
                .expect("Failed to create fixture directory");
        }
        Self { temp_dir }
    }

    /// Install the fake `git`.
    pub fn with_fake_git(self) -> Self {
        self.with_script("git", scripts::FAKE_GIT)
    }

    /// Install a fake editor called `name`.
    pub fn with_fake_editor(self, name: &str) -> Self {
        self.with_script(name, scripts::FAKE_EDITOR)
    }

    /// Install an executable script in `bin/`.
    pub fn with_script(self, name: &str, body: &str) -> Self {
        let script = self.temp_dir.child("bin").child(name);
        script.write_str(body).expect("Failed to write script");
        make_executable(script.path());
        self
    }

    /// The working directory the binary runs in.
    pub fn work_dir(&self) -> PathBuf {
        self.temp_dir.path().join("work")
    }

    /// The working directory as the child process sees it (symlinks resolved).
    #[allow(dead_code)]
    pub fn canonical_work_dir(&self) -> PathBuf {
        fs::canonicalize(self.work_dir()).expect("Failed to canonicalize work dir")
    }

    /// Arguments a fake program was last called with, one per line, or `None`
    /// if it never ran.
    #[allow(dead_code)]
    pub fn invocation(&self, program: &str) -> Option<Vec<String>> {
        let log = self
            .temp_dir
            .path()
            .join("logs")
            .join(format!("{}.args", program));
        fs::read_to_string(log)
            .ok()
            .map(|content| content.lines().map(str::to_string).collect())
    }

    /// Create a `seda` command running in `work/` with the fake tools first on
    /// `PATH`, colors off and no editor override inherited from the caller.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seda");
        cmd.current_dir(self.work_dir())
            .env("PATH", self.search_path())
            .env("SEDA_TEST_LOGS", self.temp_dir.path().join("logs"))
            .env("NO_COLOR", "1")
            .env_remove("VSCODE_ALTERNATIVE")
            .env_remove("RUST_LOG")
            .env_remove("FAKE_GIT_EXIT")
            .env_remove("FAKE_EDITOR_EXIT");
        cmd
    }

    fn search_path(&self) -> std::ffi::OsString {
        let bin = self.temp_dir.path().join("bin");
        let inherited = env::var_os("PATH").unwrap_or_default();
        env::join_paths(std::iter::once(bin).chain(env::split_paths(&inherited)))
            .expect("Failed to build PATH")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}

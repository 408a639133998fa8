//! Path utilities for seda

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve `target` against the current working directory.
///
/// This is a pure path computation: the target does not have to exist and
/// symlinks are not followed. `.` and `..` components and trailing slashes
/// are removed lexically. An empty target resolves to the working directory
/// itself.
pub fn absolute_path(target: &Path) -> Result<PathBuf> {
    let resolved = if target.as_os_str().is_empty() {
        env::current_dir()
    } else {
        std::path::absolute(target)
    };

    resolved.map(|path| clean(&path)).map_err(|e| Error::Path {
        path: target.display().to_string(),
        message: e.to_string(),
    })
}

/// Lexically normalise an absolute path. `..` at the root stays at the root.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

//! Path resolution: absolute file path, existence check, and the
//! `/`-separated path relative to the repository root.

use std::path::{Component, Path, PathBuf};

use crate::error::Error;

/// Make `path` absolute against `cwd` and collapse `.` and `..` lexically.
/// Symlinks are not resolved.
pub fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize_path(path);
    }
    return normalize_path(&cwd.join(path));
}

/// Collapse `.` and `..` components in a path without touching the filesystem.
/// Preserves leading `..` when there is nothing left to pop, and never pops
/// past the root.
fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        push_normalized_component(&mut components, component);
    }
    return components.iter().collect();
}

/// Handle a single path component during normalization.
fn push_normalized_component<'a>(components: &mut Vec<Component<'a>>, component: Component<'a>) {
    match component {
        Component::CurDir => {},
        Component::ParentDir => match components.last().copied() {
            Some(Component::Normal(_)) => {
                components.pop();
            },
            Some(Component::Prefix(_) | Component::RootDir) => {},
            Some(Component::CurDir | Component::ParentDir) | None => components.push(component),
        },
        other => components.push(other),
    }
    return;
}

/// Path of `file` relative to `root`, joined with `/` on every platform.
/// Both paths are expected to be absolute.
///
/// # Errors
///
/// Returns `Error::OutsideRepository` if `file` is not under `root`.
pub fn relative_slash_path(file: &Path, root: &Path) -> Result<String, Error> {
    let file = normalize_path(file);
    let root = normalize_path(root);
    let Ok(relative) = file.strip_prefix(&root) else {
        return Err(Error::OutsideRepository {
            file: file.clone(),
            root: root.clone(),
        });
    };

    let segments: Vec<String> = relative
        .components()
        .map(|c| return c.as_os_str().to_string_lossy().into_owned())
        .collect();
    return Ok(segments.join("/"));
}

/// Absolutize the argument path and check that the file exists.
///
/// # Errors
///
/// Returns `Error::FileNotFound` if nothing exists at the resolved path,
/// or `Error::AbsolutePath` if the filesystem cannot be queried.
pub fn resolve_existing(cwd: &Path, path: &Path) -> Result<PathBuf, Error> {
    let absolute = absolutize(cwd, path);
    return match absolute.try_exists() {
        Ok(true) => Ok(absolute),
        Ok(false) => Err(Error::FileNotFound { path: path.to_path_buf() }),
        Err(source) => Err(Error::AbsolutePath {
            path: path.to_path_buf(),
            source,
        }),
    };
}

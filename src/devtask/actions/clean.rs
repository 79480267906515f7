//! Workspace cleanup.
//!
//! Unlike the other actions, `clean` does its work in-process. Each target is
//! removed only if it exists; a missing target is skipped silently.
//!
//! Pattern targets are searched for across the whole workspace, except inside
//! virtualenvs and VCS metadata ([`SKIPPED_DIRS`]).

use crate::error::Result;
use crate::steps::{CleanTarget, Step};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, FilterEntry, IntoIter, WalkDir};

/// Directory names the pattern search never descends into.
pub const SKIPPED_DIRS: &[&str] = &[".git", ".venv", "venv"];

pub fn targets() -> Vec<CleanTarget> {
    vec![
        CleanTarget::Path(PathBuf::from(".pytest_cache")),
        CleanTarget::Path(PathBuf::from(".mypy_cache")),
        CleanTarget::Path(PathBuf::from("htmlcov")),
        CleanTarget::Path(PathBuf::from(".coverage")),
        CleanTarget::DirNamed("__pycache__".to_string()),
        CleanTarget::FileExtension("pyc".to_string()),
    ]
}

pub fn steps() -> Vec<Step> {
    vec![Step::remove(
        "Removing caches and coverage artifacts",
        targets(),
    )]
}

/// Removes every existing target under `root` and returns the paths removed, in order.
pub fn remove_targets(root: &Path, targets: &[CleanTarget]) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for target in targets {
        let candidates = match target {
            CleanTarget::Path(relative) => vec![root.join(relative)],
            CleanTarget::DirNamed(name) => find_dirs_named(root, name),
            CleanTarget::FileExtension(ext) => find_files_with_extension(root, ext),
        };

        for path in candidates {
            if remove_path(&path)? {
                tracing::debug!(path = %path.display(), "removed");
                removed.push(path);
            }
        }
    }

    Ok(removed)
}

/// Returns `Ok(false)` when there was nothing to remove.
fn remove_path(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn is_searched(entry: &DirEntry) -> bool {
    let skipped = entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name));
    !skipped
}

fn walk(root: &Path) -> FilterEntry<IntoIter, fn(&DirEntry) -> bool> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(is_searched as fn(&DirEntry) -> bool)
}

fn find_dirs_named(root: &Path, name: &str) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut walker = walk(root);

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_dir() && entry.file_name() == name {
            found.push(entry.into_path());
            // Everything below goes with it.
            walker.skip_current_dir();
        }
    }

    found
}

fn find_files_with_extension(root: &Path, ext: &str) -> Vec<PathBuf> {
    walk(root)
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|e| e == ext))
        .map(|entry| entry.into_path())
        .collect()
}

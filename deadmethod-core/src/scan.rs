//! Unit dump discovery with efficient directory pruning.
//!
//! Performance characteristics:
//! - Early directory pruning via `WalkDir::filter_entry` (O(1) subtree skip)
//! - Parallel file processing via Rayon's `par_bridge`
//! - Minimal work in parallel threads (only extension check)

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories to exclude by default.
const EXCLUDED_DIRS: &[&str] = &["target", ".git", "node_modules", ".cargo"];

/// Checks if a directory entry should be pruned (excluded from traversal).
#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

/// Gathers all `.json` unit dumps recursively starting from the root path.
///
/// Automatically excludes `target/`, `.git/`, `node_modules/`, and
/// `.cargo/`. The result is sorted so downstream output is deterministic.
pub fn gather_unit_files(root: &Path) -> Result<Vec<PathBuf>> {
    gather_unit_files_with_excludes(root, &[])
}

/// Gathers all `.json` unit dumps with custom exclusion patterns.
///
/// Combines default exclusions with custom patterns for efficient subtree
/// skipping.
pub fn gather_unit_files_with_excludes(root: &Path, excludes: &[&str]) -> Result<Vec<PathBuf>> {
    let all_excludes: HashSet<&str> = EXCLUDED_DIRS
        .iter()
        .copied()
        .chain(excludes.iter().copied())
        .collect();

    let mut files = WalkDir::new(root)
        .into_iter()
        // filter_entry prunes entire subtrees before iteration
        .filter_entry(|e| !is_excluded_dir(e, &all_excludes))
        .par_bridge()
        .filter_map(|entry| match entry {
            Ok(e) => {
                let path = e.path();
                if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                    Some(Ok(path.to_path_buf()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(e.into())),
        })
        .collect::<Result<Vec<_>>>()
        .context(format!(
            "Failed to gather unit dumps from {}",
            root.display()
        ))?;

    files.sort();
    Ok(files)
}

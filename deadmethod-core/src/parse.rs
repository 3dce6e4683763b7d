//! Translation unit loading from JSON dumps.
//!
//! Fully deterministic, error-resilient deserialization. The batch loader
//! never fails the whole run for one malformed dump: bad files are logged
//! and skipped so every loadable unit still gets analyzed.

use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

use crate::ast::TranslationUnit;
use crate::error::{DeadmethodError, DeadmethodResult};

/// Maximum dump size to parse (10 MB).
/// Larger files are rejected to prevent memory issues.
const MAX_FILE_SIZE: usize = 10_000_000;

/// Loads one translation unit dump, returning a typed error on failure.
///
/// A unit with no `name` field is named after the file stem.
pub fn load_unit(path: &Path) -> DeadmethodResult<TranslationUnit> {
    let content = fs::read_to_string(path).map_err(|e| DeadmethodError::io(path, e))?;

    if content.len() > MAX_FILE_SIZE {
        return Err(DeadmethodError::parse(
            path,
            format!("dump exceeds {} byte limit", MAX_FILE_SIZE),
        ));
    }

    let mut unit: TranslationUnit = serde_json::from_str(&content)
        .map_err(|e| DeadmethodError::parse_at(path, e.to_string(), e.line(), e.column()))?;

    if unit.name.is_empty() {
        unit.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
    }

    Ok(unit)
}

/// Loads a batch of unit dumps in parallel, skipping files that fail to
/// load.
pub fn load_units(paths: &[PathBuf]) -> Vec<TranslationUnit> {
    paths
        .par_iter()
        .filter_map(|path| match load_unit(path) {
            Ok(unit) => Some(unit),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unloadable unit dump");
                None
            }
        })
        .collect()
}

/// Loads a batch of unit dumps, failing on the first error.
pub fn load_units_strict(paths: &[PathBuf]) -> DeadmethodResult<Vec<TranslationUnit>> {
    paths.iter().map(|path| load_unit(path.as_path())).collect()
}

//! Builder pattern API for deadmethod analysis.
//!
//! Provides a fluent interface over discover → load → analyze:
//!
//! ```rust,ignore
//! use deadmethod_core::prelude::*;
//!
//! let result = Deadmethod::new("/path/to/dumps")
//!     .include_templates(true)
//!     .analyze()?;
//!
//! for unit in &result.units {
//!     for diag in &unit.diagnostics {
//!         println!("{}", diag.message);
//!     }
//! }
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analyze::{analyze_units, UnitAnalysis};
use crate::config::AnalysisConfig;
use crate::parse::load_units;
use crate::scan::gather_unit_files_with_excludes;

/// Builder for configuring unused-private-method analysis.
#[derive(Debug, Clone)]
pub struct Deadmethod {
    /// Root path containing translation unit dumps
    root: PathBuf,

    /// Scan private template methods as well
    include_templates: bool,

    /// Custom excluded directories
    excluded_dirs: Vec<String>,
}

impl Deadmethod {
    /// Create a new analysis builder for the given path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_templates: false,
            excluded_dirs: Vec::new(),
        }
    }

    /// Enable or disable template method scanning (default: off).
    pub fn include_templates(mut self, enabled: bool) -> Self {
        self.include_templates = enabled;
        self
    }

    /// Add directories to exclude from discovery.
    pub fn exclude_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excluded_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Run the analysis and return results.
    pub fn analyze(&self) -> Result<AnalysisResult> {
        let excludes: Vec<&str> = self.excluded_dirs.iter().map(String::as_str).collect();
        let files = gather_unit_files_with_excludes(&self.root, &excludes)
            .context("Failed to gather unit dumps")?;

        let units = load_units(&files);

        let config = AnalysisConfig {
            include_templates: self.include_templates,
        };
        let analyses = analyze_units(&units, &config);

        Ok(AnalysisResult {
            root: self.root.clone(),
            total_files: files.len(),
            loaded_units: units.len(),
            units: analyses,
        })
    }
}

/// Result of running analysis over a batch of units.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Root path that was analyzed
    pub root: PathBuf,

    /// Number of unit dump files discovered
    pub total_files: usize,

    /// Number of units that loaded successfully
    pub loaded_units: usize,

    /// Per-unit analysis outcomes
    pub units: Vec<UnitAnalysis>,
}

impl AnalysisResult {
    /// Check if any warnings were emitted.
    pub fn has_warnings(&self) -> bool {
        self.units.iter().any(|u| !u.diagnostics.is_empty())
    }

    /// Total number of warnings across all units.
    pub fn warning_count(&self) -> usize {
        self.units.iter().map(|u| u.diagnostics.len()).sum()
    }
}

//! Analysis configuration and loading from deadmethod.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// The resolved configuration the core consumes.
///
/// The host resolves flags and files into this before analysis starts;
/// the analysis itself never sees anything that could be invalid.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisConfig {
    /// Scan private template methods as well. Off by default: templates
    /// are often instantiated in headers or other units this analysis
    /// never sees, and an uninstantiated template would show up as a
    /// false positive.
    pub include_templates: bool,
}

/// Main configuration structure for deadmethod.toml.
#[derive(Debug, Deserialize, Default)]
pub struct DeadmethodConfig {
    /// Analysis tuning.
    pub analysis: Option<AnalysisSection>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// `[analysis]` section.
#[derive(Debug, Deserialize, Default)]
pub struct AnalysisSection {
    /// Scan private template methods as well.
    pub include_templates: Option<bool>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

impl DeadmethodConfig {
    /// Resolve the file configuration into the flags the core consumes.
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            include_templates: self
                .analysis
                .as_ref()
                .and_then(|a| a.include_templates)
                .unwrap_or(false),
        }
    }
}

/// Loads configuration from deadmethod.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<DeadmethodConfig>> {
    let path = root.join("deadmethod.toml");
    if !path.exists() {
        return Ok(None);
    }

    Ok(Some(load_config_file(&path)?))
}

/// Loads configuration from an explicitly given file path.
///
/// Unlike [`load_config`], the file must exist: the caller asked for this
/// specific file.
pub fn load_config_file(path: &Path) -> Result<DeadmethodConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let cfg = toml::from_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(cfg)
}

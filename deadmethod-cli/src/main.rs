//! deadmethod CLI - unused private method detector for C++ translation units.
//!
//! Features:
//! - Analyzes JSON translation unit dumps (one file or a directory tree)
//! - Rayon-powered parallel per-unit analysis
//! - Optional deadmethod.toml configuration (auto-discovered or `--config`)
//! - Plain or JSON output, CI-friendly exit codes

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use deadmethod_core::{
    analyze_units, gather_unit_files_with_excludes, init_structured_logging, load_config,
    load_config_file, load_units, log_error, log_info, log_warn, print_json, print_plain,
    AnalysisConfig, DeadmethodConfig, DeadmethodError,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Warn if fully defined classes with unused private methods are found"
)]
pub struct Cli {
    /// Path to a translation unit dump (.json) or a directory of dumps
    #[arg(default_value = ".")]
    path: String,

    /// Scan private template methods as well
    #[arg(long)]
    include_templates: bool,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Config file to use instead of the auto-discovered deadmethod.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory names to exclude from dump discovery
    #[arg(long, num_args = 1..)]
    exclude: Vec<String>,
}

/// Directory the deadmethod.toml is looked up in: the input directory, or
/// the parent when the input is a single dump file.
fn config_root(path: &Path) -> &Path {
    if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path
    }
}

/// Resolves the effective config: an explicit `--config` file (which must
/// exist), or the deadmethod.toml discovered next to the input.
fn resolve_config(explicit: Option<&Path>, input_path: &Path) -> Result<Option<DeadmethodConfig>> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(DeadmethodError::invalid_argument(format!(
                    "config file not found: {}",
                    path.display()
                ))
                .into());
            }
            Ok(Some(load_config_file(path)?))
        }
        None => load_config(config_root(input_path)),
    }
}

/// Whether output should be JSON, from the CLI flag or the config file.
fn wants_json(cli_json: bool, config: Option<&DeadmethodConfig>) -> bool {
    cli_json
        || config
            .and_then(|c| c.output.as_ref())
            .and_then(|o| o.format.as_deref())
            == Some("json")
}

fn main() -> Result<()> {
    std::process::exit(run()?)
}

fn run() -> Result<i32> {
    // Global panic guard: exit with a fixed code instead of unwinding
    // into the host
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] deadmethod internal error: {}", info);
        eprintln!("[PANIC] The process will exit safely with code 2.");
        std::process::exit(2);
    }));

    // Structured logging (JSON to stderr, respects RUST_LOG)
    init_structured_logging();

    let cli = Cli::parse();
    let input_path = Path::new(&cli.path);

    // An explicit --config must resolve; a broken auto-discovered one
    // must not stop the analysis.
    let mut include_templates = cli.include_templates;
    let config = match resolve_config(cli.config.as_deref(), input_path) {
        Ok(cfg) => cfg,
        Err(e) if cli.config.is_some() => {
            log_error(&format!("config load failed: {}", e));
            return Err(e);
        }
        Err(e) => {
            log_warn(&format!("config load failed: {}", e));
            None
        }
    };
    if let Some(cfg) = &config {
        include_templates |= cfg.analysis_config().include_templates;
    }

    // One dump file, or every dump under the directory
    let excludes: Vec<&str> = cli.exclude.iter().map(String::as_str).collect();
    let files: Vec<PathBuf> = if input_path.is_file() {
        vec![input_path.to_path_buf()]
    } else {
        gather_unit_files_with_excludes(input_path, &excludes)
            .with_context(|| format!("Failed to gather unit dumps from: {}", cli.path))?
    };

    if files.is_empty() {
        println!("No translation units found.");
        return Ok(0);
    }

    let units = load_units(&files);
    if units.len() < files.len() {
        log_warn(&format!(
            "skipped {} unloadable unit dump(s)",
            files.len() - units.len()
        ));
    }

    let analysis_config = AnalysisConfig { include_templates };
    let mut results = analyze_units(&units, &analysis_config);
    results.sort_by(|a, b| a.unit.cmp(&b.unit));

    let total: usize = results.iter().map(|r| r.diagnostics.len()).sum();
    log_info(&format!(
        "analyzed {} unit(s), {} warning(s)",
        results.len(),
        total
    ));

    if wants_json(cli.json, config.as_ref()) {
        print_json(&results);
    } else {
        print_plain(&results);
    }

    Ok(if total == 0 { 0 } else { 1 })
}

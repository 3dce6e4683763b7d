//! Diagnostic emission and output formatting.
//!
//! The reporter is the only point where side effects escape the analysis:
//! it walks the surviving candidate set, applies the completeness filter
//! and the constructor/destructor exclusion, and hands one warning per
//! remaining method to a [`DiagnosticSink`]. Ordering carries no meaning,
//! but diagnostics are emitted sorted by location and name so output is
//! stable across runs.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::json;

use crate::analyze::UnitAnalysis;
use crate::ast::{MethodKind, SourceLocation};
use crate::model::{ClassId, EntityIndex, MethodId};
use crate::visibility::is_fully_visible;

/// Diagnostic severity. The analysis only ever warns; it never blocks a
/// build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
}

/// One emitted diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Declaration position, when the frontend supplied one
    pub location: Option<SourceLocation>,
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Fully qualified method name, `Class::method`
    pub qualified_name: String,
}

/// Sink accepting diagnostics as they are emitted.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Emit one warning per confirmed-unused private method.
///
/// Skips methods of classes that are not fully visible (including their
/// friends) and skips constructors and destructors. Returns the number of
/// diagnostics emitted.
pub fn report(
    sink: &mut dyn DiagnosticSink,
    index: &EntityIndex,
    undefined_classes: &HashSet<ClassId>,
    unused_private_methods: &HashSet<MethodId>,
) -> usize {
    let mut survivors: Vec<MethodId> = unused_private_methods
        .iter()
        .copied()
        .filter(|id| {
            let method = index.method(*id);
            method.kind == MethodKind::Plain
                && is_fully_visible(index, undefined_classes, method.class)
        })
        .collect();

    survivors.sort_by(|a, b| {
        let (ma, mb) = (index.method(*a), index.method(*b));
        (&ma.location, index.qualified_name(*a)).cmp(&(&mb.location, index.qualified_name(*b)))
    });

    for id in &survivors {
        let method = index.method(*id);
        let qualified_name = index.qualified_name(*id);
        sink.emit(Diagnostic {
            location: method.location.clone(),
            severity: Severity::Warning,
            message: format!("private method {} seems to be unused", qualified_name),
            qualified_name,
        });
    }

    survivors.len()
}

/// Prints per-unit warnings in plain, compiler-style text.
pub fn print_plain(results: &[UnitAnalysis]) {
    let total: usize = results.iter().map(|r| r.diagnostics.len()).sum();
    if total == 0 {
        println!("No unused private methods found.");
        return;
    }

    println!("UNUSED PRIVATE METHODS ({}):", total);
    for result in results {
        for diag in &result.diagnostics {
            match &diag.location {
                Some(loc) => println!("{}: warning: {}", loc, diag.message),
                None => println!("{}: warning: {}", result.unit, diag.message),
            }
        }
    }
}

/// Prints per-unit warnings in JSON format.
///
/// Falls back to a minimal summary if serialization fails (should never
/// happen for these types, but the output path must not panic).
pub fn print_json(results: &[UnitAnalysis]) {
    let total: usize = results.iter().map(|r| r.diagnostics.len()).sum();
    let payload = json!({
        "warnings": total,
        "units": results.iter().map(|r| {
            json!({
                "unit": r.unit,
                "stats": r.stats,
                "diagnostics": r.diagnostics,
            })
        }).collect::<Vec<_>>(),
    });

    match serde_json::to_string_pretty(&payload) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{{\"warnings\": {}}}", total);
        }
    }
}

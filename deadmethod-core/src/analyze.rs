//! Per-unit analysis driver.
//!
//! One unit's analysis is strictly sequential: collection runs to
//! completion, then usage scanning, then reporting. The candidate set must
//! be complete before any pruning, and pruning complete before any
//! filtering. All state is owned by the call; nothing is shared, so
//! independent units can run on Rayon workers without synchronization.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::ast::TranslationUnit;
use crate::collect::{collect_declarations, CollectionResult};
use crate::config::AnalysisConfig;
use crate::report::{report, Diagnostic};
use crate::usage::scan_usages;

/// Outcome of analyzing one translation unit.
#[derive(Debug, Clone)]
pub struct UnitAnalysis {
    /// Unit name, as loaded
    pub unit: String,
    /// Emitted warnings, in stable order
    pub diagnostics: Vec<Diagnostic>,
    /// Pass statistics
    pub stats: UnitStats,
}

/// Statistics about one unit's analysis passes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UnitStats {
    /// Distinct class entities seen
    pub classes: usize,
    /// Classes incompletely defined in this unit
    pub undefined_classes: usize,
    /// Private methods that entered the candidate set
    pub private_methods: usize,
    /// Candidates still unreferenced after the usage pass
    pub unused_after_scan: usize,
    /// Warnings actually emitted
    pub reported: usize,
}

/// Analyze one translation unit: collect, scan, report.
pub fn analyze_unit(unit: &TranslationUnit, config: &AnalysisConfig) -> UnitAnalysis {
    let CollectionResult {
        index,
        undefined_classes,
        mut unused_private_methods,
    } = collect_declarations(unit, config);

    let private_methods = unused_private_methods.len();
    debug!(
        unit = %unit.name,
        undefined_classes = undefined_classes.len(),
        private_methods,
        "declaration pass complete"
    );

    scan_usages(unit, &index, &mut unused_private_methods);
    let unused_after_scan = unused_private_methods.len();

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let reported = report(
        &mut diagnostics,
        &index,
        &undefined_classes,
        &unused_private_methods,
    );

    debug!(unit = %unit.name, unused_after_scan, reported, "analysis complete");

    UnitAnalysis {
        unit: unit.name.clone(),
        diagnostics,
        stats: UnitStats {
            classes: index.class_count(),
            undefined_classes: undefined_classes.len(),
            private_methods,
            unused_after_scan,
            reported,
        },
    }
}

/// Analyze independent units in parallel.
///
/// Each unit gets its own index and working sets; results come back in
/// input order.
pub fn analyze_units(units: &[TranslationUnit], config: &AnalysisConfig) -> Vec<UnitAnalysis> {
    units
        .par_iter()
        .map(|unit| analyze_unit(unit, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Access, ClassDecl, Decl, Expr, MethodDecl, MethodKind, MethodTarget};

    fn simple_unit(name: &str, used: bool) -> TranslationUnit {
        let body = if used {
            Some(vec![Expr::MemberCall {
                target: Some(MethodTarget {
                    class: "Box".into(),
                    method: "size".into(),
                }),
                args: Vec::new(),
            }])
        } else {
            Some(Vec::new())
        };

        TranslationUnit {
            name: name.into(),
            decls: vec![Decl::Class(ClassDecl {
                name: "Box".into(),
                has_definition: true,
                members: vec![
                    MethodDecl {
                        name: "size".into(),
                        access: Access::Private,
                        kind: MethodKind::Plain,
                        is_template: false,
                        body: Some(Vec::new()),
                        location: None,
                    },
                    MethodDecl {
                        name: "touch".into(),
                        access: Access::Public,
                        kind: MethodKind::Plain,
                        is_template: false,
                        body,
                        location: None,
                    },
                ],
                friends: Vec::new(),
            })],
        }
    }

    #[test]
    fn test_analyze_unit_reports_unused() {
        let result = analyze_unit(&simple_unit("a", false), &AnalysisConfig::default());
        assert_eq!(result.stats.private_methods, 1);
        assert_eq!(result.stats.reported, 1);
        assert_eq!(result.diagnostics[0].qualified_name, "Box::size");
    }

    #[test]
    fn test_analyze_unit_clean_when_used() {
        let result = analyze_unit(&simple_unit("a", true), &AnalysisConfig::default());
        assert_eq!(result.stats.unused_after_scan, 0);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_units_are_independent_and_ordered() {
        let units = vec![
            simple_unit("first", false),
            simple_unit("second", true),
            simple_unit("third", false),
        ];
        let results = analyze_units(&units, &AnalysisConfig::default());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].unit, "first");
        assert_eq!(results[1].unit, "second");
        assert_eq!(results[2].unit, "third");
        assert_eq!(results[0].stats.reported, 1);
        assert_eq!(results[1].stats.reported, 0);
        assert_eq!(results[2].stats.reported, 1);
    }
}

//! deadmethod-core: unused private method detection for C++ translation units.
//!
//! This library analyzes one translation unit's already-built AST to find
//! private class methods that are declared but never referenced anywhere
//! within that unit, reporting each as a warning - unless the enclosing
//! class (or any of its befriended functions/classes) is not fully visible
//! in the unit, in which case no safe conclusion can be drawn and the
//! method is suppressed.
//!
//! # How it works
//!
//! Analysis of one unit is three strictly sequential steps:
//!
//! 1. **Collect** ([`collect`]): one traversal over every declaration,
//!    merging redeclarations into canonical entities and producing the set
//!    of incompletely defined classes and the set of private-method
//!    candidates.
//! 2. **Scan** ([`usage`]): a second full traversal over every body,
//!    pruning a candidate for every expression that references it - calls,
//!    qualified calls, bare references, member accesses.
//! 3. **Report** ([`report`]): filter the survivors through the
//!    completeness test ([`visibility`]) and the constructor/destructor
//!    exclusion, then emit one warning per method.
//!
//! Independent units share no state and are analyzed in parallel.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use deadmethod_core::prelude::*;
//!
//! let result = Deadmethod::new("/path/to/dumps")
//!     .include_templates(false)
//!     .analyze()?;
//!
//! for unit in &result.units {
//!     for diag in &unit.diagnostics {
//!         println!("{}", diag.message);
//!     }
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`ast`]: translation unit AST, the input boundary
//! - [`model`]: canonical identities and entity records
//! - [`collect`]: declaration collection pass
//! - [`usage`]: usage scanning pass
//! - [`visibility`]: "fully defined, including friends" test
//! - [`report`]: diagnostic emission and output formatting
//! - [`analyze`]: per-unit driver and parallel batch analysis
//! - [`parse`]: loading unit dumps from JSON
//! - [`scan`]: unit dump discovery
//! - [`builder`]: fluent analysis API
//! - [`config`]: configuration surface
//! - [`error`]: typed error handling

pub mod analyze;
pub mod ast;
pub mod builder;
pub mod collect;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod parse;
pub mod prelude;
pub mod report;
pub mod scan;
pub mod usage;
pub mod visibility;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{DeadmethodError, DeadmethodResult, IoResultExt};

// Builder API
pub use builder::{AnalysisResult, Deadmethod};

// AST input boundary
pub use ast::{
    Access, ClassDecl, Decl, Expr, FriendDecl, FunctionDecl, MethodDecl, MethodImpl,
    MethodKind, MethodTarget, SourceLocation, TranslationUnit,
};

// Canonical declaration model
pub use model::{
    ClassId, ClassRecord, EntityIndex, FriendRef, FunctionId, FunctionRecord, MethodId,
    MethodRecord,
};

// Analysis passes
pub use analyze::{analyze_unit, analyze_units, UnitAnalysis, UnitStats};
pub use collect::{collect_declarations, CollectionResult};
pub use usage::scan_usages;
pub use visibility::is_fully_visible;

// Diagnostics and output
pub use report::{print_json, print_plain, report, Diagnostic, DiagnosticSink, Severity};

// Configuration
pub use config::{load_config, load_config_file, AnalysisConfig, DeadmethodConfig, OutputConfig};

// Logging
pub use logging::{init_structured_logging, log_error, log_info, log_warn};

// Loading and discovery
pub use parse::{load_unit, load_units, load_units_strict};
pub use scan::{gather_unit_files, gather_unit_files_with_excludes};

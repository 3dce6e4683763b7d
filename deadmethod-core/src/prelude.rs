//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use deadmethod_core::prelude::*;
//! ```

// Core analysis
pub use crate::analyze::{analyze_unit, analyze_units, UnitAnalysis, UnitStats};
pub use crate::collect::{collect_declarations, CollectionResult};
pub use crate::usage::scan_usages;
pub use crate::visibility::is_fully_visible;

// AST and model types
pub use crate::ast::{Access, Decl, Expr, MethodKind, SourceLocation, TranslationUnit};
pub use crate::model::{ClassId, EntityIndex, FunctionId, MethodId};

// Diagnostics
pub use crate::report::{report, Diagnostic, DiagnosticSink, Severity};

// Error types
pub use crate::error::{DeadmethodError, DeadmethodResult};

// Configuration
pub use crate::config::{load_config, load_config_file, AnalysisConfig, DeadmethodConfig};

// Loading and discovery
pub use crate::parse::{load_unit, load_units};
pub use crate::scan::gather_unit_files;

// Builder API
pub use crate::builder::{AnalysisResult, Deadmethod};

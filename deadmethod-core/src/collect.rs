//! Declaration collection - the first of the two analysis passes.
//!
//! One traversal over every declaration in the unit, accumulating canonical
//! entity records, then deriving the two working sets:
//!
//! - `undefined_classes`: classes with no definition body, or owning at
//!   least one method without a body anywhere in the unit
//! - `unused_private_methods`: every private method, before any usage has
//!   been observed
//!
//! Deriving the sets from the merged records (rather than mid-walk) keeps
//! them correct regardless of declaration order: an out-of-line body may
//! lexically precede or follow its in-class declaration.
//!
//! This pass emits no diagnostics and never fails: unresolved names are
//! skipped at the point of encounter.

use std::collections::HashSet;

use crate::ast::{ClassDecl, Decl, FriendDecl, TranslationUnit};
use crate::config::AnalysisConfig;
use crate::model::{ClassId, EntityIndex, FriendRef, MethodId};

/// Output of the collection pass, owned by the caller of one unit's
/// analysis.
#[derive(Debug)]
pub struct CollectionResult {
    /// Canonical entity records for the unit
    pub index: EntityIndex,
    /// Classes known to be incompletely defined in this unit
    pub undefined_classes: HashSet<ClassId>,
    /// Private methods not yet observed to be referenced
    pub unused_private_methods: HashSet<MethodId>,
}

/// Visit every declaration in the unit exactly once and build the
/// candidate sets for the usage scanner.
pub fn collect_declarations(unit: &TranslationUnit, config: &AnalysisConfig) -> CollectionResult {
    let mut index = EntityIndex::new();

    for decl in &unit.decls {
        match decl {
            Decl::Class(class) => collect_class(&mut index, class),
            Decl::Function(function) => {
                if let Some(id) = index.intern_function(&function.name) {
                    if function.body.is_some() {
                        index.mark_function_body(id);
                    }
                }
            }
            Decl::MethodImpl(imp) => {
                // An out-of-line body: merge into the canonical method.
                // The class may not have been declared yet at this point.
                if let Some(class_id) = index.intern_class(&imp.class) {
                    if let Some(method_id) = index.intern_method(class_id, &imp.method) {
                        index.mark_method_body(method_id);
                    }
                }
            }
        }
    }

    let mut undefined_classes = HashSet::new();
    let mut unused_private_methods = HashSet::new();

    for (id, method) in index.methods() {
        if !method.has_body {
            undefined_classes.insert(method.class);
        }
        if method.access == crate::ast::Access::Private
            && (!method.is_template || config.include_templates)
        {
            unused_private_methods.insert(id);
        }
    }

    // Pure forward declarations never carry methods, so they are marked
    // undefined directly.
    for (id, class) in index.classes() {
        if !class.has_definition {
            undefined_classes.insert(id);
        }
    }

    CollectionResult {
        index,
        undefined_classes,
        unused_private_methods,
    }
}

fn collect_class(index: &mut EntityIndex, class: &ClassDecl) {
    let Some(class_id) = index.intern_class(&class.name) else {
        return;
    };

    if class.has_definition {
        index.mark_class_defined(class_id);
    }

    for member in &class.members {
        let Some(method_id) = index.intern_method(class_id, &member.name) else {
            continue;
        };
        index.record_method_decl(
            method_id,
            member.access,
            member.kind,
            member.is_template,
            member.location.clone(),
        );
        if member.body.is_some() {
            index.mark_method_body(method_id);
        }
    }

    for friend in &class.friends {
        match friend {
            FriendDecl::Function { name } => {
                if let Some(id) = index.intern_function(name) {
                    index.add_friend(class_id, FriendRef::Function(id));
                }
            }
            FriendDecl::Class { name } => {
                if let Some(id) = index.intern_class(name) {
                    index.add_friend(class_id, FriendRef::Class(id));
                }
            }
            FriendDecl::Unresolved => {}
        }
    }
}

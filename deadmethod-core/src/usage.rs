//! Usage scanning - the second analysis pass.
//!
//! A full second traversal over every body in the unit, pruning the
//! private-method candidate set for every observed reference:
//!
//! - calls through a member access: `obj.method()`, `ptr->method()`
//! - qualified calls: `Class::method()`
//! - bare references: `&Class::method`
//! - member accesses resolving to a method without a call
//!
//! The union is deliberately conservative: any syntactic form that denotes
//! "this method is used" removes the entry, whether or not the method is
//! then actually called. Over-approximating usage trades precision for
//! zero false positives.
//!
//! Unresolved targets (dependent expressions, unresolved overloads) and
//! names unknown to the index are skipped silently; one irresolvable node
//! never aborts the traversal. The scanner only ever removes entries.

use std::collections::HashSet;

use crate::ast::{Decl, Expr, MethodTarget, TranslationUnit};
use crate::model::{EntityIndex, MethodId};

/// Remove from `unused` every method whose canonical identity is the
/// target of a reference anywhere in the unit.
///
/// Must run only after collection has completed: a use can lexically
/// precede its declaration, so the candidate set has to be complete
/// before pruning starts.
pub fn scan_usages(unit: &TranslationUnit, index: &EntityIndex, unused: &mut HashSet<MethodId>) {
    let mut pruner = ReferencePruner { index, unused };

    for decl in &unit.decls {
        match decl {
            Decl::Class(class) => {
                for member in &class.members {
                    if let Some(body) = &member.body {
                        pruner.visit_all(body);
                    }
                }
            }
            Decl::Function(function) => {
                if let Some(body) = &function.body {
                    pruner.visit_all(body);
                }
            }
            Decl::MethodImpl(imp) => pruner.visit_all(&imp.body),
        }
    }
}

/// Expression walker that prunes referenced methods from the working set.
struct ReferencePruner<'a> {
    index: &'a EntityIndex,
    unused: &'a mut HashSet<MethodId>,
}

impl ReferencePruner<'_> {
    fn visit_all(&mut self, exprs: &[Expr]) {
        for expr in exprs {
            self.visit_expr(expr);
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::MemberCall { target, args } | Expr::QualifiedCall { target, args } => {
                self.prune(target);
                self.visit_all(args);
            }
            Expr::MethodRef { target } | Expr::MemberAccess { target } => self.prune(target),
            Expr::Call { callee: _, args } => self.visit_all(args),
            Expr::Group { children } => self.visit_all(children),
            Expr::Unresolved => {}
        }
    }

    fn prune(&mut self, target: &Option<MethodTarget>) {
        let Some(target) = target else {
            return;
        };
        if let Some(id) = self.index.lookup_method(&target.class, &target.method) {
            self.unused.remove(&id);
        }
    }
}

//! Canonical declaration model - stable identities for classes, methods,
//! and free functions.
//!
//! One logical entity can appear as many syntactic declarations in a unit
//! (forward declaration plus definition, in-class declaration plus
//! out-of-line body). The [`EntityIndex`] merges them: the first time an
//! entity is seen it is assigned an id, every later redeclaration resolves
//! to the same id, and record attributes only ever accumulate. The
//! collector and the usage scanner both go through this index, so a
//! reference found via one declaration form prunes an entry recorded via
//! another.

use std::collections::HashMap;

use crate::ast::{Access, MethodKind, SourceLocation};

/// Canonical identity of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

/// Canonical identity of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId(u32);

/// Canonical identity of a free function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionId(u32);

/// A resolved friend declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendRef {
    Function(FunctionId),
    Class(ClassId),
}

/// Accumulated state of one class entity.
#[derive(Debug, Clone)]
pub struct ClassRecord {
    /// Qualified class name (for diagnostics)
    pub name: String,
    /// Whether a definition body was seen anywhere in the unit
    pub has_definition: bool,
    /// Resolved friend declarations, in source order, deduplicated
    pub friends: Vec<FriendRef>,
}

/// Accumulated state of one method entity.
#[derive(Debug, Clone)]
pub struct MethodRecord {
    /// Owning class
    pub class: ClassId,
    /// Method name
    pub name: String,
    /// Accessibility from the in-class declaration
    pub access: Access,
    /// Ordinary method, constructor, or destructor
    pub kind: MethodKind,
    /// Whether any declaration of the method is a template
    pub is_template: bool,
    /// Whether a body was seen anywhere in the unit (inline or out-of-line)
    pub has_body: bool,
    /// Position of the in-class declaration, when known
    pub location: Option<SourceLocation>,
}

/// Accumulated state of one free function entity.
#[derive(Debug, Clone)]
pub struct FunctionRecord {
    /// Qualified function name
    pub name: String,
    /// Whether a body was seen anywhere in the unit
    pub has_body: bool,
}

/// Identity-normalization store for one unit's analysis.
///
/// Interning is a pure lookup-or-insert: classes and free functions are
/// keyed by qualified name, methods by `(owning class, method name)`.
/// Empty names stand for unresolved canonical types and are never interned.
#[derive(Debug, Default)]
pub struct EntityIndex {
    classes: Vec<ClassRecord>,
    class_ids: HashMap<String, ClassId>,
    methods: Vec<MethodRecord>,
    method_ids: HashMap<(ClassId, String), MethodId>,
    functions: Vec<FunctionRecord>,
    function_ids: HashMap<String, FunctionId>,
}

impl EntityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a class name to its canonical id, creating the record on
    /// first sight. Returns `None` for an unresolved (empty) name.
    pub fn intern_class(&mut self, name: &str) -> Option<ClassId> {
        if name.is_empty() {
            return None;
        }
        if let Some(id) = self.class_ids.get(name) {
            return Some(*id);
        }
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(ClassRecord {
            name: name.to_string(),
            has_definition: false,
            friends: Vec::new(),
        });
        self.class_ids.insert(name.to_string(), id);
        Some(id)
    }

    /// Resolve a method to its canonical id, creating the record on first
    /// sight. Returns `None` for an unresolved (empty) name.
    pub fn intern_method(&mut self, class: ClassId, name: &str) -> Option<MethodId> {
        if name.is_empty() {
            return None;
        }
        let key = (class, name.to_string());
        if let Some(id) = self.method_ids.get(&key) {
            return Some(*id);
        }
        let id = MethodId(self.methods.len() as u32);
        self.methods.push(MethodRecord {
            class,
            name: name.to_string(),
            access: Access::Public,
            kind: MethodKind::Plain,
            is_template: false,
            has_body: false,
            location: None,
        });
        self.method_ids.insert(key, id);
        Some(id)
    }

    /// Resolve a free function name to its canonical id, creating the
    /// record on first sight. Returns `None` for an unresolved name.
    pub fn intern_function(&mut self, name: &str) -> Option<FunctionId> {
        if name.is_empty() {
            return None;
        }
        if let Some(id) = self.function_ids.get(name) {
            return Some(*id);
        }
        let id = FunctionId(self.functions.len() as u32);
        self.functions.push(FunctionRecord {
            name: name.to_string(),
            has_body: false,
        });
        self.function_ids.insert(name.to_string(), id);
        Some(id)
    }

    /// Mark a class as having a definition body in this unit.
    pub fn mark_class_defined(&mut self, id: ClassId) {
        self.classes[id.0 as usize].has_definition = true;
    }

    /// Record a friend declaration on a class, keeping source order and
    /// dropping duplicates.
    pub fn add_friend(&mut self, id: ClassId, friend: FriendRef) {
        let friends = &mut self.classes[id.0 as usize].friends;
        if !friends.contains(&friend) {
            friends.push(friend);
        }
    }

    /// Merge the attributes of one in-class method declaration into the
    /// canonical record. Body presence and template-ness accumulate; the
    /// first recorded location wins.
    pub fn record_method_decl(
        &mut self,
        id: MethodId,
        access: Access,
        kind: MethodKind,
        is_template: bool,
        location: Option<SourceLocation>,
    ) {
        let record = &mut self.methods[id.0 as usize];
        record.access = access;
        record.kind = kind;
        record.is_template |= is_template;
        if record.location.is_none() {
            record.location = location;
        }
    }

    /// Mark a method as having a body somewhere in this unit.
    pub fn mark_method_body(&mut self, id: MethodId) {
        self.methods[id.0 as usize].has_body = true;
    }

    /// Mark a free function as having a body in this unit.
    pub fn mark_function_body(&mut self, id: FunctionId) {
        self.functions[id.0 as usize].has_body = true;
    }

    /// Look up an already-interned class by name.
    pub fn lookup_class(&self, name: &str) -> Option<ClassId> {
        self.class_ids.get(name).copied()
    }

    /// Look up an already-interned method by owning class and name.
    pub fn lookup_method(&self, class: &str, method: &str) -> Option<MethodId> {
        let class_id = self.lookup_class(class)?;
        self.method_ids.get(&(class_id, method.to_string())).copied()
    }

    /// Look up an already-interned free function by name.
    pub fn lookup_function(&self, name: &str) -> Option<FunctionId> {
        self.function_ids.get(name).copied()
    }

    pub fn class(&self, id: ClassId) -> &ClassRecord {
        &self.classes[id.0 as usize]
    }

    pub fn method(&self, id: MethodId) -> &MethodRecord {
        &self.methods[id.0 as usize]
    }

    pub fn function(&self, id: FunctionId) -> &FunctionRecord {
        &self.functions[id.0 as usize]
    }

    /// Iterate all class records with their ids.
    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassRecord)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, r)| (ClassId(i as u32), r))
    }

    /// Iterate all method records with their ids.
    pub fn methods(&self) -> impl Iterator<Item = (MethodId, &MethodRecord)> {
        self.methods
            .iter()
            .enumerate()
            .map(|(i, r)| (MethodId(i as u32), r))
    }

    /// Fully qualified method name, `Class::method`.
    pub fn qualified_name(&self, id: MethodId) -> String {
        let method = self.method(id);
        format!("{}::{}", self.class(method.class).name, method.name)
    }

    /// Number of distinct class entities seen.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_class_is_idempotent() {
        let mut index = EntityIndex::new();
        let a = index.intern_class("Box").unwrap();
        let b = index.intern_class("Box").unwrap();
        assert_eq!(a, b);
        assert_eq!(index.class_count(), 1);
    }

    #[test]
    fn test_intern_rejects_unresolved_names() {
        let mut index = EntityIndex::new();
        assert!(index.intern_class("").is_none());
        assert!(index.intern_function("").is_none());
        let class = index.intern_class("Box").unwrap();
        assert!(index.intern_method(class, "").is_none());
    }

    #[test]
    fn test_method_identity_merges_redeclarations() {
        let mut index = EntityIndex::new();
        let class = index.intern_class("Box").unwrap();

        // In-class declaration: private, no body
        let declared = index.intern_method(class, "size").unwrap();
        index.record_method_decl(declared, Access::Private, MethodKind::Plain, false, None);

        // Out-of-line definition resolves to the same id
        let defined = index.intern_method(class, "size").unwrap();
        index.mark_method_body(defined);

        assert_eq!(declared, defined);
        let record = index.method(declared);
        assert_eq!(record.access, Access::Private);
        assert!(record.has_body);
    }

    #[test]
    fn test_methods_with_same_name_on_different_classes_are_distinct() {
        let mut index = EntityIndex::new();
        let a = index.intern_class("A").unwrap();
        let b = index.intern_class("B").unwrap();
        let m1 = index.intern_method(a, "run").unwrap();
        let m2 = index.intern_method(b, "run").unwrap();
        assert_ne!(m1, m2);
    }

    #[test]
    fn test_friends_deduplicate_but_keep_order() {
        let mut index = EntityIndex::new();
        let class = index.intern_class("Vault").unwrap();
        let open = index.intern_function("open").unwrap();
        let key = index.intern_class("Key").unwrap();

        index.add_friend(class, FriendRef::Function(open));
        index.add_friend(class, FriendRef::Class(key));
        index.add_friend(class, FriendRef::Function(open));

        assert_eq!(
            index.class(class).friends,
            vec![FriendRef::Function(open), FriendRef::Class(key)]
        );
    }

    #[test]
    fn test_qualified_name() {
        let mut index = EntityIndex::new();
        let class = index.intern_class("Box").unwrap();
        let method = index.intern_method(class, "size").unwrap();
        assert_eq!(index.qualified_name(method), "Box::size");
    }
}

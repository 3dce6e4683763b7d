//! Translation unit AST - the input boundary of the analysis.
//!
//! The core never parses C++ itself. It receives one translation unit as an
//! already-built, semantically-resolved tree, typically deserialized from a
//! JSON dump produced by a compiler frontend. Everything the analysis needs
//! is explicit in the tree:
//!
//! - class declarations with definition-body presence and friend lists
//! - method declarations with accessibility, body presence, and
//!   constructor/destructor/template flags
//! - every expression form that can reference a method
//!
//! Node kinds are closed sum types; there is no open visitor hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source position of a declaration, carried through to diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Source file the declaration appeared in
    pub file: String,
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed)
    pub column: u32,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Member accessibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Public,
    Protected,
    Private,
}

/// Whether a method is an ordinary method or a special member.
///
/// Constructors and destructors are collected like any other method and
/// only excluded when diagnostics are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[default]
    Plain,
    Constructor,
    Destructor,
}

/// One self-contained translation unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationUnit {
    /// Unit name for reporting (filled from the file stem when loaded from disk)
    #[serde(default)]
    pub name: String,
    /// Top-level declarations in source order
    #[serde(default)]
    pub decls: Vec<Decl>,
}

/// A top-level declaration node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decl {
    /// Class or struct declaration (forward declaration or definition)
    Class(ClassDecl),
    /// Free function declaration or definition
    Function(FunctionDecl),
    /// Out-of-line method definition: `void Class::method() { ... }`
    MethodImpl(MethodImpl),
}

/// A class/struct declaration.
///
/// The same class may appear several times in one unit (forward declaration
/// plus definition); canonicalization merges them into one entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Qualified class name
    pub name: String,
    /// False for a pure forward declaration (`class Box;`)
    #[serde(default)]
    pub has_definition: bool,
    /// Methods declared in the class body
    #[serde(default)]
    pub members: Vec<MethodDecl>,
    /// Friend declarations in source order
    #[serde(default)]
    pub friends: Vec<FriendDecl>,
}

/// A method declared inside a class body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDecl {
    /// Method name
    pub name: String,
    /// Accessibility of the declaration
    pub access: Access,
    /// Ordinary method, constructor, or destructor
    #[serde(default)]
    pub kind: MethodKind,
    /// True for template methods
    #[serde(default)]
    pub is_template: bool,
    /// Inline body, when the method is defined inside the class
    #[serde(default)]
    pub body: Option<Vec<Expr>>,
    /// Declaration position, for diagnostics
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

/// A free function. Relevant to the analysis only when it has a body or
/// appears as a friend of a class, but its body is still scanned for
/// method references either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// Qualified function name
    pub name: String,
    /// Body, when this declaration is a definition
    #[serde(default)]
    pub body: Option<Vec<Expr>>,
}

/// An out-of-line method definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodImpl {
    /// Class the method belongs to
    pub class: String,
    /// Method name
    pub method: String,
    /// Definition body
    #[serde(default)]
    pub body: Vec<Expr>,
}

/// A friend declaration inside a class body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FriendDecl {
    /// `friend void open(Vault&);`
    Function { name: String },
    /// `friend class Key;`
    Class { name: String },
    /// Templated friend or otherwise unresolvable target; ignored by the
    /// completeness check
    Unresolved,
}

/// Resolved target of a method-denoting expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodTarget {
    /// Owning class name
    pub class: String,
    /// Method name
    pub method: String,
}

/// An expression node, reduced to the forms the usage scanner cares about.
///
/// This is the closed set of reference forms counted as usage. Any form
/// that denotes "this method is used" carries a [`MethodTarget`]; a `None`
/// target means the frontend could not resolve the reference (dependent
/// expression, unresolved overload) and the node is skipped silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// Call through a member access: `obj.method(...)` / `ptr->method(...)`
    MemberCall {
        target: Option<MethodTarget>,
        #[serde(default)]
        args: Vec<Expr>,
    },
    /// Qualified call: `Class::method(...)`
    QualifiedCall {
        target: Option<MethodTarget>,
        #[serde(default)]
        args: Vec<Expr>,
    },
    /// Bare reference to a method as a value: `&Class::method`
    MethodRef { target: Option<MethodTarget> },
    /// Member access resolving to a method without being called
    MemberAccess { target: Option<MethodTarget> },
    /// Free function call; traversed only for nested references in arguments
    Call {
        #[serde(default)]
        callee: Option<String>,
        #[serde(default)]
        args: Vec<Expr>,
    },
    /// Any other expression that only contributes child expressions
    Group {
        #[serde(default)]
        children: Vec<Expr>,
    },
    /// Dependent or otherwise unclassifiable node
    Unresolved,
}

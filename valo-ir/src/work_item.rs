//! The per-declaration descriptor consumed by the assembler.

use serde::Serialize;

use crate::{Config, UnderlyingType};

/// Shape of the declaration the generated partial completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeKind {
    Struct,
    Class,
}

/// Modifiers of the originating declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub kind: TypeKind,
    /// Accessibility keyword, e.g. `public` or `internal`.
    pub accessibility: String,
    /// `readonly` modifier; structs only.
    pub is_readonly: bool,
    /// `sealed` modifier; classes only.
    pub is_sealed: bool,
}

impl Declaration {
    pub fn public_struct() -> Self {
        Self {
            kind: TypeKind::Struct,
            accessibility: "public".to_string(),
            is_readonly: true,
            is_sealed: false,
        }
    }

    pub fn public_class() -> Self {
        Self {
            kind: TypeKind::Class,
            accessibility: "public".to_string(),
            is_readonly: false,
            is_sealed: false,
        }
    }

    /// The full modifier list for the generated partial, e.g.
    /// `public readonly partial struct`.
    pub fn modifiers(&self) -> String {
        let mut parts = vec![self.accessibility.as_str()];
        match self.kind {
            TypeKind::Struct => {
                if self.is_readonly {
                    parts.push("readonly");
                }
                parts.push("partial");
                parts.push("struct");
            }
            TypeKind::Class => {
                if self.is_sealed {
                    parts.push("sealed");
                }
                parts.push("partial");
                parts.push("class");
            }
        }
        parts.join(" ")
    }

    /// Instance-member qualifier: struct members are `readonly`, class
    /// members carry no extra qualifier.
    pub fn member_qualifier(&self) -> &'static str {
        match self.kind {
            TypeKind::Struct => "readonly ",
            TypeKind::Class => "",
        }
    }
}

/// A declared named instance: a compile-time constant of the wrapper type.
///
/// The value is host-language expression text; instances are built through
/// the private value constructor and deliberately bypass validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instance {
    pub name: String,
    pub value: String,
}

/// One wrapper-type declaration plus its resolved configuration.
///
/// Immutable once built; exactly one exists per declaration per generation
/// pass, and it is discarded when the pass completes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkItem {
    /// Identifier of the type being synthesized.
    pub vo_type_name: String,
    /// Enclosing scope path; empty for the global scope.
    pub full_namespace: String,
    pub underlying: UnderlyingType,
    pub config: Config,
    /// Exception type thrown when a constructed value fails validation or
    /// is used uninitialized.
    pub validation_exception_full_name: String,
    pub instances: Vec<Instance>,
}

impl WorkItem {
    /// Fully-qualified name of the underlying type for generated source.
    pub fn underlying_type_full_name(&self) -> &str {
        &self.underlying.full_name
    }
}

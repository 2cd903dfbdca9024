//! Test utilities for the analyzer.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests. It provides an in-memory [`SemanticModel`] that tests
//! populate by hand, plus a small factory for building syntax nodes with
//! unique spans.

use std::collections::HashMap;

use crate::semantics::{
    QUERYABLE_COLLECTION_METADATA_NAME, SemanticModel, SpecialType, TypeDescription, TypeId,
};
use crate::syntax::{BinaryOp, Expr, Span};
use valo_ir::WRAPPER_MARKER_ATTRIBUTE;

/// Hand-populated semantic model. Expression types are keyed by span, so
/// every node a test wants typed must carry a distinct span.
#[derive(Debug, Default)]
pub struct FixtureModel {
    types: Vec<TypeDescription>,
    expr_types: HashMap<Span, TypeId>,
    by_metadata_name: HashMap<String, TypeId>,
}

impl FixtureModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type and index it by its full name.
    pub fn add_type(&mut self, description: TypeDescription) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.by_metadata_name
            .insert(description.full_name.clone(), id);
        self.types.push(description);
        id
    }

    /// Record the static type of the expression at `span`.
    pub fn set_expr_type(&mut self, span: Span, ty: TypeId) {
        self.expr_types.insert(span, ty);
    }

    /// Register `System.Int32`.
    pub fn add_int32(&mut self) -> TypeId {
        self.add_type(TypeDescription {
            name: "Int32".to_string(),
            full_name: "System.Int32".to_string(),
            special: SpecialType::Int32,
            base_type: None,
            attributes: vec![],
        })
    }

    /// Register a marker-attributed wrapper type.
    pub fn add_wrapper(&mut self, name: &str) -> TypeId {
        self.add_type(TypeDescription {
            name: name.to_string(),
            full_name: format!("Acme.Domain.{name}"),
            special: SpecialType::None,
            base_type: None,
            attributes: vec![WRAPPER_MARKER_ATTRIBUTE.to_string()],
        })
    }

    /// Register the mapping layer's queryable-collection type.
    pub fn add_queryable_collection(&mut self) -> TypeId {
        self.add_type(TypeDescription {
            name: "DbSet".to_string(),
            full_name: QUERYABLE_COLLECTION_METADATA_NAME.to_string(),
            special: SpecialType::None,
            base_type: None,
            attributes: vec![],
        })
    }

    /// Register an unremarkable named type, optionally derived from `base`.
    pub fn add_plain(&mut self, name: &str, base: Option<TypeId>) -> TypeId {
        self.add_type(TypeDescription {
            name: name.to_string(),
            full_name: format!("Acme.Domain.{name}"),
            special: SpecialType::None,
            base_type: base,
            attributes: vec![],
        })
    }
}

impl SemanticModel for FixtureModel {
    fn type_of(&self, expr: &Expr) -> Option<TypeId> {
        self.expr_types.get(&expr.span()).copied()
    }

    fn describe(&self, id: TypeId) -> Option<&TypeDescription> {
        self.types.get(id.0 as usize)
    }

    fn type_by_metadata_name(&self, full_name: &str) -> Option<TypeId> {
        self.by_metadata_name.get(full_name).copied()
    }
}

/// Builds syntax nodes, allocating a fresh span per node so [`FixtureModel`]
/// can type each one independently.
#[derive(Debug, Default)]
pub struct NodeFactory {
    next: usize,
}

impl NodeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_span(&mut self) -> Span {
        let span = Span::new(self.next * 10, 1);
        self.next += 1;
        span
    }

    pub fn ident(&mut self, name: &str) -> Expr {
        Expr::Identifier {
            name: name.to_string(),
            span: self.next_span(),
        }
    }

    pub fn int_lit(&mut self, value: i64) -> Expr {
        Expr::IntLiteral {
            value,
            span: self.next_span(),
        }
    }

    pub fn member(&mut self, receiver: Expr, member: &str) -> Expr {
        Expr::MemberAccess {
            receiver: Box::new(receiver),
            member: member.to_string(),
            span: self.next_span(),
        }
    }

    pub fn invoke(&mut self, target: Expr, arguments: Vec<Expr>) -> Expr {
        Expr::Invocation {
            target: Box::new(target),
            arguments,
            span: self.next_span(),
        }
    }

    pub fn lambda(&mut self, parameter: &str, body: Expr) -> Expr {
        Expr::Lambda {
            parameter: parameter.to_string(),
            body: Box::new(body),
            span: self.next_span(),
        }
    }

    pub fn binary(&mut self, op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span: self.next_span(),
        }
    }
}

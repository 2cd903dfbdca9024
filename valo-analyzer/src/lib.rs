//! Structural misuse analyzer for valo wrapper value types.
//!
//! Hosted inside a compiler's analysis pass, this crate inspects query
//! expressions for comparisons between a wrapper value type and a raw
//! integer. Such comparisons type-check (the generated wrappers expose
//! primitive equality overloads for in-memory ergonomics) but translate
//! incorrectly once an ORM lowers the expression to a storage query.
//!
//! # Module Organization
//!
//! - [`syntax`] - The expression and query-clause shapes handed to the analyzer
//! - [`semantics`] - The [`SemanticModel`] surface the host must provide
//! - [`analyzer`] - The [`PrimitiveComparisonAnalyzer`] entry points
//! - [`testing`] - Fixture model for tests (feature-gated)

pub mod analyzer;
pub mod semantics;
pub mod syntax;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use analyzer::{
    CancelToken, Finding, FindingSeverity, PrimitiveComparisonAnalyzer, QUERY_SHAPING_NAMES,
    RULE_ID, message_for,
};
pub use semantics::{
    MAX_BASE_TYPE_DEPTH, QUERYABLE_COLLECTION_METADATA_NAME, SemanticModel, SpecialType,
    TypeDescription, TypeId, inherits_from, is_queryable_collection, is_wrapper_type,
};
pub use syntax::{BinaryOp, Expr, QueryClause, QueryExpression, Span};

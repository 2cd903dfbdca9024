//! Detection of wrapper-vs-primitive comparisons inside query expressions.
//!
//! A wrapper value compared to a raw int inside a collection-filtering
//! expression silently breaks under ORM-to-storage-query translation, so
//! any left-wrapper/right-int pair within a recognized call shape is
//! flagged. This is a structural over-approximation biased toward false
//! positives: a silently wrong persisted query is worse than a noisy
//! warning. Findings never block compilation.
//!
//! Known limitation: only the left operand is tested against the wrapper
//! predicate. `5 == x.MyWrapper` goes unflagged; downstream consumers may
//! already depend on the asymmetry, so it is preserved rather than fixed.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use crate::semantics::{
    SemanticModel, SpecialType, is_queryable_collection, is_wrapper_type,
};
use crate::syntax::{Expr, QueryExpression, Span};

/// Fixed identifier of the diagnostic this analyzer reports.
pub const RULE_ID: &str = "VALO032";

/// Query-shaping operation names the invocation-form check accepts.
pub const QUERY_SHAPING_NAMES: [&str; 5] = ["Where", "Single", "SkipWhile", "TakeWhile", "Select"];

/// Advisory severity of a finding; either way the analyzed program still
/// compiles and runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FindingSeverity {
    Warning,
    Error,
}

/// One reported misuse: a source location, the wrapper type's name, and the
/// fixed message. Findings are uncorrelated; no dedup happens here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub rule: &'static str,
    pub severity: FindingSeverity,
    pub type_name: String,
    pub span: Span,
    pub message: String,
}

/// The fixed message template, parameterized by the wrapper type's name.
pub fn message_for(type_name: &str) -> String {
    format!(
        "Value object '{type_name}' is being compared to an int. Compare it with the value object instead."
    )
}

/// Cooperative cancellation signal supplied by the host's analysis pass.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Option<Arc<AtomicBool>>);

impl CancelToken {
    /// No cancellation signal; the analyzer completes on its own.
    pub fn none() -> Self {
        Self(None)
    }

    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self(Some(flag))
    }

    pub fn is_cancelled(&self) -> bool {
        self.0
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Stateless per-node visitor; the host may run the two entry points
/// concurrently across syntax nodes.
#[derive(Debug, Clone)]
pub struct PrimitiveComparisonAnalyzer {
    severity: FindingSeverity,
}

impl Default for PrimitiveComparisonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimitiveComparisonAnalyzer {
    pub fn new() -> Self {
        Self {
            severity: FindingSeverity::Error,
        }
    }

    pub fn with_severity(severity: FindingSeverity) -> Self {
        Self { severity }
    }

    /// Invocation-form check, triggered on every call expression.
    pub fn check_invocation(
        &self,
        expr: &Expr,
        model: &dyn SemanticModel,
        cancel: &CancelToken,
    ) -> Vec<Finding> {
        let Expr::Invocation { target, arguments, .. } = expr else {
            return Vec::new();
        };
        let Expr::MemberAccess { receiver, member, .. } = target.as_ref() else {
            return Vec::new();
        };
        if !QUERY_SHAPING_NAMES.contains(&member.as_str()) {
            return Vec::new();
        }
        if !is_queryable_collection(model, receiver) {
            return Vec::new();
        }

        let mut findings = Vec::new();
        for argument in arguments {
            if let Expr::Lambda { .. } = argument {
                self.walk_comparisons(argument, model, cancel, &mut findings);
            }
        }
        findings
    }

    /// Query-syntax-form check, triggered on each query-comprehension
    /// expression.
    pub fn check_query(
        &self,
        query: &QueryExpression,
        model: &dyn SemanticModel,
        cancel: &CancelToken,
    ) -> Vec<Finding> {
        if !is_queryable_collection(model, &query.source) {
            return Vec::new();
        }

        let mut findings = Vec::new();
        for condition in query.where_conditions() {
            self.walk_comparisons(condition, model, cancel, &mut findings);
        }
        findings
    }

    fn walk_comparisons(
        &self,
        expr: &Expr,
        model: &dyn SemanticModel,
        cancel: &CancelToken,
        findings: &mut Vec<Finding>,
    ) {
        expr.for_each_binary(&mut |binary| {
            if cancel.is_cancelled() {
                return;
            }
            let Expr::Binary { left, right, span, .. } = binary else {
                return;
            };
            let (Some(left_ty), Some(right_ty)) = (model.type_of(left), model.type_of(right))
            else {
                return;
            };

            // Left operand must be the wrapper; checked in this fixed order,
            // not symmetrically.
            if !is_wrapper_type(model, left_ty) {
                return;
            }
            let right_is_int32 = model
                .describe(right_ty)
                .is_some_and(|desc| desc.special == SpecialType::Int32);
            if !right_is_int32 {
                return;
            }

            let type_name = model
                .describe(left_ty)
                .map(|desc| desc.name.clone())
                .unwrap_or_default();
            findings.push(Finding {
                rule: RULE_ID,
                severity: self.severity,
                message: message_for(&type_name),
                type_name,
                span: *span,
            });
        });
    }
}

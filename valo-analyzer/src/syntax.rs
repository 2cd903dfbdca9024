//! Compiled-syntax surface consumed by the analyzer.
//!
//! The host compiler owns parsing; the analyzer only ever sees the node
//! shapes below, handed to it one subtree at a time. Nodes are immutable
//! snapshots for one compilation pass.

use serde::Serialize;

/// Source location of a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier {
        name: String,
        span: Span,
    },
    IntLiteral {
        value: i64,
        span: Span,
    },
    MemberAccess {
        receiver: Box<Expr>,
        member: String,
        span: Span,
    },
    Invocation {
        target: Box<Expr>,
        arguments: Vec<Expr>,
        span: Span,
    },
    Lambda {
        parameter: String,
        body: Box<Expr>,
        span: Span,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Identifier { span, .. }
            | Expr::IntLiteral { span, .. }
            | Expr::MemberAccess { span, .. }
            | Expr::Invocation { span, .. }
            | Expr::Lambda { span, .. }
            | Expr::Binary { span, .. } => *span,
        }
    }

    /// Visit every binary expression in this subtree, including nested ones.
    pub fn for_each_binary<'a>(&'a self, f: &mut impl FnMut(&'a Expr)) {
        match self {
            Expr::Binary { left, right, .. } => {
                f(self);
                left.for_each_binary(f);
                right.for_each_binary(f);
            }
            Expr::MemberAccess { receiver, .. } => receiver.for_each_binary(f),
            Expr::Invocation { target, arguments, .. } => {
                target.for_each_binary(f);
                for argument in arguments {
                    argument.for_each_binary(f);
                }
            }
            Expr::Lambda { body, .. } => body.for_each_binary(f),
            Expr::Identifier { .. } | Expr::IntLiteral { .. } => {}
        }
    }
}

/// One clause of a query-comprehension body.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryClause {
    Where { condition: Expr, span: Span },
    Select { projection: Expr, span: Span },
}

/// A language query-comprehension expression: a source plus a clause body.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryExpression {
    pub source: Expr,
    pub clauses: Vec<QueryClause>,
    pub span: Span,
}

impl QueryExpression {
    /// All `where`-clause conditions nested anywhere in the body.
    pub fn where_conditions(&self) -> impl Iterator<Item = &Expr> {
        self.clauses.iter().filter_map(|clause| match clause {
            QueryClause::Where { condition, .. } => Some(condition),
            QueryClause::Select { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str, at: usize) -> Expr {
        Expr::Identifier {
            name: name.to_string(),
            span: Span::new(at, name.len()),
        }
    }

    #[test]
    fn test_binary_walk_reaches_nested_expressions() {
        // (a == 1) && ... is modeled as binaries nested under a lambda body.
        let inner = Expr::Binary {
            op: BinaryOp::Eq,
            left: Box::new(ident("a", 0)),
            right: Box::new(Expr::IntLiteral {
                value: 1,
                span: Span::new(5, 1),
            }),
            span: Span::new(0, 6),
        };
        let lambda = Expr::Lambda {
            parameter: "x".to_string(),
            body: Box::new(Expr::Binary {
                op: BinaryOp::Ne,
                left: Box::new(inner),
                right: Box::new(ident("b", 10)),
                span: Span::new(0, 11),
            }),
            span: Span::new(0, 11),
        };

        let mut seen = Vec::new();
        lambda.for_each_binary(&mut |expr| seen.push(expr.span()));
        assert_eq!(seen.len(), 2);
    }
}

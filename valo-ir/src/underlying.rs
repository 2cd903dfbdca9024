//! Underlying-type identity and capability predicates.

use serde::Serialize;

/// Structural classification of the type a wrapper wraps.
///
/// The kind drives feature applicability: only ordered kinds may carry
/// comparison operators, only parseable kinds get hoisted `Parse`/`TryParse`
/// members, and template lookup may specialize on the exact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnderlyingKind {
    Boolean,
    Byte,
    Int16,
    Int32,
    Int64,
    Single,
    Double,
    Decimal,
    String,
    Guid,
    DateTime,
    /// Any user-defined or otherwise unclassified type.
    Other,
}

impl UnderlyingKind {
    /// Numeric primitives (integral and floating point).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            UnderlyingKind::Byte
                | UnderlyingKind::Int16
                | UnderlyingKind::Int32
                | UnderlyingKind::Int64
                | UnderlyingKind::Single
                | UnderlyingKind::Double
                | UnderlyingKind::Decimal
        )
    }

    /// Kinds that get equality operator overloads directly against the
    /// primitive, so comparisons against literals compile without manual
    /// unwrapping.
    pub fn is_primitive(&self) -> bool {
        self.is_numeric() || matches!(self, UnderlyingKind::String | UnderlyingKind::Boolean)
    }

    /// Kinds with a total order the host language exposes through
    /// `CompareTo`. `Other` is deliberately excluded: requesting comparison
    /// for an unordered underlying type is a configuration error.
    pub fn has_total_order(&self) -> bool {
        self.is_numeric()
            || matches!(
                self,
                UnderlyingKind::String | UnderlyingKind::Guid | UnderlyingKind::DateTime
            )
    }

    /// Kinds whose host type has its own `Parse`/`TryParse` routines that
    /// hoisted parsing members can delegate to.
    pub fn is_parseable(&self) -> bool {
        self.is_numeric()
            || matches!(
                self,
                UnderlyingKind::Boolean | UnderlyingKind::Guid | UnderlyingKind::DateTime
            )
    }
}

/// The wrapped type, by classification and fully-qualified host name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnderlyingType {
    /// Fully-qualified name as it appears in generated source.
    pub full_name: String,
    pub kind: UnderlyingKind,
}

impl UnderlyingType {
    pub fn new(full_name: impl Into<String>, kind: UnderlyingKind) -> Self {
        Self {
            full_name: full_name.into(),
            kind,
        }
    }

    /// Resolve a host-language alias (`int`, `string`, ...) or well-known
    /// full name to an underlying type. Unknown names pass through verbatim
    /// with kind [`UnderlyingKind::Other`].
    pub fn from_alias(name: &str) -> Self {
        let (full_name, kind) = match name {
            "bool" | "System.Boolean" => ("System.Boolean", UnderlyingKind::Boolean),
            "byte" | "System.Byte" => ("System.Byte", UnderlyingKind::Byte),
            "short" | "System.Int16" => ("System.Int16", UnderlyingKind::Int16),
            "int" | "System.Int32" => ("System.Int32", UnderlyingKind::Int32),
            "long" | "System.Int64" => ("System.Int64", UnderlyingKind::Int64),
            "float" | "System.Single" => ("System.Single", UnderlyingKind::Single),
            "double" | "System.Double" => ("System.Double", UnderlyingKind::Double),
            "decimal" | "System.Decimal" => ("System.Decimal", UnderlyingKind::Decimal),
            "string" | "System.String" => ("System.String", UnderlyingKind::String),
            "guid" | "Guid" | "System.Guid" => ("System.Guid", UnderlyingKind::Guid),
            "DateTime" | "System.DateTime" => ("System.DateTime", UnderlyingKind::DateTime),
            other => return Self::new(other, UnderlyingKind::Other),
        };
        Self::new(full_name, kind)
    }
}

//! Semantic-model surface consumed by the analyzer.
//!
//! Symbol resolution belongs to the host compiler; the analyzer asks three
//! questions of it: what is the static type of an expression, what does a
//! type look like, and does a type with a given metadata name exist in the
//! compilation.

use valo_ir::has_wrapper_marker;

use crate::syntax::Expr;

/// Opaque handle to a named type in the compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

/// Host-language special types the analyzer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialType {
    None,
    Int32,
}

/// What the host's semantic model knows about one named type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescription {
    pub name: String,
    pub full_name: String,
    pub special: SpecialType,
    pub base_type: Option<TypeId>,
    /// Fully-qualified attribute names applied to the type.
    pub attributes: Vec<String>,
}

/// Immutable semantic snapshot for one compilation pass.
pub trait SemanticModel {
    /// Static type of an expression, if the host could resolve one.
    fn type_of(&self, expr: &Expr) -> Option<TypeId>;

    fn describe(&self, id: TypeId) -> Option<&TypeDescription>;

    /// Resolve a type by metadata name, e.g. the queryable-collection type.
    fn type_by_metadata_name(&self, full_name: &str) -> Option<TypeId>;
}

/// Metadata name of the mapping layer's queryable-collection type.
pub const QUERYABLE_COLLECTION_METADATA_NAME: &str = "Microsoft.EntityFrameworkCore.DbSet`1";

/// Cap on the ancestor walk. The base-type relation is acyclic in any
/// well-formed compilation, so the cap only guards against pathological
/// input.
pub const MAX_BASE_TYPE_DEPTH: usize = 64;

/// Bounded ancestor walk: does `ty` equal or derive from `base`?
pub fn inherits_from(model: &dyn SemanticModel, ty: TypeId, base: TypeId) -> bool {
    let mut current = Some(ty);
    for _ in 0..MAX_BASE_TYPE_DEPTH {
        match current {
            None => return false,
            Some(id) if id == base => return true,
            Some(id) => current = model.describe(id).and_then(|desc| desc.base_type),
        }
    }
    false
}

/// The shared wrapper-value predicate, applied to a resolved type.
pub fn is_wrapper_type(model: &dyn SemanticModel, id: TypeId) -> bool {
    model
        .describe(id)
        .is_some_and(|desc| has_wrapper_marker(desc.attributes.iter().map(String::as_str)))
}

/// Whether the expression's static type is (or derives from) the mapping
/// layer's queryable-collection type.
pub fn is_queryable_collection(model: &dyn SemanticModel, expr: &Expr) -> bool {
    let Some(ty) = model.type_of(expr) else {
        return false;
    };
    let Some(queryable) = model.type_by_metadata_name(QUERYABLE_COLLECTION_METADATA_NAME) else {
        return false;
    };
    inherits_from(model, ty, queryable)
}

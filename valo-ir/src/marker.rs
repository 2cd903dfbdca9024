//! The shared wrapper-value predicate.
//!
//! Both the assembler (to decide applicability) and the misuse analyzer (to
//! decide whether an operand is a wrapper) reduce to the same question: does
//! this named type carry the wrapper-value marker attribute?

/// Fully-qualified name of the marker attribute applied to wrapper types.
pub const WRAPPER_MARKER_ATTRIBUTE: &str = "Valo.ValueObjectAttribute";

/// Whether a single attribute name is the wrapper-value marker.
///
/// Accepts the generic form of the marker as well (arity suffix after a
/// backtick), since the marker may be applied with the underlying type as a
/// type argument.
pub fn is_wrapper_marker(attribute_full_name: &str) -> bool {
    let name = attribute_full_name
        .split_once('`')
        .map_or(attribute_full_name, |(base, _arity)| base);
    name == WRAPPER_MARKER_ATTRIBUTE
}

/// Whether any attribute in the list marks the carrying type as a wrapper
/// value type.
pub fn has_wrapper_marker<'a>(attributes: impl IntoIterator<Item = &'a str>) -> bool {
    attributes.into_iter().any(is_wrapper_marker)
}

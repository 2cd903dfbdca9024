//! Equality machinery: structural equality against self, equality against
//! the raw underlying value, equality operators, and literal-friendly
//! operator overloads for primitive-backed wrappers.

use valo_ir::{Declaration, TypeKind, WorkItem};

/// Equality headers come first in the interface list; both are
/// unconditional.
pub fn interface_headers(item: &WorkItem) -> Vec<String> {
    let vo = &item.vo_type_name;
    let und = item.underlying_type_full_name();
    vec![
        format!("global::System.IEquatable<{vo}>"),
        format!("global::System.IEquatable<{und}>"),
    ]
}

pub fn methods(item: &WorkItem, decl: &Declaration) -> String {
    let vo = &item.vo_type_name;
    let und = item.underlying_type_full_name();
    let q = decl.member_qualifier();

    let equals_self = match decl.kind {
        TypeKind::Struct => format!(
            "public readonly global::System.Boolean Equals({vo} other)\n\
             {{\n    \
                 return global::System.Collections.Generic.EqualityComparer<{und}>.Default.Equals(Value, other.Value);\n\
             }}"
        ),
        TypeKind::Class => format!(
            "public global::System.Boolean Equals({vo} other)\n\
             {{\n    \
                 if (other is null)\n    \
                 {{\n        \
                     return false;\n    \
                 }}\n\
             \n    \
                 return global::System.Collections.Generic.EqualityComparer<{und}>.Default.Equals(Value, other.Value);\n\
             }}"
        ),
    };

    let equals_object = match decl.kind {
        TypeKind::Struct => format!(
            "public readonly override global::System.Boolean Equals(global::System.Object obj)\n\
             {{\n    \
                 return obj is {vo} && Equals(({vo})obj);\n\
             }}"
        ),
        TypeKind::Class => format!(
            "public override global::System.Boolean Equals(global::System.Object obj)\n\
             {{\n    \
                 return obj is {vo} other && Equals(other);\n\
             }}"
        ),
    };

    let mut out = format!(
        "{equals_self}\n\
         \n\
         public {q}global::System.Boolean Equals({und} primitive) => Value.Equals(primitive);\n\
         \n\
         {equals_object}\n\
         \n\
         public static global::System.Boolean operator ==({vo} left, {vo} right) => Equals(left, right);\n\
         public static global::System.Boolean operator !=({vo} left, {vo} right) => !(left == right);"
    );

    // Extra overloads directly against the primitive, so comparisons against
    // literals compile without manual unwrapping.
    if item.underlying.kind.is_primitive() {
        out.push_str(&format!(
            "\n\
             public static global::System.Boolean operator ==({vo} left, {und} right) => left.Value.Equals(right);\n\
             public static global::System.Boolean operator !=({vo} left, {und} right) => !(left == right);\n\
             public static global::System.Boolean operator ==({und} left, {vo} right) => right.Value.Equals(left);\n\
             public static global::System.Boolean operator !=({und} left, {vo} right) => !(left == right);"
        ));
    }

    out
}

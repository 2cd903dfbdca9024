//! Hashing delegates to the underlying value's hash.

use valo_ir::{Declaration, WorkItem};

pub fn get_hash_code(item: &WorkItem, decl: &Declaration) -> String {
    let und = item.underlying_type_full_name();
    let q = decl.member_qualifier();
    format!(
        "public {q}override global::System.Int32 GetHashCode()\n\
         {{\n    \
             return global::System.Collections.Generic.EqualityComparer<{und}>.Default.GetHashCode(Value);\n\
         }}"
    )
}

#[cfg(test)]
mod tests {
    use valo_ir::{Config, UnderlyingKind, UnderlyingType};

    use super::*;

    #[test]
    fn test_hash_delegates_to_underlying() {
        let item = WorkItem {
            vo_type_name: "Score".to_string(),
            full_namespace: String::new(),
            underlying: UnderlyingType::new("System.Int32", UnderlyingKind::Int32),
            config: Config::baseline(),
            validation_exception_full_name: "Valo.ValueObjectValidationException".to_string(),
            instances: vec![],
        };
        let fragment = get_hash_code(&item, &Declaration::public_struct());
        assert!(fragment.contains("EqualityComparer<System.Int32>.Default.GetHashCode(Value)"));
        assert!(fragment.starts_with("public readonly override"));
    }
}

//! Ordinal string-comparer helpers for string-backed wrappers.

use valo_ir::{StringComparersGeneration, WorkItem};

pub fn comparers(item: &WorkItem) -> Option<String> {
    if item.config.string_comparers == StringComparersGeneration::Omit {
        return None;
    }
    let vo = &item.vo_type_name;
    Some(format!(
        "public static global::System.Collections.Generic.IEqualityComparer<{vo}> OrdinalComparer {{ get; }} = new __ValoStringComparer(global::System.StringComparer.Ordinal);\n\
         \n\
         public static global::System.Collections.Generic.IEqualityComparer<{vo}> OrdinalIgnoreCaseComparer {{ get; }} = new __ValoStringComparer(global::System.StringComparer.OrdinalIgnoreCase);\n\
         \n\
         private sealed class __ValoStringComparer : global::System.Collections.Generic.IEqualityComparer<{vo}>\n\
         {{\n    \
             private readonly global::System.StringComparer _comparer;\n\
         \n    \
             internal __ValoStringComparer(global::System.StringComparer comparer)\n    \
             {{\n        \
                 _comparer = comparer;\n    \
             }}\n\
         \n    \
             public global::System.Boolean Equals({vo} x, {vo} y) => _comparer.Equals(x.Value, y.Value);\n\
         \n    \
             public global::System.Int32 GetHashCode({vo} obj) => _comparer.GetHashCode(obj.Value);\n\
         }}"
    ))
}

#[cfg(test)]
mod tests {
    use valo_ir::{Config, UnderlyingKind, UnderlyingType};

    use super::*;

    #[test]
    fn test_generated_comparers_compare_the_underlying_string() {
        let mut config = Config::baseline();
        config.string_comparers = StringComparersGeneration::Generate;
        let item = WorkItem {
            vo_type_name: "UserName".to_string(),
            full_namespace: String::new(),
            underlying: UnderlyingType::new("System.String", UnderlyingKind::String),
            config,
            validation_exception_full_name: "Valo.ValueObjectValidationException".to_string(),
            instances: vec![],
        };
        let fragment = comparers(&item).unwrap();
        assert!(fragment.contains("OrdinalComparer"));
        assert!(fragment.contains("OrdinalIgnoreCaseComparer"));
        assert!(fragment.contains("_comparer.Equals(x.Value, y.Value)"));
    }
}

//! Ordering machinery delegating to the underlying type's total order.

use valo_ir::{ComparisonGeneration, Declaration, WorkItem};

pub fn header(item: &WorkItem) -> Option<String> {
    if item.config.comparison == ComparisonGeneration::Omit {
        return None;
    }
    let vo = &item.vo_type_name;
    Some(format!(
        "global::System.IComparable<{vo}>, global::System.IComparable"
    ))
}

pub fn implementation(item: &WorkItem, decl: &Declaration) -> Option<String> {
    if item.config.comparison == ComparisonGeneration::Omit {
        return None;
    }
    let vo = &item.vo_type_name;
    let q = decl.member_qualifier();

    Some(format!(
        "public {q}global::System.Int32 CompareTo({vo} other) => Value.CompareTo(other.Value);\n\
         \n\
         public {q}global::System.Int32 CompareTo(global::System.Object obj)\n\
         {{\n    \
             if (obj is null)\n    \
             {{\n        \
                 return 1;\n    \
             }}\n\
         \n    \
             if (obj is {vo} other)\n    \
             {{\n        \
                 return CompareTo(other);\n    \
             }}\n\
         \n    \
             throw new global::System.ArgumentException(\"Cannot compare to object as it is not of type {vo}\", nameof(obj));\n\
         }}\n\
         \n\
         public static global::System.Boolean operator <({vo} left, {vo} right) => left.CompareTo(right) < 0;\n\
         public static global::System.Boolean operator <=({vo} left, {vo} right) => left.CompareTo(right) <= 0;\n\
         public static global::System.Boolean operator >({vo} left, {vo} right) => left.CompareTo(right) > 0;\n\
         public static global::System.Boolean operator >=({vo} left, {vo} right) => left.CompareTo(right) >= 0;"
    ))
}

#[cfg(test)]
mod tests {
    use valo_ir::{Config, UnderlyingKind, UnderlyingType};

    use super::*;

    fn item(comparison: ComparisonGeneration) -> WorkItem {
        let mut config = Config::baseline();
        config.comparison = comparison;
        WorkItem {
            vo_type_name: "Score".to_string(),
            full_namespace: String::new(),
            underlying: UnderlyingType::new("System.Int32", UnderlyingKind::Int32),
            config,
            validation_exception_full_name: "Valo.ValueObjectValidationException".to_string(),
            instances: vec![],
        }
    }

    #[test]
    fn test_omitted_comparison_is_a_noop() {
        let item = item(ComparisonGeneration::Omit);
        assert_eq!(header(&item), None);
        assert_eq!(implementation(&item, &Declaration::public_struct()), None);
    }

    #[test]
    fn test_operators_delegate_to_underlying_order() {
        let item = item(ComparisonGeneration::UseUnderlying);
        let fragment = implementation(&item, &Declaration::public_struct()).unwrap();
        assert!(fragment.contains("CompareTo(Score other) => Value.CompareTo(other.Value);"));
        assert!(fragment.contains("operator <(Score left, Score right)"));
        assert!(fragment.contains("operator >=(Score left, Score right)"));
    }
}

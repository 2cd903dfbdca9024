//! Hoisted `Parse`/`TryParse` members delegating to the underlying type's
//! own parse routines, wrapped in the construction validation pipeline.

use valo_ir::{ParsableGeneration, WorkItem};

pub fn header(item: &WorkItem) -> Option<String> {
    if item.config.parsing != ParsableGeneration::MethodsAndInterfaces {
        return None;
    }
    Some(format!("global::System.IParsable<{}>", item.vo_type_name))
}

pub fn methods(item: &WorkItem) -> Option<String> {
    if item.config.parsing == ParsableGeneration::Omit {
        return None;
    }
    let vo = &item.vo_type_name;
    let und = item.underlying_type_full_name();

    let mut out = format!(
        "public static {vo} Parse(global::System.String input)\n\
         {{\n    \
             var underlying = {und}.Parse(input);\n    \
             return From(underlying);\n\
         }}\n\
         \n\
         public static global::System.Boolean TryParse(global::System.String input, out {vo} result)\n\
         {{\n    \
             if (!{und}.TryParse(input, out var underlying))\n    \
             {{\n        \
                 result = default;\n        \
                 return false;\n    \
             }}\n\
         \n    \
             return TryFrom(underlying, out result);\n\
         }}"
    );

    if item.config.parsing == ParsableGeneration::MethodsAndInterfaces {
        out.push_str(&format!(
            "\n\
             \n\
             public static {vo} Parse(global::System.String input, global::System.IFormatProvider provider)\n\
             {{\n    \
                 var underlying = {und}.Parse(input, provider);\n    \
                 return From(underlying);\n\
             }}\n\
             \n\
             public static global::System.Boolean TryParse(global::System.String input, global::System.IFormatProvider provider, out {vo} result)\n\
             {{\n    \
                 if (!{und}.TryParse(input, provider, out var underlying))\n    \
                 {{\n        \
                     result = default;\n        \
                     return false;\n    \
                 }}\n\
             \n    \
                 return TryFrom(underlying, out result);\n\
             }}"
        ));
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use valo_ir::{Config, UnderlyingKind, UnderlyingType};

    use super::*;

    fn item(parsing: ParsableGeneration) -> WorkItem {
        let mut config = Config::baseline();
        config.parsing = parsing;
        WorkItem {
            vo_type_name: "Age".to_string(),
            full_namespace: String::new(),
            underlying: UnderlyingType::new("System.Int32", UnderlyingKind::Int32),
            config,
            validation_exception_full_name: "Valo.ValueObjectValidationException".to_string(),
            instances: vec![],
        }
    }

    #[test]
    fn test_omitted_parsing_is_a_noop() {
        assert_eq!(methods(&item(ParsableGeneration::Omit)), None);
        assert_eq!(header(&item(ParsableGeneration::Omit)), None);
    }

    #[test]
    fn test_methods_only_has_no_interface_header() {
        let item = item(ParsableGeneration::Methods);
        assert_eq!(header(&item), None);
        let fragment = methods(&item).unwrap();
        assert!(fragment.contains("System.Int32.Parse(input)"));
        assert!(!fragment.contains("IFormatProvider"));
    }

    #[test]
    fn test_interfaces_add_provider_overloads() {
        let item = item(ParsableGeneration::MethodsAndInterfaces);
        assert_eq!(header(&item).unwrap(), "global::System.IParsable<Age>");
        let fragment = methods(&item).unwrap();
        assert!(fragment.contains("Parse(global::System.String input, global::System.IFormatProvider provider)"));
    }
}

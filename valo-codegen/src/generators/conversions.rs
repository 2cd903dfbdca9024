//! Conversion glue: conditional attributes, template-sourced nested
//! converter bodies, and the ORM extension block outside the type body.

use valo_ir::{Conversions, WorkItem};

use crate::diagnostics::{Diagnostic, codes};
use crate::templates::{TemplateStore, expand, features};

pub fn attributes(item: &WorkItem) -> Option<String> {
    if !item.config.conversions.contains(Conversions::TYPE_CONVERTER) {
        return None;
    }
    let vo = &item.vo_type_name;
    Some(format!(
        "[global::System.ComponentModel.TypeConverter(typeof({vo}TypeConverter))]"
    ))
}

/// Nested converter class bodies, one per configured conversion.
///
/// Each template-sourced fragment is bracketed in an explicit `#nullable`
/// region, isolating the template's nullable-context assumptions from the
/// surrounding generated code.
pub fn bodies(
    item: &WorkItem,
    store: &dyn TemplateStore,
) -> Result<Option<String>, Diagnostic> {
    let mut parts = Vec::new();
    let wanted = [
        (Conversions::TYPE_CONVERTER, features::TYPE_CONVERTER),
        (
            Conversions::EF_CORE_VALUE_CONVERTER,
            features::EF_CORE_VALUE_CONVERTER,
        ),
    ];

    for (flag, feature) in wanted {
        if !item.config.conversions.contains(flag) {
            continue;
        }
        let template = store
            .resolve(feature, item.underlying.kind)
            .ok_or_else(|| {
                Diagnostic::error(
                    codes::MISSING_TEMPLATE,
                    format!(
                        "no template registered for conversion '{feature}' (underlying type '{}')",
                        item.underlying_type_full_name()
                    ),
                )
                .at(&item.vo_type_name)
            })?;
        let code = expand(template, &item.vo_type_name, item.underlying_type_full_name());
        parts.push(format!("#nullable disable\n{code}\n#nullable restore"));
    }

    Ok(if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n\n"))
    })
}

/// The ORM extension block, emitted outside the type body.
pub fn ef_core_extensions(item: &WorkItem) -> Option<String> {
    if !item
        .config
        .conversions
        .contains(Conversions::EF_CORE_VALUE_CONVERTER)
    {
        return None;
    }
    let vo = &item.vo_type_name;
    Some(format!(
        "public static class {vo}EfCoreExtensions\n\
         {{\n    \
             public static global::Microsoft.EntityFrameworkCore.Metadata.Builders.PropertyBuilder<{vo}> HasValueObjectConversion(this global::Microsoft.EntityFrameworkCore.Metadata.Builders.PropertyBuilder<{vo}> builder) =>\n        \
                 builder.HasConversion(new {vo}.{vo}ValueConverter());\n\
         }}"
    ))
}

#[cfg(test)]
mod tests {
    use valo_ir::{Config, UnderlyingKind, UnderlyingType};

    use super::*;
    use crate::templates::BuiltinTemplates;

    fn item(conversions: Conversions) -> WorkItem {
        let mut config = Config::baseline();
        config.conversions = conversions;
        WorkItem {
            vo_type_name: "CustomerId".to_string(),
            full_namespace: String::new(),
            underlying: UnderlyingType::new("System.Int32", UnderlyingKind::Int32),
            config,
            validation_exception_full_name: "Valo.ValueObjectValidationException".to_string(),
            instances: vec![],
        }
    }

    #[test]
    fn test_no_conversions_emits_nothing() {
        let item = item(Conversions::NONE);
        let store = BuiltinTemplates::new();
        assert_eq!(attributes(&item), None);
        assert_eq!(bodies(&item, &store).unwrap(), None);
        assert_eq!(ef_core_extensions(&item), None);
    }

    #[test]
    fn test_type_converter_attribute_and_body() {
        let item = item(Conversions::TYPE_CONVERTER);
        let store = BuiltinTemplates::new();
        assert!(attributes(&item).unwrap().contains("CustomerIdTypeConverter"));

        let body = bodies(&item, &store).unwrap().unwrap();
        assert!(body.starts_with("#nullable disable\n"));
        assert!(body.ends_with("\n#nullable restore"));
        assert!(body.contains("class CustomerIdTypeConverter"));
        assert!(body.contains("CustomerId.__Deserialize"));
    }

    #[test]
    fn test_ef_core_conversion_gets_extension_block() {
        let item = item(Conversions::EF_CORE_VALUE_CONVERTER);
        let store = BuiltinTemplates::new();
        let body = bodies(&item, &store).unwrap().unwrap();
        assert!(body.contains("class CustomerIdValueConverter"));

        let ext = ef_core_extensions(&item).unwrap();
        assert!(ext.contains("static class CustomerIdEfCoreExtensions"));
        assert!(ext.contains("new CustomerId.CustomerIdValueConverter()"));
    }

    #[test]
    fn test_missing_template_is_a_build_diagnostic() {
        struct EmptyStore;
        impl TemplateStore for EmptyStore {
            fn specific(&self, _: &str, _: UnderlyingKind) -> Option<&str> {
                None
            }
            fn generic(&self, _: &str) -> Option<&str> {
                None
            }
        }

        let item = item(Conversions::TYPE_CONVERTER);
        let diag = bodies(&item, &EmptyStore).unwrap_err();
        assert_eq!(diag.code, codes::MISSING_TEMPLATE);
        assert_eq!(diag.location.as_deref(), Some("CustomerId"));
    }
}

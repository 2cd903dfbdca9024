//! Template-fragment store.
//!
//! Several generators (type converter, ORM value converter) source their
//! bodies from named text templates. Lookup tries a template specialized for
//! the exact underlying type first, then falls back to a generic any-type
//! template; the wrapper type name and underlying type name are the only two
//! free variables. A requested feature with neither a specific nor a generic
//! template is a build-time diagnostic, raised by the assembler.

use indexmap::IndexMap;
use valo_ir::UnderlyingKind;

/// Well-known feature names used for template lookup.
pub mod features {
    pub const TYPE_CONVERTER: &str = "TypeConverter";
    pub const EF_CORE_VALUE_CONVERTER: &str = "EfCoreValueConverter";
}

/// Placeholder for the wrapper type name.
const VO_TYPE: &str = "VOTYPE";
/// Placeholder for the underlying type's fully-qualified name.
const VO_UNDERLYING_TYPE: &str = "VOUNDERLYINGTYPE";

/// Maps a feature name, optionally specialized by underlying-type identity,
/// to a parameterized text template.
pub trait TemplateStore {
    /// Template specialized for the exact underlying type.
    fn specific(&self, feature: &str, kind: UnderlyingKind) -> Option<&str>;

    /// Generic any-type template.
    fn generic(&self, feature: &str) -> Option<&str>;

    /// Specific-first resolution with generic fallback.
    fn resolve(&self, feature: &str, kind: UnderlyingKind) -> Option<&str> {
        self.specific(feature, kind)
            .or_else(|| self.generic(feature))
    }
}

/// Substitute the two free variables of a template.
pub fn expand(template: &str, vo_type_name: &str, underlying_full_name: &str) -> String {
    template
        .replace(VO_TYPE, vo_type_name)
        .replace(VO_UNDERLYING_TYPE, underlying_full_name)
}

/// The templates shipped with the engine.
#[derive(Debug, Clone)]
pub struct BuiltinTemplates {
    entries: IndexMap<(&'static str, Option<UnderlyingKind>), &'static str>,
}

impl BuiltinTemplates {
    pub fn new() -> Self {
        let mut entries = IndexMap::new();
        entries.insert(
            (features::TYPE_CONVERTER, None),
            ANY_TYPE_CONVERTER_TEMPLATE,
        );
        entries.insert(
            (features::TYPE_CONVERTER, Some(UnderlyingKind::String)),
            STRING_TYPE_CONVERTER_TEMPLATE,
        );
        entries.insert(
            (features::EF_CORE_VALUE_CONVERTER, None),
            EF_CORE_VALUE_CONVERTER_TEMPLATE,
        );
        Self { entries }
    }
}

impl Default for BuiltinTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for BuiltinTemplates {
    fn specific(&self, feature: &str, kind: UnderlyingKind) -> Option<&str> {
        self.entries.get(&(feature, Some(kind))).copied()
    }

    fn generic(&self, feature: &str) -> Option<&str> {
        self.entries.get(&(feature, None)).copied()
    }
}

const ANY_TYPE_CONVERTER_TEMPLATE: &str = r#"class VOTYPETypeConverter : global::System.ComponentModel.TypeConverter
{
    public override global::System.Boolean CanConvertFrom(global::System.ComponentModel.ITypeDescriptorContext context, global::System.Type sourceType)
    {
        return sourceType == typeof(VOUNDERLYINGTYPE) || sourceType == typeof(global::System.String) || base.CanConvertFrom(context, sourceType);
    }

    public override global::System.Object ConvertFrom(global::System.ComponentModel.ITypeDescriptorContext context, global::System.Globalization.CultureInfo culture, global::System.Object value)
    {
        return value switch
        {
            VOUNDERLYINGTYPE underlyingValue => VOTYPE.__Deserialize(underlyingValue),
            global::System.String stringValue => VOTYPE.__Deserialize((VOUNDERLYINGTYPE)global::System.Convert.ChangeType(stringValue, typeof(VOUNDERLYINGTYPE), culture)),
            _ => base.ConvertFrom(context, culture, value),
        };
    }
}"#;

const STRING_TYPE_CONVERTER_TEMPLATE: &str = r#"class VOTYPETypeConverter : global::System.ComponentModel.TypeConverter
{
    public override global::System.Boolean CanConvertFrom(global::System.ComponentModel.ITypeDescriptorContext context, global::System.Type sourceType)
    {
        return sourceType == typeof(global::System.String) || base.CanConvertFrom(context, sourceType);
    }

    public override global::System.Object ConvertFrom(global::System.ComponentModel.ITypeDescriptorContext context, global::System.Globalization.CultureInfo culture, global::System.Object value)
    {
        return value is global::System.String stringValue
            ? VOTYPE.__Deserialize(stringValue)
            : base.ConvertFrom(context, culture, value);
    }
}"#;

const EF_CORE_VALUE_CONVERTER_TEMPLATE: &str = r#"public class VOTYPEValueConverter : global::Microsoft.EntityFrameworkCore.Storage.ValueConversion.ValueConverter<VOTYPE, VOUNDERLYINGTYPE>
{
    public VOTYPEValueConverter()
        : base(vo => vo.Value, value => VOTYPE.__Deserialize(value))
    {
    }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_template_wins_over_generic() {
        let store = BuiltinTemplates::new();
        let resolved = store
            .resolve(features::TYPE_CONVERTER, UnderlyingKind::String)
            .unwrap();
        assert_eq!(resolved, STRING_TYPE_CONVERTER_TEMPLATE);
    }

    #[test]
    fn test_generic_fallback() {
        let store = BuiltinTemplates::new();
        let resolved = store
            .resolve(features::TYPE_CONVERTER, UnderlyingKind::Int32)
            .unwrap();
        assert_eq!(resolved, ANY_TYPE_CONVERTER_TEMPLATE);
    }

    #[test]
    fn test_unknown_feature_resolves_to_nothing() {
        let store = BuiltinTemplates::new();
        assert!(store.resolve("DapperTypeHandler", UnderlyingKind::Int32).is_none());
    }

    #[test]
    fn test_expand_substitutes_both_variables() {
        let expanded = expand("VOTYPE wraps VOUNDERLYINGTYPE", "CustomerId", "System.Int32");
        assert_eq!(expanded, "CustomerId wraps System.Int32");
    }
}

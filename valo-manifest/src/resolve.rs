//! Resolution of the raw manifest into work items.
//!
//! Raw string settings become typed flags here, layered per-type over the
//! process-wide defaults. Instance values are rendered to host-language
//! literal text keyed on the underlying kind, so the generation side never
//! re-interprets TOML values.

use std::collections::HashSet;

use serde::Serialize;
use valo_ir::{
    CastOperator, ComparisonGeneration, Config, ConfigOverrides, Conversions, DebugGeneration,
    Declaration, DeserializationValidation, Instance, IsInitializedMethodGeneration,
    Normalization, ParsableGeneration, StaticAbstractsGeneration, StringComparersGeneration,
    TypeKind, UnderlyingKind, UnderlyingType, ValidationGeneration, WorkItem,
};

use crate::error::SourceContext;
use crate::manifest::{Manifest, RawConfig, RawValueObject};
use crate::{Error, Result};

/// Exception type used when the manifest names none.
pub const DEFAULT_VALIDATION_EXCEPTION: &str = "Valo.ValueObjectValidationException";

/// One manifest entry, resolved and ready for generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedValueObject {
    pub work_item: WorkItem,
    pub declaration: Declaration,
}

/// Resolve the whole manifest into generation-ready entries.
pub fn resolve(manifest: &Manifest, ctx: &SourceContext) -> Result<Vec<ResolvedValueObject>> {
    let defaults = parse_overrides(&manifest.defaults, ctx)?;

    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(manifest.value_objects.len());
    for raw in &manifest.value_objects {
        validate_identifier_name(&raw.name, "value object", ctx)?;
        validate_namespace(&raw.namespace, ctx)?;
        if !seen.insert((raw.namespace.clone(), raw.name.clone())) {
            return Err(ctx.validation_error(
                format!("duplicate value object '{}'", raw.name),
                &raw.name,
            ));
        }

        let per_type = parse_overrides(&raw.config, ctx)?;
        let config = Config::resolve(&per_type, &defaults);
        let underlying = UnderlyingType::from_alias(&raw.underlying);
        let declaration = parse_declaration(raw, ctx)?;
        let validation_exception_full_name = per_type
            .validation_exception
            .clone()
            .or_else(|| defaults.validation_exception.clone())
            .unwrap_or_else(|| DEFAULT_VALIDATION_EXCEPTION.to_string());

        let mut instances = Vec::with_capacity(raw.instances.len());
        for instance in &raw.instances {
            validate_identifier_name(&instance.name, "instance", ctx)?;
            instances.push(Instance {
                name: instance.name.clone(),
                value: instance_literal(&instance.value, &underlying, &instance.name, ctx)?,
            });
        }

        resolved.push(ResolvedValueObject {
            work_item: WorkItem {
                vo_type_name: raw.name.clone(),
                full_namespace: raw.namespace.clone(),
                underlying,
                config,
                validation_exception_full_name,
                instances,
            },
            declaration,
        });
    }
    Ok(resolved)
}

/// Parse one raw configuration layer into typed overrides.
pub fn parse_overrides(raw: &RawConfig, ctx: &SourceContext) -> Result<ConfigOverrides> {
    let mut overrides = ConfigOverrides::default();

    if let Some(list) = &raw.conversions {
        let mut flags = Conversions::NONE;
        for token in list {
            flags = flags | lookup(ctx, "conversions", token, CONVERSIONS)?;
        }
        overrides.conversions = Some(flags);
    }
    if let Some(value) = &raw.comparison {
        overrides.comparison = Some(lookup(ctx, "comparison", value, COMPARISON)?);
    }
    if let Some(value) = &raw.parsing {
        overrides.parsing = Some(lookup(ctx, "parsing", value, PARSING)?);
    }
    if let Some(value) = &raw.is_initialized_method {
        overrides.is_initialized_method = Some(lookup(
            ctx,
            "is-initialized-method",
            value,
            IS_INITIALIZED_METHOD,
        )?);
    }
    if let Some(value) = &raw.debug {
        overrides.debug = Some(lookup(ctx, "debug", value, DEBUG)?);
    }
    if let Some(value) = &raw.cast_to_underlying {
        overrides.cast_to_underlying = Some(lookup(ctx, "cast-to-underlying", value, CAST)?);
    }
    if let Some(value) = &raw.cast_from_underlying {
        overrides.cast_from_underlying = Some(lookup(ctx, "cast-from-underlying", value, CAST)?);
    }
    if let Some(value) = &raw.deserialization_validation {
        overrides.deserialization_validation = Some(lookup(
            ctx,
            "deserialization-validation",
            value,
            DESERIALIZATION_VALIDATION,
        )?);
    }
    if let Some(value) = &raw.normalization {
        overrides.normalization = Some(lookup(ctx, "normalization", value, NORMALIZATION)?);
    }
    if let Some(value) = &raw.validation {
        overrides.validation = Some(lookup(ctx, "validation", value, VALIDATION)?);
    }
    if let Some(value) = &raw.static_abstracts {
        overrides.static_abstracts =
            Some(lookup(ctx, "static-abstracts", value, STATIC_ABSTRACTS)?);
    }
    if let Some(value) = &raw.string_comparers {
        overrides.string_comparers =
            Some(lookup(ctx, "string-comparers", value, STRING_COMPARERS)?);
    }
    overrides.validation_exception = raw.validation_exception.clone();

    Ok(overrides)
}

const CONVERSIONS: &[(&str, Conversions)] = &[
    ("type-converter", Conversions::TYPE_CONVERTER),
    ("ef-core-value-converter", Conversions::EF_CORE_VALUE_CONVERTER),
];

const COMPARISON: &[(&str, ComparisonGeneration)] = &[
    ("omit", ComparisonGeneration::Omit),
    ("use-underlying", ComparisonGeneration::UseUnderlying),
];

const PARSING: &[(&str, ParsableGeneration)] = &[
    ("omit", ParsableGeneration::Omit),
    ("methods", ParsableGeneration::Methods),
    ("methods-and-interfaces", ParsableGeneration::MethodsAndInterfaces),
];

const IS_INITIALIZED_METHOD: &[(&str, IsInitializedMethodGeneration)] = &[
    ("omit", IsInitializedMethodGeneration::Omit),
    ("generate", IsInitializedMethodGeneration::Generate),
];

const DEBUG: &[(&str, DebugGeneration)] = &[
    ("off", DebugGeneration::Off),
    ("default", DebugGeneration::Default),
    ("full", DebugGeneration::Full),
];

const CAST: &[(&str, CastOperator)] = &[
    ("none", CastOperator::None),
    ("explicit", CastOperator::Explicit),
    ("implicit", CastOperator::Implicit),
];

const DESERIALIZATION_VALIDATION: &[(&str, DeserializationValidation)] = &[
    ("validate", DeserializationValidation::Validate),
    ("skip", DeserializationValidation::Skip),
];

const NORMALIZATION: &[(&str, Normalization)] = &[
    ("omit", Normalization::Omit),
    ("method", Normalization::Method),
];

const VALIDATION: &[(&str, ValidationGeneration)] = &[
    ("omit", ValidationGeneration::Omit),
    ("generate", ValidationGeneration::Generate),
];

const STATIC_ABSTRACTS: &[(&str, StaticAbstractsGeneration)] = &[
    ("omit", StaticAbstractsGeneration::Omit),
    ("generate", StaticAbstractsGeneration::Generate),
];

const STRING_COMPARERS: &[(&str, StringComparersGeneration)] = &[
    ("omit", StringComparersGeneration::Omit),
    ("generate", StringComparersGeneration::Generate),
];

const ACCESSIBILITY: &[(&str, &str)] = &[("public", "public"), ("internal", "internal")];

fn lookup<T: Copy>(
    ctx: &SourceContext,
    setting: &str,
    value: &str,
    table: &[(&str, T)],
) -> Result<T> {
    for (token, parsed) in table {
        if *token == value {
            return Ok(*parsed);
        }
    }
    let allowed: Vec<&str> = table.iter().map(|(token, _)| *token).collect();
    Err(ctx.unknown_value_error(setting, value, &allowed))
}

fn parse_declaration(raw: &RawValueObject, ctx: &SourceContext) -> Result<Declaration> {
    let kind = match raw.kind.as_deref() {
        None | Some("struct") => TypeKind::Struct,
        Some("class") => TypeKind::Class,
        Some(other) => return Err(ctx.unknown_value_error("kind", other, &["struct", "class"])),
    };
    let accessibility = match raw.accessibility.as_deref() {
        None => "public".to_string(),
        Some(value) => lookup(ctx, "accessibility", value, ACCESSIBILITY)?.to_string(),
    };
    Ok(Declaration {
        kind,
        accessibility,
        is_readonly: raw.readonly.unwrap_or(kind == TypeKind::Struct),
        is_sealed: raw.sealed.unwrap_or(false),
    })
}

/// Render a TOML instance value as host-language literal text. The target
/// grammar is picked by the underlying kind, not the TOML value type.
fn instance_literal(
    value: &toml::Value,
    underlying: &UnderlyingType,
    instance_name: &str,
    ctx: &SourceContext,
) -> Result<String> {
    let mismatch = |expected: &str| -> Box<Error> {
        ctx.validation_error(
            format!("instance '{instance_name}' must have a {expected} value"),
            instance_name,
        )
    };

    match underlying.kind {
        UnderlyingKind::Boolean => match value {
            toml::Value::Boolean(b) => Ok(b.to_string()),
            _ => Err(mismatch("boolean")),
        },
        UnderlyingKind::Byte | UnderlyingKind::Int16 | UnderlyingKind::Int32 => match value {
            toml::Value::Integer(i) => Ok(i.to_string()),
            _ => Err(mismatch("integer")),
        },
        UnderlyingKind::Int64 => match value {
            toml::Value::Integer(i) => Ok(format!("{i}L")),
            _ => Err(mismatch("integer")),
        },
        UnderlyingKind::Single => numeric_literal(value, "f").ok_or_else(|| mismatch("numeric")),
        UnderlyingKind::Double => numeric_literal(value, "d").ok_or_else(|| mismatch("numeric")),
        UnderlyingKind::Decimal => numeric_literal(value, "m").ok_or_else(|| mismatch("numeric")),
        UnderlyingKind::String => match value {
            toml::Value::String(s) => Ok(quote_string(s)),
            _ => Err(mismatch("string")),
        },
        UnderlyingKind::Guid => match value {
            toml::Value::String(s) => Ok(format!("global::System.Guid.Parse({})", quote_string(s))),
            _ => Err(mismatch("string")),
        },
        UnderlyingKind::DateTime => match value {
            toml::Value::String(s) => Ok(format!(
                "global::System.DateTime.Parse({}, global::System.Globalization.CultureInfo.InvariantCulture)",
                quote_string(s)
            )),
            _ => Err(mismatch("string")),
        },
        // Unclassified underlying types take verbatim expression text.
        UnderlyingKind::Other => match value {
            toml::Value::String(s) => Ok(s.clone()),
            _ => Err(mismatch("string expression")),
        },
    }
}

fn numeric_literal(value: &toml::Value, suffix: &str) -> Option<String> {
    match value {
        toml::Value::Integer(i) => Some(format!("{i}{suffix}")),
        toml::Value::Float(f) => Some(format!("{f}{suffix}")),
        _ => None,
    }
}

fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// C# reserved keywords that cannot be used as bare identifiers.
/// Source: https://learn.microsoft.com/dotnet/csharp/language-reference/keywords/
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Validate that a name is a valid identifier in the target language.
/// Returns None if valid, Some(reason) if invalid.
fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if is_csharp_keyword(name) {
        return Some("name is a reserved keyword");
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }
    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Some("name must contain only letters, numbers, and underscores");
        }
    }
    None
}

fn validate_identifier_name(name: &str, context: &str, ctx: &SourceContext) -> Result<()> {
    if let Some(reason) = validate_identifier(name) {
        return Err(ctx.invalid_identifier_error(name, context, reason));
    }
    Ok(())
}

/// A namespace is a dot-separated identifier path; empty means the global
/// scope.
fn validate_namespace(namespace: &str, ctx: &SourceContext) -> Result<()> {
    if namespace.is_empty() {
        return Ok(());
    }
    for segment in namespace.split('.') {
        if let Some(reason) = validate_identifier(segment) {
            return Err(ctx.invalid_identifier_error(segment, "namespace segment", reason));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("CustomerId").is_none());
        assert!(validate_identifier("_hidden").is_none());
        assert!(validate_identifier("Score2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2Fast").is_some());
        assert!(validate_identifier("My-Type").is_some());
        assert!(validate_identifier("class").is_some());
        assert!(validate_identifier("int").is_some());
    }

    #[test]
    fn test_namespace_segments() {
        let ctx = SourceContext::new("", "valo.toml");
        assert!(validate_namespace("", &ctx).is_ok());
        assert!(validate_namespace("Acme.Domain", &ctx).is_ok());
        assert!(validate_namespace("Acme..Domain", &ctx).is_err());
        assert!(validate_namespace("Acme.2Domain", &ctx).is_err());
    }

    #[test]
    fn test_instance_literals_by_kind() {
        let ctx = SourceContext::new("", "valo.toml");
        let render = |alias: &str, value: toml::Value| {
            instance_literal(&value, &UnderlyingType::from_alias(alias), "X", &ctx)
        };

        assert_eq!(render("int", toml::Value::Integer(-1)).unwrap(), "-1");
        assert_eq!(render("long", toml::Value::Integer(7)).unwrap(), "7L");
        assert_eq!(render("decimal", toml::Value::Float(1.5)).unwrap(), "1.5m");
        assert_eq!(render("float", toml::Value::Integer(2)).unwrap(), "2f");
        assert_eq!(render("bool", toml::Value::Boolean(true)).unwrap(), "true");
        assert_eq!(
            render("string", toml::Value::String("a\"b".to_string())).unwrap(),
            "\"a\\\"b\""
        );
        assert_eq!(
            render(
                "guid",
                toml::Value::String("00000000-0000-0000-0000-000000000000".to_string())
            )
            .unwrap(),
            "global::System.Guid.Parse(\"00000000-0000-0000-0000-000000000000\")"
        );
        // Type mismatch is rejected, not coerced.
        assert!(render("int", toml::Value::String("1".to_string())).is_err());
    }

    #[test]
    fn test_unknown_setting_value_is_rejected() {
        let raw = RawConfig {
            comparison: Some("sometimes".to_string()),
            ..Default::default()
        };
        let ctx = SourceContext::new("comparison = \"sometimes\"", "valo.toml");
        let err = parse_overrides(&raw, &ctx).unwrap_err();
        assert!(matches!(*err, Error::UnknownValue { .. }));
    }
}

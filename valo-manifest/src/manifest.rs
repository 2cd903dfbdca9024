//! Raw manifest schema and parsing for valo.toml files.
//!
//! The raw types mirror the TOML shape verbatim; resolution into work items
//! lives in [`crate::resolve`].

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Root manifest for valo.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Process-wide configuration defaults.
    ///
    /// Every field is optional; unset fields fall through to the hardcoded
    /// baseline during resolution.
    #[serde(default)]
    pub defaults: RawConfig,

    /// The wrapper declarations to generate.
    #[serde(default, rename = "value-object")]
    pub value_objects: Vec<RawValueObject>,
}

/// One layer of raw configuration, as written in TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawConfig {
    /// Conversion glue to generate, e.g. `["type-converter"]`.
    pub conversions: Option<Vec<String>>,
    pub comparison: Option<String>,
    pub parsing: Option<String>,
    pub is_initialized_method: Option<String>,
    pub debug: Option<String>,
    pub cast_to_underlying: Option<String>,
    pub cast_from_underlying: Option<String>,
    pub deserialization_validation: Option<String>,
    pub normalization: Option<String>,
    pub validation: Option<String>,
    pub static_abstracts: Option<String>,
    pub string_comparers: Option<String>,
    /// Exception type thrown on validation failure or uninitialized use.
    pub validation_exception: Option<String>,
}

/// One `[[value-object]]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawValueObject {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    pub underlying: String,
    /// `struct` (default) or `class`.
    pub kind: Option<String>,
    /// Accessibility keyword; defaults to `public`.
    pub accessibility: Option<String>,
    /// `readonly` modifier; structs only, defaults to true.
    pub readonly: Option<bool>,
    /// `sealed` modifier; classes only, defaults to false.
    pub sealed: Option<bool>,
    /// Per-type configuration overrides, inline with the table.
    #[serde(flatten)]
    pub config: RawConfig,
    #[serde(default)]
    pub instances: Vec<RawInstance>,
}

/// A named compile-time instance of the wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInstance {
    pub name: String,
    pub value: toml::Value,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "valo.toml")
    }
}

impl Manifest {
    /// Parse a valo.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a valo.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_manifest_parses() {
        let manifest: Manifest = r#"
            [[value-object]]
            name = "CustomerId"
            underlying = "int"
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.value_objects.len(), 1);
        let vo = &manifest.value_objects[0];
        assert_eq!(vo.name, "CustomerId");
        assert_eq!(vo.underlying, "int");
        assert!(vo.namespace.is_empty());
        assert!(vo.instances.is_empty());
    }

    #[test]
    fn test_defaults_and_inline_overrides_parse() {
        let manifest: Manifest = r#"
            [defaults]
            comparison = "use-underlying"
            conversions = ["type-converter", "ef-core-value-converter"]

            [[value-object]]
            name = "Score"
            namespace = "Acme.Domain"
            underlying = "int"
            comparison = "omit"

            [[value-object.instances]]
            name = "Zero"
            value = 0
        "#
        .parse()
        .unwrap();

        assert_eq!(
            manifest.defaults.comparison.as_deref(),
            Some("use-underlying")
        );
        assert_eq!(
            manifest.defaults.conversions.as_deref(),
            Some(&["type-converter".to_string(), "ef-core-value-converter".to_string()][..])
        );
        let vo = &manifest.value_objects[0];
        assert_eq!(vo.config.comparison.as_deref(), Some("omit"));
        assert_eq!(vo.instances[0].name, "Zero");
    }

    #[test]
    fn test_syntax_error_reports_parse_error() {
        let err = Manifest::from_str_with_filename("value-object = [", "broken.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}

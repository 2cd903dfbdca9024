//! TOML manifest parsing and resolution for valo wrapper generation.
//!
//! A valo.toml manifest declares which wrapper value types to generate and
//! how. Parsing keeps the raw TOML shape; [`resolve`] turns it into
//! generation-ready work items with the layered configuration applied.

mod error;
mod file;
mod manifest;
mod resolve;

pub use error::{Error, Result, SourceContext};
pub use file::ValoToml;
pub use manifest::{Manifest, RawConfig, RawInstance, RawValueObject, parse_manifest};
pub use resolve::{
    DEFAULT_VALIDATION_EXCEPTION, ResolvedValueObject, parse_overrides, resolve,
};

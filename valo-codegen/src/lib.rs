//! Code synthesis engine for the valo value-object generator.
//!
//! Given one [`WorkItem`](valo_ir::WorkItem) and its declaration shape, the
//! [`Assembler`] runs every feature generator and concatenates their
//! fragments into one complete type definition, emitted as host-language
//! source text. Each invocation is self-contained: it reads only its own
//! work item and the shared, read-only template store, so distinct
//! declarations may be assembled concurrently without locking.
//!
//! # Module Organization
//!
//! - [`assembler`] - The struct/class assembler (top-level entry point)
//! - [`builder`] - Indentation-aware source text builder
//! - [`diagnostics`] - Build diagnostics for generation misconfiguration
//! - [`generators`] - One stateless generator per optional capability
//! - [`templates`] - Template-fragment store and substitution

pub mod assembler;
pub mod builder;
pub mod diagnostics;
pub mod generators;
pub mod templates;

pub use assembler::{Assembler, GeneratedSource};
pub use builder::CodeBuilder;
pub use diagnostics::{Diagnostic, Severity, codes};
pub use templates::{BuiltinTemplates, TemplateStore, expand, features};

/// Tool name recorded in generated-code provenance metadata.
pub fn tool_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

/// Tool version recorded in generated-code provenance metadata.
pub fn tool_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

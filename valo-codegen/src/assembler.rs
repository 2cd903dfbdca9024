//! Struct/class assembler.
//!
//! Orchestrates every feature generator for one declaration and
//! concatenates their fragments into one complete, self-consistent type
//! definition. Fragment order is fixed so output stays deterministic and
//! diff-stable. The assembler itself never panics: unmet preconditions are
//! caught before fragment concatenation and surface as build diagnostics,
//! leaving other declarations in the pass unaffected.

use valo_ir::{
    ComparisonGeneration, Declaration, ParsableGeneration, StringComparersGeneration, TypeKind,
    UnderlyingKind, WorkItem,
};

use crate::builder::CodeBuilder;
use crate::diagnostics::{Diagnostic, codes};
use crate::generators::{
    casting, comparable, conversions, debug, equality, factories, hashing, instances, parsing,
    static_abstracts, string_comparers,
};
use crate::templates::TemplateStore;
use crate::{tool_name, tool_version};

/// One generated source unit, suitable for addition to the compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Stable per-declaration file name, e.g. `CustomerId.g.cs`.
    pub hint_name: String,
    pub text: String,
}

pub struct Assembler<'t> {
    templates: &'t dyn TemplateStore,
}

impl<'t> Assembler<'t> {
    pub fn new(templates: &'t dyn TemplateStore) -> Self {
        Self { templates }
    }

    /// Assemble the complete type definition for one work item.
    ///
    /// # Errors
    ///
    /// Returns a build diagnostic attributed to the declaration when a
    /// requested feature's preconditions are unmet or a required template is
    /// missing. Generation for other declarations proceeds independently.
    pub fn assemble(
        &self,
        item: &WorkItem,
        decl: &Declaration,
    ) -> Result<GeneratedSource, Diagnostic> {
        self.check_preconditions(item)?;

        // Template resolution can fail; do it before any emission.
        let conversion_bodies = conversions::bodies(item, self.templates)?;

        let vo = item.vo_type_name.clone();
        let text = if item.full_namespace.is_empty() {
            CodeBuilder::new()
                .line("using Valo;")
                .blank()
                .apply(|b| self.emit_declaration(b, item, decl, conversion_bodies))
                .build()
        } else {
            CodeBuilder::new()
                .line("using Valo;")
                .blank()
                .braced(&format!("namespace {}", item.full_namespace), |b| {
                    self.emit_declaration(b, item, decl, conversion_bodies)
                })
                .build()
        };

        Ok(GeneratedSource {
            hint_name: format!("{vo}.g.cs"),
            text,
        })
    }

    fn check_preconditions(&self, item: &WorkItem) -> Result<(), Diagnostic> {
        let kind = item.underlying.kind;
        let und = item.underlying_type_full_name();

        if item.config.comparison == ComparisonGeneration::UseUnderlying && !kind.has_total_order()
        {
            return Err(Diagnostic::error(
                codes::COMPARISON_NOT_ORDERED,
                format!("comparison generation requested but underlying type '{und}' has no total order"),
            )
            .at(&item.vo_type_name));
        }

        if item.config.parsing != ParsableGeneration::Omit && !kind.is_parseable() {
            return Err(Diagnostic::error(
                codes::PARSING_NOT_PARSEABLE,
                format!("parsing generation requested but underlying type '{und}' has no parse routines"),
            )
            .at(&item.vo_type_name));
        }

        if item.config.string_comparers == StringComparersGeneration::Generate
            && kind != UnderlyingKind::String
        {
            return Err(Diagnostic::error(
                codes::STRING_COMPARERS_NOT_STRING,
                format!("string comparers requested but underlying type '{und}' is not a string"),
            )
            .at(&item.vo_type_name));
        }

        Ok(())
    }

    fn emit_declaration(
        &self,
        b: CodeBuilder,
        item: &WorkItem,
        decl: &Declaration,
        conversion_bodies: Option<String>,
    ) -> CodeBuilder {
        let vo = &item.vo_type_name;
        let und = item.underlying_type_full_name();

        b.line("[global::System.Diagnostics.CodeAnalysis.ExcludeFromCodeCoverage]")
            .line(&format!(
                "[global::System.CodeDom.Compiler.GeneratedCode(\"{}\", \"{}\")]",
                tool_name(),
                tool_version()
            ))
            .apply(|b| match conversions::attributes(item) {
                Some(attr) => b.fragment(&attr),
                None => b,
            })
            .apply(|b| match debug::attributes(item) {
                Some(attrs) => b.fragment(&attrs),
                None => b,
            })
            .line(&format!(
                "{} {} : {}",
                decl.modifiers(),
                vo,
                self.interface_headers(item).join(", ")
            ))
            .line("{")
            .indent()
            .maybe(debug::stack_trace_field(item))
            .line("private readonly global::System.Boolean _isInitialized;")
            .blank()
            .line(&format!("private readonly {und} _value;"))
            .blank()
            .fragment(&self.value_property(item, decl))
            .blank()
            .fragment(&self.uninitialized_constructor(item, decl))
            .blank()
            .fragment(&self.value_constructor(item))
            .blank()
            .fragment(&factories::from_factory(item))
            .blank()
            .fragment(&factories::try_from(item))
            .blank()
            .maybe(factories::is_initialized_method(item, decl))
            .maybe(string_comparers::comparers(item))
            .maybe(casting::operators(item))
            .maybe(factories::guid_factory(item))
            .fragment(&factories::deserialize_factory(item))
            .blank()
            .fragment(&equality::methods(item, decl))
            .blank()
            .maybe(comparable::implementation(item, decl))
            .maybe(parsing::methods(item))
            .fragment(&hashing::get_hash_code(item, decl))
            .blank()
            .fragment(&self.to_string_override(item, decl))
            .blank()
            .fragment(&self.ensure_initialized(item, decl))
            .blank()
            .maybe(instances::instances(item))
            .maybe(conversion_bodies)
            .apply(|b| match debug::proxy(item) {
                Some(proxy) => b.fragment(&proxy),
                None => b,
            })
            .dedent()
            .line("}")
            .apply(|b| match conversions::ef_core_extensions(item) {
                Some(ext) => b.blank().fragment(&ext),
                None => b,
            })
    }

    /// Interface/header list composed from optional capability headers.
    /// Order is fixed: equality first, then comparison, then parsing, then
    /// static abstracts.
    fn interface_headers(&self, item: &WorkItem) -> Vec<String> {
        let mut headers = equality::interface_headers(item);
        headers.extend(comparable::header(item));
        headers.extend(parsing::header(item));
        headers.extend(static_abstracts::header(item));
        headers
    }

    fn value_property(&self, item: &WorkItem, decl: &Declaration) -> String {
        let und = item.underlying_type_full_name();
        let exc = &item.validation_exception_full_name;
        let q = decl.member_qualifier();
        format!(
            "/// <summary>\n\
             /// Gets the underlying <see cref=\"{und}\" /> value if set,\n\
             /// otherwise a {exc} is thrown.\n\
             /// </summary>\n\
             public {q}{und} Value\n\
             {{\n    \
                 [global::System.Diagnostics.DebuggerStepThrough]\n    \
                 get\n    \
                 {{\n        \
                     EnsureInitialized();\n        \
                     return _value;\n    \
                 }}\n\
             }}"
        )
    }

    /// The zero-argument constructor producing the uninitialized sentinel.
    fn uninitialized_constructor(&self, item: &WorkItem, decl: &Declaration) -> String {
        let vo = &item.vo_type_name;
        let accessibility = match decl.kind {
            TypeKind::Struct => "public",
            TypeKind::Class => "protected",
        };
        let capture = debug::capture_stack_trace(item)
            .map(|fragment| {
                let mut out = String::new();
                for line in fragment.lines() {
                    if line.starts_with('#') {
                        out.push_str(line);
                    } else {
                        out.push_str("    ");
                        out.push_str(line);
                    }
                    out.push('\n');
                }
                out
            })
            .unwrap_or_default();
        format!(
            "[global::System.Diagnostics.DebuggerStepThrough]\n\
             [global::System.ComponentModel.EditorBrowsable(global::System.ComponentModel.EditorBrowsableState.Never)]\n\
             {accessibility} {vo}()\n\
             {{\n\
             {capture}    \
                 _isInitialized = false;\n    \
                 _value = default;\n\
             }}"
        )
    }

    /// The private value constructor producing the initialized state.
    fn value_constructor(&self, item: &WorkItem) -> String {
        let vo = &item.vo_type_name;
        let und = item.underlying_type_full_name();
        format!(
            "[global::System.Diagnostics.DebuggerStepThrough]\n\
             private {vo}({und} value)\n\
             {{\n    \
                 _value = value;\n    \
                 _isInitialized = true;\n\
             }}"
        )
    }

    fn to_string_override(&self, _item: &WorkItem, decl: &Declaration) -> String {
        let q = decl.member_qualifier();
        format!("public {q}override global::System.String ToString() => Value.ToString();")
    }

    /// The uninitialized-access guard used by every public value read.
    fn ensure_initialized(&self, item: &WorkItem, decl: &Declaration) -> String {
        let exc = &item.validation_exception_full_name;
        let q = decl.member_qualifier();
        let message = debug::uninitialized_message(item);
        let mut message_block = String::new();
        for line in message.lines() {
            if line.starts_with('#') {
                message_block.push_str(line);
            } else {
                message_block.push_str("        ");
                message_block.push_str(line);
            }
            message_block.push('\n');
        }
        format!(
            "private {q}void EnsureInitialized()\n\
             {{\n    \
                 if (!_isInitialized)\n    \
                 {{\n\
             {message_block}\
             \n        \
                 throw new {exc}(message);\n    \
                 }}\n\
             }}"
        )
    }
}

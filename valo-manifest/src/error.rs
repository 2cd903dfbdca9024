use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for valo-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Find the span of a literal token in the source, if it occurs.
    pub fn find_span(&self, token: &str) -> Option<SourceSpan> {
        self.src
            .find(token)
            .map(|pos| SourceSpan::from((pos, token.len())))
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, located at `token` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, token: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: self.find_span(token),
            message: message.into(),
        })
    }

    /// Create an unknown-setting-value error.
    pub fn unknown_value_error(
        &self,
        setting: impl Into<String>,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Box<Error> {
        let value = value.into();
        Box::new(Error::UnknownValue {
            src: self.named_source(),
            span: self.find_span(&value),
            setting: setting.into(),
            value,
            allowed: allowed.join(", "),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        let name = name.into();
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span: self.find_span(&name),
            name,
            context: context.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a valo.toml manifest or pass --config <path>"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse valo.toml")]
    #[diagnostic(code(valo::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(valo::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("unknown value '{value}' for setting '{setting}'")]
    #[diagnostic(code(valo::unknown_value), help("valid values are: {allowed}"))]
    UnknownValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown value")]
        span: Option<SourceSpan>,
        setting: String,
        value: String,
        allowed: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(help(
        "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
    ))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}

//! Build diagnostics for the synthesis engine.
//!
//! Generation-time misconfiguration never becomes a panic or a process
//! failure: it is reported as a diagnostic attributed to the offending
//! declaration, and generation for other declarations proceeds
//! independently.

use serde::Serialize;

/// Diagnostic codes raised during assembly.
pub mod codes {
    /// No specific or generic template exists for a requested conversion.
    pub const MISSING_TEMPLATE: &str = "VALO010";
    /// Comparison requested but the underlying type has no total order.
    pub const COMPARISON_NOT_ORDERED: &str = "VALO011";
    /// String comparers requested for a non-string underlying type.
    pub const STRING_COMPARERS_NOT_STRING: &str = "VALO012";
    /// Parsing requested but the underlying type has no parse routines.
    pub const PARSING_NOT_PARSEABLE: &str = "VALO013";
}

/// Severity level for a build diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A build-time diagnostic attributed to one declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
    /// Name of the declaration this diagnostic is attributed to.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            location: None,
        }
    }

    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            location: None,
        }
    }

    /// Attribute this diagnostic to a declaration.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.code, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " (at {})", location)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error(codes::MISSING_TEMPLATE, "no template").at("CustomerId");
        assert_eq!(
            diag.to_string(),
            "error VALO010: no template (at CustomerId)"
        );
    }
}

//! Code builder utility for generating properly indented C# source.

const INDENT: &str = "    ";

/// Fluent API for building C# source text.
///
/// # Example
///
/// ```
/// use valo_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .braced("namespace Acme", |b| b.line("// ..."))
///     .build();
///
/// assert_eq!(code, "namespace Acme\n{\n    // ...\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add a multi-line fragment, indenting every non-empty line to the
    /// current level and preserving the fragment's internal indentation.
    /// Preprocessor lines (`#if`, `#nullable`, ...) stay at column zero.
    pub fn fragment(mut self, text: &str) -> Self {
        for raw in text.lines() {
            if raw.is_empty() {
                self.buffer.push('\n');
            } else if raw.starts_with('#') {
                self.buffer.push_str(raw);
                self.buffer.push('\n');
            } else {
                self.write_indent();
                self.buffer.push_str(raw);
                self.buffer.push('\n');
            }
        }
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a brace-delimited block in the host language's style: header on
    /// its own line, braces on their own lines, body indented.
    pub fn braced<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).line("{").indent();
        f(builder).dedent().line("}")
    }

    /// Thread the builder through a composition step.
    pub fn apply<F>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Add an optional fragment followed by a blank separator line; a no-op
    /// when the fragment is absent.
    pub fn maybe(self, fragment: Option<String>) -> Self {
        match fragment {
            Some(text) => self.fragment(&text).blank(),
            None => self,
        }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

//! Code builder utility for generating properly indented code.

/// One indentation level of emitted code.
pub const INDENT: &str = "    ";

/// Line buffer for brace-delimited code with fixed indentation.
///
/// Methods return `&mut Self` so a builder can be threaded through the
/// several passes that assemble one unit.
///
/// # Example
///
/// ```
/// use trellis_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::default();
/// builder
///     .push_line("switch (value)")
///     .push_open()
///     .push_line("case Mode.On:")
///     .push_close();
/// let code = builder.build();
/// assert_eq!(code, "switch (value)\n{\n    case Mode.On:\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Add a line at the current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of a multi-line string at the current indentation.
    pub fn push_lines(&mut self, s: &str) -> &mut Self {
        for line in s.lines() {
            self.push_line(line);
        }
        self
    }

    /// Add an empty line. Blank lines carry no indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Open a brace on its own line and indent.
    pub fn push_open(&mut self) -> &mut Self {
        self.push_line("{").push_indent()
    }

    /// Dedent and close a brace on its own line.
    pub fn push_close(&mut self) -> &mut Self {
        self.push_dedent().push_line("}")
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::default();
        builder
            .push_line("namespace Demo")
            .push_open()
            .push_line("partial class Main")
            .push_open()
            .push_line("int x;")
            .push_close()
            .push_close();

        assert_eq!(
            builder.build(),
            "namespace Demo\n{\n    partial class Main\n    {\n        int x;\n    }\n}\n"
        );
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::default();
        builder.push_indent().push_line("a;").push_blank().push_line("b;");
        assert_eq!(builder.build(), "    a;\n\n    b;\n");
    }

    #[test]
    fn test_push_lines_indents_each_line() {
        let mut builder = CodeBuilder::default();
        builder.push_indent().push_lines("a;\nb;");
        assert_eq!(builder.build(), "    a;\n    b;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::default();
        builder.push_dedent().push_dedent().push_line("x;");
        assert_eq!(builder.build(), "x;\n");
    }
}

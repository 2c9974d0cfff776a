//! Line-and-block writer for generated source
//!
//! Pure formatting: one logical line per call, with nested blocks tracked
//! by an indentation depth owned by the writer. No business logic lives
//! here.

const INDENT: &str = "    ";

/// Accumulates generated source lines with block nesting.
#[derive(Debug, Default)]
pub struct SourceWriter {
    lines: Vec<String>,
    depth: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one line at the current depth.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", INDENT.repeat(self.depth), text));
        }
    }

    /// Emit an empty separator line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Emit `header {`, run `body` one level deeper, then close with `}`.
    pub fn block(&mut self, header: impl AsRef<str>, body: impl FnOnce(&mut Self)) {
        self.line(format!("{} {{", header.as_ref()));
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line("}");
    }

    /// Consume the writer and join the buffered lines.
    pub fn into_string(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nested_blocks_indent() {
        let mut writer = SourceWriter::new();
        writer.block("outer", |w| {
            w.line("one");
            w.block("inner", |w| {
                w.line("two");
            });
        });
        assert_eq!(
            writer.into_string(),
            "outer {\n    one\n    inner {\n        two\n    }\n}\n"
        );
    }

    #[test]
    fn test_blank_lines_carry_no_indent() {
        let mut writer = SourceWriter::new();
        writer.block("outer", |w| {
            w.blank();
            w.line("");
        });
        assert_eq!(writer.into_string(), "outer {\n\n\n}\n");
    }
}

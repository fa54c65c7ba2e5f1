//! Indent-aware line builder for Graphviz output (2-space indentation).

pub struct DotWriter {
    buf: String,
    indent_level: usize,
}

impl DotWriter {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(1024),
            indent_level: 0,
        }
    }

    /// Write a complete line at the current indentation.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buf.push_str("  ");
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Write `text {` and indent.
    pub fn block_open(&mut self, text: &str) {
        self.line(&format!("{} {{", text));
        self.indent_level += 1;
    }

    /// Dedent and write `}`.
    pub fn block_close(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.line("}");
    }

    /// `a -> b;`, with an optional edge label.
    pub fn edge(&mut self, from: &str, to: &str, label: Option<&str>) {
        match label {
            Some(label) => self.line(&format!(
                "{} -> {} [label={}];",
                quote(from),
                quote(to),
                quote(label)
            )),
            None => self.line(&format!("{} -> {};", quote(from), quote(to))),
        }
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

impl Default for DotWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote a Graphviz ID, escaping backslashes and double quotes.
pub fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

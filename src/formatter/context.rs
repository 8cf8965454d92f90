use std::fmt::Write;

/// Output buffer plus indentation state shared by all [`super::Format`]
/// implementations.
#[derive(Debug, Clone)]
pub struct FormatterContext {
    pub output: String,
    indent_level: usize,
    indent_string: String,
}

impl FormatterContext {
    pub fn new() -> Self {
        Self::with_indent_size(4)
    }

    pub fn with_indent_size(indent_size: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_string: " ".repeat(indent_size),
        }
    }

    pub fn write(&mut self, text: &str) -> Result<(), std::fmt::Error> {
        self.output.write_str(text)
    }

    pub fn write_indent(&mut self) -> Result<(), std::fmt::Error> {
        for _ in 0..self.indent_level {
            self.output.write_str(&self.indent_string)?;
        }
        Ok(())
    }

    pub fn write_newline(&mut self) -> Result<(), std::fmt::Error> {
        self.output.write_str("\n")
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}

impl Default for FormatterContext {
    fn default() -> Self {
        Self::new()
    }
}

//! ANSI color codes for emitted declarations.
//!
//! Three roles plus reset:
//! - Name: declared type names
//! - Literal: enum string literals
//! - Keyword: `export`, `interface`, `type`, `extends` and punctuation

/// ANSI palette used when declarations are printed to a terminal.
///
/// Only standard 16-color codes, so it reads on light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub name: &'static str,
    pub literal: &'static str,
    pub keyword: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled.
    pub const ON: Self = Self {
        name: "\x1b[34m",
        literal: "\x1b[32m",
        keyword: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled. Every code is the empty string, so output is plain text.
    pub const OFF: Self = Self {
        name: "",
        literal: "",
        keyword: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in `code` followed by a reset.
    pub fn paint(&self, code: &str, text: &str) -> String {
        if code.is_empty() {
            return text.to_string();
        }
        format!("{code}{text}{}", self.reset)
    }
}

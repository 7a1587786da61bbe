//! Configuration types for TypeScript emission.

use tsdecl_core::Colors;

/// How to represent the absent value in TypeScript.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoidType {
    /// `null` - explicit null value
    #[default]
    Null,
    /// `undefined` - the absence of a value
    Undefined,
}

impl VoidType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Undefined => "undefined",
        }
    }
}

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to export declarations
    pub(crate) export: bool,
    /// How to represent the absent value
    pub(crate) void_type: VoidType,
    /// Type name used for integer primitives
    pub(crate) int_type_name: String,
    /// Member indentation width in spaces
    pub(crate) indent: usize,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: false,
            void_type: VoidType::default(),
            int_type_name: "number".to_string(),
            indent: 4,
            colors: Colors::OFF,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to export declarations.
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    /// Set the absent value representation.
    pub fn void_type(mut self, value: VoidType) -> Self {
        self.void_type = value;
        self
    }

    /// Set the type name integers render as (e.g. `int` with a matching
    /// `type int = number;` in scope).
    pub fn int_type_name(mut self, value: impl Into<String>) -> Self {
        self.int_type_name = value.into();
        self
    }

    /// Set the member indentation width.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}

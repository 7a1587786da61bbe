use std::fmt;

use tsdecl_core::descriptor::ANY;

/// A rendered TypeScript type expression, kept as its union alternatives.
///
/// Alternatives are deduplicated and a union containing `any` is `any`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TsType {
    alternatives: Vec<String>,
}

impl TsType {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            alternatives: vec![text.into()],
        }
    }

    pub fn any() -> Self {
        Self::new(ANY)
    }

    pub fn is_any(&self) -> bool {
        self.alternatives.iter().any(|a| a == ANY)
    }

    pub fn is_union(&self) -> bool {
        self.alternatives.len() > 1
    }

    /// Union with `other`.
    pub fn or(mut self, other: TsType) -> Self {
        if self.is_any() || other.is_any() {
            return Self::any();
        }
        for alternative in other.alternatives {
            if !self.alternatives.contains(&alternative) {
                self.alternatives.push(alternative);
            }
        }
        self
    }

    /// Text usable as an array element: unions are parenthesized.
    pub fn with_parens(&self) -> String {
        if self.is_union() {
            format!("({self})")
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.alternatives.join(" | "))
    }
}

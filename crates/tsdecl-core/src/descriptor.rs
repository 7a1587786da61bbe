//! Normalized type references.
//!
//! A [`TypeDescriptor`] is a finite tree. Class references point at other
//! classes by fully-qualified name only, which is where reference cycles get
//! broken; the descriptor tree itself never recurses into a class body.

use serde::Deserialize;

/// Primitive name used for untyped positions (raw collections, missing
/// generic arguments).
pub const ANY: &str = "any";

/// A single type reference.
///
/// Invariant: `Nullable` never directly wraps another `Nullable`. All
/// construction paths, deserialization included, go through
/// [`TypeDescriptor::nullable`] which collapses the double wrapper.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawTypeDescriptor")]
pub enum TypeDescriptor {
    /// Host primitive such as `int`, `boolean`, `string`.
    Primitive { name: String },
    /// Class reference with its ordered type arguments.
    Reference {
        class: String,
        arguments: Vec<TypeDescriptor>,
    },
    /// Type parameter of the enclosing class.
    GenericParameter { name: String },
    /// Native array or any collection normalized to one.
    Array { element: Box<TypeDescriptor> },
    /// Dictionary type.
    Map {
        key: Box<TypeDescriptor>,
        value: Box<TypeDescriptor>,
    },
    /// The wrapped type or the absent value.
    Nullable { inner: Box<TypeDescriptor> },
    /// Callable value. Never rendered; members of this type are skipped.
    Function,
}

impl TypeDescriptor {
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive { name: name.into() }
    }

    pub fn any() -> Self {
        Self::primitive(ANY)
    }

    /// Reference to a class without type arguments.
    pub fn class(class: impl Into<String>) -> Self {
        Self::reference(class, Vec::new())
    }

    pub fn reference(class: impl Into<String>, arguments: Vec<TypeDescriptor>) -> Self {
        Self::Reference {
            class: class.into(),
            arguments,
        }
    }

    pub fn generic(name: impl Into<String>) -> Self {
        Self::GenericParameter { name: name.into() }
    }

    pub fn array(element: TypeDescriptor) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Wrap in `Nullable`, collapsing an already nullable type.
    pub fn nullable(inner: TypeDescriptor) -> Self {
        match inner {
            nullable @ Self::Nullable { .. } => nullable,
            inner => Self::Nullable {
                inner: Box::new(inner),
            },
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable { .. })
    }

    /// Strip one top-level `Nullable`, reporting whether there was one.
    pub fn strip_nullable(&self) -> (&TypeDescriptor, bool) {
        match self {
            Self::Nullable { inner } => (inner, true),
            other => (other, false),
        }
    }

    /// Owned variant of [`TypeDescriptor::strip_nullable`].
    pub fn into_non_nullable(self) -> (TypeDescriptor, bool) {
        match self {
            Self::Nullable { inner } => (*inner, true),
            other => (other, false),
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function)
    }

    /// Class names referenced anywhere in this tree, in left-to-right order.
    ///
    /// Duplicates are kept; callers deduplicate against their own visited set.
    pub fn referenced_classes(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_classes(&mut out);
        out
    }

    fn collect_classes<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Primitive { .. } | Self::GenericParameter { .. } | Self::Function => {}
            Self::Reference { class, arguments } => {
                out.push(class);
                for argument in arguments {
                    argument.collect_classes(out);
                }
            }
            Self::Array { element } => element.collect_classes(out),
            Self::Map { key, value } => {
                key.collect_classes(out);
                value.collect_classes(out);
            }
            Self::Nullable { inner } => inner.collect_classes(out),
        }
    }
}

/// Wire shape of a type descriptor, tagged by `kind`.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawTypeDescriptor {
    Primitive {
        name: String,
    },
    Reference {
        class: String,
        #[serde(default)]
        arguments: Vec<TypeDescriptor>,
    },
    GenericParameter {
        name: String,
    },
    Array {
        element: TypeDescriptor,
    },
    Map {
        key: TypeDescriptor,
        value: TypeDescriptor,
    },
    Nullable {
        inner: TypeDescriptor,
    },
    Function,
}

impl From<RawTypeDescriptor> for TypeDescriptor {
    fn from(raw: RawTypeDescriptor) -> Self {
        match raw {
            RawTypeDescriptor::Primitive { name } => Self::Primitive { name },
            RawTypeDescriptor::Reference { class, arguments } => {
                Self::Reference { class, arguments }
            }
            RawTypeDescriptor::GenericParameter { name } => Self::GenericParameter { name },
            RawTypeDescriptor::Array { element } => Self::array(element),
            RawTypeDescriptor::Map { key, value } => Self::map(key, value),
            RawTypeDescriptor::Nullable { inner } => Self::nullable(inner),
            RawTypeDescriptor::Function => Self::Function,
        }
    }
}

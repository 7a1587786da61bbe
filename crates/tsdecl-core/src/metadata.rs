//! Per-class metadata as reported by a reflection front end.
//!
//! Records are immutable once built. The builder methods exist for front ends
//! that assemble metadata in code and for tests; JSON front ends go through
//! [`crate::ClassRegistry::from_json`].

use serde::Deserialize;

use crate::TypeDescriptor;

/// Tri-state nullability marker.
///
/// Used for member annotations, parameter-group defaults and class-level
/// defaults alike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nullability {
    Nullable,
    NonNull,
    #[default]
    Unspecified,
}

impl Nullability {
    /// `Some(nullable)` when the marker is explicit.
    pub fn explicit(self) -> Option<bool> {
        match self {
            Self::Nullable => Some(true),
            Self::NonNull => Some(false),
            Self::Unspecified => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

/// What kind of declaration a class turns into.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassKind {
    /// Plain class, interface or record: emitted as an interface.
    #[default]
    Class,
    /// Enumeration: emitted as a union of its constant names.
    Enum {
        #[serde(default)]
        constants: Vec<String>,
    },
    /// Closed hierarchy: emitted as a union of its subclasses.
    Sealed {
        #[serde(default)]
        subclasses: Vec<String>,
    },
}

/// Declared type parameter with its upper bounds.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TypeParameter {
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<TypeDescriptor>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bound(mut self, bound: TypeDescriptor) -> Self {
        self.bounds.push(bound);
        self
    }
}

/// One declared property, field or bean getter.
///
/// A field and its getter may both be reported under the same name; the
/// compiler merges them into one member.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PropertyMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// Explicit annotation on the member itself.
    #[serde(default)]
    pub nullability: Nullability,
    /// Default declared for the member's parameter group.
    #[serde(default)]
    pub scope_default: Nullability,
    /// What the host type system itself says about the declared type, for
    /// hosts that track nullability (a Kotlin `String` is `NonNull`, a
    /// `String?` is `Nullable`). A `nullable` wrapper in the declared type
    /// counts as `Nullable` too.
    #[serde(default)]
    pub host_nullability: Nullability,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
    /// No backing storage: value is derived on each access.
    #[serde(default)]
    pub computed: bool,
    /// Exposed through a bean-style getter even if the field is not public.
    #[serde(default)]
    pub has_getter: bool,
}

impl PropertyMetadata {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            nullability: Nullability::Unspecified,
            scope_default: Nullability::Unspecified,
            host_nullability: Nullability::Unspecified,
            visibility: Visibility::Public,
            is_static: false,
            computed: false,
            has_getter: false,
        }
    }

    pub fn nullability(mut self, value: Nullability) -> Self {
        self.nullability = value;
        self
    }

    pub fn scope_default(mut self, value: Nullability) -> Self {
        self.scope_default = value;
        self
    }

    pub fn host_nullability(mut self, value: Nullability) -> Self {
        self.host_nullability = value;
        self
    }

    pub fn visibility(mut self, value: Visibility) -> Self {
        self.visibility = value;
        self
    }

    pub fn is_static(mut self, value: bool) -> Self {
        self.is_static = value;
        self
    }

    pub fn computed(mut self, value: bool) -> Self {
        self.computed = value;
        self
    }

    pub fn has_getter(mut self, value: bool) -> Self {
        self.has_getter = value;
        self
    }

    /// Visible from outside the class: public, or reachable through a getter.
    pub fn is_observable(&self) -> bool {
        self.visibility == Visibility::Public || self.has_getter
    }
}

/// Everything the compiler needs to know about one class.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClassMetadata {
    /// Fully-qualified name, the class identity.
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub superclass: Option<TypeDescriptor>,
    #[serde(default)]
    pub properties: Vec<PropertyMetadata>,
    /// Class-wide nullability default (e.g. "non-null unless annotated").
    #[serde(default)]
    pub nullability_default: Nullability,
}

impl ClassMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Class,
            type_parameters: Vec::new(),
            superclass: None,
            properties: Vec::new(),
            nullability_default: Nullability::Unspecified,
        }
    }

    pub fn enumeration<I, S>(name: impl Into<String>, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut class = Self::new(name);
        class.kind = ClassKind::Enum {
            constants: constants.into_iter().map(Into::into).collect(),
        };
        class
    }

    pub fn sealed<I, S>(name: impl Into<String>, subclasses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut class = Self::new(name);
        class.kind = ClassKind::Sealed {
            subclasses: subclasses.into_iter().map(Into::into).collect(),
        };
        class
    }

    pub fn type_parameter(mut self, parameter: TypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn superclass(mut self, superclass: TypeDescriptor) -> Self {
        self.superclass = Some(superclass);
        self
    }

    pub fn property(mut self, property: PropertyMetadata) -> Self {
        self.properties.push(property);
        self
    }

    pub fn nullability_default(mut self, value: Nullability) -> Self {
        self.nullability_default = value;
        self
    }

    /// Name of the superclass, if it is a class reference.
    pub fn superclass_name(&self) -> Option<&str> {
        match &self.superclass {
            Some(TypeDescriptor::Reference { class, .. }) => Some(class),
            _ => None,
        }
    }

    pub fn is_sealed(&self) -> bool {
        matches!(self.kind, ClassKind::Sealed { .. })
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, ClassKind::Enum { .. })
    }
}

//! Engine configuration: what to expand, what to treat as native, and how
//! host containers are recognized.

use indexmap::{IndexMap, IndexSet};

/// Classes never expanded into declarations of their own.
pub const DEFAULT_EXCLUDED: &[&str] = &[
    "java.lang.Object",
    "kotlin.Any",
    "java.io.Serializable",
    "java.lang.Comparable",
    "kotlin.Comparable",
    "java.lang.Enum",
    "kotlin.Enum",
    "java.lang.Record",
];

/// Universal base types, rendered as `any` wherever they are referenced.
pub const DEFAULT_MAPPINGS: &[(&str, &str)] = &[("java.lang.Object", "any"), ("kotlin.Any", "any")];

pub const DEFAULT_COLLECTIONS: &[&str] = &[
    "java.lang.Iterable",
    "java.util.Collection",
    "java.util.List",
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.Set",
    "java.util.HashSet",
    "java.util.LinkedHashSet",
    "java.util.TreeSet",
    "kotlin.Array",
    "kotlin.collections.Iterable",
    "kotlin.collections.Collection",
    "kotlin.collections.List",
    "kotlin.collections.MutableList",
    "kotlin.collections.Set",
    "kotlin.collections.MutableSet",
];

pub const DEFAULT_MAPS: &[&str] = &[
    "java.util.Map",
    "java.util.HashMap",
    "java.util.LinkedHashMap",
    "java.util.TreeMap",
    "kotlin.collections.Map",
    "kotlin.collections.MutableMap",
];

pub const DEFAULT_OPTIONALS: &[&str] = &["java.util.Optional"];

/// Configuration for the type-mapping engine.
#[derive(Clone, Debug)]
pub struct Config {
    /// Host primitive or class name -> output type name
    pub(crate) mappings: IndexMap<String, String>,
    /// Classes recorded as excluded instead of expanded
    pub(crate) excluded: IndexSet<String>,
    /// Name prefixes (usually packages) treated as excluded
    pub(crate) excluded_prefixes: Vec<String>,
    pub(crate) collections: IndexSet<String>,
    pub(crate) maps: IndexSet<String>,
    pub(crate) optionals: IndexSet<String>,
    /// Nullability when no rule applies
    pub(crate) default_nullable: bool,
    pub(crate) include_static: bool,
    pub(crate) include_computed: bool,
}

fn owned_set(names: &[&str]) -> IndexSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mappings: DEFAULT_MAPPINGS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            excluded: owned_set(DEFAULT_EXCLUDED),
            excluded_prefixes: Vec::new(),
            collections: owned_set(DEFAULT_COLLECTIONS),
            maps: owned_set(DEFAULT_MAPS),
            optionals: owned_set(DEFAULT_OPTIONALS),
            default_nullable: false,
            include_static: false,
            include_computed: true,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `from` (primitive or class) as `to`. A mapped class is never
    /// expanded.
    pub fn map(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.mappings.insert(from.into(), to.into());
        self
    }

    /// Treat a class as native: referenced by name, never expanded.
    pub fn exclude(mut self, class: impl Into<String>) -> Self {
        self.excluded.insert(class.into());
        self
    }

    /// Exclude every class whose name starts with `prefix`.
    pub fn exclude_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.excluded_prefixes.push(prefix.into());
        self
    }

    /// Drop the default exclusions and mappings.
    pub fn without_defaults(mut self) -> Self {
        self.excluded.clear();
        self.mappings.clear();
        self
    }

    /// Recognize `class` as a collection, normalized to an array.
    pub fn collection(mut self, class: impl Into<String>) -> Self {
        self.collections.insert(class.into());
        self
    }

    /// Recognize `class` as a dictionary.
    pub fn map_class(mut self, class: impl Into<String>) -> Self {
        self.maps.insert(class.into());
        self
    }

    /// Recognize `class` as an optional-value wrapper.
    pub fn optional_wrapper(mut self, class: impl Into<String>) -> Self {
        self.optionals.insert(class.into());
        self
    }

    /// Set the nullability used when no annotation or host signal applies.
    pub fn default_nullable(mut self, value: bool) -> Self {
        self.default_nullable = value;
        self
    }

    /// Set whether static members are mapped.
    pub fn include_static(mut self, value: bool) -> Self {
        self.include_static = value;
        self
    }

    /// Set whether computed members (no backing field) are mapped.
    pub fn include_computed(mut self, value: bool) -> Self {
        self.include_computed = value;
        self
    }

    pub fn mapping(&self, name: &str) -> Option<&str> {
        self.mappings.get(name).map(String::as_str)
    }

    /// Excluded by name or prefix. Mapped classes are handled separately.
    pub fn is_excluded(&self, class: &str) -> bool {
        self.excluded.contains(class) || self.excluded_prefixes.iter().any(|p| class.starts_with(p))
    }

    /// Not expanded: excluded or mapped to a native name.
    pub fn is_opaque(&self, class: &str) -> bool {
        self.mappings.contains_key(class) || self.is_excluded(class)
    }
}

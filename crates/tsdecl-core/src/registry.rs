//! Metadata lookup boundary and the JSON-backed registry.

use std::collections::HashSet;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Deserialize;

use crate::ClassMetadata;

/// Source of class metadata, keyed by fully-qualified name.
///
/// The compiler only ever reads through this trait, so the same engine runs
/// against metadata harvested from live reflection, parsed sources or a
/// schema file.
pub trait MetadataProvider {
    fn class(&self, name: &str) -> Option<&ClassMetadata>;
}

impl<T: MetadataProvider + ?Sized> MetadataProvider for &T {
    fn class(&self, name: &str) -> Option<&ClassMetadata> {
        (*self).class(name)
    }
}

/// Walk the superclass chain of `class` looking for `ancestor`.
///
/// A class counts as a subclass of itself. Stops on unknown classes and on
/// inheritance cycles instead of looping.
pub fn is_subclass_of(provider: &dyn MetadataProvider, class: &str, ancestor: &str) -> bool {
    let mut seen = HashSet::new();
    let mut current = Some(class);
    while let Some(name) = current {
        if name == ancestor {
            return true;
        }
        if !seen.insert(name) {
            return false;
        }
        current = provider.class(name).and_then(ClassMetadata::superclass_name);
    }
    false
}

/// Error while loading a registry.
#[derive(Debug)]
pub enum RegistryError {
    Json(serde_json::Error),
    DuplicateClass(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "metadata parse error: {e}"),
            Self::DuplicateClass(name) => write!(f, "class `{name}` is described twice"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::DuplicateClass(_) => None,
        }
    }
}

/// In-memory provider preserving the order classes were added in.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    classes: IndexMap<String, ClassMetadata>,
}

/// Wire shape of a metadata file.
#[derive(Debug, Deserialize)]
struct RawRegistry {
    #[serde(default)]
    classes: Vec<ClassMetadata>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a metadata file: `{ "classes": [ ... ] }`.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawRegistry = serde_json::from_str(json).map_err(RegistryError::Json)?;
        let mut registry = Self::new();
        for class in raw.classes {
            registry.insert(class)?;
        }
        Ok(registry)
    }

    /// Add a class. Names are identities, so a second record for the same
    /// name is rejected rather than silently replacing the first.
    pub fn insert(&mut self, class: ClassMetadata) -> Result<(), RegistryError> {
        match self.classes.entry(class.name.clone()) {
            Entry::Occupied(e) => Err(RegistryError::DuplicateClass(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(class);
                Ok(())
            }
        }
    }

    /// Builder form of [`ClassRegistry::insert`] for fixtures; later
    /// duplicates replace earlier ones.
    pub fn with(mut self, class: ClassMetadata) -> Self {
        self.classes.insert(class.name.clone(), class);
        self
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassMetadata> {
        self.classes.values()
    }
}

impl MetadataProvider for ClassRegistry {
    fn class(&self, name: &str) -> Option<&ClassMetadata> {
        self.classes.get(name)
    }
}

impl FromIterator<ClassMetadata> for ClassRegistry {
    fn from_iter<I: IntoIterator<Item = ClassMetadata>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

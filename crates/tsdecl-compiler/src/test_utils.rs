//! Test fixtures and helpers.

use tsdecl_core::{ClassRegistry, Nullability, PropertyMetadata, TypeDescriptor};

use crate::{Error, Generator};

pub fn prim(name: &str) -> TypeDescriptor {
    TypeDescriptor::primitive(name)
}

pub fn class(name: &str) -> TypeDescriptor {
    TypeDescriptor::class(name)
}

pub fn array(element: TypeDescriptor) -> TypeDescriptor {
    TypeDescriptor::array(element)
}

pub fn prop(name: &str, ty: TypeDescriptor) -> PropertyMetadata {
    PropertyMetadata::new(name, ty)
}

/// Member annotated as nullable.
pub fn nullable_prop(name: &str, ty: TypeDescriptor) -> PropertyMetadata {
    PropertyMetadata::new(name, ty).nullability(Nullability::Nullable)
}

/// Parse a registry fixture, panicking on malformed JSON.
pub fn registry(json: &str) -> ClassRegistry {
    match ClassRegistry::from_json(json) {
        Ok(registry) => registry,
        Err(e) => panic!("invalid fixture: {e}"),
    }
}

impl Generator<'_> {
    /// Generated text for `roots`, panicking on error.
    pub fn expect_output(&self, roots: &[&str]) -> String {
        match self.generate(roots.iter().copied()) {
            Ok(emission) => emission.text,
            Err(e) => panic!("generation failed: {e}"),
        }
    }

    /// The error generation for `roots` fails with.
    pub fn expect_error(&self, roots: &[&str]) -> Error {
        match self.generate(roots.iter().copied()) {
            Ok(emission) => panic!("expected an error, got:\n{}", emission.text),
            Err(e) => e,
        }
    }
}

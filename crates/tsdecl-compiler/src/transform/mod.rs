//! Class transformers: hooks that rewrite a class's member list, member
//! names and member types before discovery and mapping.
//!
//! Transformers run in registration order, each seeing the output of the
//! previous one. Use [`ClassTransformerExt`] to restrict one to a part of the
//! class graph.

mod case;
mod filtered;


use tsdecl_core::{ClassMetadata, MetadataProvider, PropertyMetadata, TypeDescriptor, is_subclass_of};

pub use case::PropertyCase;
pub use filtered::{ClassTransformerExt, Filtered};

/// The class a transformer hook is invoked for.
#[derive(Clone, Copy)]
pub struct ClassContext<'a> {
    pub class: &'a ClassMetadata,
    pub provider: &'a dyn MetadataProvider,
}

impl<'a> ClassContext<'a> {
    pub fn new(class: &'a ClassMetadata, provider: &'a dyn MetadataProvider) -> Self {
        Self { class, provider }
    }

    /// Whether the class is `ancestor` or inherits from it.
    pub fn is_subclass_of(&self, ancestor: &str) -> bool {
        is_subclass_of(self.provider, &self.class.name, ancestor)
    }
}

/// Rewrites how a class is seen by the engine. Every hook defaults to the
/// identity.
pub trait ClassTransformer: Send + Sync {
    /// Filter or reorder the members of a class.
    fn transform_property_list<'p>(
        &self,
        properties: Vec<&'p PropertyMetadata>,
        cx: &ClassContext<'_>,
    ) -> Vec<&'p PropertyMetadata> {
        let _ = cx;
        properties
    }

    /// Rename one member.
    fn transform_property_name(
        &self,
        name: String,
        property: &PropertyMetadata,
        cx: &ClassContext<'_>,
    ) -> String {
        let _ = (property, cx);
        name
    }

    /// Replace the declared type of one member.
    fn transform_property_type(
        &self,
        ty: TypeDescriptor,
        property: &PropertyMetadata,
        cx: &ClassContext<'_>,
    ) -> TypeDescriptor {
        let _ = (property, cx);
        ty
    }
}

/// Ordered list of transformers, itself a transformer.
#[derive(Default)]
pub struct TransformerPipeline {
    transformers: Vec<Box<dyn ClassTransformer>>,
}

impl TransformerPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, transformer: impl ClassTransformer + 'static) {
        self.transformers.push(Box::new(transformer));
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

impl ClassTransformer for TransformerPipeline {
    fn transform_property_list<'p>(
        &self,
        properties: Vec<&'p PropertyMetadata>,
        cx: &ClassContext<'_>,
    ) -> Vec<&'p PropertyMetadata> {
        self.transformers
            .iter()
            .fold(properties, |acc, t| t.transform_property_list(acc, cx))
    }

    fn transform_property_name(
        &self,
        name: String,
        property: &PropertyMetadata,
        cx: &ClassContext<'_>,
    ) -> String {
        self.transformers
            .iter()
            .fold(name, |acc, t| t.transform_property_name(acc, property, cx))
    }

    fn transform_property_type(
        &self,
        ty: TypeDescriptor,
        property: &PropertyMetadata,
        cx: &ClassContext<'_>,
    ) -> TypeDescriptor {
        self.transformers
            .iter()
            .fold(ty, |acc, t| t.transform_property_type(acc, property, cx))
    }
}

impl std::fmt::Debug for TransformerPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformerPipeline")
            .field("len", &self.transformers.len())
            .finish()
    }
}

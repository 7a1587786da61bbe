use tsdecl_core::{PropertyMetadata, TypeDescriptor};

use super::{ClassContext, ClassTransformer};

type Predicate = Box<dyn Fn(&ClassContext<'_>) -> bool + Send + Sync>;

/// A transformer that only applies to classes matching a predicate.
pub struct Filtered<T> {
    inner: T,
    predicate: Predicate,
}

impl<T: ClassTransformer> ClassTransformer for Filtered<T> {
    fn transform_property_list<'p>(
        &self,
        properties: Vec<&'p PropertyMetadata>,
        cx: &ClassContext<'_>,
    ) -> Vec<&'p PropertyMetadata> {
        if (self.predicate)(cx) {
            self.inner.transform_property_list(properties, cx)
        } else {
            properties
        }
    }

    fn transform_property_name(
        &self,
        name: String,
        property: &PropertyMetadata,
        cx: &ClassContext<'_>,
    ) -> String {
        if (self.predicate)(cx) {
            self.inner.transform_property_name(name, property, cx)
        } else {
            name
        }
    }

    fn transform_property_type(
        &self,
        ty: TypeDescriptor,
        property: &PropertyMetadata,
        cx: &ClassContext<'_>,
    ) -> TypeDescriptor {
        if (self.predicate)(cx) {
            self.inner.transform_property_type(ty, property, cx)
        } else {
            ty
        }
    }
}

/// Restricting combinators available on every transformer.
pub trait ClassTransformerExt: ClassTransformer + Sized {
    /// Apply only to `ancestor` and classes inheriting from it.
    fn only_on_subclasses_of(self, ancestor: impl Into<String>) -> Filtered<Self> {
        let ancestor = ancestor.into();
        self.only_when(move |cx| cx.is_subclass_of(&ancestor))
    }

    /// Apply only to classes for which `predicate` holds.
    fn only_when<F>(self, predicate: F) -> Filtered<Self>
    where
        F: Fn(&ClassContext<'_>) -> bool + Send + Sync + 'static,
    {
        Filtered {
            inner: self,
            predicate: Box::new(predicate),
        }
    }
}

impl<T: ClassTransformer> ClassTransformerExt for T {}

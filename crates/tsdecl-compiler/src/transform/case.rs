use tsdecl_core::PropertyMetadata;
use tsdecl_core::utils::{to_camel_case, to_snake_case};

use super::{ClassContext, ClassTransformer};

/// Member naming convention applied to emitted declarations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropertyCase {
    /// Names as declared.
    #[default]
    Unchanged,
    /// `firstName` -> `first_name`
    Snake,
    /// `first_name` -> `firstName`
    Camel,
}

impl ClassTransformer for PropertyCase {
    fn transform_property_name(
        &self,
        name: String,
        _property: &PropertyMetadata,
        _cx: &ClassContext<'_>,
    ) -> String {
        match self {
            Self::Unchanged => name,
            Self::Snake => to_snake_case(&name),
            Self::Camel => to_camel_case(&name),
        }
    }
}

//! Host container normalization.
//!
//! Front ends report collections, dictionaries and optional wrappers as plain
//! class references. The engine rewrites them into structural descriptors
//! before discovery and rendering, so neither ever sees a `java.util.List`.

use tsdecl_core::TypeDescriptor;

use crate::Config;

/// Rewrite configured container classes into `Array`, `Map` and `Nullable`.
///
/// Missing type arguments become `any`. Mapped classes are left as
/// references so an explicit mapping always wins.
pub fn normalize(ty: &TypeDescriptor, config: &Config) -> TypeDescriptor {
    match ty {
        TypeDescriptor::Reference { class, arguments } if config.mapping(class).is_none() => {
            let mut args = arguments.iter().map(|a| normalize(a, config));
            let mut next = || args.next().unwrap_or_else(TypeDescriptor::any);

            if config.collections.contains(class) {
                TypeDescriptor::array(next())
            } else if config.maps.contains(class) {
                let key = next();
                TypeDescriptor::map(key, next())
            } else if config.optionals.contains(class) {
                TypeDescriptor::nullable(next())
            } else {
                let arguments = arguments.iter().map(|a| normalize(a, config)).collect();
                TypeDescriptor::reference(class.clone(), arguments)
            }
        }
        TypeDescriptor::Reference { .. }
        | TypeDescriptor::Primitive { .. }
        | TypeDescriptor::GenericParameter { .. }
        | TypeDescriptor::Function => ty.clone(),
        TypeDescriptor::Array { element } => TypeDescriptor::array(normalize(element, config)),
        TypeDescriptor::Map { key, value } => {
            TypeDescriptor::map(normalize(key, config), normalize(value, config))
        }
        TypeDescriptor::Nullable { inner } => TypeDescriptor::nullable(normalize(inner, config)),
    }
}

/// If `ty` is an optional wrapper at top level, its normalized payload.
pub fn unwrap_optional(ty: &TypeDescriptor, config: &Config) -> Option<TypeDescriptor> {
    match ty {
        TypeDescriptor::Reference { class, arguments }
            if config.optionals.contains(class) && config.mapping(class).is_none() =>
        {
            Some(
                arguments
                    .first()
                    .map(|a| normalize(a, config))
                    .unwrap_or_else(TypeDescriptor::any),
            )
        }
        _ => None,
    }
}

//! Member nullability resolution.
//!
//! Rules, first match wins:
//! 1. explicit annotation on the member (nullable or non-null)
//! 2. default declared for the member's parameter group
//! 3. default declared on the enclosing class
//! 4. the host type system's own verdict, for hosts that track nullability
//! 5. the configured fallback (non-null unless configured otherwise)
//!
//! An optional-value wrapper at the top of the declared type bypasses the
//! rules: the wrapper is unwrapped and the member is always nullable.

use tsdecl_core::{Nullability, PropertyMetadata, TypeDescriptor};

use crate::Config;
use crate::descriptor::{normalize, unwrap_optional};

/// A member type with its top-level nullability split off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    /// Normalized type, never `Nullable` at the top.
    pub ty: TypeDescriptor,
    pub nullable: bool,
}

/// Apply the resolution rules to one member. `host` is `None` when the host
/// type system has nothing to say about the member's type.
pub fn is_nullable(
    property: &PropertyMetadata,
    class_default: Nullability,
    host: Option<bool>,
    fallback: bool,
) -> bool {
    if let Some(nullable) = property.nullability.explicit() {
        return nullable;
    }
    if let Some(nullable) = property
        .scope_default
        .explicit()
        .or_else(|| class_default.explicit())
    {
        return nullable;
    }
    host.unwrap_or(fallback)
}

/// Resolve the declared (possibly transformed) type `ty` of `property`.
pub fn resolve(
    property: &PropertyMetadata,
    ty: &TypeDescriptor,
    class_default: Nullability,
    config: &Config,
) -> Resolved {
    if let Some(inner) = unwrap_optional(ty, config) {
        let (ty, _) = inner.into_non_nullable();
        return Resolved { ty, nullable: true };
    }

    let (ty, wrapped) = normalize(ty, config).into_non_nullable();
    let host = if wrapped {
        Some(true)
    } else {
        property.host_nullability.explicit()
    };
    let nullable = is_nullable(property, class_default, host, config.default_nullable);
    Resolved { ty, nullable }
}

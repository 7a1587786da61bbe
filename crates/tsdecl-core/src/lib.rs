#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for tsdecl class metadata.
//!
//! Two layers:
//! - **Metadata layer**: what a reflection front end reports per class
//!   (`ClassMetadata`, `PropertyMetadata`), looked up through a
//!   [`MetadataProvider`]
//! - **Descriptor layer**: the normalized, host-independent type reference
//!   ([`TypeDescriptor`]) that the compiler walks and renders
//!
//! Classes never own each other. A class reference inside a descriptor is a
//! fully-qualified name resolved through the provider, so mutually recursive
//! classes are plain data.

pub mod colors;
pub mod descriptor;
pub mod metadata;
pub mod registry;
pub mod utils;


pub use colors::Colors;
pub use descriptor::TypeDescriptor;
pub use metadata::{
    ClassKind, ClassMetadata, Nullability, PropertyMetadata, TypeParameter, Visibility,
};
pub use registry::{ClassRegistry, MetadataProvider, RegistryError, is_subclass_of};

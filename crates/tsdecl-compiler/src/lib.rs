//! tsdecl compiler: the type-mapping engine.
//!
//! This crate turns class metadata into TypeScript declarations:
//! - `descriptor` - host container normalization (collections, maps, optionals)
//! - `nullability` - member nullability resolution
//! - `transform` - pluggable class transformers
//! - `walker` - class graph discovery with cycle breaking
//! - `mapper` - discovered classes to declaration records
//! - `typegen` - TypeScript rendering and assembly
//! - `generator` - high-level facade running the whole pipeline

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod descriptor;
pub mod generator;
pub mod mapper;
pub mod nullability;
pub mod transform;
pub mod typegen;
pub mod walker;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod generator_tests;
#[cfg(test)]
mod walker_tests;

use std::fmt;

pub use config::Config;
pub use generator::Generator;
pub use mapper::{ClassDescriptor, DeclarationKind, DeclarationMapper, MemberDescriptor};
pub use transform::{ClassContext, ClassTransformer, ClassTransformerExt, PropertyCase};
pub use typegen::typescript::{Emission, VoidType};
pub use walker::{ClassGraphWalker, Discovered, DiscoveredClassSet};

/// Class, and optionally member, an error is attributed to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub class: String,
    pub member: Option<String>,
}

impl Location {
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            member: None,
        }
    }

    pub fn member(class: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            member: Some(member.into()),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(f, "{}.{}", self.class, member),
            None => f.write_str(&self.class),
        }
    }
}

fn located(location: &Option<Location>) -> String {
    location
        .as_ref()
        .map(|l| format!(" (in `{l}`)"))
        .unwrap_or_default()
}

fn referenced(from: &Option<String>) -> String {
    from.as_ref()
        .map(|c| format!(" (referenced from `{c}`)"))
        .unwrap_or_default()
}

/// Errors that abort a generation run.
///
/// All of them are fatal: the pipeline never produces partial output.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A primitive or construct with no mapping rule and no override.
    #[error("unsupported type `{type_name}`{}", located(.location))]
    UnsupportedType {
        type_name: String,
        location: Option<Location>,
    },

    /// Two distinct classes would be declared under the same name.
    #[error("type name `{name}` is produced by both `{first}` and `{second}`")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    /// The inheritance chain loops back on itself.
    #[error("cyclic superclass chain: {}", .chain.join(" -> "))]
    CyclicSuperclass { chain: Vec<String> },

    /// A referenced class is neither known to the provider nor excluded.
    #[error("unknown class `{class}`{}", referenced(.referenced_from))]
    UnknownClass {
        class: String,
        referenced_from: Option<String>,
    },
}

impl Error {
    /// Attach `location` to an error that does not carry one yet.
    pub fn at(self, location: Location) -> Self {
        match self {
            Self::UnsupportedType {
                type_name,
                location: None,
            } => Self::UnsupportedType {
                type_name,
                location: Some(location),
            },
            other => other,
        }
    }
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

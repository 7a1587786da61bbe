//! Target type system back ends.

pub mod typescript;

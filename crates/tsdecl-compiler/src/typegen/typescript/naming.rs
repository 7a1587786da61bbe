//! Declared and referenced type names.

use tsdecl_core::utils::simple_name;

use crate::Config;

/// Name a class is declared under: its simple name.
pub(crate) fn declared_name(class: &str) -> String {
    simple_name(class).to_string()
}

/// Name a class is referenced by: its mapping, if any, else its declared name.
pub(crate) fn reference_name(class: &str, config: &Config) -> String {
    config
        .mapping(class)
        .map(str::to_string)
        .unwrap_or_else(|| declared_name(class))
}

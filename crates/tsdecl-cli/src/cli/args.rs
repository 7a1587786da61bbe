//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so `generate` and `discover` can share
//! the engine flags.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Metadata JSON file (positional).
pub fn metadata_path_arg() -> Arg {
    Arg::new("metadata")
        .value_name("METADATA")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Class metadata JSON file")
}

/// Config file (-c/--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON config file (flags override its values)")
}

/// Root classes (-r/--root, repeatable).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .short('r')
        .long("root")
        .value_name("CLASS")
        .action(ArgAction::Append)
        .help("Fully-qualified root class (default: every class in the metadata)")
}

/// Name mappings (--map FROM=TO, repeatable).
pub fn map_arg() -> Arg {
    Arg::new("map")
        .long("map")
        .value_name("FROM=TO")
        .action(ArgAction::Append)
        .value_parser(parse_mapping)
        .help("Render a primitive or class as the given TypeScript type")
}

/// Excluded classes (--exclude, repeatable).
pub fn exclude_arg() -> Arg {
    Arg::new("exclude")
        .long("exclude")
        .value_name("CLASS")
        .action(ArgAction::Append)
        .help("Treat a class as native: reference it, never declare it")
}

/// Excluded packages (--exclude-prefix, repeatable).
pub fn exclude_prefix_arg() -> Arg {
    Arg::new("exclude_prefix")
        .long("exclude-prefix")
        .value_name("PREFIX")
        .action(ArgAction::Append)
        .help("Exclude every class whose name starts with PREFIX")
}

/// Absent marker (--void).
pub fn void_arg() -> Arg {
    Arg::new("void_type")
        .long("void")
        .value_name("TYPE")
        .value_parser(["null", "undefined"])
        .help("Absent marker for nullable members")
}

/// Integer type name (--int-type).
pub fn int_type_arg() -> Arg {
    Arg::new("int_type")
        .long("int-type")
        .value_name("NAME")
        .help("Type name for integer primitives (default: number)")
}

/// Export declarations (--export).
pub fn export_arg() -> Arg {
    Arg::new("export")
        .long("export")
        .action(ArgAction::SetTrue)
        .help("Add export keyword to declarations")
}

/// Member naming (--property-case).
pub fn property_case_arg() -> Arg {
    Arg::new("property_case")
        .long("property-case")
        .value_name("CASE")
        .value_parser(["unchanged", "snake", "camel"])
        .help("Rename members to the given case")
}

/// Fallback nullability (--nullable-by-default).
pub fn nullable_by_default_arg() -> Arg {
    Arg::new("nullable_by_default")
        .long("nullable-by-default")
        .action(ArgAction::SetTrue)
        .help("Treat members without any nullability signal as nullable")
}

/// Include static members (--include-static).
pub fn include_static_arg() -> Arg {
    Arg::new("include_static")
        .long("include-static")
        .action(ArgAction::SetTrue)
        .help("Map static members")
}

/// Skip computed members (--exclude-computed).
pub fn exclude_computed_arg() -> Arg {
    Arg::new("exclude_computed")
        .long("exclude-computed")
        .action(ArgAction::SetTrue)
        .help("Skip members without a backing field")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write declarations to FILE instead of stdout")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Parse `FROM=TO`.
fn parse_mapping(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.to_string(), to.to_string()))
        }
        _ => Err(format!("expected FROM=TO, got `{s}`")),
    }
}

//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Engine flags shared by every command that walks the class graph.
fn with_engine_args(cmd: Command) -> Command {
    cmd.arg(metadata_path_arg())
        .arg(config_arg())
        .arg(root_arg())
        .arg(map_arg())
        .arg(exclude_arg())
        .arg(exclude_prefix_arg())
        .arg(property_case_arg())
        .arg(nullable_by_default_arg())
        .arg(include_static_arg())
        .arg(exclude_computed_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tsdecl")
        .about("TypeScript declarations from class metadata")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(discover_command())
}

/// Generate TypeScript declarations.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Generate TypeScript declarations")
        .override_usage(
            "\
  tsdecl generate <METADATA> [-r <CLASS>]... [-o <FILE>]
  tsdecl generate <METADATA> -c <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  tsdecl generate classes.json                            # every class
  tsdecl generate classes.json -r com.acme.Order          # one root and what it references
  tsdecl generate classes.json -o types.d.ts --export     # exported, to a file
  tsdecl generate classes.json --map java.time.Instant=string
  tsdecl generate classes.json -c tsdecl.json --void undefined"#,
        )
        .arg(void_arg())
        .arg(int_type_arg())
        .arg(export_arg())
        .arg(output_arg())
        .arg(color_arg());

    with_engine_args(cmd)
}

/// List the classes discovered from the roots.
pub fn discover_command() -> Command {
    let cmd = Command::new("discover")
        .about("List the classes reachable from the roots")
        .override_usage("  tsdecl discover <METADATA> [-r <CLASS>]...")
        .after_help(
            r#"EXAMPLES:
  tsdecl discover classes.json -r com.acme.Order
  tsdecl discover classes.json --exclude-prefix java.time."#,
        );

    with_engine_args(cmd)
}

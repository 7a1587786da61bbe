//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args`, but keep raw choices such as
//! `ColorChoice` that are only resolved once the output target is known.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::config_file::{CaseChoice, Overrides, VoidChoice};
use crate::commands::discover::DiscoverArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub metadata: PathBuf,
    pub config: Option<PathBuf>,
    pub overrides: Overrides,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let mut overrides = engine_overrides(m);
        overrides.void_type = m
            .get_one::<String>("void_type")
            .and_then(|s| VoidChoice::from_name(s));
        overrides.int_type = m.get_one::<String>("int_type").cloned();
        overrides.export = m.get_flag("export");

        Self {
            metadata: metadata_path(m),
            config: m.get_one::<PathBuf>("config").cloned(),
            overrides,
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            color: p.color.should_colorize(p.output.is_some()),
            metadata: p.metadata,
            config: p.config,
            overrides: p.overrides,
            output: p.output,
        }
    }
}

pub struct DiscoverParams {
    pub metadata: PathBuf,
    pub config: Option<PathBuf>,
    pub overrides: Overrides,
}

impl DiscoverParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            metadata: metadata_path(m),
            config: m.get_one::<PathBuf>("config").cloned(),
            overrides: engine_overrides(m),
        }
    }
}

impl From<DiscoverParams> for DiscoverArgs {
    fn from(p: DiscoverParams) -> Self {
        Self {
            metadata: p.metadata,
            config: p.config,
            overrides: p.overrides,
        }
    }
}

fn metadata_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("metadata")
        .cloned()
        .unwrap_or_default()
}

/// Flags shared by every command built with the engine args.
fn engine_overrides(m: &ArgMatches) -> Overrides {
    Overrides {
        roots: strings(m, "root"),
        mappings: m
            .get_many::<(String, String)>("map")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        exclude: strings(m, "exclude"),
        exclude_prefixes: strings(m, "exclude_prefix"),
        property_case: m
            .get_one::<String>("property_case")
            .and_then(|s| CaseChoice::from_name(s)),
        nullable_by_default: m.get_flag("nullable_by_default"),
        include_static: m.get_flag("include_static"),
        exclude_computed: m.get_flag("exclude_computed"),
        ..Overrides::default()
    }
}

fn strings(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

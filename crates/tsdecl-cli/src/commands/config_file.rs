//! JSON config file and command-line overrides.
//!
//! Every file field is optional. Flags win over the file: scalar flags
//! replace file values when given, repeatable flags extend file lists, and
//! `--root` replaces the file's roots.

use indexmap::IndexMap;
use serde::Deserialize;
use tsdecl_compiler::typegen::typescript;
use tsdecl_compiler::{Config, PropertyCase, VoidType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoidChoice {
    Null,
    Undefined,
}

impl VoidChoice {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "null" => Some(Self::Null),
            "undefined" => Some(Self::Undefined),
            _ => None,
        }
    }
}

impl From<VoidChoice> for VoidType {
    fn from(choice: VoidChoice) -> Self {
        match choice {
            VoidChoice::Null => VoidType::Null,
            VoidChoice::Undefined => VoidType::Undefined,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseChoice {
    Unchanged,
    Snake,
    Camel,
}

impl CaseChoice {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "unchanged" => Some(Self::Unchanged),
            "snake" => Some(Self::Snake),
            "camel" => Some(Self::Camel),
            _ => None,
        }
    }
}

impl From<CaseChoice> for PropertyCase {
    fn from(choice: CaseChoice) -> Self {
        match choice {
            CaseChoice::Unchanged => PropertyCase::Unchanged,
            CaseChoice::Snake => PropertyCase::Snake,
            CaseChoice::Camel => PropertyCase::Camel,
        }
    }
}

/// Contents of a `--config` file.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub roots: Vec<String>,
    pub mappings: IndexMap<String, String>,
    pub exclude: Vec<String>,
    pub exclude_prefixes: Vec<String>,
    pub collections: Vec<String>,
    pub maps: Vec<String>,
    pub optionals: Vec<String>,
    pub void_type: Option<VoidChoice>,
    pub int_type: Option<String>,
    pub export: Option<bool>,
    pub indent: Option<usize>,
    pub property_case: Option<CaseChoice>,
    pub nullable_by_default: Option<bool>,
    pub include_static: Option<bool>,
    pub include_computed: Option<bool>,
}

impl ConfigFile {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Values given on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub roots: Vec<String>,
    pub mappings: Vec<(String, String)>,
    pub exclude: Vec<String>,
    pub exclude_prefixes: Vec<String>,
    pub void_type: Option<VoidChoice>,
    pub int_type: Option<String>,
    pub export: bool,
    pub property_case: Option<CaseChoice>,
    pub nullable_by_default: bool,
    pub include_static: bool,
    pub exclude_computed: bool,
}

/// Effective settings for one run.
#[derive(Debug)]
pub struct Settings {
    /// Empty means every class of the metadata file.
    pub roots: Vec<String>,
    pub engine: Config,
    pub typescript: typescript::Config,
    pub property_case: PropertyCase,
}

impl Settings {
    pub fn resolve(file: ConfigFile, flags: Overrides) -> Self {
        let mut engine = Config::new()
            .default_nullable(flags.nullable_by_default || file.nullable_by_default.unwrap_or(false))
            .include_static(flags.include_static || file.include_static.unwrap_or(false))
            .include_computed(!flags.exclude_computed && file.include_computed.unwrap_or(true));

        let mappings = file.mappings.into_iter().chain(flags.mappings);
        for (from, to) in mappings {
            engine = engine.map(from, to);
        }
        for class in file.exclude.into_iter().chain(flags.exclude) {
            engine = engine.exclude(class);
        }
        for prefix in file.exclude_prefixes.into_iter().chain(flags.exclude_prefixes) {
            engine = engine.exclude_prefix(prefix);
        }
        for class in file.collections {
            engine = engine.collection(class);
        }
        for class in file.maps {
            engine = engine.map_class(class);
        }
        for class in file.optionals {
            engine = engine.optional_wrapper(class);
        }

        let mut typescript = typescript::Config::new()
            .export(flags.export || file.export.unwrap_or(false));
        if let Some(void_type) = flags.void_type.or(file.void_type) {
            typescript = typescript.void_type(void_type.into());
        }
        if let Some(name) = flags.int_type.or(file.int_type) {
            typescript = typescript.int_type_name(name);
        }
        if let Some(width) = file.indent {
            typescript = typescript.indent(width);
        }

        let roots = if flags.roots.is_empty() {
            file.roots
        } else {
            flags.roots
        };

        Self {
            roots,
            engine,
            typescript,
            property_case: flags
                .property_case
                .or(file.property_case)
                .map(PropertyCase::from)
                .unwrap_or_default(),
        }
    }
}

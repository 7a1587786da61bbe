use std::path::PathBuf;

use tsdecl_compiler::{Discovered, Generator};

use super::config_file::Overrides;
use super::{CliError, exit_with, load_registry, load_settings, roots_or_all};

pub struct DiscoverArgs {
    pub metadata: PathBuf,
    pub config: Option<PathBuf>,
    pub overrides: Overrides,
}

pub fn run(args: DiscoverArgs) {
    let listing = discover(&args).unwrap_or_else(|e| exit_with(e));
    print!("{listing}");
}

/// One line per discovered class, in discovery order. Classes that are
/// referenced but not declared carry an `(excluded)` suffix.
pub fn discover(args: &DiscoverArgs) -> Result<String, CliError> {
    let registry = load_registry(&args.metadata)?;
    let settings = load_settings(args.config.as_deref(), args.overrides.clone())?;
    let roots = roots_or_all(settings.roots, &registry);

    let generator = Generator::new(&registry)
        .config(settings.engine)
        .transformer(settings.property_case);
    let discovered = generator.discover(roots)?;

    let mut out = String::new();
    for (name, entry) in discovered.iter() {
        out.push_str(name);
        if let Discovered::Excluded = entry {
            out.push_str(" (excluded)");
        }
        out.push('\n');
    }
    Ok(out)
}

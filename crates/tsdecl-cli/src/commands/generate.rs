use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tsdecl_compiler::Generator;

use super::config_file::Overrides;
use super::{CliError, exit_with, load_registry, load_settings, roots_or_all};

pub struct GenerateArgs {
    pub metadata: PathBuf,
    pub config: Option<PathBuf>,
    pub overrides: Overrides,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    let text = generate(&args).unwrap_or_else(|e| exit_with(e));

    match &args.output {
        Some(path) => {
            if let Err(source) = fs::write(path, &text) {
                exit_with(CliError::Write {
                    path: path.clone(),
                    source,
                });
            }
            tracing::info!(path = %path.display(), bytes = text.len(), "declarations written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
                // A closed pipe is not worth reporting.
                if e.kind() != io::ErrorKind::BrokenPipe {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Produce the declaration text for `args`.
pub fn generate(args: &GenerateArgs) -> Result<String, CliError> {
    let registry = load_registry(&args.metadata)?;
    let settings = load_settings(args.config.as_deref(), args.overrides.clone())?;
    let roots = roots_or_all(settings.roots, &registry);

    let emission = Generator::new(&registry)
        .config(settings.engine)
        .typescript(settings.typescript.colored(args.color))
        .transformer(settings.property_case)
        .generate(roots)?;

    tracing::debug!(declarations = emission.declarations.len(), "generated");
    Ok(emission.text)
}

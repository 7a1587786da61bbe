pub mod config_file;
pub mod discover;
pub mod generate;


use std::fs;
use std::path::{Path, PathBuf};

use tsdecl_core::{ClassRegistry, RegistryError};

use config_file::{ConfigFile, Overrides, Settings};

/// Errors surfaced to the user as `error: ...`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        source: RegistryError,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Generate(#[from] tsdecl_compiler::Error),
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_registry(path: &Path) -> Result<ClassRegistry, CliError> {
    let json = read(path)?;
    let registry = ClassRegistry::from_json(&json).map_err(|source| CliError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), classes = registry.len(), "metadata loaded");
    Ok(registry)
}

/// Merge the optional config file with the command-line overrides.
pub fn load_settings(config: Option<&Path>, flags: Overrides) -> Result<Settings, CliError> {
    let file = match config {
        Some(path) => ConfigFile::parse(&read(path)?).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?,
        None => ConfigFile::default(),
    };
    Ok(Settings::resolve(file, flags))
}

/// The configured roots, or every class in registration order.
pub fn roots_or_all(roots: Vec<String>, registry: &ClassRegistry) -> Vec<String> {
    if roots.is_empty() {
        registry.names().map(str::to_string).collect()
    } else {
        roots
    }
}

/// Print an error and exit with status 1.
pub fn exit_with(err: CliError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

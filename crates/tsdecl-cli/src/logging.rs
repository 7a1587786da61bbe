//! Diagnostic logging to stderr.
//!
//! Off unless `TSDECL_LOG` (or `RUST_LOG`) is set. Filter values use the
//! `RUST_LOG` syntax, e.g. `TSDECL_LOG=tsdecl_compiler::walker=trace`.
//! `TSDECL_LOG_FORMAT=json` switches to one JSON object per event.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var("TSDECL_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// `TSDECL_LOG` wins over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("TSDECL_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber. Output goes to stderr so declarations
/// written to stdout stay clean.
pub fn init_tracing() {
    if std::env::var_os("TSDECL_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

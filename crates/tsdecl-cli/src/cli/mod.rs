mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{DiscoverParams, GenerateParams};

/// Color output mode for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Declarations are only colored on an interactive stdout; output written
    /// to a file is always plain.
    pub fn should_colorize(self, to_file: bool) -> bool {
        if to_file {
            return false;
        }
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

//! Library half of the `portfolio-terminal` binary: configuration loading and the REPL loop.

pub mod config;
pub mod repl;

pub use config::{CliConfig, ConfigError, ConfigLoader, FileConfig, DEFAULT_CONFIG_FILE};
pub use repl::{run, Styling};

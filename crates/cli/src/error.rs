use relay_core::config::ConfigError;
use thiserror::Error;

/// Errors surfaced at the CLI boundary. Only configuration problems are
/// allowed to end the process with an error.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

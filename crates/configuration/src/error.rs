use thiserror::Error;

/// Everything that can go wrong between the configuration sources and a
/// usable `Config` value.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read the configuration sources: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Configuration rejected: {0}")]
    Invalid(String),
}

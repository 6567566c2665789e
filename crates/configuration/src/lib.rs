use std::path::Path;

use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, Data, Display};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file if one exists, layers `SALIENT_*` environment variables
/// on top (e.g., `SALIENT_DISPLAY__MAX_TABLE_ROWS=5`), and deserializes the
/// result into our strongly-typed `Config` struct.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("config.toml"))
}

/// Loads the configuration from an explicit file path.
///
/// The file is optional: when it does not exist, the built-in defaults and
/// any environment overrides are all that apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no configuration file found, using defaults");
    }

    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("SALIENT").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Rejects settings the rest of the application cannot work with.
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.data.date_format.is_empty() {
        return Err(ConfigError::Invalid(
            "data.date_format must not be empty".to_string(),
        ));
    }
    if config.display.max_table_rows == 0 {
        return Err(ConfigError::Invalid(
            "display.max_table_rows must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_the_built_in_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.data.input_file, PathBuf::from("ecommerce_transactions.csv"));
        assert_eq!(config.data.date_format, "%Y-%m-%d");
        assert_eq!(config.display.currency, "$");
        assert_eq!(config.display.max_table_rows, 15);
    }

    #[test]
    fn file_values_override_only_the_fields_they_name() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[data]
input_file = "sales.csv"

[display]
max_table_rows = 3
"#,
        );
        let config = load_config_from(&path).unwrap();

        assert_eq!(config.data.input_file, PathBuf::from("sales.csv"));
        assert_eq!(config.data.date_format, "%Y-%m-%d");
        assert_eq!(config.display.currency, "$");
        assert_eq!(config.display.max_table_rows, 3);
    }

    #[test]
    fn zero_table_rows_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[display]\nmax_table_rows = 0\n");
        let err = load_config_from(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("max_table_rows"));
    }

    #[test]
    fn empty_date_format_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[data]\ndate_format = \"\"\n");
        let err = load_config_from(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("date_format"));
    }
}

//! Configuration file
//!
//! Optional JSON file; every field falls back to a built-in default so an
//! absent file and `{}` behave the same.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::store::StoreConfig;

/// Process configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Document store location
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        for (name, value) in [
            ("store.uri", &self.store.uri),
            ("store.database", &self.store.database),
            ("store.collection", &self.store.collection),
        ] {
            if value.trim().is_empty() {
                return Err(CliError::config_error(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_no_path_uses_defaults() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.socket_addr(), "0.0.0.0:8080");
        assert_eq!(config.store.uri, "mongodb://mongodb:27017");
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let file = write_config("{}");
        assert_eq!(Config::load(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let file = write_config(
            r#"{"server": {"port": 9000}, "store": {"uri": "mongodb://localhost:27017"}}"#,
        );
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store.uri, "mongodb://localhost:27017");
        assert_eq!(config.store.database, "bookstore");
    }

    #[test]
    fn test_invalid_json_rejected() {
        let file = write_config("{server");
        let err = Config::load(file.path()).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = Config::load(Path::new("/nonexistent/bookstore.json")).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_zero_port_rejected() {
        let file = write_config(r#"{"server": {"port": 0}}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_empty_collection_rejected() {
        let file = write_config(r#"{"store": {"collection": " "}}"#);
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.message().contains("store.collection"));
    }
}

//! Document store configuration

use serde::{Deserialize, Serialize};

/// Where the `books` collection lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// MongoDB connection string (default: "mongodb://mongodb:27017")
    #[serde(default = "default_uri")]
    pub uri: String,

    /// Database name (default: "bookstore")
    #[serde(default = "default_database")]
    pub database: String,

    /// Collection name (default: "books")
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_uri() -> String {
    "mongodb://mongodb:27017".to_string()
}

fn default_database() -> String {
    "bookstore".to_string()
}

fn default_collection() -> String {
    "books".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            database: default_database(),
            collection: default_collection(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.uri, "mongodb://mongodb:27017");
        assert_eq!(config.database, "bookstore");
        assert_eq!(config.collection, "books");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"uri": "mongodb://localhost:27017"}"#).unwrap();
        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.collection, "books");
    }
}

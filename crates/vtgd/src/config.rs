//! Configuration file handling for vtgd

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vtg_core::{BrandTag, StaticBrandSource};
use vtg_gm::GmConfig;

/// Errors that can occur while loading the daemon configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level daemon configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub adapters: AdaptersConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Vehicle directory: where vehicle id to brand mappings come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// PostgreSQL connection URL; when set, the static table is ignored
    #[serde(default)]
    pub database_url: Option<String>,
    /// Static vehicle id to brand table
    #[serde(default = "default_vehicles")]
    pub vehicles: BTreeMap<String, BrandTag>,
}

/// Per-brand adapter settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptersConfig {
    #[serde(default)]
    pub gm: GmConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_vehicles() -> BTreeMap<String, BrandTag> {
    BTreeMap::from([
        ("1234".to_string(), BrandTag::from("gm")),
        ("1235".to_string(), BrandTag::from("gm")),
    ])
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            vehicles: default_vehicles(),
        }
    }
}

impl DirectoryConfig {
    /// Build the in-memory brand source from the static table
    pub fn static_source(&self) -> StaticBrandSource {
        self.vehicles
            .iter()
            .map(|(id, brand)| (id.clone(), brand.clone()))
            .collect()
    }
}

impl Config {
    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the daemon cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gm = &self.adapters.gm;
        if gm.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "adapters.gm.base_url must not be empty".to_string(),
            ));
        }
        if gm.timeout_secs == 0 || gm.connect_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "adapters.gm timeouts must be at least one second".to_string(),
            ));
        }
        if let Some(url) = &self.directory.database_url {
            if url.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "directory.database_url must not be empty when set".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.directory.database_url.is_none());
        assert_eq!(config.directory.vehicles.len(), 2);
        assert_eq!(config.adapters.gm.base_url, "http://gmapi.azurewebsites.net");
        assert_eq!(config.adapters.gm.timeout_secs, 30);
        assert_eq!(config.adapters.gm.connect_timeout_secs, 10);
    }

    #[test]
    fn empty_file_equals_defaults() {
        let file = write_config("");
        assert_eq!(Config::load(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn full_file() {
        let file = write_config(
            r#"
[server]
host = "127.0.0.1"
port = 9000

[directory]
database_url = "postgres://vtg@localhost/vtg"

[directory.vehicles]
"1234" = "gm"
"F-100" = "ford"

[adapters.gm]
base_url = "http://localhost:7000"
timeout_secs = 5
connect_timeout_secs = 2
"#,
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.directory.database_url.as_deref(),
            Some("postgres://vtg@localhost/vtg")
        );
        assert_eq!(
            config.directory.vehicles.get("F-100"),
            Some(&BrandTag::from("ford"))
        );
        assert_eq!(config.adapters.gm.base_url, "http://localhost:7000");
        assert_eq!(config.adapters.gm.timeout_secs, 5);
    }

    #[test]
    fn empty_vehicle_table_is_kept_empty() {
        let file = write_config("[directory.vehicles]\n");
        let config = Config::load(file.path()).unwrap();
        assert!(config.directory.vehicles.is_empty());
        assert!(config.directory.static_source().is_empty());
    }

    #[test]
    fn static_source_mirrors_table() {
        let source = DirectoryConfig::default().static_source();
        assert_eq!(source.len(), 2);
        let mut ids: Vec<&str> = source.entries().map(|(id, _)| id).collect();
        ids.sort();
        assert_eq!(ids, vec!["1234", "1235"]);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Config::load(Path::new("/nonexistent/vtgd.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/vtgd.toml"));
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let file = write_config("[server\nport = 1");
        assert!(matches!(
            Config::load(file.path()).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let file = write_config("[server]\nport = \"eighty\"\n");
        assert!(matches!(
            Config::load(file.path()).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let file = write_config("[adapters.gm]\ntimeout_secs = 0\n");
        assert!(matches!(
            Config::load(file.path()).unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }
}

//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/hood-resolver/config.toml
//!
//! Environment variables are applied on top once, at startup. The finished
//! `Config` is handed to the service; nothing reads the environment later.

pub mod defaults;

use crate::constants::{api, env as env_keys};
use crate::error::{Error, Result};
use crate::neighborhood::Labels;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Neighborhood polygon data
    #[serde(default)]
    pub data: DataConfig,

    /// Geocoding provider settings
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// Placeholder strings for unresolved fields
    #[serde(default)]
    pub labels: Labels,

    /// Webflow CMS collection
    #[serde(default)]
    pub cms: CmsConfig,

    /// Supabase table
    #[serde(default)]
    pub database: DatabaseConfig,

    /// API keys for various services
    #[serde(default)]
    pub api_keys: ApiKeysConfig,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Polygon data settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the GeoJSON file of neighborhood polygons
    #[serde(default = "default_data_path")]
    pub geojson_path: PathBuf,
}

/// Geocoder settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Provider name ("mapbox" or "nominatim")
    #[serde(default = "default_geocoder")]
    pub provider: String,

    #[serde(default = "default_mapbox_url")]
    pub mapbox_url: String,

    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,
}

/// Webflow CMS settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    #[serde(default = "default_webflow_url")]
    pub base_url: String,

    /// Collection to search; empty disables the CMS lookup
    #[serde(default)]
    pub collection_id: String,

    /// Item field compared with the neighborhood title
    #[serde(default = "default_cms_match_field")]
    pub match_field: String,
}

/// Supabase settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Project URL; empty disables the database lookup
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_database_table")]
    pub table: String,
}

/// API keys for external services
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiKeysConfig {
    #[serde(default)]
    pub mapbox: String,

    #[serde(default)]
    pub webflow: String,

    #[serde(default)]
    pub supabase: String,
}

// Default value functions for serde
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}
fn default_geocoder() -> String {
    DEFAULT_GEOCODER.to_string()
}
fn default_mapbox_url() -> String {
    api::MAPBOX_URL.to_string()
}
fn default_nominatim_url() -> String {
    api::NOMINATIM_URL.to_string()
}
fn default_webflow_url() -> String {
    api::WEBFLOW_URL.to_string()
}
fn default_cms_match_field() -> String {
    DEFAULT_CMS_MATCH_FIELD.to_string()
}
fn default_database_table() -> String {
    DEFAULT_DATABASE_TABLE.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            geojson_path: default_data_path(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            provider: default_geocoder(),
            mapbox_url: default_mapbox_url(),
            nominatim_url: default_nominatim_url(),
        }
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: default_webflow_url(),
            collection_id: String::new(),
            match_field: default_cms_match_field(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            table: default_database_table(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Load from `path` if given, else the default path, then apply the
    /// process environment
    pub fn load_with_env(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        config.apply_env_with(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Override settings from environment-style variables
    ///
    /// `lookup` returns the value of a variable, if set. Empty values are
    /// ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mappings = [
            (env_keys::HOST, "server.host"),
            (env_keys::PORT, "server.port"),
            (env_keys::DATA_PATH, "data.geojson_path"),
            (env_keys::GEOCODER, "geocoder.provider"),
            (env_keys::MAPBOX_TOKEN, "api_keys.mapbox"),
            (env_keys::WEBFLOW_TOKEN, "api_keys.webflow"),
            (env_keys::WEBFLOW_COLLECTION, "cms.collection_id"),
            (env_keys::SUPABASE_URL, "database.url"),
            (env_keys::SUPABASE_KEY, "api_keys.supabase"),
            (env_keys::SUPABASE_TABLE, "database.table"),
        ];

        for (var, key) in mappings {
            if let Some(value) = lookup(var).filter(|v| !v.is_empty()) {
                debug!(var, key, "Config overridden from environment");
                self.set(key, &value)
                    .map_err(|e| Error::Config(format!("{} is invalid: {}", var, e)))?;
            }
        }

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["data", "geojson_path"] => Some(self.data.geojson_path.display().to_string()),

            ["geocoder", "provider"] => Some(self.geocoder.provider.clone()),
            ["geocoder", "mapbox_url"] => Some(self.geocoder.mapbox_url.clone()),
            ["geocoder", "nominatim_url"] => Some(self.geocoder.nominatim_url.clone()),

            ["labels", "neighborhood"] => Some(self.labels.neighborhood.clone()),
            ["labels", "city"] => Some(self.labels.city.clone()),
            ["labels", "province_state"] => Some(self.labels.province_state.clone()),
            ["labels", "country"] => Some(self.labels.country.clone()),

            ["cms", "base_url"] => Some(self.cms.base_url.clone()),
            ["cms", "collection_id"] => Some(self.cms.collection_id.clone()),
            ["cms", "match_field"] => Some(self.cms.match_field.clone()),

            ["database", "url"] => Some(self.database.url.clone()),
            ["database", "table"] => Some(self.database.table.clone()),

            ["api_keys", "mapbox"] => Some(self.api_keys.mapbox.clone()),
            ["api_keys", "webflow"] => Some(self.api_keys.webflow.clone()),
            ["api_keys", "supabase"] => Some(self.api_keys.supabase.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid port value: {}", value)))?;
            }

            ["data", "geojson_path"] => {
                self.data.geojson_path = PathBuf::from(value);
            }

            ["geocoder", "provider"] => {
                let provider = value.to_lowercase();
                if !crate::geo::available_geocoders().contains(&provider.as_str()) {
                    return Err(Error::Config(format!("Unknown geocoder: {}", value)));
                }
                self.geocoder.provider = provider;
            }
            ["geocoder", "mapbox_url"] => {
                self.geocoder.mapbox_url = value.to_string();
            }
            ["geocoder", "nominatim_url"] => {
                self.geocoder.nominatim_url = value.to_string();
            }

            ["labels", "neighborhood"] => {
                self.labels.neighborhood = value.to_string();
            }
            ["labels", "city"] => {
                self.labels.city = value.to_string();
            }
            ["labels", "province_state"] => {
                self.labels.province_state = value.to_string();
            }
            ["labels", "country"] => {
                self.labels.country = value.to_string();
            }

            ["cms", "base_url"] => {
                self.cms.base_url = value.to_string();
            }
            ["cms", "collection_id"] => {
                self.cms.collection_id = value.to_string();
            }
            ["cms", "match_field"] => {
                self.cms.match_field = value.to_string();
            }

            ["database", "url"] => {
                self.database.url = value.to_string();
            }
            ["database", "table"] => {
                self.database.table = value.to_string();
            }

            ["api_keys", "mapbox"] => {
                self.api_keys.mapbox = value.to_string();
            }
            ["api_keys", "webflow"] => {
                self.api_keys.webflow = value.to_string();
            }
            ["api_keys", "supabase"] => {
                self.api_keys.supabase = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "server.host",
            "server.port",
            "data.geojson_path",
            "geocoder.provider",
            "geocoder.mapbox_url",
            "geocoder.nominatim_url",
            "labels.neighborhood",
            "labels.city",
            "labels.province_state",
            "labels.country",
            "cms.base_url",
            "cms.collection_id",
            "cms.match_field",
            "database.url",
            "database.table",
            "api_keys.mapbox",
            "api_keys.webflow",
            "api_keys.supabase",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

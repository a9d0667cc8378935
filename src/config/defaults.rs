//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 3000;

/// Default polygon data file
pub const DEFAULT_DATA_PATH: &str = "map.geojson";

/// Default geocoding provider
pub const DEFAULT_GEOCODER: &str = "nominatim";

/// Default Webflow field holding the neighborhood name
pub const DEFAULT_CMS_MATCH_FIELD: &str = "neighborhood";

/// Default Supabase table
pub const DEFAULT_DATABASE_TABLE: &str = "neighborhoods";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "hood-resolver";

//! Centralized constants for the hood-resolver crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Labels used when no polygon matches or a field is missing
pub mod labels {
    pub const UNKNOWN_NEIGHBORHOOD: &str = "Unknown Neighborhood";
    pub const UNKNOWN_CITY: &str = "Unknown City";
    pub const UNKNOWN_PROVINCE_STATE: &str = "Unknown Province/State";
    pub const UNKNOWN_COUNTRY: &str = "Unknown Country";
}

/// Keys recognised in a feature description blob
pub mod description {
    pub const CITY_KEY: &str = "city";
    pub const PROVINCE_STATE_KEY: &str = "province_state";
    pub const COUNTRY_KEY: &str = "country";
}

/// External API endpoints
pub mod api {
    /// Mapbox Places geocoding API
    pub const MAPBOX_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";

    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// Webflow CMS API
    pub const WEBFLOW_URL: &str = "https://api.webflow.com";

    /// User agent sent to every upstream service
    pub const USER_AGENT: &str = concat!("hood-resolver/", env!("CARGO_PKG_VERSION"));

    /// Timeout applied to every upstream request
    pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);
}

/// Environment variables read once at startup
pub mod env {
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    pub const DATA_PATH: &str = "NEIGHBORHOOD_DATA";
    pub const GEOCODER: &str = "GEOCODER";
    pub const MAPBOX_TOKEN: &str = "MAPBOX_ACCESS_TOKEN";
    pub const WEBFLOW_TOKEN: &str = "WEBFLOW_API_TOKEN";
    pub const WEBFLOW_COLLECTION: &str = "WEBFLOW_COLLECTION_ID";
    pub const SUPABASE_URL: &str = "SUPABASE_URL";
    pub const SUPABASE_KEY: &str = "SUPABASE_KEY";
    pub const SUPABASE_TABLE: &str = "SUPABASE_TABLE";
}

//! Error types for hood-resolver

use thiserror::Error;

/// Main error type for hood-resolver operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Neighborhood data error: {0}")]
    Data(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Address not found: {0}")]
    AddressNotFound(String),

    #[error("Enrichment error: {0}")]
    Enrichment(String),
}

/// Result type alias for hood-resolver operations
pub type Result<T> = std::result::Result<T, Error>;

//! Shared HTTP client for upstream services

use crate::constants::api::{REQUEST_TIMEOUT, USER_AGENT};
use crate::error::Result;
use std::time::Duration;

/// Client used for every geocoder and enrichment request
pub(crate) fn client() -> Result<reqwest::Client> {
    client_with_timeout(REQUEST_TIMEOUT)
}

fn client_with_timeout(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

//! Supabase (PostgREST) table lookup

use crate::enrich::{EnrichmentKey, EnrichmentStore};
use crate::http;
use crate::error::{Error, Result};
use serde_json::Value;

const NEIGHBORHOOD_COLUMN: &str = "neighborhood";
const CITY_COLUMN: &str = "city";

/// Supabase table store
#[derive(Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    table: String,
    api_key: String,
}

impl std::fmt::Debug for SupabaseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseStore")
            .field("base_url", &self.base_url)
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl SupabaseStore {
    pub fn new(base_url: &str, table: &str, api_key: &str) -> Result<Self> {
        Ok(Self {
            client: http::client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            table: table.to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    /// PostgREST filters for one key
    fn filters(key: &EnrichmentKey) -> Vec<(&'static str, String)> {
        vec![
            ("select", "*".to_string()),
            (NEIGHBORHOOD_COLUMN, format!("eq.{}", key.title)),
            (CITY_COLUMN, format!("eq.{}", key.city)),
        ]
    }
}

impl EnrichmentStore for SupabaseStore {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn fetch(&self, key: &EnrichmentKey) -> Result<Vec<Value>> {
        let response = self
            .client
            .get(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&Self::filters(key))
            .send()
            .await
            .map_err(|e| Error::Enrichment(format!("Supabase request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Enrichment(format!(
                "Supabase returned status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Enrichment(format!("Failed to parse Supabase response: {}", e)))
    }
}

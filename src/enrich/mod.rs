//! Enrichment stores
//!
//! After a polygon matches, records tagged with the neighborhood title and
//! city can be pulled from a Webflow CMS collection and a Supabase table.
//! Both lookups run concurrently and each reports its own outcome, so one
//! store failing never hides the other's records.

pub mod supabase;
pub mod webflow;

use crate::config::Config;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// What the lookups are keyed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentKey {
    pub title: String,
    pub city: String,
}

impl EnrichmentKey {
    pub fn new(title: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            city: city.into(),
        }
    }
}

/// Trait for enrichment backends
pub trait EnrichmentStore: Send + Sync {
    /// Store name used in logs
    fn name(&self) -> &'static str;

    /// Fetch every record matching `key`
    fn fetch(&self, key: &EnrichmentKey) -> impl std::future::Future<Output = Result<Vec<Value>>> + Send;
}

/// Outcome of one store lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StoreOutcome {
    Ok { records: Vec<Value> },
    Failed { error: String },
    Disabled,
}

impl StoreOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Combined, possibly partial, enrichment result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    pub cms: StoreOutcome,
    pub database: StoreOutcome,
}

impl Enrichment {
    /// True when at least one store failed
    pub fn is_partial(&self) -> bool {
        self.cms.is_failed() || self.database.is_failed()
    }
}

/// Runs lookups against the configured stores
#[derive(Debug, Clone, Default)]
pub struct Enricher {
    cms: Option<webflow::WebflowStore>,
    database: Option<supabase::SupabaseStore>,
}

impl Enricher {
    /// Enable each store whose credentials are present in `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let cms = if !config.api_keys.webflow.is_empty() && !config.cms.collection_id.is_empty() {
            Some(webflow::WebflowStore::new(
                &config.cms.base_url,
                &config.cms.collection_id,
                &config.cms.match_field,
                &config.api_keys.webflow,
            )?)
        } else {
            None
        };

        let database = if !config.database.url.is_empty() && !config.api_keys.supabase.is_empty() {
            Some(supabase::SupabaseStore::new(
                &config.database.url,
                &config.database.table,
                &config.api_keys.supabase,
            )?)
        } else {
            None
        };

        Ok(Self { cms, database })
    }

    pub fn cms_enabled(&self) -> bool {
        self.cms.is_some()
    }

    pub fn database_enabled(&self) -> bool {
        self.database.is_some()
    }

    /// True if any store is configured
    pub fn is_enabled(&self) -> bool {
        self.cms_enabled() || self.database_enabled()
    }

    /// Query both stores concurrently
    pub async fn enrich(&self, key: &EnrichmentKey) -> Enrichment {
        let (cms, database) = tokio::join!(
            fetch_outcome(self.cms.as_ref(), key),
            fetch_outcome(self.database.as_ref(), key),
        );

        Enrichment { cms, database }
    }
}

async fn fetch_outcome<S: EnrichmentStore>(store: Option<&S>, key: &EnrichmentKey) -> StoreOutcome {
    let Some(store) = store else {
        return StoreOutcome::Disabled;
    };

    match store.fetch(key).await {
        Ok(records) => {
            debug!(store = store.name(), count = records.len(), "Enrichment records fetched");
            StoreOutcome::Ok { records }
        }
        Err(e) => {
            warn!(store = store.name(), title = %key.title, "Enrichment lookup failed: {}", e);
            StoreOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on the discard port, so requests fail fast
    const DEAD_URL: &str = "http://127.0.0.1:9";

    #[test]
    fn test_from_config_disabled_by_default() {
        let enricher = Enricher::from_config(&Config::default()).unwrap();
        assert!(!enricher.cms_enabled());
        assert!(!enricher.database_enabled());
        assert!(!enricher.is_enabled());
    }

    #[test]
    fn test_from_config_requires_both_settings() {
        let mut config = Config::default();
        config.api_keys.webflow = "token".to_string();
        assert!(!Enricher::from_config(&config).unwrap().cms_enabled());

        config.cms.collection_id = "abc123".to_string();
        assert!(Enricher::from_config(&config).unwrap().cms_enabled());

        config.database.url = "https://project.supabase.co".to_string();
        assert!(!Enricher::from_config(&config).unwrap().database_enabled());

        config.api_keys.supabase = "anon".to_string();
        assert!(Enricher::from_config(&config).unwrap().database_enabled());
    }

    #[tokio::test]
    async fn test_enrich_all_disabled() {
        let enricher = Enricher::default();
        let result = enricher.enrich(&EnrichmentKey::new("Riverside", "Metropolis")).await;

        assert_eq!(result.cms, StoreOutcome::Disabled);
        assert_eq!(result.database, StoreOutcome::Disabled);
        assert!(!result.is_partial());
    }

    #[tokio::test]
    async fn test_enrich_failure_is_isolated() {
        let mut config = Config::default();
        config.cms.base_url = DEAD_URL.to_string();
        config.cms.collection_id = "abc123".to_string();
        config.api_keys.webflow = "token".to_string();

        let enricher = Enricher::from_config(&config).unwrap();
        let result = enricher.enrich(&EnrichmentKey::new("Riverside", "Metropolis")).await;

        assert!(result.cms.is_failed());
        assert_eq!(result.database, StoreOutcome::Disabled);
        assert!(result.is_partial());
    }

    #[test]
    fn test_outcome_serialization() {
        let enrichment = Enrichment {
            cms: StoreOutcome::Ok {
                records: vec![serde_json::json!({ "name": "Cafe" })],
            },
            database: StoreOutcome::Failed {
                error: "boom".to_string(),
            },
        };

        let json = serde_json::to_value(&enrichment).unwrap();
        assert_eq!(json["cms"]["status"], "ok");
        assert_eq!(json["cms"]["records"][0]["name"], "Cafe");
        assert_eq!(json["database"]["status"], "failed");
        assert_eq!(json["database"]["error"], "boom");

        let disabled = serde_json::to_value(StoreOutcome::Disabled).unwrap();
        assert_eq!(disabled, serde_json::json!({ "status": "disabled" }));
    }
}

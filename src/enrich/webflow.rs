//! Webflow CMS collection lookup
//!
//! The items endpoint has no server-side filter, so items are fetched a
//! page at a time and matched locally on a configured field.

use crate::enrich::{EnrichmentKey, EnrichmentStore};
use crate::http;
use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::future::Future;

/// Largest page the items endpoint returns
const PAGE_LIMIT: usize = 100;

/// Webflow CMS store
#[derive(Clone)]
pub struct WebflowStore {
    client: reqwest::Client,
    base_url: String,
    collection_id: String,
    match_field: String,
    api_token: String,
}

impl std::fmt::Debug for WebflowStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebflowStore")
            .field("base_url", &self.base_url)
            .field("collection_id", &self.collection_id)
            .field("match_field", &self.match_field)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct ItemsPage {
    #[serde(default)]
    items: Vec<Value>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    #[serde(default)]
    total: usize,
}

impl WebflowStore {
    pub fn new(base_url: &str, collection_id: &str, match_field: &str, api_token: &str) -> Result<Self> {
        Ok(Self {
            client: http::client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            collection_id: collection_id.to_string(),
            match_field: match_field.to_string(),
            api_token: api_token.to_string(),
        })
    }

    fn items_url(&self) -> String {
        format!("{}/v2/collections/{}/items", self.base_url, self.collection_id)
    }

    /// Whether an item's match field equals the neighborhood title
    ///
    /// v2 items nest custom fields under `fieldData`, v1 items are flat.
    fn matches(item: &Value, field: &str, title: &str) -> bool {
        item.get("fieldData")
            .and_then(|data| data.get(field))
            .or_else(|| item.get(field))
            .and_then(Value::as_str)
            .is_some_and(|value| value.trim().eq_ignore_ascii_case(title.trim()))
    }

    async fn fetch_page(&self, offset: usize) -> Result<ItemsPage> {
        let response = self
            .client
            .get(self.items_url())
            .bearer_auth(&self.api_token)
            .query(&[("offset", offset), ("limit", PAGE_LIMIT)])
            .send()
            .await
            .map_err(|e| Error::Enrichment(format!("Webflow request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Enrichment(format!(
                "Webflow returned status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Enrichment(format!("Failed to parse Webflow response: {}", e)))
    }
}

impl EnrichmentStore for WebflowStore {
    fn name(&self) -> &'static str {
        "webflow"
    }

    async fn fetch(&self, key: &EnrichmentKey) -> Result<Vec<Value>> {
        collect_matches(move |offset| self.fetch_page(offset), &self.match_field, &key.title).await
    }
}

/// Walk the collection page by page, keeping items that match `title`
///
/// Stops at the reported total or at the first empty page.
async fn collect_matches<F, Fut>(mut fetch_page: F, field: &str, title: &str) -> Result<Vec<Value>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<ItemsPage>>,
{
    let mut matched = Vec::new();
    let mut offset = 0;

    loop {
        let page = fetch_page(offset).await?;
        let fetched = page.items.len();
        let total = page.pagination.map(|p| p.total).unwrap_or(0);

        matched.extend(
            page.items
                .into_iter()
                .filter(|item| WebflowStore::matches(item, field, title)),
        );

        offset += fetched;
        if fetched == 0 || offset >= total {
            break;
        }
    }

    Ok(matched)
}

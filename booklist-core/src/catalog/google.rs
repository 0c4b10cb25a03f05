//! Google Books catalog over HTTP

use super::{Catalog, VolumesResponse};
use crate::error::{CatalogError, CatalogResult};
use crate::types::BookRecord;
use async_trait::async_trait;
use std::time::Duration;

/// HTTP client for a Google Books compatible `volumes` endpoint
#[derive(Debug, Clone)]
pub struct GoogleBooksCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleBooksCatalog {
    /// Public Google Books API root
    pub const DEFAULT_BASE_URL: &'static str = "https://www.googleapis.com/books/v1";

    /// Catalog against the public API with no request timeout
    pub fn new() -> CatalogResult<Self> {
        Self::with_options(Self::DEFAULT_BASE_URL, None)
    }

    /// Catalog against `base_url` (the API root, without `/volumes`)
    pub fn with_options(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> CatalogResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    /// Full URL of the search endpoint
    pub fn volumes_url(&self) -> String {
        format!("{}/volumes", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Catalog for GoogleBooksCatalog {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> CatalogResult<Option<Vec<BookRecord>>> {
        let max = max_results.to_string();
        tracing::debug!(query, max_results, url = %self.volumes_url(), "Querying catalog");

        let response = self
            .client
            .get(self.volumes_url())
            .query(&[("q", query), ("maxResults", max.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let parsed: VolumesResponse = response.json().await?;

        let records = parsed.items.map(|items| {
            items
                .into_iter()
                .take(max_results)
                .map(BookRecord::from)
                .collect::<Vec<_>>()
        });

        tracing::debug!(
            query,
            count = records.as_ref().map(Vec::len),
            "Catalog responded"
        );

        Ok(records)
    }
}

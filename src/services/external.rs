//! External book-metadata client (Google Books volumes API).

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        volume::{VolumesResponse, DESCRIPTION_FALLBACK},
    },
};

/// Read-only client for the third-party volumes API.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExternalCatalog: Send + Sync {
    /// Free-text volume search, mapped into transient catalog books.
    async fn search_books(&self, query: &str) -> AppResult<Vec<Book>>;

    /// Description for an ISBN. Never fails: every failure mode degrades
    /// to [`DESCRIPTION_FALLBACK`].
    async fn description_for_isbn(&self, isbn: &str) -> String;
}

/// `ExternalCatalog` backed by the Google Books REST API.
///
/// One outbound request per invocation. No timeout is configured; callers
/// needing one wrap the call themselves.
#[derive(Clone)]
pub struct GoogleBooksClient {
    http: reqwest::Client,
    base_url: String,
}

impl GoogleBooksClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn search_volumes(&self, query: &str) -> AppResult<VolumesResponse> {
        let url = format!("{}/volumes", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("volumes request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "volumes API returned status {}",
                response.status()
            )));
        }

        response
            .json::<VolumesResponse>()
            .await
            .map_err(|e| AppError::Upstream(format!("malformed volumes response: {}", e)))
    }
}

#[async_trait]
impl ExternalCatalog for GoogleBooksClient {
    async fn search_books(&self, query: &str) -> AppResult<Vec<Book>> {
        self.search_volumes(query).await?.into_books()
    }

    async fn description_for_isbn(&self, isbn: &str) -> String {
        tracing::info!("Fetching description for ISBN {}", isbn);

        match self.search_volumes(&format!("isbn:{}", isbn)).await {
            Ok(response) => match response.first_description() {
                Some(description) => description.to_string(),
                None => {
                    tracing::info!("No description found for ISBN {}", isbn);
                    DESCRIPTION_FALLBACK.to_string()
                }
            },
            Err(e) => {
                tracing::warn!("Description lookup failed for ISBN {}: {}", isbn, e);
                DESCRIPTION_FALLBACK.to_string()
            }
        }
    }
}

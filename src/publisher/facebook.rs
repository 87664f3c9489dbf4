use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::Deserialize;

use crate::consts::GRAPH_API_URL;

use super::{GeneratedPost, PageHandle, PostReceipt, Publisher};

/// Publisher backed by the Facebook Graph API.
///
/// Resolving a page exchanges the user access token for that page's
/// own access token; posting writes to the page's feed with it.
pub struct FacebookPublisher {
    base_url: String,
    client: reqwest::Client,
}

impl FacebookPublisher {
    pub fn new() -> Self {
        Self::with_base_url(GRAPH_API_URL)
    }

    /// Point the publisher at a different Graph endpoint (for local stubs).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for FacebookPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Publisher for FacebookPublisher {
    async fn resolve_page(
        &self,
        page_id: u64,
        auth_token: &str,
        display_name: &str,
    ) -> Result<PageHandle> {
        let url = format!("{}/{}", self.base_url, page_id);
        let resp = self
            .client
            .get(&url)
            .query(&[("fields", "access_token"), ("access_token", auth_token)])
            .send()
            .await
            .with_context(|| format!("failed to resolve page {} ({})", page_id, display_name))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("page resolution failed ({}): {}", status, text);
        }

        let page: PageResponse = resp.json().await?;
        Ok(PageHandle {
            page_id,
            access_token: page.access_token,
        })
    }

    async fn post(&self, page: &PageHandle, content: &GeneratedPost) -> Result<PostReceipt> {
        let url = format!("{}/{}/feed", self.base_url, page.page_id);
        let resp = self
            .client
            .post(&url)
            .form(&[
                ("message", content.message.as_str()),
                ("access_token", page.access_token.as_str()),
            ])
            .send()
            .await
            .context("failed to reach the Graph API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("post rejected ({}): {}", status, text);
        }

        let created: FeedResponse = resp.json().await?;
        Ok(PostReceipt { id: created.id })
    }
}

// --- API types ---

#[derive(Deserialize)]
struct PageResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct FeedResponse {
    id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_response_deserializes() {
        let json = r#"{"access_token": "page-tok", "id": "449469508916064"}"#;
        let page: PageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.access_token, "page-tok");
    }

    #[test]
    fn feed_response_deserializes() {
        let json = r#"{"id": "449469508916064_1234567890"}"#;
        let created: FeedResponse = serde_json::from_str(json).unwrap();
        assert_eq!(created.id, "449469508916064_1234567890");
    }
}

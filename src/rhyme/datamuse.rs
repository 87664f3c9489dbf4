use anyhow::{Result, bail};
use async_trait::async_trait;

use crate::consts::{DATAMUSE_URL, RHYME_LIMIT};

use super::{RhymeCandidate, RhymeSource};

/// Rhyme lookups against the Datamuse API.
///
/// Datamuse needs no authentication; `?rel_rhy=<word>` returns perfect
/// rhymes ordered by score.
pub struct DatamuseClient {
    base_url: String,
    client: reqwest::Client,
}

impl DatamuseClient {
    pub fn new() -> Self {
        Self::with_base_url(DATAMUSE_URL)
    }

    /// Point the client at a different endpoint (for local stubs).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for DatamuseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RhymeSource for DatamuseClient {
    async fn rhymes(&self, word: &str) -> Result<Vec<RhymeCandidate>> {
        let limit = RHYME_LIMIT.to_string();
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("rel_rhy", word), ("max", limit.as_str())])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("rhyme service error ({}): {}", status, text);
        }

        let candidates: Vec<RhymeCandidate> = resp.json().await?;
        Ok(candidates)
    }
}

use anyhow::{Result, bail};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{GeneratedPost, PageHandle, PostReceipt, Publisher};

/// A publisher double for tests. Records every message it was asked to
/// post and can be scripted to fail at either step.
pub struct MockPublisher {
    receipt_id: String,
    resolve_error: Option<String>,
    post_error: Option<String>,
    resolves: AtomicUsize,
    posted: Mutex<Vec<String>>,
}

impl MockPublisher {
    /// Accepts everything, stamping posts with the given id.
    pub fn accepting(receipt_id: impl Into<String>) -> Self {
        Self {
            receipt_id: receipt_id.into(),
            resolve_error: None,
            post_error: None,
            resolves: AtomicUsize::new(0),
            posted: Mutex::new(Vec::new()),
        }
    }

    /// Fails page resolution with the given message.
    pub fn failing_resolve(message: impl Into<String>) -> Self {
        Self {
            resolve_error: Some(message.into()),
            ..Self::accepting("unused")
        }
    }

    /// Resolves fine but rejects every post with the given message.
    pub fn rejecting_posts(message: impl Into<String>) -> Self {
        Self {
            post_error: Some(message.into()),
            ..Self::accepting("unused")
        }
    }

    /// How many times the page was resolved.
    pub fn resolves(&self) -> usize {
        self.resolves.load(Ordering::SeqCst)
    }

    /// Messages posted so far, in order.
    pub fn posted_messages(&self) -> Vec<String> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn resolve_page(
        &self,
        page_id: u64,
        auth_token: &str,
        _display_name: &str,
    ) -> Result<PageHandle> {
        self.resolves.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.resolve_error {
            bail!("{}", message);
        }
        Ok(PageHandle {
            page_id,
            access_token: format!("page-{}", auth_token),
        })
    }

    async fn post(&self, _page: &PageHandle, content: &GeneratedPost) -> Result<PostReceipt> {
        if let Some(message) = &self.post_error {
            bail!("{}", message);
        }
        self.posted.lock().unwrap().push(content.message.clone());
        Ok(PostReceipt {
            id: self.receipt_id.clone(),
        })
    }
}

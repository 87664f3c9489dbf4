pub mod facebook;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Content ready to be published. A pure data record; post-completion
/// is reported through [`PostReceipt`], not a callback on the content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPost {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl GeneratedPost {
    /// A plain-text post.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            message: message.into(),
        }
    }
}

/// Handle for posting to one resolved page. Opaque to the handler;
/// only the publisher that produced it knows what the token is good for.
#[derive(Debug, Clone, PartialEq)]
pub struct PageHandle {
    pub page_id: u64,
    pub access_token: String,
}

/// What the publisher hands back for a successful post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostReceipt {
    pub id: String,
}

/// The posting side of the bot. A real social-media API, or a test
/// double. Resolution is an idempotent upsert: calling it once per
/// request is safe, if wasteful.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Register or look up the page, exchanging the user token for a
    /// handle that can post.
    async fn resolve_page(
        &self,
        page_id: u64,
        auth_token: &str,
        display_name: &str,
    ) -> Result<PageHandle>;

    /// Publish `content.message` to the page. May reject.
    async fn post(&self, page: &PageHandle, content: &GeneratedPost) -> Result<PostReceipt>;
}

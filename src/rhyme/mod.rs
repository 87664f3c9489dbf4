pub mod datamuse;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// One word the rhyme service considers a rhyme for the query word.
/// Datamuse items also carry score and syllable counts; only the word
/// itself is consumed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RhymeCandidate {
    pub word: String,
}

impl RhymeCandidate {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

/// Where rhymes come from. A real dictionary API, or a test script.
#[async_trait]
pub trait RhymeSource: Send + Sync {
    /// Look up words rhyming with `word`, in the service's order.
    /// An empty list is a valid answer; the caller decides what to do.
    async fn rhymes(&self, word: &str) -> Result<Vec<RhymeCandidate>>;
}

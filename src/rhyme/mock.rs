use anyhow::{Result, bail};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{RhymeCandidate, RhymeSource};

/// A scripted rhyme source for tests. Always answers the same way and
/// counts how often it was asked.
pub struct MockRhymes {
    candidates: Vec<RhymeCandidate>,
    error: Option<String>,
    lookups: AtomicUsize,
}

impl MockRhymes {
    /// Responds with the given words for every lookup.
    pub fn with_words(words: &[&str]) -> Self {
        Self {
            candidates: words.iter().map(|word| RhymeCandidate::new(*word)).collect(),
            error: None,
            lookups: AtomicUsize::new(0),
        }
    }

    /// Responds with an empty candidate list.
    pub fn empty() -> Self {
        Self::with_words(&[])
    }

    /// Fails every lookup with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            candidates: Vec::new(),
            error: Some(message.into()),
            lookups: AtomicUsize::new(0),
        }
    }

    /// How many lookups were performed.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RhymeSource for MockRhymes {
    async fn rhymes(&self, _word: &str) -> Result<Vec<RhymeCandidate>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.error {
            bail!("{}", message);
        }
        Ok(self.candidates.clone())
    }
}
